// src/capability/resolve.rs

//! Capability resolution.
//!
//! This file is compiled twice: into `build.rs`, which turns a
//! [`Resolution`] into `cfg` flags, and into the library, where the same
//! rules are unit tested and reported. It only depends on `std` and
//! `bitflags` so that both contexts can build it.

use bitflags::bitflags;
use std::fmt;

// --- Families and modes ---

/// A group of operations corresponding to one hardware extension level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Sse2,
    Sse41,
}

impl Family {
    /// Base families first.
    pub const ALL: [Family; 2] = [Family::Sse2, Family::Sse41];

    /// The family that must be at least as capable for this one to go native.
    pub const fn prerequisite(self) -> Option<Family> {
        match self {
            Family::Sse2 => None,
            Family::Sse41 => Some(Family::Sse2),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Family::Sse2 => "sse2",
            Family::Sse41 => "sse4.1",
        }
    }

    /// Name used in `CARGO_CFG_TARGET_FEATURE`.
    pub const fn target_feature(self) -> &'static str {
        match self {
            Family::Sse2 => "sse2",
            Family::Sse41 => "sse4.1",
        }
    }

    /// Prefix of the emitted cfgs and of the Cargo feature names.
    pub const fn key(self) -> &'static str {
        match self {
            Family::Sse2 => "sse2",
            Family::Sse41 => "sse41",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which body of an operation is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The real target instruction.
    Native,
    /// NEON, with semantics proven identical to the requested instruction.
    AltNative,
    /// Portable scalar emulation.
    Fallback,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Native => "native",
            Mode::AltNative => "neon",
            Mode::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Explicit capability flags for one family (or for all of them).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Overrides: u8 {
        const FORCE_NATIVE = 1 << 0;
        const NO_NATIVE = 1 << 1;
        const NO_NEON = 1 << 2;
    }
}

// --- Toolchain deny-list ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RustcVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RustcVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parses `rustc --version` output (`rustc 1.80.1 (3f5fd8dd4 2024-08-06)`)
    /// or a bare `1.82.0-nightly`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix("rustc ").unwrap_or(s);
        let version = s.split_whitespace().next()?;
        let version = version.split('-').next()?;
        let mut parts = version.split('.').map(|p| p.parse::<u32>().ok());
        let major = parts.next()??;
        let minor = parts.next()??;
        let patch = parts.next().flatten().unwrap_or(0);
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for RustcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Toolchains older than this version. An unknown version never matches.
    RustcBefore(RustcVersion),
}

/// One operation whose native body must not be used when `condition` holds.
///
/// Only native bodies are ever denied. Each entry needs a matching
/// `#[cfg(not(toolchain_denied = "<op>"))]` on the wrapper in the family's
/// `native.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainBug {
    pub family: Family,
    pub op: &'static str,
    pub condition: Condition,
    pub note: &'static str,
}

/// Central deny-list. Denied operations use their fallback body.
///
/// Empty for every toolchain at or above `rust-version`.
pub const TOOLCHAIN_BUGS: &[ToolchainBug] = &[];

// --- Inputs ---

/// Everything the selector looks at, gathered from the Cargo environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub arch: String,
    pub target_features: Vec<String>,
    pub rustc: Option<RustcVersion>,
    /// Applies to every family.
    pub global: Overrides,
    pub sse2: Overrides,
    pub sse41: Overrides,
    pub ignore_toolchain_bugs: bool,
}

impl BuildConfig {
    /// Reads Cargo's build-script environment through `var`.
    pub fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| var(name).is_some_and(|v| !v.is_empty() && v != "0");
        let family = |key: &str| {
            let key = key.to_ascii_uppercase();
            let mut o = Overrides::empty();
            o.set(
                Overrides::FORCE_NATIVE,
                flag(&format!("CARGO_FEATURE_{key}_FORCE_NATIVE")),
            );
            o.set(
                Overrides::NO_NATIVE,
                flag(&format!("CARGO_FEATURE_{key}_NO_NATIVE")),
            );
            o.set(
                Overrides::NO_NEON,
                flag(&format!("CARGO_FEATURE_{key}_NO_NEON")),
            );
            o
        };

        let mut global = Overrides::empty();
        global.set(
            Overrides::NO_NATIVE,
            flag("CARGO_FEATURE_NO_NATIVE") || flag("SSE_COMPAT_NO_NATIVE"),
        );
        global.set(
            Overrides::NO_NEON,
            flag("CARGO_FEATURE_NO_NEON") || flag("SSE_COMPAT_NO_NEON"),
        );

        Self {
            arch: var("CARGO_CFG_TARGET_ARCH").unwrap_or_default(),
            target_features: var("CARGO_CFG_TARGET_FEATURE")
                .unwrap_or_default()
                .split(',')
                .filter(|f| !f.is_empty())
                .map(str::to_owned)
                .collect(),
            rustc: None,
            global,
            sse2: family(Family::Sse2.key()),
            sse41: family(Family::Sse41.key()),
            ignore_toolchain_bugs: flag("CARGO_FEATURE_IGNORE_TOOLCHAIN_BUGS"),
        }
    }

    pub fn overrides(&self, family: Family) -> Overrides {
        let own = match family {
            Family::Sse2 => self.sse2,
            Family::Sse41 => self.sse41,
        };
        own | self.global
    }

    pub fn has_target_feature(&self, feature: &str) -> bool {
        self.target_features.iter().any(|f| f == feature)
    }

    pub fn is_x86(&self) -> bool {
        self.arch == "x86" || self.arch == "x86_64"
    }

    fn matches(&self, condition: Condition) -> bool {
        match condition {
            Condition::RustcBefore(v) => self.rustc.is_some_and(|r| r < v),
        }
    }
}

// --- Output ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// One entry per family, base families first.
    pub modes: Vec<(Family, Mode)>,
    /// Automatic downgrades, reported as build warnings.
    pub warnings: Vec<String>,
    /// Operations pushed back to their fallback body by the deny-list.
    pub denied: Vec<ToolchainBug>,
}

impl Resolution {
    pub fn mode(&self, family: Family) -> Mode {
        self.modes
            .iter()
            .find(|(f, _)| *f == family)
            .map_or(Mode::Fallback, |(_, m)| *m)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Force-native and no-native were both requested for one family.
    ConflictingOverrides { family: Family },
    /// Native was forced on an architecture that has no such instructions.
    NativeUnsupported { family: Family, arch: String },
    /// Native was forced above a prerequisite that is not native.
    MissingPrerequisite {
        family: Family,
        prerequisite: Family,
        prerequisite_mode: Mode,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConflictingOverrides { family } => write!(
                f,
                "{family}: force-native and no-native were both requested"
            ),
            ConfigError::NativeUnsupported { family, arch } => write!(
                f,
                "{family}: native mode was forced but target arch `{arch}` has no {family} instructions"
            ),
            ConfigError::MissingPrerequisite {
                family,
                prerequisite,
                prerequisite_mode,
            } => write!(
                f,
                "{family}: native mode was forced but its prerequisite {prerequisite} resolved to {prerequisite_mode}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// --- Resolution ---

pub fn resolve(config: &BuildConfig) -> Result<Resolution, ConfigError> {
    resolve_with(config, TOOLCHAIN_BUGS)
}

/// Resolves every family against an explicit deny-list.
pub fn resolve_with(
    config: &BuildConfig,
    bugs: &[ToolchainBug],
) -> Result<Resolution, ConfigError> {
    let mut modes: Vec<(Family, Mode)> = Vec::with_capacity(Family::ALL.len());
    let mut warnings = Vec::new();

    for family in Family::ALL {
        let overrides = config.overrides(family);
        let forced = overrides.contains(Overrides::FORCE_NATIVE);

        if forced && overrides.contains(Overrides::NO_NATIVE) {
            return Err(ConfigError::ConflictingOverrides { family });
        }
        if forced && !config.is_x86() {
            return Err(ConfigError::NativeUnsupported {
                family,
                arch: config.arch.clone(),
            });
        }

        let mut mode = if forced
            || (config.is_x86()
                && config.has_target_feature(family.target_feature())
                && !overrides.contains(Overrides::NO_NATIVE))
        {
            Mode::Native
        } else if config.arch == "aarch64"
            && config.has_target_feature("neon")
            && !overrides.contains(Overrides::NO_NEON)
        {
            Mode::AltNative
        } else {
            Mode::Fallback
        };

        if let Some(prerequisite) = family.prerequisite() {
            let base = modes
                .iter()
                .find(|(f, _)| *f == prerequisite)
                .map_or(Mode::Fallback, |(_, m)| *m);
            if mode != Mode::Fallback && base != mode {
                if forced {
                    return Err(ConfigError::MissingPrerequisite {
                        family,
                        prerequisite,
                        prerequisite_mode: base,
                    });
                }
                warnings.push(format!(
                    "{family}: {mode} requested but prerequisite {prerequisite} is {base}; using fallback"
                ));
                mode = Mode::Fallback;
            }
        }

        modes.push((family, mode));
    }

    let denied = if config.ignore_toolchain_bugs {
        Vec::new()
    } else {
        bugs.iter()
            .filter(|bug| {
                let mode = modes
                    .iter()
                    .find(|(f, _)| *f == bug.family)
                    .map_or(Mode::Fallback, |(_, m)| *m);
                mode == Mode::Native && config.matches(bug.condition)
            })
            .copied()
            .collect()
    };

    Ok(Resolution {
        modes,
        warnings,
        denied,
    })
}
