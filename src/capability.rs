// src/capability.rs

//! Build-time capability report.
//!
//! The build script resolves one [`Mode`] per operation family and compiles
//! the matching bodies in. This module exposes what was chosen so that a
//! program can log it or print it; nothing here affects dispatch.

pub mod resolve;

pub use resolve::{Family, Mode, Overrides, ToolchainBug, TOOLCHAIN_BUGS};

use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use serde::Serialize;

/// Mode compiled in for SSE2.
pub const SSE2: Mode = if cfg!(sse2_native) {
    Mode::Native
} else if cfg!(sse2_neon) {
    Mode::AltNative
} else {
    Mode::Fallback
};

/// Mode compiled in for SSE4.1.
pub const SSE41: Mode = if cfg!(sse41_native) {
    Mode::Native
} else if cfg!(sse41_neon) {
    Mode::AltNative
} else {
    Mode::Fallback
};

pub const fn mode(family: Family) -> Mode {
    match family {
        Family::Sse2 => SSE2,
        Family::Sse41 => SSE41,
    }
}

const DENIED: &str = env!("SSE_COMPAT_DENIED");

/// Operations that use their fallback body because of the toolchain deny-list.
pub fn denied_ops() -> impl Iterator<Item = &'static str> {
    DENIED.split(',').filter(|op| !op.is_empty())
}

/// Whether `op` of `family` runs on its fallback body in this build.
pub fn is_denied(family: Family, op: &str) -> bool {
    denied_ops().any(|d| d == op)
        && TOOLCHAIN_BUGS
            .iter()
            .any(|bug| bug.family == family && bug.op == op)
}

// --- Report ---

#[derive(Debug, Clone, Serialize)]
pub struct DeniedOp {
    pub op: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyReport {
    pub family: &'static str,
    pub mode: &'static str,
    pub denied: Vec<DeniedOp>,
}

/// Snapshot of the compile-time decisions, suitable for logs or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityReport {
    pub target_arch: &'static str,
    pub rustc: &'static str,
    pub families: Vec<FamilyReport>,
}

pub fn report() -> CapabilityReport {
    let families = Family::ALL
        .iter()
        .map(|&family| FamilyReport {
            family: family.name(),
            mode: mode(family).name(),
            denied: TOOLCHAIN_BUGS
                .iter()
                .filter(|bug| bug.family == family && is_denied(family, bug.op))
                .map(|bug| DeniedOp {
                    op: bug.op,
                    note: bug.note,
                })
                .collect(),
        })
        .collect();

    CapabilityReport {
        target_arch: env!("SSE_COMPAT_TARGET_ARCH"),
        rustc: env!("SSE_COMPAT_RUSTC"),
        families,
    }
}

static LOGGED: OnceCell<()> = OnceCell::new();

/// Logs the compiled-in modes. Only the first call in a process logs.
pub fn log_capabilities() {
    LOGGED.get_or_init(|| {
        let report = report();
        debug!(
            "sse-compat built for {} with rustc {}",
            report.target_arch, report.rustc
        );
        for family in &report.families {
            info!("{}: {} backend", family.family, family.mode);
            for denied in &family.denied {
                warn!(
                    "{}: {} uses the fallback body ({})",
                    family.family, denied.op, denied.note
                );
            }
        }
    });
}
