// build.rs

//! Capability selection.
//!
//! Decides, once per build, which body of each operation family is compiled:
//! the native x86 instructions, NEON, or the portable fallback. The rules
//! live in `src/capability/resolve.rs`, shared with the library.

#[allow(dead_code)]
#[path = "src/capability/resolve.rs"]
mod resolve;

use anyhow::{Context, Result};
use resolve::{BuildConfig, Family, Mode, RustcVersion, TOOLCHAIN_BUGS};
use std::process::Command;

const ENV_INPUTS: &[&str] = &["SSE_COMPAT_NO_NATIVE", "SSE_COMPAT_NO_NEON"];

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/capability/resolve.rs");
    for var in ENV_INPUTS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    declare_cfgs();

    let mut config = BuildConfig::from_env(|name| std::env::var(name).ok());
    config.rustc = rustc_version();
    if config.rustc.is_none() {
        // Version-gated entries are skipped; arch-gated entries still apply.
        println!("cargo:warning=could not determine rustc version; version-gated deny-list entries are skipped");
    }

    let resolution = resolve::resolve(&config)
        .map_err(anyhow::Error::new)
        .context("invalid sse-compat capability configuration")?;

    for warning in &resolution.warnings {
        println!("cargo:warning={warning}");
    }

    for (family, mode) in &resolution.modes {
        match mode {
            Mode::Native => println!("cargo:rustc-cfg={}_native", family.key()),
            Mode::AltNative => println!("cargo:rustc-cfg={}_neon", family.key()),
            Mode::Fallback => {}
        }
        println!(
            "cargo:rustc-env=SSE_COMPAT_{}_MODE={}",
            family.key().to_ascii_uppercase(),
            mode.name()
        );
    }

    for bug in &resolution.denied {
        println!("cargo:rustc-cfg=toolchain_denied=\"{}\"", bug.op);
    }
    let denied: Vec<&str> = resolution.denied.iter().map(|b| b.op).collect();
    println!("cargo:rustc-env=SSE_COMPAT_DENIED={}", denied.join(","));
    println!("cargo:rustc-env=SSE_COMPAT_TARGET_ARCH={}", config.arch);
    println!(
        "cargo:rustc-env=SSE_COMPAT_RUSTC={}",
        config
            .rustc
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    Ok(())
}

fn declare_cfgs() {
    for family in Family::ALL {
        println!("cargo:rustc-check-cfg=cfg({}_native)", family.key());
        println!("cargo:rustc-check-cfg=cfg({}_neon)", family.key());
    }
    let ops: Vec<String> = TOOLCHAIN_BUGS
        .iter()
        .map(|bug| format!("\"{}\"", bug.op))
        .collect();
    println!(
        "cargo:rustc-check-cfg=cfg(toolchain_denied, values({}))",
        ops.join(", ")
    );
}

fn rustc_version() -> Option<RustcVersion> {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    RustcVersion::parse(&String::from_utf8_lossy(&output.stdout))
}
