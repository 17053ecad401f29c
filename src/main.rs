// src/main.rs

//! Prints which backend each operation family was compiled with.

use std::io::Write;

use anyhow::{bail, Context};
use log::info;
use sse_compat::capability::{self, CapabilityReport};

const USAGE: &str = "usage: sse-compat-info [--json]";

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => bail!("unknown argument '{other}'\n{USAGE}"),
        }
    }

    capability::log_capabilities();
    let report = capability::report();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to encode report")?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &report).context("Failed to write report")?;
    }

    info!("Done.");
    Ok(())
}

fn write_text(out: &mut impl Write, report: &CapabilityReport) -> std::io::Result<()> {
    writeln!(out, "target: {}", report.target_arch)?;
    writeln!(out, "rustc:  {}", report.rustc)?;
    for family in &report.families {
        writeln!(out, "{:<8}{}", family.family, family.mode)?;
        for denied in &family.denied {
            writeln!(out, "  {} -> fallback ({})", denied.op, denied.note)?;
        }
    }
    Ok(())
}
