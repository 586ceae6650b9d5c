//! # softap-band
//!
//! Runs the hotspot band preference against a TOML device profile and
//! prints what the settings screen would show.
//!
//! ## Usage
//!
//! ```bash
//! # What does the band list look like on this device?
//! softap-band --profile pixel.toml show
//!
//! # User picks 5 GHz (raw value 1)
//! softap-band --profile pixel.toml select 1
//!
//! # Where would a requested band end up?
//! softap-band --profile pixel.toml validate any
//!
//! # Machine-readable output, verbose policy logging
//! RUST_LOG=softap_band=debug softap-band --profile pixel.toml --json show
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use softap_band::profile::parse_band_name;
use softap_band::{
    validate_band, BandPreferenceController, CapabilityProvider, DeviceProfile, MemoryConfigStore,
    Presentation, RadioConfigStore, RecordingListener,
};

/// Inspect hotspot band selection for a device profile.
#[derive(Parser, Debug)]
#[command(name = "softap-band", about = "Hotspot band selection inspector")]
struct Cli {
    /// Device profile (TOML). Built-in defaults when omitted.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Refresh the band preference and print it.
    Show,
    /// Apply a raw band value as if the user picked it.
    Select {
        /// Raw option value (`0`, `1`, `-1`).
        value: String,
    },
    /// Validate a band against the profile's capabilities.
    Validate {
        /// `2ghz`, `5ghz`, `any`, or a raw value.
        band: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(path) => DeviceProfile::load(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => DeviceProfile::default(),
    };

    tracing::info!(
        profile = ?cli.profile,
        dual_band = profile.capabilities.dual_band,
        dual_mode = profile.capabilities.dual_mode,
        vendor_dual_ap = profile.capabilities.vendor_dual_ap,
        country = ?profile.capabilities.country_code,
        "softap-band starting"
    );

    match &cli.command {
        Command::Validate { band } => {
            let requested = parse_band_name(band)?;
            let caps = profile.capabilities.snapshot();
            let effective = validate_band(requested, &caps);
            if cli.json {
                let out = json!({
                    "requested": requested,
                    "effective": effective,
                    "capabilities": caps,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{requested} -> {effective}");
            }
        }
        command => {
            let mut ctl = BandPreferenceController::new(
                MemoryConfigStore::new(profile.config),
                profile.capabilities,
                profile.tables,
                RecordingListener::default(),
            );
            let presentation = match command {
                Command::Select { value } => ctl.on_user_selection(value),
                _ => ctl.update_display(),
            };

            let stored = ctl.store().configuration();
            if cli.json {
                let out = json!({
                    "band": ctl.band(),
                    "band_index": ctl.band_index(),
                    "variant": ctl.options().variant(),
                    "presentation": presentation,
                    "stored_config": stored,
                    "config_updates": ctl.listener().updates,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_presentation(&presentation);
                println!("band:     {} (index {})", ctl.band(), ctl.band_index());
                println!("table:    {}", ctl.options().variant());
                match stored {
                    Some(cfg) => println!(
                        "stored:   ssid={} band={} security={}",
                        cfg.ssid, cfg.band, cfg.security_type
                    ),
                    None => println!("stored:   <none>"),
                }
                println!("updates:  {}", ctl.listener().updates);
            }
        }
    }

    Ok(())
}

fn print_presentation(p: &Presentation) {
    println!("enabled:  {}", p.enabled);
    println!("summary:  {}", p.summary);
    for (label, value) in p.entries.iter().zip(&p.entry_values) {
        let marker = if p.selected_value.as_deref() == Some(value.as_str()) {
            "*"
        } else {
            " "
        };
        println!("  {marker} [{value:>2}] {label}");
    }
}
