//! Device profiles: capability flags, stored hotspot configuration and
//! optional option-table overrides, loaded from TOML.
//!
//! ```toml
//! version = 1
//!
//! [capabilities]
//! dual_band = true
//! dual_mode = false
//! vendor_dual_ap = false
//! country_code = "US"
//!
//! [config]
//! ssid = "AndroidAP"
//! band = "any"
//! security = "wpa2_psk"
//!
//! [tables.full]
//! entries = ["0", "1"]
//! summaries = ["2.4 GHz", "5 GHz"]
//!
//! [labels]
//! prefer_5ghz = "5 GHz preferred"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::band::{Band, SecurityType};
use crate::capability::StaticCapabilities;
use crate::options::{OptionTables, RawTable};
use crate::store::SoftApConfig;

pub const PROFILE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported profile version {0}")]
    UnsupportedVersion(u32),
    #[error("unknown band {0:?}")]
    UnknownBand(String),
    #[error("unknown security type {0:?}")]
    UnknownSecurity(String),
    #[error("table {table} has {entries} entries but {summaries} summaries")]
    TableLength {
        table: &'static str,
        entries: usize,
        summaries: usize,
    },
}

// ─── Input ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceProfileInput {
    pub version: u32,
    pub capabilities: CapabilitiesInput,
    pub config: Option<ConfigInput>,
    pub tables: TablesInput,
    pub labels: LabelsInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CapabilitiesInput {
    pub dual_band: bool,
    pub dual_mode: bool,
    pub vendor_dual_ap: bool,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigInput {
    pub ssid: String,
    pub band: Option<String>,
    pub security: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TablesInput {
    pub full: Option<RawTable>,
    pub dual_mode: Option<RawTable>,
    pub vendor_dual_ap: Option<RawTable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LabelsInput {
    pub prefer_5ghz: Option<String>,
    pub choose_2ghz: Option<String>,
}

// ─── Resolved ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    pub version: u32,
    pub capabilities: StaticCapabilities,
    pub config: Option<SoftApConfig>,
    pub tables: OptionTables,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        DeviceProfile {
            version: PROFILE_VERSION,
            capabilities: StaticCapabilities::default(),
            config: None,
            tables: OptionTables::default(),
        }
    }
}

/// Accepts `2ghz`/`5ghz`/`any` or a raw value such as `-1`.
pub fn parse_band_name(name: &str) -> Result<Band, ProfileError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "2ghz" | "2.4ghz" => Ok(Band::Band2Ghz),
        "5ghz" => Ok(Band::Band5Ghz),
        "any" => Ok(Band::BandAny),
        other => Band::parse_raw(other).ok_or_else(|| ProfileError::UnknownBand(name.to_string())),
    }
}

pub fn parse_security_name(name: &str) -> Result<SecurityType, ProfileError> {
    match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "open" => Ok(SecurityType::Open),
        "wpa2_psk" | "wpa2" => Ok(SecurityType::Wpa2Psk),
        "wpa3_sae" | "wpa3" => Ok(SecurityType::Wpa3Sae),
        "wpa3_sae_transition" => Ok(SecurityType::Wpa3SaeTransition),
        "owe" => Ok(SecurityType::Owe),
        other => other
            .parse::<i32>()
            .ok()
            .and_then(SecurityType::from_raw)
            .ok_or_else(|| ProfileError::UnknownSecurity(name.to_string())),
    }
}

fn checked_table(
    table: &'static str,
    input: Option<RawTable>,
    fallback: RawTable,
) -> Result<RawTable, ProfileError> {
    match input {
        None => Ok(fallback),
        Some(t) if t.entries.len() != t.summaries.len() => Err(ProfileError::TableLength {
            table,
            entries: t.entries.len(),
            summaries: t.summaries.len(),
        }),
        Some(t) => Ok(t),
    }
}

impl DeviceProfileInput {
    pub fn resolve(self) -> Result<DeviceProfile, ProfileError> {
        let version = if self.version == 0 {
            PROFILE_VERSION
        } else {
            self.version
        };
        if version != PROFILE_VERSION {
            return Err(ProfileError::UnsupportedVersion(version));
        }

        let country_code = self.capabilities.country_code.and_then(|cc| {
            let trimmed = cc.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_ascii_uppercase())
            }
        });
        let capabilities = StaticCapabilities {
            dual_band: self.capabilities.dual_band,
            dual_mode: self.capabilities.dual_mode,
            vendor_dual_ap: self.capabilities.vendor_dual_ap,
            country_code,
        };

        let config = match self.config {
            None => None,
            Some(cfg) => Some(SoftApConfig {
                ssid: cfg.ssid,
                band: cfg.band.as_deref().map(parse_band_name).transpose()?.unwrap_or_default(),
                security_type: cfg
                    .security
                    .as_deref()
                    .map(parse_security_name)
                    .transpose()?
                    .unwrap_or_default(),
            }),
        };

        let defaults = OptionTables::default();
        let tables = OptionTables {
            full: checked_table("full", self.tables.full, defaults.full)?,
            dual_mode: checked_table("dual_mode", self.tables.dual_mode, defaults.dual_mode)?,
            vendor_dual_ap: checked_table(
                "vendor_dual_ap",
                self.tables.vendor_dual_ap,
                defaults.vendor_dual_ap,
            )?,
            prefer_5ghz: self.labels.prefer_5ghz.unwrap_or(defaults.prefer_5ghz),
            choose_2ghz: self.labels.choose_2ghz.unwrap_or(defaults.choose_2ghz),
        };

        Ok(DeviceProfile {
            version,
            capabilities,
            config,
            tables,
        })
    }
}

impl DeviceProfile {
    pub fn from_toml_str(input: &str) -> Result<Self, ProfileError> {
        if input.trim().is_empty() {
            return Ok(DeviceProfile::default());
        }
        let parsed: DeviceProfileInput = toml::from_str(input)?;
        parsed.resolve()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded device profile");
        Ok(profile)
    }
}
