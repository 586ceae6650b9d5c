//! # Hotspot Bands and Security Types
//!
//! Value types shared by the policy, the option tables and the device
//! profiles. Both carry the raw integer codes the radio configuration
//! layer stores, so a persisted configuration round-trips through them
//! without a lookup table.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Band ───────────────────────────────────────────────────────────────────

/// Frequency band the hotspot broadcasts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Band {
    /// 2.4 GHz only. The conservative fallback for every invalid input.
    #[default]
    #[serde(rename = "2ghz")]
    Band2Ghz,
    /// 5 GHz only. Requires dual-band hardware and a known country code.
    #[serde(rename = "5ghz")]
    Band5Ghz,
    /// Both bands simultaneously (dual mode), 5 GHz preferred.
    #[serde(rename = "any")]
    BandAny,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Band2Ghz, Band::Band5Ghz, Band::BandAny];

    /// Raw value as stored by the radio configuration layer.
    pub fn raw(self) -> i32 {
        match self {
            Band::Band2Ghz => 0,
            Band::Band5Ghz => 1,
            Band::BandAny => -1,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Band> {
        match raw {
            0 => Some(Band::Band2Ghz),
            1 => Some(Band::Band5Ghz),
            -1 => Some(Band::BandAny),
            _ => None,
        }
    }

    /// Parse a raw value as it appears in an option table entry
    /// (e.g. `"0"`, `"-1"`).
    pub fn parse_raw(raw: &str) -> Option<Band> {
        raw.trim().parse::<i32>().ok().and_then(Band::from_raw)
    }

    /// Like [`Band::parse_raw`] but total: anything unrecognised becomes
    /// [`Band::Band2Ghz`].
    pub fn parse_raw_or_default(raw: &str) -> Band {
        match Band::parse_raw(raw) {
            Some(band) => band,
            None => {
                tracing::debug!(raw, "unrecognised band value, falling back to 2.4GHz");
                Band::Band2Ghz
            }
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Band2Ghz => write!(f, "2.4GHz"),
            Band::Band5Ghz => write!(f, "5GHz"),
            Band::BandAny => write!(f, "any"),
        }
    }
}

// ─── Security Type ──────────────────────────────────────────────────────────

/// Hotspot security type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    #[default]
    Open,
    Wpa2Psk,
    Wpa3Sae,
    Wpa3SaeTransition,
    /// Opportunistic Wireless Encryption. Cannot be combined with
    /// simultaneous dual-band broadcast.
    Owe,
}

impl SecurityType {
    pub fn raw(self) -> i32 {
        match self {
            SecurityType::Open => 0,
            SecurityType::Wpa2Psk => 1,
            SecurityType::Wpa3SaeTransition => 2,
            SecurityType::Wpa3Sae => 3,
            SecurityType::Owe => 4,
        }
    }

    pub fn from_raw(raw: i32) -> Option<SecurityType> {
        match raw {
            0 => Some(SecurityType::Open),
            1 => Some(SecurityType::Wpa2Psk),
            2 => Some(SecurityType::Wpa3SaeTransition),
            3 => Some(SecurityType::Wpa3Sae),
            4 => Some(SecurityType::Owe),
            _ => None,
        }
    }

    pub fn is_owe(self) -> bool {
        self == SecurityType::Owe
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityType::Open => write!(f, "open"),
            SecurityType::Wpa2Psk => write!(f, "wpa2-psk"),
            SecurityType::Wpa3Sae => write!(f, "wpa3-sae"),
            SecurityType::Wpa3SaeTransition => write!(f, "wpa3-sae-transition"),
            SecurityType::Owe => write!(f, "owe"),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
