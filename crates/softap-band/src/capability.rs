//! # Device Capabilities
//!
//! Radio capability flags as reported by the platform. The policy never
//! queries hardware itself; a [`CapabilityProvider`] is injected and
//! sampled into a [`CapabilitySnapshot`] whenever a decision is made.

use serde::{Deserialize, Serialize};

/// Capability flags captured at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    /// Radio has a 5 GHz front end.
    pub dual_band_supported: bool,
    /// Radio can run a 2.4 GHz and a 5 GHz AP simultaneously.
    pub dual_mode_supported: bool,
    /// Vendor AP+AP extension is enabled.
    pub vendor_dual_ap_supported: bool,
    /// A regulatory country code has been resolved.
    pub country_code_known: bool,
}

impl CapabilitySnapshot {
    /// 5 GHz is only usable with dual-band hardware *and* a known country
    /// code. Without a regulatory domain we fail closed.
    pub fn is_5ghz_supported(&self) -> bool {
        self.dual_band_supported && self.country_code_known
    }
}

/// Source of live capability flags.
pub trait CapabilityProvider {
    fn dual_mode_supported(&self) -> bool;
    fn dual_band_supported(&self) -> bool;
    fn country_code(&self) -> Option<String>;
    fn vendor_dual_ap_supported(&self) -> bool;

    /// Sample every flag once.
    fn snapshot(&self) -> CapabilitySnapshot {
        CapabilitySnapshot {
            dual_band_supported: self.dual_band_supported(),
            dual_mode_supported: self.dual_mode_supported(),
            vendor_dual_ap_supported: self.vendor_dual_ap_supported(),
            country_code_known: self.country_code().is_some(),
        }
    }
}

/// Fixed capability set, as loaded from a device profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCapabilities {
    pub dual_band: bool,
    pub dual_mode: bool,
    pub vendor_dual_ap: bool,
    pub country_code: Option<String>,
}

impl StaticCapabilities {
    /// Build from a snapshot. A known country code is represented by a
    /// placeholder since the policy only cares about its presence.
    pub fn from_snapshot(snapshot: CapabilitySnapshot) -> Self {
        StaticCapabilities {
            dual_band: snapshot.dual_band_supported,
            dual_mode: snapshot.dual_mode_supported,
            vendor_dual_ap: snapshot.vendor_dual_ap_supported,
            country_code: snapshot.country_code_known.then(|| "US".to_string()),
        }
    }
}

impl CapabilityProvider for StaticCapabilities {
    fn dual_mode_supported(&self) -> bool {
        self.dual_mode
    }

    fn dual_band_supported(&self) -> bool {
        self.dual_band
    }

    fn country_code(&self) -> Option<String> {
        self.country_code.clone()
    }

    fn vendor_dual_ap_supported(&self) -> bool {
        self.vendor_dual_ap
    }
}
