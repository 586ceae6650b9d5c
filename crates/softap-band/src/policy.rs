//! # Band Selection Policy
//!
//! Decides which hotspot band a device may actually use. Every operation
//! here is total: invalid or contradictory inputs degrade to the most
//! restrictive answer (2.4 GHz, or the first offered option) so an
//! unsupported band can never reach the radio configuration layer.
//!
//! ## Validation rules
//!
//! Evaluated in order, first match wins:
//!
//! 1. no dual mode, requested `any`          → 5 GHz
//! 2. 5 GHz unsupported, requested 5 GHz     → 2.4 GHz
//! 3. dual mode, requested 5 GHz             → `any`
//! 4. otherwise                              → unchanged
//!
//! The order matters when a capability snapshot is inconsistent (e.g.
//! dual mode reported without dual-band hardware).

use crate::band::{Band, SecurityType};
use crate::capability::CapabilitySnapshot;
use crate::options::{BandOptionSet, OptionTableProvider, OptionTableVariant};

// ─── Pure Operations ────────────────────────────────────────────────────────

/// Map a requested band to one the hardware and regulatory domain allow.
pub fn validate_band(requested: Band, caps: &CapabilitySnapshot) -> Band {
    if !caps.dual_mode_supported && requested == Band::BandAny {
        Band::Band5Ghz
    } else if !caps.is_5ghz_supported() && requested == Band::Band5Ghz {
        Band::Band2Ghz
    } else if caps.dual_mode_supported && requested == Band::Band5Ghz {
        Band::BandAny
    } else {
        requested
    }
}

/// OWE cannot be broadcast on both bands at once; force it to 2.4 GHz.
///
/// Runs before [`validate_band`]. A changed result must be written back
/// to the configuration store by the caller.
pub fn reconcile_security_band_conflict(band: Band, security: SecurityType) -> Band {
    if band == Band::BandAny && security.is_owe() {
        Band::Band2Ghz
    } else {
        band
    }
}

/// Resolve the option set for a device. Never empty: a table that
/// resolves to nothing usable is replaced by a 2.4 GHz-only set.
pub fn derive_option_set<T>(
    caps: &CapabilitySnapshot,
    security: SecurityType,
    tables: &T,
) -> BandOptionSet
where
    T: OptionTableProvider + ?Sized,
{
    let variant = OptionTableVariant::select(
        caps.dual_mode_supported,
        caps.vendor_dual_ap_supported,
        security,
    );
    match BandOptionSet::from_table(variant, &tables.table(variant)) {
        Some(set) => set,
        None => {
            tracing::info!(%variant, "option table unusable, offering 2.4GHz only");
            BandOptionSet::restricted(tables.choose_2ghz_label())
        }
    }
}

/// Summary line for the effective band.
///
/// `any` always uses the fixed "prefer 5 GHz" label, even when the table
/// lists `any` with its own summary. A band the set does not offer falls
/// back to the first option's summary.
pub fn summarize(effective: Band, options: &BandOptionSet, prefer_5ghz_label: &str) -> String {
    if effective == Band::BandAny {
        return prefer_5ghz_label.to_string();
    }
    match options.index_of(effective) {
        Some(idx) => options.options()[idx].summary.clone(),
        None => {
            tracing::debug!(band = %effective, "band not in option set, summarising first option");
            options.first().summary.clone()
        }
    }
}

// ─── Policy State ───────────────────────────────────────────────────────────

/// Per-screen selection state.
///
/// The dual-mode and vendor flags are captured once, when the screen
/// opens, and only drive which option table is shown. Validation always
/// uses the live snapshot passed in by the caller, so the two can
/// disagree if the hardware changes underneath an open screen.
#[derive(Debug, Clone)]
pub struct BandSelectionPolicy {
    band: Band,
    security_type: SecurityType,
    dual_mode: bool,
    vendor_dual_ap: bool,
    options: BandOptionSet,
}

impl BandSelectionPolicy {
    pub fn new<T>(caps: &CapabilitySnapshot, security_type: SecurityType, tables: &T) -> Self
    where
        T: OptionTableProvider + ?Sized,
    {
        let options = derive_option_set(caps, security_type, tables);
        BandSelectionPolicy {
            band: options.first().band,
            security_type,
            dual_mode: caps.dual_mode_supported,
            vendor_dual_ap: caps.vendor_dual_ap_supported,
            options,
        }
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// Index of the current band in the option set, or 0 when the set
    /// does not offer it.
    pub fn band_index(&self) -> usize {
        self.options.index_of(self.band).unwrap_or(0)
    }

    pub fn security_type(&self) -> SecurityType {
        self.security_type
    }

    /// Dual-mode flag as captured at construction.
    pub fn cached_dual_mode(&self) -> bool {
        self.dual_mode
    }

    pub fn vendor_dual_ap_supported(&self) -> bool {
        self.vendor_dual_ap
    }

    pub fn options(&self) -> &BandOptionSet {
        &self.options
    }

    /// Re-derive the option set for a new security type, using the cached
    /// capability flags.
    pub fn update_entries<T>(&mut self, security_type: SecurityType, tables: &T)
    where
        T: OptionTableProvider + ?Sized,
    {
        tracing::debug!(security = %security_type, "updating band option entries");
        self.security_type = security_type;
        let caps = CapabilitySnapshot {
            dual_mode_supported: self.dual_mode,
            vendor_dual_ap_supported: self.vendor_dual_ap,
            ..CapabilitySnapshot::default()
        };
        self.options = derive_option_set(&caps, security_type, tables);
    }

    /// Apply a raw user selection (an option table entry value).
    pub fn select(&mut self, raw: &str, caps: &CapabilitySnapshot) -> Band {
        let requested = Band::parse_raw_or_default(raw);
        let band = self.set_band(validate_band(requested, caps));
        tracing::debug!(requested = %requested, band = %band, "band preference changed");
        band
    }

    /// Make `band` the effective band. A band the option set does not
    /// offer is kept as-is; only its index and summary fall back to the
    /// first option.
    pub fn set_band(&mut self, band: Band) -> Band {
        if !self.options.contains(band) {
            tracing::debug!(
                band = %band,
                variant = %self.options.variant(),
                "band not in option set, index falls back to first option"
            );
        }
        self.band = band;
        band
    }

    pub fn summary(&self, prefer_5ghz_label: &str) -> String {
        summarize(self.band, &self.options, prefer_5ghz_label)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BuiltinTables, OptionTables, RawTable};

    fn caps(dual_band: bool, dual_mode: bool, vendor: bool, country: bool) -> CapabilitySnapshot {
        CapabilitySnapshot {
            dual_band_supported: dual_band,
            dual_mode_supported: dual_mode,
            vendor_dual_ap_supported: vendor,
            country_code_known: country,
        }
    }

    #[test]
    fn any_without_dual_mode_becomes_5ghz() {
        assert_eq!(
            validate_band(Band::BandAny, &caps(true, false, false, true)),
            Band::Band5Ghz
        );
        // Rule 1 fires even when 5GHz itself is unsupported.
        assert_eq!(
            validate_band(Band::BandAny, &caps(false, false, false, false)),
            Band::Band5Ghz
        );
    }

    #[test]
    fn five_ghz_without_support_becomes_2ghz() {
        assert_eq!(
            validate_band(Band::Band5Ghz, &caps(false, false, false, true)),
            Band::Band2Ghz
        );
        assert_eq!(
            validate_band(Band::Band5Ghz, &caps(true, true, false, false)),
            Band::Band2Ghz,
            "missing country code outranks dual mode"
        );
    }

    #[test]
    fn five_ghz_with_dual_mode_becomes_any() {
        assert_eq!(
            validate_band(Band::Band5Ghz, &caps(true, true, false, true)),
            Band::BandAny
        );
    }

    #[test]
    fn valid_requests_pass_through() {
        assert_eq!(
            validate_band(Band::Band2Ghz, &caps(false, false, false, false)),
            Band::Band2Ghz
        );
        assert_eq!(
            validate_band(Band::Band5Ghz, &caps(true, false, false, true)),
            Band::Band5Ghz
        );
        assert_eq!(
            validate_band(Band::BandAny, &caps(true, true, false, true)),
            Band::BandAny
        );
    }

    #[test]
    fn owe_with_any_forced_to_2ghz() {
        assert_eq!(
            reconcile_security_band_conflict(Band::BandAny, SecurityType::Owe),
            Band::Band2Ghz
        );
        assert_eq!(
            reconcile_security_band_conflict(Band::Band5Ghz, SecurityType::Owe),
            Band::Band5Ghz
        );
        assert_eq!(
            reconcile_security_band_conflict(Band::BandAny, SecurityType::Wpa2Psk),
            Band::BandAny
        );
    }

    #[test]
    fn owe_any_pipeline_ends_on_2ghz() {
        let c = caps(true, false, false, true);
        let band = reconcile_security_band_conflict(Band::BandAny, SecurityType::Owe);
        assert_eq!(validate_band(band, &c), Band::Band2Ghz);
    }

    #[test]
    fn summarize_any_uses_fixed_label() {
        let tables = BuiltinTables::default();
        let set = derive_option_set(&caps(true, true, false, true), SecurityType::Open, &tables);
        assert!(set.has_dual_band());
        assert_eq!(summarize(Band::BandAny, &set, "PREFER"), "PREFER");
    }

    #[test]
    fn summarize_missing_band_uses_first() {
        let tables = BuiltinTables::default();
        let set = derive_option_set(&caps(true, true, false, true), SecurityType::Open, &tables);
        // Dual-mode table has no plain 5GHz entry.
        assert_eq!(summarize(Band::Band5Ghz, &set, "PREFER"), "2.4 GHz Band");
    }

    #[test]
    fn unusable_table_falls_back_to_2ghz_only() {
        let tables = OptionTables {
            full: RawTable {
                entries: vec![],
                summaries: vec![],
            },
            ..OptionTables::default()
        };
        let set = derive_option_set(&caps(false, false, false, false), SecurityType::Open, &tables);
        assert_eq!(set.len(), 1);
        assert_eq!(set.first().band, Band::Band2Ghz);
    }

    #[test]
    fn new_policy_starts_on_first_option() {
        let tables = BuiltinTables::default();
        let policy = BandSelectionPolicy::new(&caps(true, true, true, true), SecurityType::Open, &tables);
        assert_eq!(policy.band(), Band::Band2Ghz);
        assert_eq!(policy.band_index(), 0);
        assert!(policy.cached_dual_mode());
        assert!(policy.vendor_dual_ap_supported());
    }

    #[test]
    fn select_validates_raw_value() {
        let tables = BuiltinTables::default();
        let c = caps(true, true, false, true);
        let mut policy = BandSelectionPolicy::new(&c, SecurityType::Open, &tables);
        assert_eq!(policy.select("1", &c), Band::BandAny);
        assert_eq!(policy.band_index(), 1);
        assert_eq!(policy.select("garbage", &c), Band::Band2Ghz);
    }

    #[test]
    fn select_keeps_validated_band_outside_table() {
        let tables = BuiltinTables::default();
        let mut policy =
            BandSelectionPolicy::new(&caps(true, false, false, true), SecurityType::Open, &tables);
        assert_eq!(policy.options().variant(), OptionTableVariant::Full);

        // Live dual mode turns 5GHz into `any`, which the full table lacks.
        let band = policy.select("1", &caps(true, true, false, true));
        assert_eq!(band, Band::BandAny);
        assert_eq!(policy.band(), Band::BandAny);
        assert_eq!(policy.band_index(), 0);
        assert_eq!(policy.summary("PREFER"), "PREFER");
    }

    #[test]
    fn set_band_outside_table_clamps_index_only() {
        let tables = BuiltinTables::default();
        let mut policy =
            BandSelectionPolicy::new(&caps(true, true, false, true), SecurityType::Open, &tables);
        // Dual-mode table offers 2.4GHz and `any`, not plain 5GHz.
        assert_eq!(policy.set_band(Band::Band5Ghz), Band::Band5Ghz);
        assert_eq!(policy.band(), Band::Band5Ghz);
        assert_eq!(policy.band_index(), 0);
        assert_eq!(policy.summary("PREFER"), "2.4 GHz Band");
    }

    #[test]
    fn shrinking_entries_clamps_index() {
        let c = caps(true, false, true, true);
        let tables = OptionTables {
            full: RawTable {
                entries: vec!["0".into()],
                summaries: vec!["2.4 only".into()],
            },
            ..OptionTables::default()
        };
        let mut policy = BandSelectionPolicy::new(&c, SecurityType::Wpa2Psk, &tables);
        assert_eq!(policy.options().variant(), OptionTableVariant::VendorDualAp);
        policy.select("1", &c);
        assert_eq!(policy.band(), Band::Band5Ghz);
        assert_eq!(policy.band_index(), 1);

        // Switching to OWE drops the vendor table; 5GHz is no longer listed.
        policy.update_entries(SecurityType::Owe, &tables);
        assert_eq!(policy.options().variant(), OptionTableVariant::Full);
        assert_eq!(policy.band(), Band::Band5Ghz);
        assert_eq!(policy.band_index(), 0);
        assert_eq!(policy.summary("PREFER"), "2.4 only");
    }
}
