//! # Band Preference Controller
//!
//! Drives a [`BandSelectionPolicy`] over its collaborators for the
//! lifetime of one settings screen:
//!
//! - **construct**: capture dual-mode/vendor flags, derive the option set,
//!   then reconcile against the stored configuration
//! - **refresh** ([`update_display`](BandPreferenceController::update_display)):
//!   re-read configuration and live capabilities, write back corrections
//! - **select** ([`on_user_selection`](BandPreferenceController::on_user_selection)):
//!   validate the user's pick and notify the listener
//!
//! Corrections (OWE on both bands, 5 GHz without regulatory clearance) are
//! written through to the [`RadioConfigStore`] and reported to the
//! [`UpdateListener`].

use crate::band::{Band, SecurityType};
use crate::capability::CapabilityProvider;
use crate::options::{BandOptionSet, OptionTableProvider};
use crate::policy::{reconcile_security_band_conflict, validate_band, BandSelectionPolicy};
use crate::presentation::{project, Presentation};
use crate::store::{RadioConfigStore, SoftApConfig, UpdateListener};

/// Preference key of the band list.
pub const PREF_KEY: &str = "wifi_tether_network_ap_band";

pub struct BandPreferenceController<S, C, T, L> {
    store: S,
    caps: C,
    tables: T,
    listener: L,
    policy: BandSelectionPolicy,
}

impl<S, C, T, L> BandPreferenceController<S, C, T, L>
where
    S: RadioConfigStore,
    C: CapabilityProvider,
    T: OptionTableProvider,
    L: UpdateListener,
{
    pub fn new(store: S, caps: C, tables: T, listener: L) -> Self {
        let config = store.configuration();
        let security = config.as_ref().map_or(SecurityType::Open, |c| c.security_type);
        let snapshot = caps.snapshot();
        let policy = BandSelectionPolicy::new(&snapshot, security, &tables);

        tracing::debug!(
            dual_mode = snapshot.dual_mode_supported,
            vendor_dual_ap = snapshot.vendor_dual_ap_supported,
            security = %security,
            variant = %policy.options().variant(),
            "band preference created"
        );

        let mut controller = BandPreferenceController {
            store,
            caps,
            tables,
            listener,
            policy,
        };
        controller.refresh_band();
        controller
    }

    pub fn preference_key(&self) -> &'static str {
        PREF_KEY
    }

    /// Re-read configuration and capabilities and return what to display.
    pub fn update_display(&mut self) -> Presentation {
        self.refresh_band();
        self.presentation()
    }

    /// Apply a raw band value picked by the user.
    pub fn on_user_selection(&mut self, raw: &str) -> Presentation {
        let caps = self.caps.snapshot();
        let band = self.policy.select(raw, &caps);
        tracing::info!(band = %band, index = self.policy.band_index(), "band preference changed");
        self.listener.on_config_updated();
        self.presentation()
    }

    /// Re-derive the option set for `config`'s security type (open when
    /// there is no configuration).
    pub fn update_preference_entries(&mut self, config: Option<&SoftApConfig>) {
        let security = config.map_or(SecurityType::Open, |c| c.security_type);
        self.policy.update_entries(security, &self.tables);
    }

    pub fn presentation(&self) -> Presentation {
        project(&self.policy, &self.caps.snapshot(), &self.tables)
    }

    pub fn band(&self) -> Band {
        self.policy.band()
    }

    pub fn band_index(&self) -> usize {
        self.policy.band_index()
    }

    pub fn options(&self) -> &BandOptionSet {
        self.policy.options()
    }

    pub fn policy(&self) -> &BandSelectionPolicy {
        &self.policy
    }

    pub fn is_vendor_dual_ap_supported(&self) -> bool {
        self.policy.vendor_dual_ap_supported()
    }

    pub fn is_band_entries_has_dual_band(&self) -> bool {
        self.policy.options().has_dual_band()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn capabilities_mut(&mut self) -> &mut C {
        &mut self.caps
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_parts(self) -> (S, C, T, L) {
        (self.store, self.caps, self.tables, self.listener)
    }

    fn refresh_band(&mut self) {
        let caps = self.caps.snapshot();
        let candidate = match self.store.configuration() {
            None => {
                let first = self.policy.options().first().band;
                tracing::debug!(band = %first, "no hotspot config, resetting band to first option");
                first
            }
            Some(config) if caps.is_5ghz_supported() => {
                let band = self.reconcile_security(config);
                let validated = validate_band(band, &caps);
                tracing::debug!(stored = %band, band = %validated, "validated stored band");
                validated
            }
            Some(config) => {
                if config.band != Band::Band2Ghz {
                    self.store.set_configuration(config.with_band(Band::Band2Ghz));
                    self.listener.on_config_updated();
                }
                tracing::debug!(stored = %config.band, "5GHz not supported, forcing 2.4GHz");
                Band::Band2Ghz
            }
        };
        self.policy.set_band(candidate);
    }

    fn reconcile_security(&mut self, config: SoftApConfig) -> Band {
        let band = reconcile_security_band_conflict(config.band, config.security_type);
        if band != config.band {
            tracing::info!(
                security = %config.security_type,
                from = %config.band,
                to = %band,
                "dual band not supported for this security type, correcting stored band"
            );
            self.store.set_configuration(config.with_band(band));
            self.listener.on_config_updated();
        }
        band
    }
}
