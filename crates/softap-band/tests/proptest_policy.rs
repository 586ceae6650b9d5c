//! Property-based tests for the band selection policy.
//!
//! These cover the whole capability × band × security space rather than
//! hand-picked devices.

use proptest::prelude::*;
use softap_band::options::OptionTableVariant;
use softap_band::{
    derive_option_set, reconcile_security_band_conflict, summarize, validate_band, Band,
    BandPreferenceController, BuiltinTables, CapabilitySnapshot, MemoryConfigStore,
    OptionTableProvider, SecurityType, SoftApConfig, StaticCapabilities,
};

// ─── Strategies ─────────────────────────────────────────────────────────────

fn band() -> impl Strategy<Value = Band> {
    prop_oneof![Just(Band::Band2Ghz), Just(Band::Band5Ghz), Just(Band::BandAny)]
}

fn security() -> impl Strategy<Value = SecurityType> {
    prop_oneof![
        Just(SecurityType::Open),
        Just(SecurityType::Wpa2Psk),
        Just(SecurityType::Wpa3Sae),
        Just(SecurityType::Wpa3SaeTransition),
        Just(SecurityType::Owe),
    ]
}

fn caps() -> impl Strategy<Value = CapabilitySnapshot> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(dual_band, dual_mode, vendor, country)| CapabilitySnapshot {
            dual_band_supported: dual_band,
            dual_mode_supported: dual_mode,
            vendor_dual_ap_supported: vendor,
            country_code_known: country,
        },
    )
}

proptest! {
    #[test]
    fn any_without_dual_mode_is_5ghz(c in caps()) {
        let c = CapabilitySnapshot { dual_mode_supported: false, ..c };
        prop_assert_eq!(validate_band(Band::BandAny, &c), Band::Band5Ghz);
    }

    #[test]
    fn unsupported_5ghz_is_2ghz(c in caps()) {
        prop_assume!(!c.is_5ghz_supported());
        prop_assert_eq!(validate_band(Band::Band5Ghz, &c), Band::Band2Ghz);
    }

    #[test]
    fn dual_mode_5ghz_is_any(c in caps()) {
        let c = CapabilitySnapshot {
            dual_mode_supported: true,
            dual_band_supported: true,
            country_code_known: true,
            ..c
        };
        prop_assert_eq!(validate_band(Band::Band5Ghz, &c), Band::BandAny);
    }

    #[test]
    fn validate_is_idempotent(b in band(), c in caps()) {
        // Without dual mode and without 5GHz, `any` takes two steps
        // (`any` → 5GHz → 2.4GHz). Everything else settles in one.
        prop_assume!(b != Band::BandAny || c.dual_mode_supported || c.is_5ghz_supported());
        let once = validate_band(b, &c);
        prop_assert_eq!(validate_band(once, &c), once);
    }

    #[test]
    fn validate_2ghz_is_fixed_point(c in caps()) {
        prop_assert_eq!(validate_band(Band::Band2Ghz, &c), Band::Band2Ghz);
    }

    #[test]
    fn owe_any_always_2ghz(c in caps()) {
        let reconciled = reconcile_security_band_conflict(Band::BandAny, SecurityType::Owe);
        prop_assert_eq!(reconciled, Band::Band2Ghz);
        prop_assert_eq!(validate_band(reconciled, &c), Band::Band2Ghz);
    }

    #[test]
    fn option_set_never_empty(c in caps(), s in security()) {
        let set = derive_option_set(&c, s, &BuiltinTables::default());
        prop_assert!(!set.is_empty());
        if c.dual_mode_supported {
            prop_assert_eq!(set.variant(), OptionTableVariant::DualMode);
        }
    }

    #[test]
    fn option_set_order_is_stable(c in caps(), s in security()) {
        let tables = BuiltinTables::default();
        prop_assert_eq!(derive_option_set(&c, s, &tables), derive_option_set(&c, s, &tables));
    }

    #[test]
    fn any_summary_is_fixed_label(c in caps(), s in security()) {
        let tables = BuiltinTables::default();
        let set = derive_option_set(&c, s, &tables);
        prop_assert_eq!(summarize(Band::BandAny, &set, &tables.prefer_5ghz_label()), tables.prefer_5ghz_label());
    }

    #[test]
    fn controller_index_always_valid(
        c in caps(),
        stored in proptest::option::of((band(), security())),
        picks in proptest::collection::vec("-?[0-9]{1,2}", 0..6),
    ) {
        let config = stored.map(|(band, security_type)| SoftApConfig {
            ssid: "prop".into(),
            band,
            security_type,
        });
        let mut ctl = BandPreferenceController::new(
            MemoryConfigStore::new(config),
            StaticCapabilities::from_snapshot(c),
            BuiltinTables::default(),
            (),
        );
        prop_assert!(ctl.band_index() < ctl.options().len());
        for raw in &picks {
            ctl.on_user_selection(raw);
            prop_assert!(ctl.band_index() < ctl.options().len());
        }
        ctl.update_display();
        prop_assert!(ctl.band_index() < ctl.options().len());
    }

    #[test]
    fn selection_yields_validated_band(
        c in caps(),
        stored in proptest::option::of((band(), security())),
        raw in prop_oneof![
            Just("0".to_string()),
            Just("1".to_string()),
            Just("-1".to_string()),
            "-?[0-9]{1,2}",
            "[a-z]{0,4}",
        ],
    ) {
        let config = stored.map(|(band, security_type)| SoftApConfig {
            ssid: "prop".into(),
            band,
            security_type,
        });
        let mut ctl = BandPreferenceController::new(
            MemoryConfigStore::new(config),
            StaticCapabilities::from_snapshot(c),
            BuiltinTables::default(),
            (),
        );
        ctl.on_user_selection(&raw);
        prop_assert_eq!(ctl.band(), validate_band(Band::parse_raw_or_default(&raw), &c));
    }
}

#[test]
fn any_on_2ghz_only_device_takes_two_steps() {
    let c = CapabilitySnapshot::default();
    let once = validate_band(Band::BandAny, &c);
    assert_eq!(once, Band::Band5Ghz);
    assert_eq!(validate_band(once, &c), Band::Band2Ghz);
}
