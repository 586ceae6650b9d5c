//! # Band Option Tables
//!
//! The list of bands a user may pick from depends on the device:
//!
//! | Variant        | Chosen when                              | Offers          |
//! |----------------|------------------------------------------|-----------------|
//! | `DualMode`     | radio supports simultaneous dual bands   | 2.4GHz, any     |
//! | `VendorDualAp` | vendor AP+AP enabled and security ≠ OWE  | 2.4, 5, any     |
//! | `Full`         | everything else                          | 2.4GHz, 5GHz    |
//!
//! Tables are plain string resources (raw band values + summaries) resolved
//! through an [`OptionTableProvider`]; [`BandOptionSet`] is the parsed,
//! validated form the policy works on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::band::{Band, SecurityType};

// ─── Table Variant ──────────────────────────────────────────────────────────

/// Which option table applies to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionTableVariant {
    Full,
    DualMode,
    VendorDualAp,
}

impl OptionTableVariant {
    /// Pick the table variant, highest priority first. Dual mode wins
    /// regardless of the vendor flag or security type.
    pub fn select(dual_mode: bool, vendor_dual_ap: bool, security: SecurityType) -> Self {
        if dual_mode {
            OptionTableVariant::DualMode
        } else if vendor_dual_ap && !security.is_owe() {
            OptionTableVariant::VendorDualAp
        } else {
            OptionTableVariant::Full
        }
    }
}

impl fmt::Display for OptionTableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionTableVariant::Full => write!(f, "full"),
            OptionTableVariant::DualMode => write!(f, "dual-mode"),
            OptionTableVariant::VendorDualAp => write!(f, "vendor-dual-ap"),
        }
    }
}

// ─── Raw Tables ─────────────────────────────────────────────────────────────

/// Unparsed table: raw band values and their display summaries,
/// index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub entries: Vec<String>,
    pub summaries: Vec<String>,
}

impl RawTable {
    fn new(entries: &[&str], summaries: &[&str]) -> Self {
        RawTable {
            entries: entries.iter().map(|s| s.to_string()).collect(),
            summaries: summaries.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Resolves table variants and the fixed labels.
pub trait OptionTableProvider {
    fn table(&self, variant: OptionTableVariant) -> RawTable;

    /// Summary shown whenever the effective band is [`Band::BandAny`].
    fn prefer_5ghz_label(&self) -> String;

    /// Summary shown when 5 GHz is unavailable and the choice is locked.
    fn choose_2ghz_label(&self) -> String;
}

/// The three tables plus the two fixed labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTables {
    pub full: RawTable,
    pub dual_mode: RawTable,
    pub vendor_dual_ap: RawTable,
    pub prefer_5ghz: String,
    pub choose_2ghz: String,
}

impl Default for OptionTables {
    fn default() -> Self {
        OptionTables {
            full: RawTable::new(&["0", "1"], &["2.4 GHz Band", "5.0 GHz Band"]),
            dual_mode: RawTable::new(&["0", "-1"], &["2.4 GHz Band", "5.0 GHz Band preferred"]),
            vendor_dual_ap: RawTable::new(
                &["0", "1", "-1"],
                &["2.4 GHz Band", "5.0 GHz Band", "2.4 GHz and 5.0 GHz Band"],
            ),
            prefer_5ghz: "Prefer 5.0 GHz Band".into(),
            choose_2ghz: "2.4 GHz Band".into(),
        }
    }
}

impl OptionTableProvider for OptionTables {
    fn table(&self, variant: OptionTableVariant) -> RawTable {
        match variant {
            OptionTableVariant::Full => self.full.clone(),
            OptionTableVariant::DualMode => self.dual_mode.clone(),
            OptionTableVariant::VendorDualAp => self.vendor_dual_ap.clone(),
        }
    }

    fn prefer_5ghz_label(&self) -> String {
        self.prefer_5ghz.clone()
    }

    fn choose_2ghz_label(&self) -> String {
        self.choose_2ghz.clone()
    }
}

/// Built-in English tables.
pub type BuiltinTables = OptionTables;

// ─── Option Set ─────────────────────────────────────────────────────────────

/// One selectable band and how it is described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandOption {
    pub band: Band,
    pub summary: String,
}

/// Ordered, non-empty list of selectable bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandOptionSet {
    variant: OptionTableVariant,
    options: Vec<BandOption>,
}

impl BandOptionSet {
    /// Parse a raw table. Entries that do not name a band are dropped and
    /// surplus entries/summaries are ignored. Returns `None` if nothing
    /// usable is left.
    pub fn from_table(variant: OptionTableVariant, table: &RawTable) -> Option<Self> {
        if table.entries.len() != table.summaries.len() {
            tracing::debug!(
                %variant,
                entries = table.entries.len(),
                summaries = table.summaries.len(),
                "option table length mismatch, truncating"
            );
        }
        let options: Vec<BandOption> = table
            .entries
            .iter()
            .zip(&table.summaries)
            .filter_map(|(raw, summary)| match Band::parse_raw(raw) {
                Some(band) => Some(BandOption {
                    band,
                    summary: summary.clone(),
                }),
                None => {
                    tracing::debug!(%variant, raw = raw.as_str(), "dropping unparseable table entry");
                    None
                }
            })
            .collect();

        if options.is_empty() {
            None
        } else {
            Some(BandOptionSet { variant, options })
        }
    }

    /// 2.4 GHz-only set, used when a table cannot be resolved.
    pub fn restricted(summary: String) -> Self {
        BandOptionSet {
            variant: OptionTableVariant::Full,
            options: vec![BandOption {
                band: Band::Band2Ghz,
                summary,
            }],
        }
    }

    pub fn variant(&self) -> OptionTableVariant {
        self.variant
    }

    pub fn options(&self) -> &[BandOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BandOption> {
        self.options.get(index)
    }

    /// First option. Exists by construction.
    pub fn first(&self) -> &BandOption {
        &self.options[0]
    }

    pub fn index_of(&self, band: Band) -> Option<usize> {
        self.options.iter().position(|o| o.band == band)
    }

    pub fn contains(&self, band: Band) -> bool {
        self.index_of(band).is_some()
    }

    /// Whether simultaneous dual-band broadcast is offered.
    pub fn has_dual_band(&self) -> bool {
        self.contains(Band::BandAny)
    }

    /// Display summaries, in order.
    pub fn summaries(&self) -> Vec<String> {
        self.options.iter().map(|o| o.summary.clone()).collect()
    }

    /// Raw band values, in order.
    pub fn entry_values(&self) -> Vec<String> {
        self.options.iter().map(|o| o.band.raw().to_string()).collect()
    }
}
