//! What the band list preference should display.
//!
//! The host UI applies a [`Presentation`] to its widget; the policy never
//! touches widget state directly.

use serde::Serialize;

use crate::capability::CapabilitySnapshot;
use crate::options::OptionTableProvider;
use crate::policy::BandSelectionPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Whether the user may change the band.
    pub enabled: bool,
    /// Human-readable option labels.
    pub entries: Vec<String>,
    /// Raw band values, index-aligned with `entries`.
    pub entry_values: Vec<String>,
    /// Raw value of the selected option. `None` while the choice is locked.
    pub selected_value: Option<String>,
    pub summary: String,
}

/// Project policy state onto the preference widget.
///
/// Without 5 GHz support the choice is locked to 2.4 GHz and the widget
/// disabled, whatever the option set says.
pub fn project<T>(policy: &BandSelectionPolicy, caps: &CapabilitySnapshot, tables: &T) -> Presentation
where
    T: OptionTableProvider + ?Sized,
{
    let options = policy.options();
    if caps.is_5ghz_supported() {
        Presentation {
            enabled: true,
            entries: options.summaries(),
            entry_values: options.entry_values(),
            selected_value: Some(policy.band().raw().to_string()),
            summary: policy.summary(&tables.prefer_5ghz_label()),
        }
    } else {
        Presentation {
            enabled: false,
            entries: options.summaries(),
            entry_values: options.entry_values(),
            selected_value: None,
            summary: tables.choose_2ghz_label(),
        }
    }
}
