//! Hotspot band selection policy.
//!
//! This crate contains:
//! - **Band and security types** — raw-value aware enums shared by everything else
//! - **Capabilities** — dual-band / dual-mode / vendor AP+AP / country code flags
//! - **Option tables** — which bands a device may offer, and how they are labelled
//! - **Policy** — band validation, OWE reconciliation, option-set derivation, summaries
//! - **Controller** — drives the policy over an injected config store and listener
//! - **Profiles** — TOML device profiles for running the policy outside a host UI

pub mod band;
pub mod capability;
pub mod controller;
pub mod options;
pub mod policy;
pub mod presentation;
pub mod profile;
pub mod store;

pub use band::{Band, SecurityType};
pub use capability::{CapabilityProvider, CapabilitySnapshot, StaticCapabilities};
pub use controller::BandPreferenceController;
pub use options::{BandOption, BandOptionSet, BuiltinTables, OptionTableProvider, OptionTableVariant};
pub use policy::{
    derive_option_set, reconcile_security_band_conflict, summarize, validate_band,
    BandSelectionPolicy,
};
pub use presentation::Presentation;
pub use profile::{DeviceProfile, ProfileError};
pub use store::{MemoryConfigStore, RadioConfigStore, RecordingListener, SoftApConfig, UpdateListener};
