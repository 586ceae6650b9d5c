//! Hotspot configuration storage and change notification.
//!
//! The authoritative configuration lives outside the policy. The
//! controller reads it through [`RadioConfigStore`] and writes corrected
//! values back; [`UpdateListener`] is told whenever the effective band
//! changes so the host can push the new value downstream.

use serde::{Deserialize, Serialize};

use crate::band::{Band, SecurityType};

/// Persisted hotspot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SoftApConfig {
    pub ssid: String,
    pub band: Band,
    pub security_type: SecurityType,
}

impl SoftApConfig {
    /// Copy of this configuration with a different band.
    pub fn with_band(&self, band: Band) -> Self {
        SoftApConfig {
            band,
            ..self.clone()
        }
    }
}

pub trait RadioConfigStore {
    fn configuration(&self) -> Option<SoftApConfig>;
    fn set_configuration(&mut self, config: SoftApConfig);
}

pub trait UpdateListener {
    fn on_config_updated(&mut self);
}

/// Listener that ignores notifications.
impl UpdateListener for () {
    fn on_config_updated(&mut self) {}
}

/// In-memory store. Counts writes so callers can tell whether a
/// correction was pushed.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    config: Option<SoftApConfig>,
    writes: usize,
}

impl MemoryConfigStore {
    pub fn new(config: Option<SoftApConfig>) -> Self {
        MemoryConfigStore { config, writes: 0 }
    }

    /// Number of `set_configuration` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RadioConfigStore for MemoryConfigStore {
    fn configuration(&self) -> Option<SoftApConfig> {
        self.config.clone()
    }

    fn set_configuration(&mut self, config: SoftApConfig) {
        tracing::debug!(band = %config.band, security = %config.security_type, "storing hotspot config");
        self.writes += 1;
        self.config = Some(config);
    }
}

/// Listener that counts notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingListener {
    pub updates: usize,
}

impl UpdateListener for RecordingListener {
    fn on_config_updated(&mut self) {
        self.updates += 1;
    }
}
