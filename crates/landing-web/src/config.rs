//! Embedded page configuration

use landing_core::LandingConfig;

const EMBEDDED: &str = include_str!("../landing.json");

/// Parse the bundled `landing.json`, falling back to defaults
pub fn load() -> LandingConfig {
    LandingConfig::from_json(EMBEDDED).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "landing.json unreadable, using defaults");
        LandingConfig::default()
    })
}
