//! Landing Page Configuration
//!
//! Every field has a default so a partial JSON document (or none at all)
//! still yields a usable page.

use serde::{Deserialize, Serialize};

use crate::error::{LeadError, Result};
use crate::submit::SubmitMode;

/// Which iteration of the landing page to render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageVariant {
    /// Query-string sync plus call-tracker notification
    #[default]
    RealTime,
    /// Query-string sync with a hardcoded call button in the header
    Static,
    /// Simulated network delay, resettable
    Demo,
}

impl PageVariant {
    pub const ALL: [Self; 3] = [Self::RealTime, Self::Static, Self::Demo];

    /// Route the variant is mounted on
    pub const fn path(self) -> &'static str {
        match self {
            Self::RealTime => "/",
            Self::Static => "/static",
            Self::Demo => "/demo",
        }
    }

    pub const fn allows_reset(self) -> bool {
        matches!(self, Self::Demo)
    }

    pub const fn shows_header_call(self) -> bool {
        matches!(self, Self::Static)
    }

    /// Header call button: always for `Static`, otherwise only while a
    /// captured lead's success card is showing
    pub const fn header_call_visible(self, lead_captured: bool) -> bool {
        self.shows_header_call() || lead_captured
    }
}

/// Branding shown in header, hero and footer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub logo_src: String,
    pub subtitle: String,
    pub headline: String,
    pub headline_accent: String,
    pub subtext: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Retreaver".into(),
            logo_src: "assets/retreaver-logo.png".into(),
            subtitle: "Retreaver's Real-Time Landing Page".into(),
            headline: "Instant, Real-Time Call Routing for".into(),
            headline_accent: "High-Intent Leads".into(),
            subtext: "This page demonstrates Retreaver's powerful real-time lead capture and \
                      call routing technology. Submit your information to experience seamless, \
                      instant connection with our team."
                .into(),
        }
    }
}

/// Static fallback phone number
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// Human-readable form, e.g. `(866) 898-7878`
    pub display: String,
    /// Dialable digits for the `tel:` link
    pub dial: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            display: "(866) 898-7878".into(),
            dial: "18668987878".into(),
        }
    }
}

impl PhoneConfig {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

/// DOM ids the external call-tracking script looks for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub form_id: String,
    pub caller_number_id: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            form_id: "retreaver-form".into(),
            caller_number_id: "caller_number".into(),
        }
    }
}

/// Top-level page configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub brand: BrandConfig,
    pub phone: PhoneConfig,
    pub tracker: TrackerConfig,
    /// Artificial latency for the demo variant
    pub demo_delay_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            phone: PhoneConfig::default(),
            tracker: TrackerConfig::default(),
            demo_delay_ms: 1500,
        }
    }
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The tracking script finds the form and hidden input by id only
    pub fn validate(&self) -> Result<()> {
        if self.tracker.form_id.trim().is_empty() {
            return Err(LeadError::Config("tracker.form_id must not be empty".into()));
        }
        if self.tracker.caller_number_id.trim().is_empty() {
            return Err(LeadError::Config("tracker.caller_number_id must not be empty".into()));
        }
        Ok(())
    }

    /// Submission behaviour for a page variant
    pub const fn submit_mode(&self, variant: PageVariant) -> SubmitMode {
        match variant {
            PageVariant::RealTime => SubmitMode::QueryString { notify_tracker: true },
            PageVariant::Static => SubmitMode::QueryString { notify_tracker: false },
            PageVariant::Demo => SubmitMode::Simulated { delay_ms: self.demo_delay_ms },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.tracker.caller_number_id, "caller_number");
        assert_eq!(config.tracker.form_id, "retreaver-form");
        assert_eq!(config.phone.tel_href(), "tel:18668987878");
        assert_eq!(config.demo_delay_ms, 1500);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LandingConfig::from_json(r#"{"phone": {"display": "555-0100"}, "demo_delay_ms": 10}"#).unwrap();
        assert_eq!(config.phone.display, "555-0100");
        assert_eq!(config.phone.dial, "18668987878");
        assert_eq!(config.demo_delay_ms, 10);
        assert_eq!(config.brand, BrandConfig::default());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(LandingConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_blank_tracker_id_rejected() {
        let err = LandingConfig::from_json(r#"{"tracker": {"caller_number_id": ""}}"#).unwrap_err();
        assert!(matches!(err, LeadError::Config(_)));
    }

    #[test]
    fn test_variant_modes() {
        let config = LandingConfig::default();
        assert_eq!(
            config.submit_mode(PageVariant::RealTime),
            SubmitMode::QueryString { notify_tracker: true }
        );
        assert_eq!(
            config.submit_mode(PageVariant::Static),
            SubmitMode::QueryString { notify_tracker: false }
        );
        assert_eq!(config.submit_mode(PageVariant::Demo), SubmitMode::Simulated { delay_ms: 1500 });
        assert!(PageVariant::Demo.allows_reset());
        assert!(!PageVariant::RealTime.allows_reset());
    }

    #[test]
    fn test_header_call_visibility() {
        assert!(PageVariant::Static.header_call_visible(false));
        assert!(!PageVariant::RealTime.header_call_visible(false));
        assert!(PageVariant::RealTime.header_call_visible(true));
        assert!(!PageVariant::Demo.header_call_visible(false));
        assert!(PageVariant::Demo.header_call_visible(true));
    }
}
