//! # landing-core
//!
//! Lead capture domain for the real-time landing page.
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐   keystrokes   ┌────────────┐  submit()  ┌──────────────────┐
//! │  Tracking  │───────────────▶│  LeadForm  │───────────▶│ SubmissionHandler│
//! │ (?utm=..)  │                │ (validate) │            │   (PageHost)     │
//! └────────────┘                └────────────┘            └──────────────────┘
//!                                     ▲                           │
//!                                     └──────── confirm() ────────┘
//! ```
//!
//! Nothing here touches the browser directly. The DOM side effects
//! (history replace, the caller-number `change` event, the demo delay) sit
//! behind the [`PageHost`] trait so the web crate can supply the real
//! implementation and tests can supply a recording one.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod query;
pub mod submit;
pub mod tracking;
pub mod validate;

pub use config::{BrandConfig, LandingConfig, PageVariant, PhoneConfig, TrackerConfig};
pub use error::{LeadError, Result};
pub use field::{Field, LeadFields};
pub use form::{FormPhase, Lead, LeadForm, Submission};
pub use submit::{PageHost, SubmissionHandler, SubmitMode};
pub use tracking::TrackingParams;
pub use validate::{FieldError, FieldErrors, validate, validate_field};
