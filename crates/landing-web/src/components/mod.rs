//! UI Components

mod footer;
mod header;
mod hero;
mod lead_form;
mod success;

pub use footer::{SiteFooter, TrustBadges};
pub use header::SiteHeader;
pub use hero::Hero;
pub use lead_form::LeadCaptureForm;
pub use success::SuccessCard;
