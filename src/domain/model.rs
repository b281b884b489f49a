use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fully resolved site configuration. Every field holds a value after the
/// loaded partial has been merged over the default table, so rendering code
/// never deals with missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub artist_name: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub instagram_url: String,
    pub tiktok_url: String,
    pub booking_url: String,
}

/// Raw shape of `site.json`. All keys are optional; missing ones are filled
/// in field by field from the defaults, independent of whether the fetch
/// itself succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSiteConfig {
    pub artist_name: Option<String>,
    pub tagline: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub instagram_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub booking_url: Option<String>,
}

/// One card in the pricing grid. The order of `includes` is
/// display-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCard {
    pub title: String,
    pub price: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AftercareStep {
    pub title: String,
    pub text: String,
}

/// Gallery entry. The first image of the loaded sequence doubles as the hero
/// image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Booking form payload. Ephemeral: created on submit, serialized
/// form-encoded for the relay path, dropped once the outcome is resolved.
/// `name`, `email` and `consent` must pass validation before a strategy is
/// invoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub consent: bool,
}

/// Result of one booking submission attempt. `Success` on the relay path
/// means the call went out, not that the relay accepted the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Pending,
    Success,
    Failed(String),
}
