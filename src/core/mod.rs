pub mod booking;
pub mod composer;
pub mod content;
pub mod loader;
pub mod submission;

pub use crate::domain::model::{
    AftercareStep, BookingRequest, FaqItem, GalleryImage, PartialSiteConfig, PricingCard,
    SiteConfig, SubmissionOutcome,
};
pub use crate::domain::ports::{AppConfig, SubmissionStrategy};
pub use crate::utils::error::Result;
