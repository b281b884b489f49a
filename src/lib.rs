pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::booking::{BookingController, BookingView, SubmissionFeedback};
pub use core::composer::{compose, Page, Section};
pub use core::content::{ContentModel, ContentSnapshot};
pub use core::loader::{ContentHandle, ResourceLoader};
pub use core::submission::{select_strategy, RelaySubmission, SimulatedSubmission};
pub use domain::model::{
    AftercareStep, BookingRequest, FaqItem, GalleryImage, PartialSiteConfig, PricingCard,
    SiteConfig, SubmissionOutcome,
};
pub use domain::ports::{AppConfig, SubmissionStrategy};
pub use utils::error::{Result, SiteError};
