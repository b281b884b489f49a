use crate::core::loader::{ContentHandle, ResourceLoader};
use crate::domain::model::{
    AftercareStep, FaqItem, GalleryImage, PartialSiteConfig, PricingCard, SiteConfig,
};

/// Central default table for the site section. Defaults alone constitute a
/// valid, renderable configuration.
pub mod site_defaults {
    pub const ARTIST_NAME: &str = "SAWA Tattoo";
    pub const TAGLINE: &str = "Custom black & grey • Fine line • Neo-traditional";
    pub const LOCATION: &str = "Vilnius, Lithuania";
    pub const EMAIL: &str = "bookings@example.com";
    pub const PHONE: &str = "+37060000000";
}

/// Read model over the five content resources. Each resource is fetched
/// independently at creation; snapshots never wait for fetches that have not
/// settled yet.
pub struct ContentModel {
    site: ContentHandle<PartialSiteConfig>,
    pricing: ContentHandle<Vec<PricingCard>>,
    faq: ContentHandle<Vec<FaqItem>>,
    aftercare: ContentHandle<Vec<AftercareStep>>,
    gallery: ContentHandle<Vec<GalleryImage>>,
}

/// One consistent view over the loaded content, ready for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSnapshot {
    pub site: SiteConfig,
    pub pricing: Vec<PricingCard>,
    pub faq: Vec<FaqItem>,
    pub aftercare: Vec<AftercareStep>,
    pub gallery: Vec<GalleryImage>,
}

impl ContentModel {
    /// Kicks off the five fetches. They are independent and unordered; no
    /// section blocks on another section's data.
    pub fn load(loader: &ResourceLoader, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            site: loader.load(
                &format!("{}/content/site.json", base),
                PartialSiteConfig::default(),
            ),
            pricing: loader.load(&format!("{}/content/pricing.json", base), Vec::new()),
            faq: loader.load(&format!("{}/content/faq.json", base), Vec::new()),
            aftercare: loader.load(&format!("{}/content/aftercare.json", base), Vec::new()),
            gallery: loader.load(&format!("{}/content/gallery/index.json", base), Vec::new()),
        }
    }

    /// Builds a model from already-resolved values. No fetches are issued.
    pub fn from_parts(
        site: PartialSiteConfig,
        pricing: Vec<PricingCard>,
        faq: Vec<FaqItem>,
        aftercare: Vec<AftercareStep>,
        gallery: Vec<GalleryImage>,
    ) -> Self {
        Self {
            site: ContentHandle::fixed(site),
            pricing: ContentHandle::fixed(pricing),
            faq: ContentHandle::fixed(faq),
            aftercare: ContentHandle::fixed(aftercare),
            gallery: ContentHandle::fixed(gallery),
        }
    }

    /// Current view state. Sections whose fetch has not settled show their
    /// declared fallback; the site section is always default-merged.
    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            site: merge_site_defaults(self.site.current()),
            pricing: self.pricing.current(),
            faq: self.faq.current(),
            aftercare: self.aftercare.current(),
            gallery: self.gallery.current(),
        }
    }

    /// Waits for all five fetches to settle, then snapshots.
    pub async fn settled(&mut self) -> ContentSnapshot {
        let (site, pricing, faq, aftercare, gallery) = tokio::join!(
            self.site.settled(),
            self.pricing.settled(),
            self.faq.settled(),
            self.aftercare.settled(),
            self.gallery.settled(),
        );

        ContentSnapshot {
            site: merge_site_defaults(site),
            pricing,
            faq,
            aftercare,
            gallery,
        }
    }
}

/// Field-level merge of the loaded partial over the named defaults. A key
/// missing from `site.json` gets its default even when the fetch itself
/// succeeded; the optional URLs default to empty (feature off).
pub fn merge_site_defaults(partial: PartialSiteConfig) -> SiteConfig {
    SiteConfig {
        artist_name: partial
            .artist_name
            .unwrap_or_else(|| site_defaults::ARTIST_NAME.to_string()),
        tagline: partial
            .tagline
            .unwrap_or_else(|| site_defaults::TAGLINE.to_string()),
        location: partial
            .location
            .unwrap_or_else(|| site_defaults::LOCATION.to_string()),
        email: partial
            .email
            .unwrap_or_else(|| site_defaults::EMAIL.to_string()),
        phone: partial
            .phone
            .unwrap_or_else(|| site_defaults::PHONE.to_string()),
        instagram_url: partial.instagram_url.unwrap_or_default(),
        tiktok_url: partial.tiktok_url.unwrap_or_default(),
        booking_url: partial.booking_url.unwrap_or_default(),
    }
}
