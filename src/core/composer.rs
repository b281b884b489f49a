use crate::core::content::ContentSnapshot;
use crate::domain::model::{AftercareStep, FaqItem, GalleryImage, PricingCard};

/// Externally hosted social page embedded in the contact section.
pub const SOCIAL_EMBED_URL: &str = "https://www.facebook.com/sawatattoo";

/// One displayed section of the page.
///
/// The hero carries a copy of the first gallery image: the duplication with
/// the gallery grid is intentional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Hero {
        artist_name: String,
        tagline: String,
        location: String,
        image: Option<GalleryImage>,
        booking_url: Option<String>,
    },
    Gallery {
        images: Vec<GalleryImage>,
    },
    Pricing {
        cards: Vec<PricingCard>,
    },
    Faq {
        items: Vec<FaqItem>,
    },
    Aftercare {
        steps: Vec<AftercareStep>,
    },
    Contact {
        location: String,
        email: String,
        email_href: String,
        phone: String,
        phone_href: String,
        instagram_url: Option<String>,
        tiktok_url: Option<String>,
        social_embed_url: String,
    },
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero { .. } => "hero",
            Section::Gallery { .. } => "gallery",
            Section::Pricing { .. } => "pricing",
            Section::Faq { .. } => "faq",
            Section::Aftercare { .. } => "aftercare",
            Section::Contact { .. } => "contact",
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            Section::Hero { .. } | Section::Contact { .. } => 1,
            Section::Gallery { images } => images.len(),
            Section::Pricing { cards } => cards.len(),
            Section::Faq { items } => items.len(),
            Section::Aftercare { steps } => steps.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub sections: Vec<Section>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Deterministic, side-effect-free mapping from the content snapshot to the
/// displayed section list. Empty collections render as empty sections, never
/// as placeholder errors.
pub fn compose(content: &ContentSnapshot) -> Page {
    let site = &content.site;

    let sections = vec![
        Section::Hero {
            artist_name: site.artist_name.clone(),
            tagline: site.tagline.clone(),
            location: site.location.clone(),
            image: content.gallery.first().cloned(),
            booking_url: non_empty(&site.booking_url),
        },
        Section::Gallery {
            images: content.gallery.clone(),
        },
        Section::Pricing {
            cards: content.pricing.clone(),
        },
        Section::Faq {
            items: content.faq.clone(),
        },
        Section::Aftercare {
            steps: content.aftercare.clone(),
        },
        Section::Contact {
            location: site.location.clone(),
            email: site.email.clone(),
            email_href: format!("mailto:{}", site.email),
            phone: site.phone.clone(),
            phone_href: format!("tel:{}", site.phone),
            instagram_url: non_empty(&site.instagram_url),
            tiktok_url: non_empty(&site.tiktok_url),
            social_embed_url: SOCIAL_EMBED_URL.to_string(),
        },
    ];

    Page { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::merge_site_defaults;
    use crate::domain::model::PartialSiteConfig;

    fn snapshot_with_gallery(gallery: Vec<GalleryImage>) -> ContentSnapshot {
        ContentSnapshot {
            site: merge_site_defaults(PartialSiteConfig::default()),
            pricing: vec![],
            faq: vec![],
            aftercare: vec![],
            gallery,
        }
    }

    #[test]
    fn test_empty_collections_compose_without_placeholders() {
        let page = compose(&snapshot_with_gallery(vec![]));

        assert_eq!(page.sections.len(), 6);
        for section in &page.sections {
            match section {
                Section::Hero { image, .. } => assert!(image.is_none()),
                Section::Gallery { images } => assert!(images.is_empty()),
                Section::Pricing { cards } => assert!(cards.is_empty()),
                Section::Faq { items } => assert!(items.is_empty()),
                Section::Aftercare { steps } => assert!(steps.is_empty()),
                Section::Contact { .. } => {}
            }
        }
    }

    #[test]
    fn test_hero_image_duplicates_first_gallery_entry() {
        let gallery = vec![
            GalleryImage {
                src: "/img/a.jpg".to_string(),
                alt: Some("Fine line sleeve".to_string()),
            },
            GalleryImage {
                src: "/img/b.jpg".to_string(),
                alt: None,
            },
        ];
        let page = compose(&snapshot_with_gallery(gallery.clone()));

        let hero_image = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Hero { image, .. } => Some(image.clone()),
                _ => None,
            })
            .flatten();
        let grid = page.sections.iter().find_map(|s| match s {
            Section::Gallery { images } => Some(images.clone()),
            _ => None,
        });

        assert_eq!(hero_image, Some(gallery[0].clone()));
        assert_eq!(grid, Some(gallery));
    }

    #[test]
    fn test_contact_links_use_config_verbatim() {
        let mut snapshot = snapshot_with_gallery(vec![]);
        snapshot.site.email = "ink@studio.lt".to_string();
        snapshot.site.phone = "+37061111111".to_string();
        snapshot.site.instagram_url = "https://instagram.com/studio".to_string();

        let page = compose(&snapshot);
        let contact = page
            .sections
            .iter()
            .find(|s| matches!(s, Section::Contact { .. }))
            .unwrap();

        if let Section::Contact {
            email_href,
            phone_href,
            instagram_url,
            tiktok_url,
            ..
        } = contact
        {
            assert_eq!(email_href, "mailto:ink@studio.lt");
            assert_eq!(phone_href, "tel:+37061111111");
            assert_eq!(instagram_url.as_deref(), Some("https://instagram.com/studio"));
            assert!(tiktok_url.is_none());
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let snapshot = snapshot_with_gallery(vec![GalleryImage {
            src: "/img/a.jpg".to_string(),
            alt: None,
        }]);
        assert_eq!(compose(&snapshot), compose(&snapshot));
    }
}
