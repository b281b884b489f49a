use anyhow::Result;
use httpmock::prelude::*;
use sawa_site::core::content::site_defaults;
use sawa_site::{ContentModel, GalleryImage, ResourceLoader};
use std::time::Duration;

#[tokio::test]
async fn test_all_sections_load_from_served_content() -> Result<()> {
    let server = MockServer::start();

    let site_mock = server.mock(|when, then| {
        when.method(GET).path("/content/site.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "artistName": "Ink & Iron",
                "tagline": "Blackwork only",
                "location": "Kaunas, Lithuania",
                "email": "hello@inkiron.lt",
                "phone": "+37062222222",
                "instagramUrl": "https://instagram.com/inkiron",
                "bookingUrl": "https://cal.example.com/inkiron"
            }));
    });
    let pricing_mock = server.mock(|when, then| {
        when.method(GET).path("/content/pricing.json");
        then.status(200).json_body(serde_json::json!([
            {"title": "Small", "price": "from 80 €", "includes": ["Consultation", "Stencil"], "featured": false},
            {"title": "Half sleeve", "price": "from 400 €", "includes": ["Consultation", "Custom design", "Touch-up"], "featured": true}
        ]));
    });
    let faq_mock = server.mock(|when, then| {
        when.method(GET).path("/content/faq.json");
        then.status(200).json_body(serde_json::json!([
            {"q": "Does it hurt?", "a": "Depends on the placement."}
        ]));
    });
    let aftercare_mock = server.mock(|when, then| {
        when.method(GET).path("/content/aftercare.json");
        then.status(200).json_body(serde_json::json!([
            {"title": "Day 1", "text": "Keep the wrap on for a few hours."},
            {"title": "Week 1", "text": "Wash gently, moisturize thinly."}
        ]));
    });
    let gallery_mock = server.mock(|when, then| {
        when.method(GET).path("/content/gallery/index.json");
        then.status(200).json_body(serde_json::json!([
            {"src": "/img/a.jpg", "alt": "Fine line sleeve"},
            {"src": "/img/b.jpg"}
        ]));
    });

    let loader = ResourceLoader::new();
    let mut content = ContentModel::load(&loader, &server.base_url());
    let snapshot = content.settled().await;

    site_mock.assert();
    pricing_mock.assert();
    faq_mock.assert();
    aftercare_mock.assert();
    gallery_mock.assert();

    assert_eq!(snapshot.site.artist_name, "Ink & Iron");
    assert_eq!(snapshot.site.booking_url, "https://cal.example.com/inkiron");
    // tiktokUrl was absent from the payload: per-field default applies.
    assert_eq!(snapshot.site.tiktok_url, "");

    assert_eq!(snapshot.pricing.len(), 2);
    assert_eq!(
        snapshot.pricing[1].includes,
        vec!["Consultation", "Custom design", "Touch-up"]
    );
    assert!(snapshot.pricing[1].featured);

    assert_eq!(snapshot.faq.len(), 1);
    assert_eq!(snapshot.aftercare.len(), 2);

    assert_eq!(snapshot.gallery.len(), 2);
    assert_eq!(
        snapshot.gallery[0],
        GalleryImage {
            src: "/img/a.jpg".to_string(),
            alt: Some("Fine line sleeve".to_string()),
        }
    );
    assert_eq!(snapshot.gallery[1].alt, None);

    Ok(())
}

#[tokio::test]
async fn test_failed_loads_fall_back_per_section() {
    let server = MockServer::start();

    // site.json: server error -> defaults.
    server.mock(|when, then| {
        when.method(GET).path("/content/site.json");
        then.status(500);
    });
    // pricing.json: malformed payload -> empty.
    server.mock(|when, then| {
        when.method(GET).path("/content/pricing.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{not valid json");
    });
    // faq.json: wrong shape -> empty.
    server.mock(|when, then| {
        when.method(GET).path("/content/faq.json");
        then.status(200).json_body(serde_json::json!({"q": "not a list"}));
    });
    // aftercare.json healthy; gallery left unmatched (404).
    let aftercare_mock = server.mock(|when, then| {
        when.method(GET).path("/content/aftercare.json");
        then.status(200).json_body(serde_json::json!([
            {"title": "Day 1", "text": "Keep the wrap on."}
        ]));
    });

    let loader = ResourceLoader::new();
    let mut content = ContentModel::load(&loader, &server.base_url());
    let snapshot = content.settled().await;

    aftercare_mock.assert();

    // Failures degrade to their declared fallback, section by section.
    assert_eq!(snapshot.site.artist_name, site_defaults::ARTIST_NAME);
    assert_eq!(snapshot.site.email, site_defaults::EMAIL);
    assert!(snapshot.pricing.is_empty());
    assert!(snapshot.faq.is_empty());
    assert!(snapshot.gallery.is_empty());
    // The healthy section is unaffected by its neighbors failing.
    assert_eq!(snapshot.aftercare.len(), 1);
}

#[tokio::test]
async fn test_unreachable_host_yields_full_fallback_view() {
    // Nothing listens here; every fetch fails at the transport level.
    let loader = ResourceLoader::new();
    let mut content = ContentModel::load(&loader, "http://127.0.0.1:9");
    let snapshot = content.settled().await;

    assert_eq!(snapshot.site.artist_name, site_defaults::ARTIST_NAME);
    assert_eq!(snapshot.site.phone, site_defaults::PHONE);
    assert_eq!(snapshot.site.booking_url, "");
    assert!(snapshot.pricing.is_empty());
    assert!(snapshot.faq.is_empty());
    assert!(snapshot.aftercare.is_empty());
    assert!(snapshot.gallery.is_empty());
}

#[tokio::test]
async fn test_partial_site_json_is_merged_field_by_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/content/site.json");
        then.status(200).json_body(serde_json::json!({
            "artistName": "Ink & Iron",
            "instagramUrl": "https://instagram.com/inkiron"
        }));
    });

    let loader = ResourceLoader::new();
    let mut content = ContentModel::load(&loader, &server.base_url());
    let snapshot = content.settled().await;

    assert_eq!(snapshot.site.artist_name, "Ink & Iron");
    assert_eq!(snapshot.site.instagram_url, "https://instagram.com/inkiron");
    assert_eq!(snapshot.site.tagline, site_defaults::TAGLINE);
    assert_eq!(snapshot.site.email, site_defaults::EMAIL);
}

#[tokio::test]
async fn test_snapshot_shows_fallback_until_fetch_settles() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/content/gallery/index.json");
        then.status(200)
            .delay(Duration::from_millis(250))
            .json_body(serde_json::json!([{"src": "/img/a.jpg"}]));
    });

    let loader = ResourceLoader::new();
    let mut content = ContentModel::load(&loader, &server.base_url());

    // The slow gallery fetch does not block the early snapshot.
    let early = content.snapshot();
    assert!(early.gallery.is_empty());

    let settled = content.settled().await;
    assert_eq!(settled.gallery.len(), 1);
}
