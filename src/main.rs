use clap::Parser;
use sawa_site::core::submission::select_strategy;
use sawa_site::utils::{logger, validation::Validate};
use sawa_site::{
    compose, AppConfig, BookingController, BookingView, CliConfig, ContentModel, ResourceLoader,
    TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting sawa-site page load");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A TOML file wins over flags when provided.
    let config: Box<dyn AppConfig> = match &cli.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(file_config)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(cli.clone())
        }
    };

    // Kick off the five content fetches, wait until they settle, compose.
    let loader = ResourceLoader::new();
    let mut content = ContentModel::load(&loader, config.content_base_url());
    let snapshot = content.settled().await;
    let page = compose(&snapshot);

    tracing::info!("✅ Page composed for {}", snapshot.site.artist_name);
    for section in &page.sections {
        tracing::info!("📄 Section {}: {} item(s)", section.label(), section.item_count());
    }
    println!("✅ Page composed with {} sections", page.sections.len());

    // Walk the booking modal once to show which path a visitor would take.
    let strategy = select_strategy(config.relay_endpoint());
    let mut booking = BookingController::new(
        snapshot.site.booking_url.clone(),
        snapshot.site.email.clone(),
        strategy,
    );
    booking.request_open();
    match booking.view() {
        Some(BookingView::Calendar { url }) => {
            tracing::info!("📅 Booking opens the calendar embed at {}", url);
        }
        Some(BookingView::Form) => {
            if config.relay_endpoint().is_empty() {
                tracing::info!("📝 Booking uses the local form (simulated acknowledgment)");
            } else {
                tracing::info!(
                    "📝 Booking uses the local form, relayed to {}",
                    config.relay_endpoint()
                );
            }
        }
        None => {}
    }
    booking.request_close();

    Ok(())
}
