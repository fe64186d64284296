//! Agricultural IoT dashboard
//!
//! Serves the server-rendered UI natively and hydrates it in the browser.

fn main() {
    #[cfg(feature = "server")]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        // Initialize logging. Dioxus may already have installed a subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "agri_dashboard=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();

        tracing::info!("Starting agri-dashboard v{}", env!("CARGO_PKG_VERSION"));

        match agri_dashboard::config::load_config() {
            Ok(config) => {
                tracing::info!(?config, "Configuration loaded");
                // The Dioxus server binds to $PORT
                let existing = std::env::var("PORT").ok();
                if let Some(port) = config.launch_port(existing.as_deref()) {
                    std::env::set_var("PORT", &port);
                }
                tracing::info!(
                    "Listening on port {}",
                    std::env::var("PORT").unwrap_or_else(|_| config.port.to_string())
                );
            }
            Err(e) => tracing::warn!("Failed to load configuration, using defaults: {}", e),
        }
        tracing::info!("API base URL: {}", agri_dashboard::config::api_base_url());
    }

    dioxus::launch(agri_dashboard::app::App);
}
