//! Modera Console - unified composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modera_console::ports::outbound::{storage_keys, PlatformPort, RawApiPort};

/// Base URL of the moderation API when nothing else is configured
const DEFAULT_API_URL: &str = "http://localhost:3001";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Load MODERA_* overrides from a local .env, if present.
        dotenvy::dotenv().ok();
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "modera_console=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Modera Console");

    // Platform
    let platform = modera_console::infrastructure::platform::create_platform();

    // API base URL: env var first, then a saved override, then the default.
    let api_url = api_url_from_env()
        .or_else(|| platform.storage_load(storage_keys::API_URL))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    tracing::info!("Using moderation API at {}", api_url);

    // HTTP + cache + services
    let raw_api: Arc<dyn RawApiPort> =
        Arc::new(modera_console::infrastructure::HttpApiAdapter::new(api_url));
    let cache = Arc::new(modera_console::infrastructure::MemoryQueryCache::new());
    let services = modera_console::presentation::Services::new(raw_api, cache, &platform);

    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_console_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(services)
        .launch(modera_console::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_from_env() -> Option<String> {
    std::env::var("MODERA_API_URL").ok().filter(|v| !v.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn api_url_from_env() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn load_console_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("css")
        .join("output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
