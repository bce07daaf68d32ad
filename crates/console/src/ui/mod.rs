use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Services and platform are provided by the composition root
    // (see `src/main.rs`).
    let services = use_context::<presentation::Services>();

    // These must be created inside an active Dioxus runtime.
    let mut theme = use_context_provider(presentation::state::ThemeState::new);

    // Pick up the persisted theme once at startup.
    use_hook(move || {
        theme.set(services.preferences.theme());
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
