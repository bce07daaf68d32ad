//! Console shell: header with navigation and theme toggle around every view.

use dioxus::prelude::*;

use crate::application::dto::ListQuery;
use crate::application::services::ThemeMode;
use crate::ui::presentation::services::use_services;
use crate::ui::presentation::state::ThemeState;
use crate::ui::routes::Route;

#[component]
pub fn ConsoleShell() -> Element {
    let services = use_services();
    let mut theme = use_context::<ThemeState>();
    let route = use_route::<Route>();

    let list_active = matches!(route, Route::ListRoute { .. } | Route::ItemRoute { .. });
    let stats_active = matches!(route, Route::StatsRoute {});
    let list_class = if list_active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    };
    let stats_class = if stats_active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    };
    let shell_class = match theme.mode() {
        ThemeMode::Light => "app-shell theme-light",
        ThemeMode::Dark => "app-shell theme-dark",
    };
    let theme_toggle_label = match theme.mode() {
        ThemeMode::Light => "Тёмная тема",
        ThemeMode::Dark => "Светлая тема",
    };

    rsx! {
        div { class: "{shell_class} min-h-screen flex flex-col",
            header { class: "app-header flex items-center gap-6 px-6 py-3 border-b",
                span { class: "text-lg font-semibold", "Модерация объявлений" }
                nav { class: "flex items-center gap-4",
                    Link {
                        class: "{list_class}",
                        to: Route::ListRoute { query: ListQuery::default() },
                        "СПИСОК"
                    }
                    Link {
                        class: "{stats_class}",
                        to: Route::StatsRoute {},
                        "СТАТИСТИКА"
                    }
                }
                button {
                    class: "nav-link ml-auto",
                    onclick: move |_| {
                        let next = theme.toggle();
                        services.preferences.set_theme(next);
                    },
                    "{theme_toggle_label}"
                }
            }
            main { class: "flex-1 px-6 py-4",
                Outlet::<Route> {}
            }
        }
    }
}
