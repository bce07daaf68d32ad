//! Route table for the console.
//!
//! The list route carries the whole filter state in its query string, so
//! every filter combination is a shareable URL and browser back/forward
//! walks through filter changes.

use dioxus::prelude::*;
use dioxus::router::routable::FromQuery;

use crate::application::dto::ListQuery;
use crate::ui::presentation::components::ConsoleShell;
use crate::ui::presentation::views::{ItemView, ListView, StatsView};

#[derive(Routable, Clone, PartialEq)]
#[allow(clippy::enum_variant_names)]
pub enum Route {
    #[layout(ConsoleShell)]
    #[redirect("/", || Route::ListRoute { query: ListQuery::default() })]
    #[route("/list?:..query")]
    ListRoute { query: ListQuery },

    #[route("/item/:id")]
    ItemRoute { id: i64 },

    #[route("/stats")]
    StatsRoute {},
}

impl FromQuery for ListQuery {
    fn from_query(query: &str) -> Self {
        ListQuery::from_query_str(query)
    }
}

#[component]
fn ListRoute(query: ListQuery) -> Element {
    rsx! { ListView { query } }
}

#[component]
fn ItemRoute(id: i64) -> Element {
    rsx! { ItemView { id } }
}

#[component]
fn StatsRoute() -> Element {
    rsx! { StatsView {} }
}
