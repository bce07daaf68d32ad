//! Filtered, paginated ad list.
//!
//! The address bar is the source of truth: the filter form edits a local
//! draft, and applying it navigates to a new URL. The view itself only
//! renders what the current URL says.

use dioxus::prelude::*;

use crate::application::dto::{ListFilters, ListQuery, SortField, SortOrder};
use crate::ui::presentation::components::AdCard;
use crate::ui::presentation::services::{use_cache_epoch, use_services};
use crate::ui::presentation::{format, shortcuts};
use crate::ui::routes::Route;
use modera_domain::AdStatus;

const STATUS_CHOICES: [AdStatus; 4] = [
    AdStatus::Pending,
    AdStatus::Approved,
    AdStatus::Rejected,
    AdStatus::Draft,
];

#[component]
pub fn ListView(query: ReadOnlySignal<ListQuery>) -> Element {
    let services = use_services();
    let epoch = use_cache_epoch();
    let nav = use_navigator();

    // Local draft of the filter form; navigation re-seeds it from the URL.
    let mut draft = use_signal(|| query().filters.clone());
    use_effect(move || {
        draft.set(query().filters.clone());
    });

    let ads = services.ads.clone();
    let mut page_resource = use_resource(move || {
        // Subscribe to cache changes so invalidations trigger a re-read.
        let _ = epoch();
        let q = query();
        let ads = ads.clone();
        async move { ads.page(&q).await }
    });

    let apply_filters = move |_| {
        nav.push(Route::ListRoute {
            query: ListQuery::with_filters(draft()),
        });
    };
    let reset_filters = move |_| {
        nav.push(Route::ListRoute {
            query: ListQuery::reset(),
        });
    };
    let on_keydown = move |evt: KeyboardEvent| {
        if shortcuts::wants_search_focus(&evt.key()) {
            evt.prevent_default();
            dioxus::document::eval("document.getElementById('ads-search')?.focus()");
        }
    };

    let results = match &*page_resource.read() {
        None => rsx! { ListSkeleton {} },
        Some(Err(e)) => {
            let message = e.to_string();
            rsx! {
                div { class: "alert alert-error flex items-center gap-3",
                    span { "Не удалось загрузить объявления: {message}" }
                    button { class: "btn", onclick: move |_| page_resource.restart(), "Повторить" }
                }
            }
        }
        Some(Ok(page)) => {
            let shown = page.ads.len();
            let total = page.pagination.total_items;
            let ads = page.ads.clone();
            let current_page = page.pagination.current_page;
            let total_pages = page.pagination.total_pages;
            rsx! {
                span { class: "text-sm text-muted", "Показано {shown} из {total}" }
                if ads.is_empty() {
                    div { class: "card p-8 flex flex-col items-center gap-3",
                        span { "Объявления не найдены" }
                        button {
                            class: "btn",
                            onclick: move |_| {
                                nav.push(Route::ListRoute { query: ListQuery::reset() });
                            },
                            "Сбросить фильтры"
                        }
                    }
                } else {
                    div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                        for ad in ads {
                            AdCard { key: "{ad.id}", ad }
                        }
                    }
                    Paginator { current: current_page, total: total_pages }
                }
            }
        }
    };

    rsx! {
        div { class: "flex flex-col gap-4", tabindex: "0", autofocus: true, onkeydown: on_keydown,
            FilterPanel {
                draft,
                categories: current_categories(&page_resource),
                on_apply: apply_filters,
                on_reset: reset_filters,
            }
            {results}
        }
    }
}

/// Categories for the dropdown: the ones visible on the loaded page, with
/// the currently selected one kept even when it is not on this page.
fn current_categories(
    page_resource: &Resource<Result<modera_domain::AdPage, crate::application::ServiceError>>,
) -> Vec<String> {
    match &*page_resource.read() {
        Some(Ok(page)) => page.categories(),
        _ => Vec::new(),
    }
}

#[component]
fn FilterPanel(
    mut draft: Signal<ListFilters>,
    categories: Vec<String>,
    on_apply: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let selected_category = draft().category;
    let category_missing =
        !selected_category.is_empty() && !categories.contains(&selected_category);
    let min_price = draft().min_price.map(|v| v.to_string()).unwrap_or_default();
    let max_price = draft().max_price.map(|v| v.to_string()).unwrap_or_default();

    rsx! {
        div { class: "card p-4 flex flex-col gap-3",
            div { class: "grid gap-3 md:grid-cols-4",
                input {
                    id: "ads-search",
                    class: "input",
                    placeholder: "Поиск по названию",
                    value: "{draft().search}",
                    oninput: move |evt| draft.with_mut(|d| d.search = evt.value()),
                }
                select {
                    class: "input",
                    value: "{selected_category}",
                    onchange: move |evt| draft.with_mut(|d| d.category = evt.value()),
                    option { value: "", "Все категории" }
                    if category_missing {
                        option { value: "{selected_category}", "{selected_category}" }
                    }
                    for category in categories {
                        option { value: "{category}", "{category}" }
                    }
                }
                input {
                    class: "input",
                    r#type: "number",
                    placeholder: "Цена от",
                    value: "{min_price}",
                    oninput: move |evt| draft.with_mut(|d| d.min_price = evt.value().parse().ok()),
                }
                input {
                    class: "input",
                    r#type: "number",
                    placeholder: "Цена до",
                    value: "{max_price}",
                    oninput: move |evt| draft.with_mut(|d| d.max_price = evt.value().parse().ok()),
                }
            }
            div { class: "flex flex-wrap items-center gap-3",
                for status in STATUS_CHOICES {
                    label { class: "chip chip-toggle flex items-center gap-1",
                        input {
                            r#type: "checkbox",
                            checked: draft().status.contains(&status),
                            onchange: move |_| draft.with_mut(|d| {
                                match d.status.iter().position(|s| *s == status) {
                                    Some(pos) => {
                                        d.status.remove(pos);
                                    }
                                    None => d.status.push(status),
                                }
                            }),
                        }
                        {format::status_label(status)}
                    }
                }
                select {
                    class: "input input-compact",
                    value: "{draft().sort_by.as_str()}",
                    onchange: move |evt| draft.with_mut(|d| d.sort_by = SortField::parse(&evt.value())),
                    option { value: "createdAt", "По дате" }
                    option { value: "price", "По цене" }
                    option { value: "priority", "По приоритету" }
                }
                select {
                    class: "input input-compact",
                    value: "{draft().sort_order.as_str()}",
                    onchange: move |evt| draft.with_mut(|d| d.sort_order = SortOrder::parse(&evt.value())),
                    option { value: "desc", "По убыванию" }
                    option { value: "asc", "По возрастанию" }
                }
                div { class: "ml-auto flex gap-2",
                    button { class: "btn btn-primary", onclick: move |_| on_apply.call(()), "Применить" }
                    button { class: "btn", onclick: move |_| on_reset.call(()), "Сбросить" }
                }
            }
        }
    }
}

#[component]
fn Paginator(current: u32, total: u32) -> Element {
    let nav = use_navigator();
    let query = use_route::<Route>();
    let base = match query {
        Route::ListRoute { query } => query,
        _ => ListQuery::default(),
    };

    rsx! {
        div { class: "flex items-center justify-center gap-1",
            for page in 1..=total {
                {
                    let class = if page == current {
                        "page-btn page-btn-active"
                    } else {
                        "page-btn"
                    };
                    let target = base.clone().with_page(page);
                    rsx! {
                        button {
                            class: "{class}",
                            onclick: move |_| {
                                nav.push(Route::ListRoute { query: target.clone() });
                            },
                            "{page}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ListSkeleton() -> Element {
    rsx! {
        div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
            for i in 0..6 {
                div { key: "{i}", class: "card skeleton h-48" }
            }
        }
    }
}
