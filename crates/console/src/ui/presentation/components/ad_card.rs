//! One ad in the list grid.

use dioxus::prelude::*;

use crate::ui::presentation::format;
use crate::ui::routes::Route;
use modera_domain::AdSummary;

#[component]
pub fn AdCard(ad: AdSummary) -> Element {
    let price = format::format_price(ad.price);
    let created = ad.created_at.map(format::format_date);
    let status_label = format::status_label(ad.status);
    let status_class = format::status_class(ad.status);
    let first_image = ad
        .images
        .as_ref()
        .and_then(|images| images.first())
        .cloned();

    rsx! {
        div { class: "card flex flex-col gap-2 p-4",
            if let Some(src) = first_image {
                img { class: "card-image", src: "{src}", alt: "{ad.title}" }
            } else {
                div { class: "card-image card-image-placeholder", "Нет фото" }
            }
            div { class: "flex items-center gap-2",
                span { class: "{status_class}", "{status_label}" }
                if let Some(urgent) = format::priority_label(ad.priority) {
                    span { class: "chip chip-red", "{urgent}" }
                }
            }
            span { class: "font-medium", "{ad.title}" }
            span { class: "text-sm text-muted", "{ad.category}" }
            if let Some(date) = created {
                span { class: "text-sm text-muted", "{date}" }
            }
            div { class: "flex items-center justify-between mt-auto",
                span { class: "font-semibold", "{price}" }
                Link {
                    class: "link",
                    to: Route::ItemRoute { id: ad.id },
                    "Открыть"
                }
            }
        }
    }
}
