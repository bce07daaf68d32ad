//! Ad detail: full listing data, decision actions and moderation history.

use dioxus::prelude::*;

use crate::ui::presentation::components::DecisionDialog;
use crate::ui::presentation::services::{use_cache_epoch, use_services};
use crate::ui::presentation::shortcuts::{self, ShortcutAction};
use crate::ui::presentation::format;
use crate::ui::routes::Route;
use crate::ui::use_platform;
use modera_domain::{Ad, DecisionPayload, DecisionTally, ModerationAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKind {
    None,
    Reject,
    Changes,
}

#[component]
pub fn ItemView(id: ReadOnlySignal<i64>) -> Element {
    let services = use_services();
    let platform = use_platform();
    let epoch = use_cache_epoch();
    let nav = use_navigator();

    let mut dialog = use_signal(|| DialogKind::None);
    let reason = use_signal(String::new);
    let comment = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        platform.set_page_title(&format!("Объявление #{}", id()));
    });

    let ads = services.ads.clone();
    let mut ad_resource = use_resource(move || {
        let _ = epoch();
        let ad_id = id();
        let ads = ads.clone();
        async move { ads.ad(ad_id).await }
    });

    let decisions = services.decisions.clone();
    let submit = {
        let mut reason = reason;
        let mut comment = comment;
        move |action: ModerationAction| {
            if pending() {
                return;
            }
            let payload = action
                .requires_reason()
                .then(|| DecisionPayload::new(reason(), Some(comment())));
            let decisions = decisions.clone();
            let ad_id = id();
            pending.set(true);
            error.set(None);
            spawn(async move {
                match decisions.submit(ad_id, action, payload).await {
                    Ok(_) => dialog.set(DialogKind::None),
                    // The dialog stays open for a manual retry; the typed
                    // fields still clear below, settlement wipes them on
                    // success and failure alike.
                    Err(e) => error.set(Some(e.to_string())),
                }
                pending.set(false);
                reason.set(String::new());
                comment.set(String::new());
            });
        }
    };

    let on_keydown = {
        let mut submit = submit.clone();
        move |evt: KeyboardEvent| {
            let Some(action) = shortcuts::item_shortcut(&evt.key()) else {
                return;
            };
            let eligibility = match &*ad_resource.read() {
                Some(Ok(ad)) => Some((ad.can_approve(), ad.can_reject())),
                _ => None,
            };
            match action {
                ShortcutAction::Approve => {
                    if matches!(eligibility, Some((true, _))) && !pending() {
                        submit(ModerationAction::Approved);
                    }
                }
                ShortcutAction::OpenRejectDialog => {
                    if matches!(eligibility, Some((_, true))) && !pending() {
                        dialog.set(DialogKind::Reject);
                    }
                }
                ShortcutAction::OpenChangesDialog => {
                    if eligibility.is_some() && !pending() {
                        dialog.set(DialogKind::Changes);
                    }
                }
                ShortcutAction::PrevAd => {
                    let current = id();
                    if current > 1 {
                        nav.push(Route::ItemRoute { id: current - 1 });
                    }
                }
                ShortcutAction::NextAd => {
                    nav.push(Route::ItemRoute { id: id() + 1 });
                }
            }
        }
    };

    let content = match &*ad_resource.read() {
        None => rsx! { div { class: "card skeleton h-96" } },
        Some(Err(e)) => {
            let message = e.to_string();
            rsx! {
                div { class: "alert alert-error flex items-center gap-3",
                    span { "Не удалось загрузить объявление: {message}" }
                    button { class: "btn", onclick: move |_| ad_resource.restart(), "Повторить" }
                }
            }
        }
        Some(Ok(ad)) => {
            let ad = ad.clone();
            let mut approve = submit.clone();
            let approve_disabled = !ad.can_approve() || pending();
            let reject_disabled = !ad.can_reject() || pending();
            let changes_disabled = !ad.can_request_changes() || pending();
            rsx! {
                AdHeader { ad: ad.clone() }
                div { class: "flex flex-wrap gap-2",
                    button {
                        class: "btn btn-success",
                        disabled: approve_disabled,
                        onclick: move |_| approve(ModerationAction::Approved),
                        "Одобрить (A)"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: reject_disabled,
                        onclick: move |_| dialog.set(DialogKind::Reject),
                        "Отклонить (D)"
                    }
                    button {
                        class: "btn btn-warning",
                        disabled: changes_disabled,
                        onclick: move |_| dialog.set(DialogKind::Changes),
                        "Запросить изменения (R)"
                    }
                }
                AdDetails { ad: ad.clone() }
                HistoryPanel { ad }
            }
        }
    };

    let submit_reject = {
        let mut submit = submit.clone();
        move |_| submit(ModerationAction::Rejected)
    };
    let submit_changes = {
        let mut submit = submit.clone();
        move |_| submit(ModerationAction::RequestChanges)
    };
    let prev_disabled = id() <= 1;

    rsx! {
        div { class: "flex flex-col gap-4", tabindex: "0", autofocus: true, onkeydown: on_keydown,
            div { class: "flex items-center gap-2",
                button {
                    class: "btn",
                    disabled: prev_disabled,
                    onclick: move |_| {
                        let current = id();
                        if current > 1 {
                            nav.push(Route::ItemRoute { id: current - 1 });
                        }
                    },
                    "Предыдущее"
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        nav.push(Route::ItemRoute { id: id() + 1 });
                    },
                    "Следующее"
                }
                span { class: "text-sm text-muted ml-auto",
                    "Горячие клавиши: A — одобрить, D — отклонить, R — изменения"
                }
            }
            if let Some(message) = error() {
                div { class: "alert alert-error",
                    "Не удалось выполнить действие: {message}"
                }
            }
            {content}
            if dialog() == DialogKind::Reject {
                DecisionDialog {
                    title: "Отклонить объявление",
                    confirm_label: "Отклонить",
                    pending: pending(),
                    reason,
                    comment,
                    on_confirm: submit_reject,
                    on_close: move |_| dialog.set(DialogKind::None),
                }
            }
            if dialog() == DialogKind::Changes {
                DecisionDialog {
                    title: "Запросить изменения",
                    confirm_label: "Отправить",
                    pending: pending(),
                    reason,
                    comment,
                    on_confirm: submit_changes,
                    on_close: move |_| dialog.set(DialogKind::None),
                }
            }
        }
    }
}

#[component]
fn AdHeader(ad: Ad) -> Element {
    let price = format::format_price(ad.price);
    let status_label = format::status_label(ad.status);
    let status_class = format::status_class(ad.status);

    rsx! {
        div { class: "flex items-start gap-4",
            div { class: "flex flex-col gap-1",
                span { class: "text-xl font-semibold", "{ad.title}" }
                span { class: "text-sm text-muted", "{ad.category} · №{ad.id}" }
            }
            div { class: "ml-auto flex items-center gap-2",
                span { class: "{status_class}", "{status_label}" }
                if let Some(urgent) = format::priority_label(ad.priority) {
                    span { class: "chip chip-red", "{urgent}" }
                }
                span { class: "text-xl font-semibold", "{price}" }
            }
        }
    }
}

#[component]
fn AdDetails(ad: Ad) -> Element {
    let images = ad.images.clone().unwrap_or_default();
    let registered = format::format_date(ad.seller.registered_at);

    rsx! {
        div { class: "grid gap-4 lg:grid-cols-3",
            div { class: "card p-4 flex flex-col gap-3 lg:col-span-2",
                if !images.is_empty() {
                    div { class: "flex gap-2 overflow-x-auto",
                        for (i, src) in images.into_iter().enumerate() {
                            img { key: "{i}", class: "detail-image", src: "{src}", alt: "{ad.title}" }
                        }
                    }
                }
                span { class: "font-medium", "Описание" }
                p { class: "whitespace-pre-wrap", "{ad.description}" }
                if !ad.characteristics.is_empty() {
                    span { class: "font-medium", "Характеристики" }
                    table { class: "detail-table",
                        tbody {
                            for (name, value) in ad.characteristics.clone() {
                                tr { key: "{name}",
                                    td { class: "text-muted", "{name}" }
                                    td { "{value}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "card p-4 flex flex-col gap-2",
                span { class: "font-medium", "Продавец" }
                span { "{ad.seller.name}" }
                span { class: "text-sm text-muted", "Рейтинг: {ad.seller.rating}" }
                span { class: "text-sm text-muted", "Объявлений: {ad.seller.total_ads}" }
                span { class: "text-sm text-muted", "На площадке с {registered}" }
            }
        }
    }
}

#[component]
fn HistoryPanel(ad: Ad) -> Element {
    let tally = DecisionTally::from_history(&ad.moderation_history);
    let last_change = tally.last_change.map(format::format_datetime);
    let groups = format::group_history_by_day(&ad.moderation_history);

    rsx! {
        div { class: "card p-4 flex flex-col gap-3",
            div { class: "flex items-center gap-3",
                span { class: "font-medium", "История модерации" }
                span { class: "chip chip-gray", "Всего: {tally.total}" }
                span { class: "chip chip-green", "Одобрений: {tally.approved}" }
                span { class: "chip chip-red", "Отклонений: {tally.rejected}" }
                span { class: "chip chip-amber", "Изменений: {tally.request_changes}" }
                if let Some(ts) = last_change {
                    span { class: "text-sm text-muted ml-auto", "Последнее решение: {ts}" }
                }
            }
            if groups.is_empty() {
                span { class: "text-sm text-muted", "Решений пока нет" }
            }
            for (day, records) in groups {
                div { key: "{day}", class: "flex flex-col gap-2",
                    span { class: "text-sm font-medium text-muted", "{day}" }
                    for record in records {
                        {
                            let action_label = format::action_label(record.action);
                            let action_class = format::action_class(record.action);
                            let time = record.timestamp.format("%H:%M").to_string();
                            rsx! {
                                div { key: "{record.id}", class: "history-row flex items-start gap-3",
                                    span { class: "{action_class}", "{action_label}" }
                                    div { class: "flex flex-col",
                                        span { "{record.moderator_name}" }
                                        if let Some(reason) = record.reason.clone() {
                                            span { class: "text-sm", "Причина: {reason}" }
                                        }
                                        if let Some(comment) = record.comment.clone() {
                                            span { class: "text-sm text-muted", "{comment}" }
                                        }
                                    }
                                    span { class: "text-sm text-muted ml-auto", "{time}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
