//! Reason dialog shared by reject and request-changes.
//!
//! The confirm button stays disabled until a reason is picked; the comment
//! is optional. Field state lives in the parent so settlement can clear it
//! no matter how the submission ended.

use dioxus::prelude::*;

use crate::application::services::REASON_PRESETS;

#[component]
pub fn DecisionDialog(
    title: String,
    confirm_label: String,
    pending: bool,
    mut reason: Signal<String>,
    mut comment: Signal<String>,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let confirm_disabled = pending || reason().trim().is_empty();

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog card p-4 flex flex-col gap-3",
                span { class: "text-lg font-semibold", "{title}" }
                label { class: "text-sm", "Причина" }
                select {
                    class: "input",
                    value: "{reason}",
                    onchange: move |evt| reason.set(evt.value()),
                    option { value: "", "Выберите причину" }
                    for preset in REASON_PRESETS {
                        option { value: "{preset}", "{preset}" }
                    }
                }
                label { class: "text-sm", "Комментарий (необязательно)" }
                textarea {
                    class: "input",
                    rows: "3",
                    value: "{comment}",
                    oninput: move |evt| comment.set(evt.value()),
                }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "btn",
                        disabled: pending,
                        onclick: move |_| on_close.call(()),
                        "Отмена"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: confirm_disabled,
                        onclick: move |_| on_confirm.call(()),
                        if pending { "Отправка..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
