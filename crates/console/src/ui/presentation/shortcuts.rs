//! Keyboard shortcut mapping for the moderation views.
//!
//! Kept as pure functions so the bindings are testable without a DOM.

use dioxus::prelude::Key;

/// What a key press on the detail view should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Approve,
    OpenRejectDialog,
    OpenChangesDialog,
    PrevAd,
    NextAd,
}

/// Detail-view bindings: `a` approve, `d` reject, `r` request changes,
/// arrows move between neighbouring ads.
pub fn item_shortcut(key: &Key) -> Option<ShortcutAction> {
    match key {
        Key::Character(c) => match c.to_lowercase().as_str() {
            "a" => Some(ShortcutAction::Approve),
            "d" => Some(ShortcutAction::OpenRejectDialog),
            "r" => Some(ShortcutAction::OpenChangesDialog),
            _ => None,
        },
        Key::ArrowLeft => Some(ShortcutAction::PrevAd),
        Key::ArrowRight => Some(ShortcutAction::NextAd),
        _ => None,
    }
}

/// List-view binding: `/` jumps to the search field
pub fn wants_search_focus(key: &Key) -> bool {
    matches!(key, Key::Character(c) if c == "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(s: &str) -> Key {
        Key::Character(s.to_string())
    }

    #[test]
    fn letter_keys_map_case_insensitively() {
        assert_eq!(item_shortcut(&ch("a")), Some(ShortcutAction::Approve));
        assert_eq!(item_shortcut(&ch("A")), Some(ShortcutAction::Approve));
        assert_eq!(item_shortcut(&ch("d")), Some(ShortcutAction::OpenRejectDialog));
        assert_eq!(item_shortcut(&ch("r")), Some(ShortcutAction::OpenChangesDialog));
        assert_eq!(item_shortcut(&ch("x")), None);
    }

    #[test]
    fn arrows_navigate_between_ads() {
        assert_eq!(item_shortcut(&Key::ArrowLeft), Some(ShortcutAction::PrevAd));
        assert_eq!(item_shortcut(&Key::ArrowRight), Some(ShortcutAction::NextAd));
        assert_eq!(item_shortcut(&Key::ArrowUp), None);
    }

    #[test]
    fn slash_focuses_search() {
        assert!(wants_search_focus(&ch("/")));
        assert!(!wants_search_focus(&ch("a")));
        assert!(!wants_search_focus(&Key::Enter));
    }
}
