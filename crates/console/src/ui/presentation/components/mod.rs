//! Reusable presentation components

mod ad_card;
mod decision_dialog;
mod layout;

pub use ad_card::AdCard;
pub use decision_dialog::DecisionDialog;
pub use layout::ConsoleShell;
