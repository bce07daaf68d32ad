//! Display formatting helpers for the Russian-language UI.

use chrono::{DateTime, Utc};

use modera_domain::{AdPriority, AdStatus, DecisionRecord, ModerationAction};

/// Price with thousands separators and the ruble sign, e.g. `65 000 ₽`
pub fn format_price(price: i64) -> String {
    let negative = price < 0;
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped} ₽")
    } else {
        format!("{grouped} ₽")
    }
}

/// `dd.mm.yyyy`
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y").to_string()
}

/// `dd.mm.yyyy hh:mm`
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

pub fn status_label(status: AdStatus) -> &'static str {
    match status {
        AdStatus::Pending => "Ожидает",
        AdStatus::Approved => "Одобрено",
        AdStatus::Rejected => "Отклонено",
        AdStatus::Draft => "Черновик",
    }
}

pub fn status_class(status: AdStatus) -> &'static str {
    match status {
        AdStatus::Pending => "chip chip-amber",
        AdStatus::Approved => "chip chip-green",
        AdStatus::Rejected => "chip chip-red",
        AdStatus::Draft => "chip chip-gray",
    }
}

pub fn action_label(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Approved => "Одобрено",
        ModerationAction::Rejected => "Отклонено",
        ModerationAction::RequestChanges => "Запрошены изменения",
    }
}

pub fn action_class(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Approved => "chip chip-green",
        ModerationAction::Rejected => "chip chip-red",
        ModerationAction::RequestChanges => "chip chip-amber",
    }
}

/// Chip text for the priority, shown only for urgent listings
pub fn priority_label(priority: AdPriority) -> Option<&'static str> {
    match priority {
        AdPriority::Urgent => Some("Срочно"),
        AdPriority::Normal => None,
    }
}

/// Group a newest-first history into per-day sections, order preserved.
///
/// Returns `(day label, records of that day)` pairs, newest day first.
pub fn group_history_by_day(history: &[DecisionRecord]) -> Vec<(String, Vec<DecisionRecord>)> {
    let mut groups: Vec<(String, Vec<DecisionRecord>)> = Vec::new();
    for record in history {
        let day = format_date(record.timestamp);
        match groups.last_mut() {
            Some((current, records)) if *current == day => records.push(record.clone()),
            _ => groups.push((day, vec![record.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prices_get_thousands_separators() {
        assert_eq!(format_price(65000), "65 000 ₽");
        assert_eq!(format_price(999), "999 ₽");
        assert_eq!(format_price(1_234_567), "1 234 567 ₽");
        assert_eq!(format_price(0), "0 ₽");
    }

    #[test]
    fn dates_use_russian_order() {
        let ts = Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0).single().expect("ts");
        assert_eq!(format_date(ts), "02.11.2025");
        assert_eq!(format_datetime(ts), "02.11.2025 10:00");
    }

    #[test]
    fn history_groups_split_on_day_change() {
        let record = |day: u32, hour: u32| DecisionRecord {
            id: i64::from(day * 100 + hour),
            moderator_name: "Вы".to_string(),
            action: ModerationAction::Approved,
            reason: None,
            comment: None,
            timestamp: Utc
                .with_ymd_and_hms(2025, 11, day, hour, 0, 0)
                .single()
                .expect("ts"),
        };
        // Newest first, two records on the 2nd and one on the 1st.
        let history = vec![record(2, 15), record(2, 9), record(1, 18)];
        let groups = group_history_by_day(&history);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "02.11.2025");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "01.11.2025");
        assert_eq!(groups[1].1.len(), 1);
    }
}
