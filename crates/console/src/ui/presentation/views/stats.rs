//! Moderation statistics: summary cards plus three SVG charts.

use dioxus::prelude::*;

use crate::ui::presentation::charts::{
    self, COLOR_APPROVED, COLOR_CHANGES, COLOR_REJECTED,
};
use crate::ui::presentation::services::use_services;
use modera_domain::{ActivityPoint, CategoryCounts, DecisionBreakdown, StatsSummary};

const LINE_WIDTH: f64 = 560.0;
const LINE_HEIGHT: f64 = 180.0;
const PIE_RADIUS: f64 = 90.0;
const BAR_WIDTH: f64 = 560.0;
const BAR_HEIGHT: f64 = 180.0;

#[component]
pub fn StatsView() -> Element {
    let services = use_services();

    let stats = services.stats.clone();
    let summary = use_resource(move || {
        let stats = stats.clone();
        async move { stats.summary().await }
    });
    let stats = services.stats.clone();
    let activity = use_resource(move || {
        let stats = stats.clone();
        async move { stats.activity().await }
    });
    let stats = services.stats.clone();
    let decisions = use_resource(move || {
        let stats = stats.clone();
        async move { stats.decisions().await }
    });
    let stats = services.stats.clone();
    let categories = use_resource(move || {
        let stats = stats.clone();
        async move { stats.categories().await }
    });

    let summary_section = match &*summary.read() {
        None => rsx! { div { class: "card skeleton h-24" } },
        Some(Err(e)) => rsx! { StatsError { message: e.to_string() } },
        Some(Ok(summary)) => {
            let summary = summary.clone();
            rsx! { SummaryCards { summary } }
        }
    };
    let activity_section = match &*activity.read() {
        None => rsx! { div { class: "card skeleton h-56" } },
        Some(Err(e)) => rsx! { StatsError { message: e.to_string() } },
        Some(Ok(points)) => {
            let points = points.clone();
            rsx! { ActivityChart { points } }
        }
    };
    let decisions_section = match &*decisions.read() {
        None => rsx! { div { class: "card skeleton h-56" } },
        Some(Err(e)) => rsx! { StatsError { message: e.to_string() } },
        Some(Ok(breakdown)) => {
            let breakdown = breakdown.clone();
            rsx! { DecisionsChart { breakdown } }
        }
    };
    let categories_section = match &*categories.read() {
        None => rsx! { div { class: "card skeleton h-56" } },
        Some(Err(e)) => rsx! { StatsError { message: e.to_string() } },
        Some(Ok(counts)) => {
            let counts = counts.clone();
            rsx! { CategoriesChart { counts } }
        }
    };

    rsx! {
        div { class: "flex flex-col gap-4",
            span { class: "text-xl font-semibold", "Статистика модерации" }
            {summary_section}
            div { class: "grid gap-4 lg:grid-cols-2",
                {activity_section}
                {decisions_section}
            }
            {categories_section}
        }
    }
}

#[component]
fn StatsError(message: String) -> Element {
    rsx! {
        div { class: "alert alert-error", "Не удалось загрузить статистику: {message}" }
    }
}

#[component]
fn SummaryCards(summary: StatsSummary) -> Element {
    let cards = [
        ("Всего проверено", summary.total_reviewed),
        ("Сегодня", summary.total_reviewed_today),
        ("За неделю", summary.total_reviewed_this_week),
        ("За месяц", summary.total_reviewed_this_month),
    ];

    rsx! {
        div { class: "grid gap-4 md:grid-cols-4",
            for (label, value) in cards {
                div { key: "{label}", class: "card p-4 flex flex-col gap-1",
                    span { class: "text-sm text-muted", "{label}" }
                    span { class: "text-2xl font-semibold", "{value}" }
                }
            }
        }
    }
}

#[component]
fn ActivityChart(points: Vec<ActivityPoint>) -> Element {
    let approved: Vec<u64> = points.iter().map(|p| p.approved).collect();
    let rejected: Vec<u64> = points.iter().map(|p| p.rejected).collect();
    let changes: Vec<u64> = points.iter().map(|p| p.request_changes).collect();
    let max = approved
        .iter()
        .chain(&rejected)
        .chain(&changes)
        .copied()
        .max()
        .unwrap_or(0);
    let approved_pts = charts::polyline_points(&approved, max, LINE_WIDTH, LINE_HEIGHT);
    let rejected_pts = charts::polyline_points(&rejected, max, LINE_WIDTH, LINE_HEIGHT);
    let changes_pts = charts::polyline_points(&changes, max, LINE_WIDTH, LINE_HEIGHT);
    let first_day = points.first().map(|p| p.date.clone()).unwrap_or_default();
    let last_day = points.last().map(|p| p.date.clone()).unwrap_or_default();

    rsx! {
        div { class: "card p-4 flex flex-col gap-3",
            span { class: "font-medium", "Активность по дням" }
            svg {
                view_box: "0 0 {LINE_WIDTH} {LINE_HEIGHT}",
                preserve_aspect_ratio: "none",
                class: "chart",
                polyline { points: "{approved_pts}", fill: "none", stroke: COLOR_APPROVED, stroke_width: "2" }
                polyline { points: "{rejected_pts}", fill: "none", stroke: COLOR_REJECTED, stroke_width: "2" }
                polyline { points: "{changes_pts}", fill: "none", stroke: COLOR_CHANGES, stroke_width: "2" }
            }
            div { class: "flex justify-between text-sm text-muted",
                span { "{first_day}" }
                span { "{last_day}" }
            }
            ChartLegend {}
        }
    }
}

#[component]
fn ChartLegend() -> Element {
    rsx! {
        div { class: "flex gap-4 text-sm",
            span { class: "legend-dot legend-green", "Одобрено" }
            span { class: "legend-dot legend-red", "Отклонено" }
            span { class: "legend-dot legend-amber", "Изменения" }
        }
    }
}

#[component]
fn DecisionsChart(breakdown: DecisionBreakdown) -> Element {
    let total = breakdown.total();
    let values = [
        breakdown.approved,
        breakdown.rejected,
        breakdown.request_changes,
    ];
    let colors = [COLOR_APPROVED, COLOR_REJECTED, COLOR_CHANGES];
    let slices: Vec<(charts::PieSlice, &str)> = charts::pie_slices(&values, PIE_RADIUS)
        .into_iter()
        .zip(
            values
                .iter()
                .zip(colors)
                .filter(|(v, _)| **v > 0)
                .map(|(_, c)| c),
        )
        .collect();
    let size = PIE_RADIUS * 2.0;
    let legend = [
        ("Одобрено", breakdown.approved, COLOR_APPROVED),
        ("Отклонено", breakdown.rejected, COLOR_REJECTED),
        ("Изменения", breakdown.request_changes, COLOR_CHANGES),
    ];

    rsx! {
        div { class: "card p-4 flex flex-col gap-3",
            span { class: "font-medium", "Решения" }
            if total == 0 {
                span { class: "text-sm text-muted", "Данных пока нет" }
            } else {
                div { class: "flex items-center gap-6",
                    svg {
                        view_box: "0 0 {size} {size}",
                        class: "chart chart-pie",
                        for (i, (slice, color)) in slices.into_iter().enumerate() {
                            path { key: "{i}", d: "{slice.path}", fill: "{color}" }
                        }
                    }
                    div { class: "flex flex-col gap-1 text-sm",
                        for (label, value, color) in legend {
                            {
                                let share = charts::percent(value, total);
                                rsx! {
                                    span { key: "{label}",
                                        span { class: "legend-swatch", style: "background:{color}", "" }
                                        " {label}: {value} ({share}%)"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoriesChart(counts: CategoryCounts) -> Element {
    let labels: Vec<String> = counts.keys().cloned().collect();
    let values: Vec<u64> = counts.values().copied().collect();
    let bars = charts::bar_rects(&values, BAR_WIDTH, BAR_HEIGHT);

    rsx! {
        div { class: "card p-4 flex flex-col gap-3",
            span { class: "font-medium", "По категориям" }
            if bars.is_empty() {
                span { class: "text-sm text-muted", "Данных пока нет" }
            } else {
                svg {
                    view_box: "0 0 {BAR_WIDTH} {BAR_HEIGHT}",
                    preserve_aspect_ratio: "none",
                    class: "chart",
                    for (i, bar) in bars.into_iter().enumerate() {
                        rect {
                            key: "{i}",
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: COLOR_APPROVED,
                        }
                    }
                }
                div { class: "flex justify-between text-sm text-muted",
                    for (label, value) in labels.into_iter().zip(values) {
                        span { key: "{label}", "{label} ({value})" }
                    }
                }
            }
        }
    }
}
