//! Output formatting utilities

use crate::application::Dashboard;
use crate::cli::chart::{render_energy_trend, render_sleep_trend};
use crate::domain::{Badge, Theme, WeeklySummary};

/// Title block shown when a session starts
pub fn format_banner(theme: Theme) -> String {
    match theme {
        Theme::Classic => format!("{}\n{}\n", theme.title(), theme.subtitle()),
        Theme::Premium => {
            let width = theme.title().chars().count().max(theme.subtitle().chars().count()) + 4;
            let border = "═".repeat(width);
            format!(
                "╔{border}╗\n║{:^width$}║\n║{:^width$}║\n╚{border}╝\n",
                theme.title(),
                theme.subtitle(),
                border = border,
                width = width
            )
        }
    }
}

/// Table of the recent window with each entry's position in the whole log
pub fn format_log_table(dashboard: &Dashboard) -> String {
    if dashboard.recent.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let index_width = (dashboard.first_index + dashboard.recent.len() - 1)
        .to_string()
        .len();

    let mut output = format!(
        "{:<iw$}  {:<10}  {:>11}  {:>12}  Notes\n",
        "",
        "Date",
        "Hours Slept",
        "Energy Score",
        iw = index_width
    );
    for (offset, entry) in dashboard.recent.iter().enumerate() {
        let notes = entry.notes().replace(['\n', '\r'], " ");
        let line = format!(
            "{:<iw$}  {:<10}  {:>11.1}  {:>12}  {}",
            dashboard.first_index + offset,
            entry.date().format("%Y-%m-%d").to_string(),
            entry.hours_slept(),
            entry.energy_score(),
            notes,
            iw = index_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Streak count and badge; empty when there is no streak
pub fn format_streak(streak: u32, badge: Option<Badge>) -> String {
    if streak == 0 {
        return String::new();
    }

    let mut output = format!(
        "🔥 You're on a {}-day streak of 8+ hours! Keep it up!\n",
        streak
    );
    if let Some(badge) = badge {
        output.push_str(&format!("{} {}\n", badge.icon(), badge.message()));
    }
    output
}

/// Weekly averages with the encouraging or cautionary message
pub fn format_insights(weekly: Option<&WeeklySummary>) -> String {
    let Some(summary) = weekly else {
        return "No data yet.\n".to_string();
    };

    let mut output = format!("Last {} logged nights\n", summary.nights);
    output.push_str(&format!(
        "Average Hours Slept: {:.1} hrs\n",
        summary.avg_hours
    ));
    output.push_str(&format!(
        "Highest Energy Score: {}/10\n",
        summary.max_energy
    ));
    if summary.meets_target() {
        output.push_str(
            "Amazing! Psalm 127:2 - God grants sleep to those He loves. Keep resting strong!\n",
        );
    } else {
        output.push_str(
            "You're averaging below 8 hours. Focus on winding down earlier tonight.\n",
        );
    }
    output
}

/// Both trend charts for the recent window
pub fn format_charts(dashboard: &Dashboard, theme: Theme) -> String {
    if dashboard.recent.is_empty() {
        return "No entries yet.\n".to_string();
    }

    format!(
        "{}\n{}\n{}\n{}",
        section("Sleep Trend"),
        render_sleep_trend(&dashboard.recent, theme),
        section("Energy Score Trend"),
        render_energy_trend(&dashboard.recent, theme)
    )
}

/// Every dashboard section; a single line for an empty log
pub fn format_dashboard(dashboard: &Dashboard, theme: Theme) -> String {
    if dashboard.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&section("Your Sleep Log"));
    output.push_str(&format_log_table(dashboard));
    output.push_str(&format_streak(dashboard.streak, dashboard.badge));
    output.push('\n');
    output.push_str(&section("Weekly Insights"));
    output.push_str(&format_insights(dashboard.weekly.as_ref()));
    output.push('\n');
    output.push_str(&format_charts(dashboard, theme));
    output
}

/// Badge tiers, lowest first
pub fn format_badge_table() -> String {
    let mut output = String::from("Streak  Badge\n");
    for badge in Badge::TIERS.iter().rev() {
        output.push_str(&format!(
            "{:>6}  {} {}\n",
            format!("{}+", badge.threshold()),
            badge.icon(),
            badge
        ));
    }
    output
}

fn section(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(title.chars().count()))
}
