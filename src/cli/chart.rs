//! Text trend charts for the weekly window

use crate::domain::entry::GOOD_NIGHT_HOURS;
use crate::domain::{SleepEntry, Theme};

const CELL_WIDTH: usize = 7;
const ENERGY_AXIS_MAX: u32 = 10;

/// Line chart of hours slept with the 8-hour target drawn across.
///
/// Each row is a one-hour band; a night is plotted in the band its hours
/// fall into. Nights under an hour sit on the axis.
pub fn render_sleep_trend(entries: &[SleepEntry], theme: Theme) -> String {
    let glyphs = theme.glyphs();
    let target_row = GOOD_NIGHT_HOURS as u32;
    let highest = entries
        .iter()
        .map(|e| e.hours_slept().floor() as u32)
        .max()
        .unwrap_or(0);
    let top = highest.max(target_row + 2);

    let mut output = String::new();
    if theme.labels_charts() {
        output.push_str("Sleep Hours vs Target\n");
        output.push_str("Hours\n");
    }

    for row in (1..=top).rev() {
        output.push_str(&format!("{:>2} |", row));
        for entry in entries {
            let on_target = row == target_row;
            let point = entry.hours_slept().floor() as u32 == row;
            let fill = if on_target { glyphs.target } else { ' ' };
            output.push_str(&cell(fill, point.then_some(glyphs.point), 1));
        }
        output.push('\n');
    }

    push_axis(&mut output, entries, |entry| {
        (entry.hours_slept() < 1.0).then_some(glyphs.point)
    });
    push_date_labels(&mut output, entries, theme);
    output.push_str(&format!(
        "   {} Hours Slept   {} Target ({} hrs)\n",
        glyphs.point,
        glyphs.target.to_string().repeat(3),
        GOOD_NIGHT_HOURS
    ));
    output
}

/// Bar chart of energy scores on a fixed 0 to 10 axis
pub fn render_energy_trend(entries: &[SleepEntry], theme: Theme) -> String {
    let glyphs = theme.glyphs();

    let mut output = String::new();
    if theme.labels_charts() {
        output.push_str("Energy Score (1-10)\n");
        output.push_str("Score\n");
    }

    for row in (1..=ENERGY_AXIS_MAX).rev() {
        output.push_str(&format!("{:>2} |", row));
        for entry in entries {
            let filled = u32::from(entry.energy_score()) >= row;
            output.push_str(&cell(' ', filled.then_some(glyphs.bar), 3));
        }
        output.push('\n');
    }

    push_axis(&mut output, entries, |_| None);
    push_date_labels(&mut output, entries, theme);
    output
}

/// A chart cell: `fill` across the width with `mark` repeated in the middle
fn cell(fill: char, mark: Option<char>, mark_width: usize) -> String {
    let side = (CELL_WIDTH - mark_width) / 2;
    let mut cell = String::with_capacity(CELL_WIDTH * 3);
    for i in 0..CELL_WIDTH {
        let in_mark = i >= side && i < side + mark_width;
        match mark {
            Some(m) if in_mark => cell.push(m),
            _ => cell.push(fill),
        }
    }
    cell
}

/// The zero row, with `mark` placing a glyph on it per entry
fn push_axis<F>(output: &mut String, entries: &[SleepEntry], mark: F)
where
    F: Fn(&SleepEntry) -> Option<char>,
{
    output.push_str(" 0 +");
    for entry in entries {
        output.push_str(&cell('-', mark(entry), 1));
    }
    output.push('\n');
}

fn push_date_labels(output: &mut String, entries: &[SleepEntry], theme: Theme) {
    output.push_str("    ");
    for entry in entries {
        let label = entry.date().format("%m-%d").to_string();
        output.push_str(&format!("{:^width$}", label, width = CELL_WIDTH));
    }
    output.push('\n');
    if theme.labels_charts() {
        output.push_str(&format!("{:^width$}\n", "Date", width = 4 + CELL_WIDTH * entries.len()));
    }
}
