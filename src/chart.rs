//! A horizontal bar chart of the fishing index for a monospaced terminal.

use crate::index::ScoredHour;

const BAR: char = '█';
const LABEL_WIDTH: usize = 16;
const MAX_INDEX: i32 = 100;
const AXIS_DIVISIONS: usize = 5;

/// Render the fishing index of each hour as a bar chart, one row per hour.
///
/// A bar is `width` characters long at an index of 100. Indexes are clamped to [0, 100] for
/// drawing, so a negative index gets an empty bar.
///
/// ```text
/// Date/Time        │Fishing Index
/// ─────────────────┼────────────────────
/// Sun Feb-02 00:00 │██████████
/// Sun Feb-02 01:00 │█████
/// ─────────────────┼────────────────────
///                  0   20  40  60  80  100
///                  ┴───┴───┴───┴───┴───┴
/// ```
pub fn render(hours: &[ScoredHour], width: usize) -> String {
    let rule = format!("{}┼{}", "─".repeat(LABEL_WIDTH + 1), "─".repeat(width));
    let indent = " ".repeat(LABEL_WIDTH + 1);

    let mut lines = Vec::with_capacity(hours.len() + 5);
    lines.push(format!("{:<width$} │Fishing Index", "Date/Time", width = LABEL_WIDTH));
    lines.push(rule.clone());

    lines.extend(hours.iter().map(|hour| {
        let label = hour.sample.time.format("%a %b-%d %H:%M").to_string();
        let bar: String = std::iter::repeat(BAR)
            .take(bar_length(hour.index, width))
            .collect();
        format!("{:<width$} │{}", label, bar, width = LABEL_WIDTH)
    }));

    lines.push(rule);
    lines.push(format!("{}{}", indent, axis_labels(width)));
    lines.push(format!("{}{}", indent, axis_ticks(width)));

    lines.into_iter().map(|line| line + "\n").collect()
}

/// Number of bar characters for `index`.
fn bar_length(index: i32, width: usize) -> usize {
    let index = index.max(0).min(MAX_INDEX);
    (f64::from(index) / f64::from(MAX_INDEX) * width as f64).round() as usize
}

/// 0, 20, 40, 60, 80, 100 each left justified in a fifth of the width.
fn axis_labels(width: usize) -> String {
    let column = width / AXIS_DIVISIONS;
    let step = MAX_INDEX as usize / AXIS_DIVISIONS;

    let mut labels: String = (0..AXIS_DIVISIONS)
        .map(|i| format!("{:<column$}", i * step, column = column))
        .collect();
    labels.push_str(&MAX_INDEX.to_string());
    labels
}

/// A rule `width + 1` characters long with a tick under each label.
fn axis_ticks(width: usize) -> String {
    (0..=width)
        .map(|i| {
            let is_tick = (0..=AXIS_DIVISIONS).any(|d| i == width * d / AXIS_DIVISIONS);
            if is_tick {
                '┴'
            } else {
                '─'
            }
        })
        .collect()
}
