use plotly::common::{Marker, Orientation, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot};

use crate::selection::TopSelection;

// Key point:
// Explicit defaults
// The figure is a value; displaying it is the caller's decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bar_color: String,
    pub width: usize,
    pub height: usize,
}

impl BarChartConfig {
    /// The fixed layout of the word-frequency report.
    pub fn top_words() -> Self {
        Self {
            title: "Top 50 Most Frequent Words".into(),
            x_label: "Frequency".into(),
            y_label: "Word".into(),
            bar_color: "skyblue".into(),
            width: 1000,
            height: 800,
        }
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::top_words()
    }
}

/// Build a horizontal bar chart from a ranked selection: one bar per row,
/// bar length = frequency, category label = word.
pub fn horizontal_bar(selection: &TopSelection, config: &BarChartConfig) -> Plot {
    let mut words = Vec::with_capacity(selection.rows.len());
    let mut frequencies = Vec::with_capacity(selection.rows.len());

    // Bar categories stack bottom-up, so rows are emitted lowest rank first
    // to put the highest-frequency word at the top of the category axis.
    for row in selection.rows.iter().rev() {
        words.push(row.word.clone());
        frequencies.push(row.frequency);
    }

    let trace = Bar::new(frequencies, words)
        .orientation(Orientation::Horizontal)
        .marker(Marker::new().color(config.bar_color.clone()));

    let layout = Layout::new()
        .title(Title::with_text(&config.title))
        .x_axis(Axis::new().title(Title::with_text(&config.x_label)))
        .y_axis(Axis::new().title(Title::with_text(&config.y_label)))
        .width(config.width)
        .height(config.height);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}
