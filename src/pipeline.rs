use std::fmt;
use std::path::PathBuf;

use plotly::Plot;
use thiserror::Error;

use crate::chart::{self, BarChartConfig};
use crate::selection::{self, TopSelection, TOP_WORDS};
use crate::table::{TableReadConfig, TableReadError, TableReader};

/// The input path the report binary reads, relative to the working directory.
pub const DEFAULT_INPUT: &str = "./word_frequencies.txt";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to load frequency table: {0}")]
    Load(#[from] TableReadError),
}

/// The linear word-frequency report pipeline: load, rank, select, chart.
///
/// `build` stops short of displaying anything; the returned report owns the
/// figure and the caller decides between the interactive viewer and headless
/// HTML. No file is written at any step.
pub struct ReportPipeline {
    input: PathBuf,
    limit: usize,
    read_config: TableReadConfig,
    chart_config: BarChartConfig,
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            limit: TOP_WORDS,
            read_config: TableReadConfig::default(),
            chart_config: BarChartConfig::top_words(),
        }
    }
}

impl ReportPipeline {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_read_config(mut self, config: TableReadConfig) -> Self {
        self.read_config = config;
        self
    }

    pub fn with_chart_config(mut self, config: BarChartConfig) -> Self {
        self.chart_config = config;
        self
    }

    pub fn build(&self) -> Result<FrequencyReport, PipelineError> {
        // 1. Load
        let table = TableReader::new(self.read_config.clone()).read(&self.input)?;

        // 2. Rank + 3. Select
        let selection = selection::select_top(table, self.limit);

        // 4. Build the figure
        let plot = chart::horizontal_bar(&selection, &self.chart_config);

        Ok(FrequencyReport { selection, plot })
    }
}

/// A built report: the ranked selection plus its figure.
pub struct FrequencyReport {
    pub selection: TopSelection,
    plot: Plot,
}

// The figure itself has no useful textual form; show the selection only.
impl fmt::Debug for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyReport")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl FrequencyReport {
    /// Display the chart. Blocks until the viewer is dismissed when the
    /// display surface is interactive.
    pub fn show(&self) {
        self.plot.show();
    }

    /// Render the chart to an embeddable HTML fragment for headless use.
    pub fn to_inline_html(&self, plot_div_id: Option<&str>) -> String {
        self.plot.to_inline_html(plot_div_id)
    }
}
