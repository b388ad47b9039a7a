pub mod bar;

pub use bar::{horizontal_bar, BarChartConfig};
