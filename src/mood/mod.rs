pub mod chart;
pub mod commands;

pub use chart::MoodChart;
