pub mod history_export;
pub mod outcome_loader;

pub use history_export::HistoryExporter;
pub use outcome_loader::OutcomeLoader;
