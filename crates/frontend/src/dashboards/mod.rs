pub mod d100_performance;

pub use d100_performance::ui::PerformanceDashboard;
