//! Query Console (MVVM Standard)
//!
//! Structure:
//! - model.rs: backend calls
//! - workflow.rs: execution state machine
//! - view_model.rs: QueryConsoleVm with RwSignals
//! - view.rs: main component QueryConsole

mod model;
mod view;
mod view_model;
pub mod workflow;

pub use view::QueryConsole;
pub use view_model::QueryConsoleVm;
