pub mod u100_query_console;

pub use u100_query_console::QueryConsole;
