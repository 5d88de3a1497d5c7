pub mod api;
pub mod board;
pub mod poller;
pub mod ui;
