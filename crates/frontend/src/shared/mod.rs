pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod disclosure;
pub mod icons;
pub mod layout_engine;
pub mod markdown;
pub mod page_frame;
pub mod page_standard;
