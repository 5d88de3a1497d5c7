pub mod u100_query_console;
