pub mod header;
pub mod run_table;
pub mod status_badge;
