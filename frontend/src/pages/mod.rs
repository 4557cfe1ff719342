pub mod dashboard;
pub mod history;
pub mod not_found;
pub mod settings;

use frontend::page;

/// Storage key for the preferred number of runs on the history page.
pub const HISTORY_LIMIT_KEY: &str = "calsync.history_limit";

pub fn api() -> page::Api {
    page::api(&page::config())
}

pub fn history_limit() -> u32 {
    let config = page::config();
    page::storage().get(HISTORY_LIMIT_KEY, config.history_limit)
}
