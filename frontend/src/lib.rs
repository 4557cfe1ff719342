//! Browser utility layer for the calendar sync dashboard.
//!
//! The helpers are written against the capability traits in [`surface`],
//! [`storage`] and [`api`]; [`browser`] binds them to the real page and
//! `memory` provides in-process stand-ins for native builds and tests.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod loading;
pub mod logging;
#[cfg(any(test, feature = "testing", not(target_arch = "wasm32")))]
pub mod memory;
pub mod notify;
pub mod storage;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use api::{ApiClient, HttpRequest, HttpResponse, Method, RequestOptions, Transport};
pub use config::ClientConfig;
pub use dom::Dom;
pub use notify::Notifier;
pub use shared::RequestResult;
pub use storage::{KeyValueStore, Storage};
pub use surface::{Scheduler, Surface, Target};

/// Everything wired to the live browser page.
#[cfg(target_arch = "wasm32")]
pub mod page {
    use crate::browser::{BrowserScheduler, BrowserSurface, FetchTransport, LocalStore};

    pub type Api = crate::ApiClient<FetchTransport>;
    pub type Dom = crate::Dom<BrowserSurface>;
    pub type Notifier = crate::Notifier<BrowserSurface, BrowserScheduler>;
    pub type Storage = crate::Storage<LocalStore>;

    pub fn api(config: &crate::ClientConfig) -> Api {
        crate::ApiClient::from_config(config, FetchTransport)
    }

    pub fn dom() -> Dom {
        crate::Dom::new(BrowserSurface)
    }

    pub fn notifier() -> Notifier {
        crate::Notifier::new(BrowserSurface, BrowserScheduler)
    }

    pub fn storage() -> Storage {
        crate::Storage::new(LocalStore)
    }

    pub fn config() -> crate::ClientConfig {
        crate::ClientConfig::from_page(&BrowserSurface)
    }
}
