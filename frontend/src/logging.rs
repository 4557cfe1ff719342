/// Install the global tracing subscriber: the browser console on wasm32, a
/// formatted stderr subscriber elsewhere. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(tracing_wasm::set_as_global_default);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
