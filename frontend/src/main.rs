#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod router;

#[cfg(target_arch = "wasm32")]
mod app {
    use frontend::{browser::BrowserSurface, Surface};
    use yew::prelude::*;
    use yew_router::BrowserRouter;

    use crate::components;
    use crate::router::{switch, Route};

    #[function_component(App)]
    fn app() -> Html {
        html! {
            <BrowserRouter>
                <div id="dashboard">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        }
    }

    pub fn run() {
        // Initialize tracing
        frontend::logging::init();

        match BrowserSurface.element_by_id("app") {
            Some(root) => yew::Renderer::<App>::with_root(root.into()).render(),
            None => yew::Renderer::<App>::new().render(),
        };
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "calsync-dashboard runs in the browser; build it with `trunk build` or `cargo build --target wasm32-unknown-unknown`."
    );
}
