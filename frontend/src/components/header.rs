use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="header-inner">
                <h1>{ "Calendário Sync" }</h1>
                <nav>
                    <Link<Route> to={Route::Dashboard}>{ "Painel" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::History}>{ "Histórico" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Settings}>{ "Preferências" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
