use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "404 - Página não encontrada" }</h2>
                <p>{ "A página que procura não existe." }</p>
                <Link<Route> to={Route::Dashboard}>
                    <button class="btn btn-primary">{ "Voltar ao painel" }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
