use frontend::{page, ClientConfig};
use yew::prelude::*;

use crate::pages::{history_limit, HISTORY_LIMIT_KEY};

const LIMIT_INPUT_ID: &str = "history-limit";

#[function_component(Settings)]
pub fn settings() -> Html {
    let current = use_state(history_limit);
    let field_error = use_state(|| None::<&'static str>);

    let on_save = {
        let current = current.clone();
        let field_error = field_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dom = page::dom();
            let raw = dom.value(LIMIT_INPUT_ID).unwrap_or_default();

            match ClientConfig::parse_history_limit(&raw) {
                Ok(limit) => {
                    field_error.set(None);
                    dom.remove_class(LIMIT_INPUT_ID, "is-invalid");
                    if page::storage().set(HISTORY_LIMIT_KEY, &limit) {
                        current.set(limit);
                        page::notifier().success("Preferências guardadas", None);
                    } else {
                        page::notifier().warning("Não foi possível guardar as preferências", None);
                    }
                }
                Err(message) => {
                    dom.add_class(LIMIT_INPUT_ID, "is-invalid");
                    field_error.set(Some(message));
                }
            }
        })
    };

    let on_reset = {
        let current = current.clone();
        Callback::from(move |_| {
            if page::storage().remove(HISTORY_LIMIT_KEY) {
                current.set(page::config().history_limit);
                page::notifier().info("Preferências repostas", None);
            }
        })
    };

    html! {
        <div class="container">
            <h2>{ "Preferências" }</h2>
            <form class="settings-form" onsubmit={on_save}>
                <label for={LIMIT_INPUT_ID}>{ "Execuções no histórico" }</label>
                <input
                    id={LIMIT_INPUT_ID}
                    class="form-control"
                    type="text"
                    inputmode="numeric"
                    value={current.to_string()}
                />
                if let Some(message) = *field_error {
                    <div class="invalid-feedback">{ message }</div>
                }
                <div class="actions">
                    <button type="submit" class="btn btn-primary">{ "Guardar" }</button>
                    <button type="button" class="btn btn-secondary" onclick={on_reset}>
                        { "Repor" }
                    </button>
                </div>
            </form>
        </div>
    }
}
