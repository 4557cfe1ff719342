use frontend::page;
use shared::api::{WorkflowHistoryResponse, WorkflowRun};
use yew::prelude::*;

use crate::components::run_table::RunTable;
use crate::pages::{api, history_limit};

#[function_component(History)]
pub fn history() -> Html {
    let runs = use_state(Vec::<WorkflowRun>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let runs = runs.clone();
        let total = total.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let limit = history_limit();
                match api()
                    .workflow_history(Some(limit))
                    .await
                    .parse::<WorkflowHistoryResponse>()
                {
                    Ok(response) => {
                        total.set(response.total_count);
                        runs.set(response.runs);
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch workflow history: {}", e);
                        page::notifier().error(&e.to_string(), None);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! {
            <div class="loading">
                <div class="spinner-border text-primary" role="status"></div>
            </div>
        }
    } else if let Some(err) = &*error {
        html! { <p class="error">{ err }</p> }
    } else {
        html! {
            <>
                <p class="run-count">
                    { format!("A mostrar {} de {} execuções", runs.len(), *total) }
                </p>
                <RunTable runs={(*runs).clone()} />
            </>
        }
    };

    html! {
        <div class="container">
            <h2>{ "Histórico de sincronizações" }</h2>
            { body }
        </div>
    }
}
