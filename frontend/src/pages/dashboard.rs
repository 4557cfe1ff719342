use frontend::browser::BrowserSurface;
use frontend::format::{format_date_time, format_duration};
use frontend::loading::{hide_loading, remember_button_text, set_button_loading, show_loading};
use frontend::page;
use shared::api::{HealthResponse, TriggerWorkflowResponse, WorkflowStatusResponse};
use yew::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::pages::api;

const STATUS_LOADING_ID: &str = "status-loading";
const TRIGGER_BUTTON_ID: &str = "trigger-btn";

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let status = use_state(|| None::<WorkflowStatusResponse>);
    let health = use_state(|| None::<HealthResponse>);
    let refresh_trigger = use_state(|| 0u32);

    // Fetch latest run
    {
        let status = status.clone();
        use_effect_with(*refresh_trigger, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                show_loading(&BrowserSurface, STATUS_LOADING_ID, Some("A obter estado..."));
                let result = api().workflow_status().await;
                hide_loading(&BrowserSurface, STATUS_LOADING_ID);

                match result.parse::<WorkflowStatusResponse>() {
                    Ok(response) => status.set(Some(response)),
                    Err(e) => {
                        tracing::error!("Failed to fetch workflow status: {}", e);
                        page::notifier().error(&e.to_string(), None);
                    }
                }
            });
            || ()
        });
    }

    // Fetch health once
    {
        let health = health.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api().health().await.parse::<HealthResponse>() {
                    Ok(response) => health.set(Some(response)),
                    Err(e) => tracing::warn!("Health check failed: {}", e),
                }
            });
            || ()
        });
    }

    let on_trigger = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            let refresh_trigger = refresh_trigger.clone();
            wasm_bindgen_futures::spawn_local(async move {
                remember_button_text(&BrowserSurface, TRIGGER_BUTTON_ID);
                set_button_loading(&BrowserSurface, TRIGGER_BUTTON_ID, true);
                let result = api().trigger_workflow().await;
                set_button_loading(&BrowserSurface, TRIGGER_BUTTON_ID, false);

                let notifier = page::notifier();
                match result.parse::<TriggerWorkflowResponse>() {
                    Ok(response) => {
                        notifier.success(&response.message, None);
                        refresh_trigger.set(*refresh_trigger + 1);
                    }
                    Err(e) => notifier.error(&e.to_string(), None),
                }
            });
        })
    };

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| refresh_trigger.set(*refresh_trigger + 1))
    };

    let health_view = match &*health {
        Some(h) if h.is_healthy() && h.github_configured => {
            html! { <span class="health health-ok">{ "Servidor operacional" }</span> }
        }
        Some(h) if h.is_healthy() => {
            html! { <span class="health health-warn">{ "GitHub não configurado" }</span> }
        }
        _ => html! { <span class="health health-unknown">{ "Estado do servidor desconhecido" }</span> },
    };

    let run_view = match &*status {
        Some(WorkflowStatusResponse { run: Some(run), .. }) => html! {
            <dl class="run-summary">
                <dt>{ "Execução" }</dt>
                <dd>{ format!("#{} {}", run.run_number, run.name) }</dd>
                <dt>{ "Estado" }</dt>
                <dd><StatusBadge status={run.badge_keyword().to_string()} /></dd>
                <dt>{ "Início" }</dt>
                <dd>{ format_date_time(Some(&run.created_at)) }</dd>
                <dt>{ "Última atualização" }</dt>
                <dd>{ format_date_time(Some(&run.updated_at)) }</dd>
                <dt>{ "Duração" }</dt>
                <dd>{ format_duration(run.elapsed_seconds()) }</dd>
                <dd>
                    <a href={run.html_url.clone()} target="_blank" rel="noopener">{ "Abrir no GitHub" }</a>
                </dd>
            </dl>
        },
        Some(WorkflowStatusResponse { message, .. }) => html! {
            <p class="empty-state">
                { message.clone().unwrap_or_else(|| "Nenhuma execução encontrada".to_string()) }
            </p>
        },
        None => html! {},
    };

    html! {
        <div class="container">
            <div class="dashboard-header">
                <h2>{ "Sincronização de calendários" }</h2>
                { health_view }
            </div>

            <div class="actions">
                <button
                    id={TRIGGER_BUTTON_ID}
                    class="btn btn-primary"
                    onclick={on_trigger}
                >
                    { "Sincronizar agora" }
                </button>
                <button class="btn btn-secondary" onclick={on_refresh}>{ "Atualizar" }</button>
            </div>

            <section class="card">
                <h3>{ "Última execução" }</h3>
                <div id={STATUS_LOADING_ID} style="display: none"></div>
                { run_view }
            </section>
        </div>
    }
}
