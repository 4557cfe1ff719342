use frontend::format::{format_date_time, format_duration};
use shared::api::WorkflowRun;
use yew::prelude::*;

use crate::components::status_badge::StatusBadge;

#[derive(Properties, PartialEq)]
pub struct RunTableProps {
    pub runs: Vec<WorkflowRun>,
}

#[function_component(RunTable)]
pub fn run_table(props: &RunTableProps) -> Html {
    if props.runs.is_empty() {
        return html! {
            <div class="empty-state">
                <h2>{ "Sem execuções" }</h2>
                <p>{ "Ainda não existe nenhuma sincronização registada." }</p>
            </div>
        };
    }

    html! {
        <table class="table run-table">
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ "Workflow" }</th>
                    <th>{ "Estado" }</th>
                    <th>{ "Início" }</th>
                    <th>{ "Duração" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for props.runs.iter().map(|run| html! {
                    <tr key={run.id.to_string()}>
                        <td>{ run.run_number }</td>
                        <td>{ &run.name }</td>
                        <td><StatusBadge status={run.badge_keyword().to_string()} /></td>
                        <td>{ format_date_time(Some(&run.created_at)) }</td>
                        <td>{ format_duration(run.elapsed_seconds()) }</td>
                        <td>
                            <a href={run.html_url.clone()} target="_blank" rel="noopener">{ "Ver" }</a>
                        </td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
