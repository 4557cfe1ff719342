use frontend::error::TransportError;
use frontend::loading::{remember_button_text, set_button_loading};
use frontend::memory::{ManualScheduler, MemoryStore, MemorySurface, ScriptedTransport};
use frontend::{ApiClient, ClientConfig, Dom, Notifier, RequestResult, Storage, Surface};
use serde_json::{json, Value};
use shared::api::{TriggerWorkflowResponse, WorkflowHistoryResponse};

fn page_with_container() -> (MemorySurface, frontend::memory::NodeId) {
    let page = MemorySurface::new();
    let main = page.add("main", "content");
    page.set_class_name(&main, "container");
    (page, main)
}

/// Trigger a sync and report the outcome the way the dashboard does.
async fn trigger_and_report(
    api: &ApiClient<ScriptedTransport>,
    page: &MemorySurface,
    notifier: &Notifier<MemorySurface, ManualScheduler>,
) -> RequestResult {
    remember_button_text(page, "trigger-btn");
    set_button_loading(page, "trigger-btn", true);
    let result = api.trigger_workflow().await;
    set_button_loading(page, "trigger-btn", false);

    match result.clone().parse::<TriggerWorkflowResponse>() {
        Ok(response) => notifier.success(&response.message, None),
        Err(e) => notifier.error(&e.to_string(), None),
    }
    result
}

#[tokio::test]
async fn trigger_success_shows_toast_and_restores_button() {
    let (page, main) = page_with_container();
    let button = page.add("button", "trigger-btn");
    page.set_inner_html(&button, "Sincronizar agora");
    let scheduler = ManualScheduler::new();
    let notifier = Notifier::new(page.clone(), scheduler.clone());

    let transport = ScriptedTransport::new();
    transport.respond(
        200,
        r#"{"status":"success","message":"Workflow disparado com sucesso","timestamp":"2026-01-15T10:00:00"}"#,
    );
    let api = ApiClient::from_config(&ClientConfig::default(), transport.clone());

    let result = trigger_and_report(&api, &page, &notifier).await;
    assert!(result.is_success());

    assert_eq!(page.inner_html(&button), "Sincronizar agora");
    assert!(!page.is_disabled(button));

    let toasts = page.children(main);
    assert_eq!(toasts.len(), 1);
    assert!(page.has_class(toasts[0], "alert-success"));
    assert!(page
        .inner_html(&toasts[0])
        .starts_with("Workflow disparado com sucesso"));

    scheduler.advance(3000);
    assert!(page.children(main).is_empty());
}

#[tokio::test]
async fn trigger_failure_shows_error_toast() {
    let (page, main) = page_with_container();
    page.add("button", "trigger-btn");
    let scheduler = ManualScheduler::new();
    let notifier = Notifier::new(page.clone(), scheduler.clone());

    let transport = ScriptedTransport::new();
    transport.respond(404, r#"{"error":"Repositório ou workflow não encontrado","status":404}"#);
    let api = ApiClient::new("/api", transport);

    let result = trigger_and_report(&api, &page, &notifier).await;
    assert_eq!(
        result,
        RequestResult::failure("Repositório ou workflow não encontrado", None)
    );

    let toasts = page.children(main);
    assert!(page.has_class(toasts[0], "alert-danger"));
    scheduler.advance(4999);
    assert_eq!(page.children(main).len(), 1);
    scheduler.advance(1);
    assert!(page.children(main).is_empty());
}

#[tokio::test]
async fn every_endpoint_normalizes_outcomes() {
    for status in [200u16, 201, 204] {
        let transport = ScriptedTransport::new();
        for _ in 0..4 {
            transport.respond(status, r#"{"ok": true}"#);
        }
        let api = ApiClient::new("/api", transport);
        for result in [
            api.workflow_status().await,
            api.workflow_history(None).await,
            api.trigger_workflow().await,
            api.health().await,
        ] {
            assert_eq!(result, RequestResult::success(json!({"ok": true})));
        }
    }

    let transport = ScriptedTransport::new();
    for _ in 0..4 {
        transport.respond(500, r#"{"error": "X"}"#);
    }
    let api = ApiClient::new("/api", transport);
    for result in [
        api.workflow_status().await,
        api.workflow_history(Some(3)).await,
        api.trigger_workflow().await,
        api.health().await,
    ] {
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("X"));
    }
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"status":"success","total_count":0,"runs":[]}"#);
    transport.fail(TransportError::Aborted);
    let api = ApiClient::new("/api", transport);

    let (history, health) = tokio::join!(api.workflow_history(None), api.health());

    let parsed: WorkflowHistoryResponse = history.parse().unwrap();
    assert_eq!(parsed.total_count, 0);
    assert_eq!(health.error(), Some("The request was aborted"));
    assert_eq!(health.status(), None);
}

#[test]
fn notifications_stack_newest_first() {
    let (page, main) = page_with_container();
    let notifier = Notifier::new(page.clone(), ManualScheduler::new());

    notifier.info("primeira", Some(0));
    notifier.warning("segunda", Some(0));

    let toasts = page.children(main);
    assert_eq!(toasts.len(), 2);
    assert!(page.inner_html(&toasts[0]).starts_with("segunda"));
    assert!(page.inner_html(&toasts[1]).starts_with("primeira"));
}

#[test]
fn storage_round_trips_json_values() {
    let storage = Storage::new(MemoryStore::new());
    let values = [
        json!(null),
        json!(true),
        json!(42),
        json!(-1.5),
        json!("texto com acentuação"),
        json!([1, "two", {"three": 3}]),
        json!({"nested": {"limit": 25, "sources": ["a", "b"]}}),
    ];
    for (i, value) in values.iter().enumerate() {
        let key = format!("key-{}", i);
        assert!(storage.set(&key, value));
        assert_eq!(&storage.get::<Value>(&key, json!("default")), value);
    }
    assert_eq!(storage.get::<Value>("missing", json!("default")), json!("default"));
}

#[test]
fn element_helpers_ignore_missing_ids() {
    let page = MemorySurface::new();
    let dom = Dom::new(page.clone());
    dom.show("ghost");
    dom.set_html("ghost", "<p>x</p>");
    dom.set_disabled("ghost", true);
    assert_eq!(dom.value("ghost"), None);
    assert!(page.children(page.body().unwrap()).is_empty());
}

#[test]
fn config_from_page_drives_client() {
    let page = MemorySurface::new();
    let script = page.add("script", frontend::config::CONFIG_ELEMENT_ID);
    page.set_inner_html(&script, r#"{"base_url": "https://sync.example/api", "timeout_ms": 2500}"#);

    let config = ClientConfig::from_page(&page);
    let api = ApiClient::from_config(&config, ScriptedTransport::new());
    assert_eq!(api.base_url(), "https://sync.example/api");
    assert_eq!(config.timeout_ms, 2500);
}
