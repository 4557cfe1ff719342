//! Browser-backed implementations of the page capabilities.

use async_trait::async_trait;
use gloo::timers::callback::Timeout;
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, DomException, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::api::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::{StorageError, TransportError};
use crate::storage::KeyValueStore;
use crate::surface::{Scheduler, Surface};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn log_js_error(action: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!("{} failed: {:?}", action, e);
    }
}

/// The live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSurface;

impl Surface for BrowserSurface {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        document()?.get_element_by_id(id)?.dyn_into().ok()
    }

    fn query_selector(&self, selector: &str) -> Option<HtmlElement> {
        document()?
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into()
            .ok()
    }

    fn body(&self) -> Option<HtmlElement> {
        document()?.body()
    }

    fn create_element(&self, tag: &str) -> Option<HtmlElement> {
        document()?.create_element(tag).ok()?.dyn_into().ok()
    }

    fn display(&self, element: &HtmlElement) -> String {
        element
            .style()
            .get_property_value("display")
            .unwrap_or_default()
    }

    fn set_display(&self, element: &HtmlElement, value: &str) {
        log_js_error("set display", element.style().set_property("display", value));
    }

    fn add_class(&self, element: &HtmlElement, class: &str) {
        log_js_error("add class", element.class_list().add_1(class));
    }

    fn remove_class(&self, element: &HtmlElement, class: &str) {
        log_js_error("remove class", element.class_list().remove_1(class));
    }

    fn set_class_name(&self, element: &HtmlElement, class_name: &str) {
        element.set_class_name(class_name);
    }

    fn set_text(&self, element: &HtmlElement, text: &str) {
        element.set_text_content(Some(text));
    }

    fn inner_html(&self, element: &HtmlElement) -> String {
        element.inner_html()
    }

    fn set_inner_html(&self, element: &HtmlElement, html: &str) {
        element.set_inner_html(html);
    }

    fn attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &HtmlElement, name: &str, value: &str) {
        log_js_error("set attribute", element.set_attribute(name, value));
    }

    fn value(&self, element: &HtmlElement) -> Option<String> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else {
            element
                .dyn_ref::<HtmlTextAreaElement>()
                .map(HtmlTextAreaElement::value)
        }
    }

    fn set_disabled(&self, element: &HtmlElement, disabled: bool) {
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_disabled(disabled);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_disabled(disabled);
        } else if disabled {
            log_js_error("set disabled", element.set_attribute("disabled", ""));
        } else {
            log_js_error("clear disabled", element.remove_attribute("disabled"));
        }
    }

    fn prepend(&self, parent: &HtmlElement, child: &HtmlElement) {
        log_js_error("prepend", parent.prepend_with_node_1(child));
    }

    fn remove(&self, element: &HtmlElement) {
        element.remove();
    }
}

/// `setTimeout` without a handle: timers always run to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn storage_error(e: JsValue) -> StorageError {
    match e.dyn_ref::<DomException>() {
        Some(dom) if dom.name() == "QuotaExceededError" => StorageError::QuotaExceeded,
        Some(dom) => StorageError::Backend(dom.message()),
        None => StorageError::Backend(format!("{:?}", e)),
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(storage_error)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?.clear().map_err(storage_error)
    }
}

/// Fetch API transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    }
}

fn transport_error(e: gloo_net::Error) -> TransportError {
    match e {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => TransportError::Aborted,
        gloo_net::Error::JsError(js) => TransportError::Network(js.message),
        other => TransportError::Network(other.to_string()),
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        // request.timeout_ms is not enforced here
        let mut builder = RequestBuilder::new(&request.url).method(http_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let response = built.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read response body: {}", e);
                String::new()
            }
        };
        Ok(HttpResponse { status, body })
    }
}
