//! In-memory implementations of the page capabilities.
//!
//! Used by the native test suite and by any non-browser build of the
//! utility layer.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{HttpRequest, HttpResponse, Transport};
use crate::error::{StorageError, TransportError};
use crate::format::escape_html;
use crate::storage::KeyValueStore;
use crate::surface::{Scheduler, Surface};

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    display: String,
    text: String,
    inner_html: String,
    value: Option<String>,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tiny document tree rooted at `<body>`.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    nodes: Rc<RefCell<Vec<Node>>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        let body = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            nodes: Rc::new(RefCell::new(vec![body])),
        }
    }

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn new_node(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            value: form_value_default(tag),
            ..Node::default()
        });
        NodeId(nodes.len() - 1)
    }

    /// Create an element and append it as the last child of `parent`.
    pub fn append(&self, parent: NodeId, tag: &str, id: Option<&str>) -> NodeId {
        let child = self.new_node(tag);
        let mut nodes = self.nodes.borrow_mut();
        if let Some(id) = id {
            nodes[child.0].attributes.insert("id".to_string(), id.to_string());
        }
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
        child
    }

    /// Append to `<body>`.
    pub fn add(&self, tag: &str, id: &str) -> NodeId {
        self.append(self.root(), tag, Some(id))
    }

    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[parent.0].children.clone()
    }

    pub fn classes(&self, element: NodeId) -> Vec<String> {
        self.nodes.borrow()[element.0].classes.clone()
    }

    pub fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0].classes.iter().any(|c| c == class)
    }

    pub fn text(&self, element: NodeId) -> String {
        self.nodes.borrow()[element.0].text.clone()
    }

    pub fn is_disabled(&self, element: NodeId) -> bool {
        self.nodes.borrow()[element.0].disabled
    }

    pub fn set_value(&self, element: NodeId, value: &str) {
        self.nodes.borrow_mut()[element.0].value = Some(value.to_string());
    }

    pub fn is_connected(&self, element: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = element;
        loop {
            if current == self.root() {
                return true;
            }
            match nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Connected elements in document order.
    fn connected(&self) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    fn matches(&self, element: NodeId, selector: &str) -> bool {
        let nodes = self.nodes.borrow();
        let node = &nodes[element.0];
        if let Some(id) = selector.strip_prefix('#') {
            node.attributes.get("id").map(String::as_str) == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            node.classes.iter().any(|c| c == class)
        } else {
            node.tag.eq_ignore_ascii_case(selector)
        }
    }

    fn detach(nodes: &mut [Node], element: NodeId) {
        if let Some(parent) = nodes[element.0].parent.take() {
            nodes[parent.0].children.retain(|child| *child != element);
        }
    }
}

fn form_value_default(tag: &str) -> Option<String> {
    match tag.to_ascii_lowercase().as_str() {
        "input" | "select" | "textarea" => Some(String::new()),
        _ => None,
    }
}

impl Surface for MemorySurface {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let selector = format!("#{}", id);
        self.connected()
            .into_iter()
            .find(|node| self.matches(*node, &selector))
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.connected()
            .into_iter()
            .find(|node| self.matches(*node, selector))
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.root())
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        Some(self.new_node(tag))
    }

    fn display(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].display.clone()
    }

    fn set_display(&self, element: &NodeId, value: &str) {
        self.nodes.borrow_mut()[element.0].display = value.to_string();
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[element.0]
            .classes
            .retain(|c| c != class);
    }

    fn set_class_name(&self, element: &NodeId, class_name: &str) {
        self.nodes.borrow_mut()[element.0].classes =
            class_name.split_whitespace().map(str::to_string).collect();
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        for child in std::mem::take(&mut nodes[element.0].children) {
            nodes[child.0].parent = None;
        }
        nodes[element.0].text = text.to_string();
        nodes[element.0].inner_html = escape_html(text);
    }

    fn inner_html(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].inner_html.clone()
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) {
        let mut nodes = self.nodes.borrow_mut();
        for child in std::mem::take(&mut nodes[element.0].children) {
            nodes[child.0].parent = None;
        }
        nodes[element.0].text = html.to_string();
        nodes[element.0].inner_html = html.to_string();
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn value(&self, element: &NodeId) -> Option<String> {
        self.nodes.borrow()[element.0].value.clone()
    }

    fn set_disabled(&self, element: &NodeId, disabled: bool) {
        self.nodes.borrow_mut()[element.0].disabled = disabled;
    }

    fn prepend(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach(&mut nodes, *child);
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.insert(0, *child);
    }

    fn remove(&self, element: &NodeId) {
        Self::detach(&mut self.nodes.borrow_mut(), *element);
    }
}

// ============================================================================
// Scheduler
// ============================================================================

struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Timers that only fire when the test advances the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move time forward and run every task that came due, oldest first.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let task = clock.pending.remove(index);
                        clock.now_ms = task.due_ms;
                        Some(task)
                    }
                    None => {
                        clock.now_ms = target;
                        None
                    }
                }
            };
            match next {
                Some(pending) => (pending.task)(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + u64::from(delay_ms);
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(PendingTask { due_ms, seq, task });
    }
}

// ============================================================================
// Key/value store
// ============================================================================

#[derive(Debug, Default)]
struct StoreState {
    items: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
    unavailable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes once keys plus values would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::default();
        store.state.borrow_mut().quota_bytes = Some(bytes);
        store
    }

    /// Every operation fails, like storage disabled by browser policy.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.state.borrow_mut().unavailable = true;
        store
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.state.borrow().unavailable {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.state.borrow().items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        let mut state = self.state.borrow_mut();
        if let Some(quota) = state.quota_bytes {
            let used: usize = state
                .items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        state.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.state.borrow_mut().items.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check()?;
        self.state.borrow_mut().items.clear();
        Ok(())
    }
}

// ============================================================================
// Transport
// ============================================================================

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

/// Replays queued responses in order and records what was sent.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script.borrow_mut().replies.push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: TransportError) {
        self.script.borrow_mut().replies.push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut script = self.script.borrow_mut();
        script.requests.push(request);
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}
