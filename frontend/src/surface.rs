//! Capabilities the utility layer needs from its host page.
//!
//! Everything that touches the document or the event loop goes through these
//! traits so the helpers run the same against the real browser
//! ([`crate::browser`]) and against the in-memory page (`crate::memory`).

/// Element lookup and mutation.
///
/// Implementations are cheap handles onto a shared page, so cloning one and
/// moving it into a timer callback is expected.
pub trait Surface: Clone + 'static {
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn create_element(&self, tag: &str) -> Option<Self::Element>;

    /// Inline `display` style, empty when unset.
    fn display(&self, element: &Self::Element) -> String;
    fn set_display(&self, element: &Self::Element, value: &str);

    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);
    fn set_class_name(&self, element: &Self::Element, class_name: &str);

    fn set_text(&self, element: &Self::Element, text: &str);
    fn inner_html(&self, element: &Self::Element) -> String;
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Form control value; `None` for elements that do not carry one.
    fn value(&self, element: &Self::Element) -> Option<String>;
    fn set_disabled(&self, element: &Self::Element, disabled: bool);

    /// Insert `child` as the first child of `parent`.
    fn prepend(&self, parent: &Self::Element, child: &Self::Element);
    /// Detach `element` from its parent.
    fn remove(&self, element: &Self::Element);
}

/// Fire-and-forget timers.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// An element argument: either an id to look up or an element already in hand.
#[derive(Debug)]
pub enum Target<'a, E> {
    Id(&'a str),
    Handle(&'a E),
}

impl<'a, E> From<&'a str> for Target<'a, E> {
    fn from(id: &'a str) -> Self {
        Target::Id(id)
    }
}

impl<'a, E> From<&'a String> for Target<'a, E> {
    fn from(id: &'a String) -> Self {
        Target::Id(id.as_str())
    }
}

impl<'a, E: Clone> Target<'a, E> {
    pub fn resolve<S>(self, surface: &S) -> Option<E>
    where
        S: Surface<Element = E>,
    {
        match self {
            Target::Id(id) => surface.element_by_id(id),
            Target::Handle(element) => Some(element.clone()),
        }
    }
}
