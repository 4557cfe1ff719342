//! Element helpers.
//!
//! Every helper takes an id or an element handle. When an id does not resolve
//! the call does nothing.

use crate::surface::{Surface, Target};

#[derive(Debug, Clone)]
pub struct Dom<S> {
    surface: S,
}

impl<S: Surface> Dom<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Resolve an id or handle to an element.
    pub fn get<'a>(&self, target: impl Into<Target<'a, S::Element>>) -> Option<S::Element>
    where
        S::Element: 'a,
    {
        let target: Target<'a, S::Element> = target.into();
        let resolved = target.resolve(&self.surface);
        if resolved.is_none() {
            tracing::trace!("element not found");
        }
        resolved
    }

    pub fn show<'a>(&self, target: impl Into<Target<'a, S::Element>>)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.set_display(&el, "block");
        }
    }

    pub fn hide<'a>(&self, target: impl Into<Target<'a, S::Element>>)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.set_display(&el, "none");
        }
    }

    pub fn toggle<'a>(&self, target: impl Into<Target<'a, S::Element>>)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            let next = if self.surface.display(&el) == "none" {
                "block"
            } else {
                "none"
            };
            self.surface.set_display(&el, next);
        }
    }

    pub fn add_class<'a>(&self, target: impl Into<Target<'a, S::Element>>, class: &str)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.add_class(&el, class);
        }
    }

    pub fn remove_class<'a>(&self, target: impl Into<Target<'a, S::Element>>, class: &str)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.remove_class(&el, class);
        }
    }

    pub fn set_text<'a>(&self, target: impl Into<Target<'a, S::Element>>, text: &str)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.set_text(&el, text);
        }
    }

    pub fn set_html<'a>(&self, target: impl Into<Target<'a, S::Element>>, html: &str)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.set_inner_html(&el, html);
        }
    }

    /// Current value of a form control; `None` when the element is missing
    /// or carries no value.
    pub fn value<'a>(&self, target: impl Into<Target<'a, S::Element>>) -> Option<String>
    where
        S::Element: 'a,
    {
        self.get(target).and_then(|el| self.surface.value(&el))
    }

    pub fn set_disabled<'a>(&self, target: impl Into<Target<'a, S::Element>>, disabled: bool)
    where
        S::Element: 'a,
    {
        if let Some(el) = self.get(target) {
            self.surface.set_disabled(&el, disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;

    #[test]
    fn test_show_hide_toggle() {
        let page = MemorySurface::new();
        let panel = page.add("div", "panel");
        let dom = Dom::new(page.clone());

        dom.hide("panel");
        assert_eq!(page.display(&panel), "none");
        dom.show("panel");
        assert_eq!(page.display(&panel), "block");
        dom.toggle("panel");
        assert_eq!(page.display(&panel), "none");
        dom.toggle(Target::Handle(&panel));
        assert_eq!(page.display(&panel), "block");
    }

    #[test]
    fn test_toggle_from_unset_hides() {
        let page = MemorySurface::new();
        let panel = page.add("div", "panel");
        Dom::new(page.clone()).toggle("panel");
        assert_eq!(page.display(&panel), "none");
    }

    #[test]
    fn test_classes_text_and_html() {
        let page = MemorySurface::new();
        let label = page.add("span", "label");
        let dom = Dom::new(page.clone());

        dom.add_class("label", "active");
        dom.add_class("label", "active");
        assert_eq!(page.classes(label), vec!["active".to_string()]);
        dom.remove_class("label", "active");
        assert!(page.classes(label).is_empty());

        dom.set_text("label", "<b>5</b>");
        assert_eq!(page.inner_html(&label), "&lt;b&gt;5&lt;/b&gt;");
        dom.set_html("label", "<b>5</b>");
        assert_eq!(page.inner_html(&label), "<b>5</b>");
    }

    #[test]
    fn test_value_and_disabled() {
        let page = MemorySurface::new();
        let input = page.add("input", "limit");
        let div = page.add("div", "plain");
        page.set_value(input, "25");
        let dom = Dom::new(page.clone());

        assert_eq!(dom.value("limit").as_deref(), Some("25"));
        assert_eq!(dom.value("plain"), None);
        assert_eq!(dom.value("missing"), None);

        dom.set_disabled(&"limit".to_string(), true);
        assert!(page.is_disabled(input));
        assert!(!page.is_disabled(div));
    }

    #[test]
    fn test_missing_element_is_noop() {
        let page = MemorySurface::new();
        let other = page.add("div", "other");
        let dom = Dom::new(page.clone());

        dom.show("missing");
        dom.hide("missing");
        dom.toggle("missing");
        dom.add_class("missing", "x");
        dom.remove_class("missing", "x");
        dom.set_text("missing", "x");
        dom.set_html("missing", "x");
        dom.set_disabled("missing", true);

        assert_eq!(page.display(&other), "");
        assert!(page.classes(other).is_empty());
        assert_eq!(page.inner_html(&other), "");
        assert!(!page.is_disabled(other));
        assert_eq!(page.children(page.body().unwrap()), vec![other]);
    }
}
