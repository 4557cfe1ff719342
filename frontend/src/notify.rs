//! Dismissible toast notifications.
//!
//! Each toast is prepended to the page's `.container` region (or `<body>`
//! when there is none) and removed by a timer. Toasts are independent: no
//! queue, no limit, no de-duplication.

use shared::Severity;

use crate::format::escape_html;
use crate::surface::{Scheduler, Surface};

pub const CONTAINER_SELECTOR: &str = ".container";

#[derive(Clone)]
pub struct Notifier<S, T> {
    surface: S,
    scheduler: T,
}

impl<S: Surface, T: Scheduler> Notifier<S, T> {
    pub fn new(surface: S, scheduler: T) -> Self {
        Self { surface, scheduler }
    }

    /// Show `message`. `delay_ms` of `None` uses the severity's default; a
    /// non-positive delay keeps the toast until the user dismisses it.
    pub fn notify(&self, message: &str, severity: Severity, delay_ms: Option<i64>) {
        let container = self
            .surface
            .query_selector(CONTAINER_SELECTOR)
            .or_else(|| self.surface.body());
        let Some(container) = container else {
            tracing::warn!("no container for notification: {}", message);
            return;
        };
        let Some(toast) = self.surface.create_element("div") else {
            tracing::warn!("could not create notification element");
            return;
        };

        self.surface.set_class_name(
            &toast,
            &format!(
                "alert alert-{} alert-dismissible fade show",
                severity.css_class()
            ),
        );
        self.surface.set_attribute(&toast, "role", "alert");
        self.surface.set_inner_html(
            &toast,
            &format!(
                r#"{}<button type="button" class="btn-close" aria-label="Fechar" onclick="this.parentElement.remove()"></button>"#,
                escape_html(message)
            ),
        );
        self.surface.prepend(&container, &toast);

        let delay_ms = delay_ms.unwrap_or_else(|| severity.default_delay_ms());
        if delay_ms > 0 {
            let surface = self.surface.clone();
            let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
            self.scheduler
                .schedule(delay, Box::new(move || surface.remove(&toast)));
        }
    }

    pub fn success(&self, message: &str, delay_ms: Option<i64>) {
        self.notify(message, Severity::Success, delay_ms);
    }

    pub fn error(&self, message: &str, delay_ms: Option<i64>) {
        self.notify(message, Severity::Error, delay_ms);
    }

    pub fn warning(&self, message: &str, delay_ms: Option<i64>) {
        self.notify(message, Severity::Warning, delay_ms);
    }

    pub fn info(&self, message: &str, delay_ms: Option<i64>) {
        self.notify(message, Severity::Info, delay_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ManualScheduler, MemorySurface};

    fn setup() -> (MemorySurface, ManualScheduler, Notifier<MemorySurface, ManualScheduler>) {
        let page = MemorySurface::new();
        let scheduler = ManualScheduler::new();
        let notifier = Notifier::new(page.clone(), scheduler.clone());
        (page, scheduler, notifier)
    }

    #[test]
    fn test_prefers_container_over_body() {
        let (page, _, notifier) = setup();
        let main = page.add("main", "content");
        page.set_class_name(&main, "container");

        notifier.info("Olá", None);

        let toasts = page.children(main);
        assert_eq!(toasts.len(), 1);
        assert!(page.has_class(toasts[0], "alert-info"));
        assert_eq!(page.attribute(&toasts[0], "role").as_deref(), Some("alert"));
        assert_eq!(page.children(page.body().unwrap()), vec![main]);
    }

    #[test]
    fn test_falls_back_to_body() {
        let (page, _, notifier) = setup();
        notifier.error("Falhou", None);
        let body = page.body().unwrap();
        let toasts = page.children(body);
        assert_eq!(toasts.len(), 1);
        assert!(page.has_class(toasts[0], "alert-danger"));
    }

    #[test]
    fn test_newest_toast_first() {
        let (page, _, notifier) = setup();
        let body = page.body().unwrap();
        let existing = page.add("div", "existing");

        notifier.success("first", None);
        notifier.warning("second", None);

        let children = page.children(body);
        assert_eq!(children.len(), 3);
        assert!(page.inner_html(&children[0]).starts_with("second"));
        assert!(page.inner_html(&children[1]).starts_with("first"));
        assert_eq!(children[2], existing);
    }

    #[test]
    fn test_default_delays_by_severity() {
        let (page, scheduler, notifier) = setup();
        let body = page.body().unwrap();

        notifier.success("ok", None);
        notifier.warning("hmm", None);
        notifier.error("bad", None);
        assert_eq!(page.children(body).len(), 3);

        scheduler.advance(3000);
        assert_eq!(page.children(body).len(), 2);
        scheduler.advance(1000);
        assert_eq!(page.children(body).len(), 1);
        scheduler.advance(1000);
        assert!(page.children(body).is_empty());
    }

    #[test]
    fn test_non_positive_delay_is_sticky() {
        let (page, scheduler, notifier) = setup();
        notifier.info("stays", Some(0));
        notifier.info("stays too", Some(-1));
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(60_000);
        assert_eq!(page.children(page.body().unwrap()).len(), 2);
    }

    #[test]
    fn test_custom_delay() {
        let (page, scheduler, notifier) = setup();
        notifier.error("quick", Some(100));
        scheduler.advance(99);
        assert_eq!(page.children(page.body().unwrap()).len(), 1);
        scheduler.advance(1);
        assert!(page.children(page.body().unwrap()).is_empty());
    }

    #[test]
    fn test_message_is_escaped() {
        let (page, _, notifier) = setup();
        notifier.info("<script>x</script>", None);
        let toast = page.children(page.body().unwrap())[0];
        assert!(page.inner_html(&toast).starts_with("&lt;script&gt;"));
    }
}
