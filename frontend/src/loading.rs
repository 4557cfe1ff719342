//! Busy indicators for panels and buttons.
//!
//! State lives in the DOM only: a panel is "loading" while it shows the
//! spinner markup, a button while it is disabled with the inline spinner.

use crate::format::escape_html;
use crate::surface::{Surface, Target};

pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub const DEFAULT_BUTTON_LABEL: &str = "Enviar";
pub const DEFAULT_LOADING_MESSAGE: &str = "A carregar...";

const BUTTON_SPINNER: &str =
    r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>A processar..."#;

fn spinner_markup(message: &str) -> String {
    format!(
        r#"<div class="text-center py-3"><div class="spinner-border text-primary" role="status"><span class="visually-hidden">{msg}</span></div><p class="mt-2 mb-0">{msg}</p></div>"#,
        msg = escape_html(message)
    )
}

/// Fill `target` with a spinner and make it visible.
pub fn show_loading<'a, S: Surface>(
    surface: &S,
    target: impl Into<Target<'a, S::Element>>,
    message: Option<&str>,
) where
    S::Element: 'a,
{
    let target: Target<'a, S::Element> = target.into();
    let Some(el) = target.resolve(surface) else {
        return;
    };
    surface.set_inner_html(&el, &spinner_markup(message.unwrap_or(DEFAULT_LOADING_MESSAGE)));
    surface.set_display(&el, "block");
}

/// Clear `target` and hide it again.
pub fn hide_loading<'a, S: Surface>(surface: &S, target: impl Into<Target<'a, S::Element>>)
where
    S::Element: 'a,
{
    let target: Target<'a, S::Element> = target.into();
    let Some(el) = target.resolve(surface) else {
        return;
    };
    surface.set_inner_html(&el, "");
    surface.set_display(&el, "none");
}

/// Cache the button's current markup so [`set_button_loading`] can restore
/// it. Callers that skip this get [`DEFAULT_BUTTON_LABEL`] back.
pub fn remember_button_text<'a, S: Surface>(surface: &S, target: impl Into<Target<'a, S::Element>>)
where
    S::Element: 'a,
{
    let target: Target<'a, S::Element> = target.into();
    let Some(button) = target.resolve(surface) else {
        return;
    };
    let current = surface.inner_html(&button);
    surface.set_attribute(&button, ORIGINAL_TEXT_ATTR, &current);
}

pub fn set_button_loading<'a, S: Surface>(
    surface: &S,
    target: impl Into<Target<'a, S::Element>>,
    loading: bool,
) where
    S::Element: 'a,
{
    let target: Target<'a, S::Element> = target.into();
    let Some(button) = target.resolve(surface) else {
        return;
    };
    if loading {
        surface.set_disabled(&button, true);
        surface.set_inner_html(&button, BUTTON_SPINNER);
    } else {
        surface.set_disabled(&button, false);
        let original = surface
            .attribute(&button, ORIGINAL_TEXT_ATTR)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_BUTTON_LABEL.to_string());
        surface.set_inner_html(&button, &original);
    }
}
