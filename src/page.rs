// Host page chores around the show: fitting the canvas to the viewport and
// restoring the page once the show is over.

use crate::config::PageConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Url, Window};

pub fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok(())
}

// Sets `display: none` on the element if the page has one with this id.
pub fn hide_element(document: &Document, id: &str) -> Result<(), JsValue> {
    if let Some(element) = document.get_element_by_id(id) {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            element.style().set_property("display", "none")?;
        }
    }
    Ok(())
}

// Path, query and fragment of `href` with the named query parameters removed.
pub fn address_without_params(href: &str, params: &[String]) -> Result<String, JsValue> {
    let url = Url::new(href)?;
    let search_params = url.search_params();
    for name in params {
        search_params.delete(name);
    }
    // URLSearchParams writes back through to url.search
    Ok(format!("{}{}{}", url.pathname(), url.search(), url.hash()))
}

// Rewrites the current history entry instead of pushing a new one
pub fn strip_query_params(window: &Window, params: &[String]) -> Result<(), JsValue> {
    let href = window.location().href()?;
    let address = address_without_params(&href, params)?;
    let title = window.document().map(|d| d.title()).unwrap_or_default();
    window
        .history()?
        .replace_state_with_url(&js_sys::Object::new(), &title, Some(address.as_str()))
}

pub fn restore(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    hide_element(document, &config.success_message_id)?;
    strip_query_params(window, &config.stripped_params)
}
