use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::focus::ElementKind;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())
}

pub(super) fn current_href() -> Result<String, String> {
    window()?
        .location()
        .href()
        .map_err(|e| format!("location.href failed: {e:?}"))
}

pub(super) fn replace_href(href: &str) -> Result<(), String> {
    let history = window()?
        .history()
        .map_err(|e| format!("history unavailable: {e:?}"))?;
    history
        .replace_state_with_url(&Object::new(), "", Some(href))
        .map_err(|e| format!("history.replaceState failed: {e:?}"))
}

pub(super) async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let navigator = window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| format!("navigator.clipboard lookup failed: {e:?}"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard unavailable".to_string());
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("clipboard.writeText lookup failed: {e:?}"))?
        .dyn_into::<Function>()
        .map_err(|_| "clipboard.writeText is not callable".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("clipboard.writeText failed: {e:?}"))?
        .dyn_into::<Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write rejected: {e:?}"))
}

pub(super) fn download_text(file_name: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    let parts = Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob creation failed: {e:?}"))?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("object URL creation failed: {e:?}"))?;

    let anchor = document()?
        .create_element("a")
        .map_err(|e| format!("anchor creation failed: {e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&object_url);
    anchor.set_download(file_name);

    let body = document()?
        .body()
        .ok_or_else(|| "document body unavailable".to_string())?;
    body.append_child(&anchor)
        .map_err(|e| format!("anchor attach failed: {e:?}"))?;
    anchor.click();
    anchor.remove();

    // The download reads the object URL asynchronously; revoke on the next task.
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&object_url) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "object URL revoke failed: {e:?}"
            )));
        }
    });
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), 0)
        .map(|_| ())
        .map_err(|e| format!("revoke scheduling failed: {e:?}"))
}

pub(super) fn focus_element_by_id(id: &str) -> bool {
    let Ok(document) = document() else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    element.focus().is_ok()
}

pub(super) fn active_element_kind() -> Option<ElementKind> {
    let element = document().ok()?.active_element()?;
    let input_type = element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.type_());
    let content_editable = element
        .dyn_ref::<web_sys::HtmlElement>()
        .is_some_and(|html| html.is_content_editable());
    Some(ElementKind {
        tag_name: element.tag_name(),
        input_type,
        content_editable,
    })
}
