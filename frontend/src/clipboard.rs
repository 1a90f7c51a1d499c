use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlDocument, HtmlInputElement};

/// Copies `text` to the system clipboard.
///
/// Tries the async Clipboard API first and falls back to selecting `fallback`
/// and running the legacy copy command. Returns whether either path reported success.
pub async fn copy_text(text: String, fallback: Option<HtmlInputElement>) -> bool {
    match write_with_clipboard_api(&text).await {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Clipboard API failed, falling back to selection copy: {:?}", e);
            fallback.map(|input| copy_by_selection(&input)).unwrap_or(false)
        }
    }
}

async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("Clipboard API unavailable"));
    }

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn copy_by_selection(input: &HtmlInputElement) -> bool {
    let _ = input.focus();
    input.select();
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false)
}
