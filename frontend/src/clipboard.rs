use wasm_bindgen_futures::JsFuture;

use crate::error::DomError;

/// Puts `text` on the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map_err(DomError::clipboard)?;
    Ok(())
}
