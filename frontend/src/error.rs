use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the rendering surface or browser capabilities.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl DomError {
    pub fn observer(value: JsValue) -> Self {
        DomError::Observer(describe(&value))
    }

    pub fn clipboard(value: JsValue) -> Self {
        DomError::Clipboard(describe(&value))
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode the request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected the message (status {0})")]
    Rejected(u16),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in your {0}")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_error_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "no browser window");
        assert_eq!(
            DomError::Clipboard("NotAllowedError".into()).to_string(),
            "clipboard unavailable: NotAllowedError"
        );
    }
}
