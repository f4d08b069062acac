use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors emitted while locating or restyling the sidebar elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("not an HTML element: {0}")]
    NotHtmlElement(&'static str),
    #[error("{0} not available")]
    Unavailable(&'static str),
    #[error("browser call failed: {0}")]
    Browser(String),
}

impl ToggleError {
    pub fn browser(err: JsValue) -> Self {
        ToggleError::Browser(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
