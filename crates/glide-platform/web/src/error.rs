use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    NoWindow,
    NoDocument,
    ElementNotFound(String),
    Js(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::NoWindow => write!(f, "no global window exists"),
            PlatformError::NoDocument => write!(f, "window has no document"),
            PlatformError::ElementNotFound(id) => write!(f, "element with id '{}' not found", id),
            PlatformError::Js(message) => write!(f, "javascript error: {}", message),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub(crate) fn window() -> Result<web_sys::Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            PlatformError::ElementNotFound("features".into()).to_string(),
            "element with id 'features' not found"
        );
        assert_eq!(PlatformError::NoWindow.to_string(), "no global window exists");
    }
}
