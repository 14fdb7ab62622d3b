//! Error types shared by the pure models and the DOM bindings.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while driving the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// A required DOM element (selector or id) is not on the page.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// No browser `window` / `document` (e.g. running outside a page).
    #[error("no browser window")]
    MissingWindow,

    /// The window catalog has no definition for the identifier.
    #[error("unknown window: {0}")]
    UnknownWindow(String),

    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),

    /// Site configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        PortfolioError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::MissingElement("#clock".to_string());
        assert_eq!(err.to_string(), "missing element: #clock");

        let err = PortfolioError::UnknownWindow("games".to_string());
        assert_eq!(err.to_string(), "unknown window: games");

        assert_eq!(PortfolioError::MissingWindow.to_string(), "no browser window");
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: PortfolioError = parse.unwrap_err().into();
        assert!(matches!(err, PortfolioError::Config(_)));
    }
}
