//! Error type shared by the setup routines.
//!
//! Missing elements are not errors: setups report them as "not wired" and
//! return. Errors cover bad configuration, unparseable embedded JSON and
//! DOM calls that throw.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// A configuration record failed validation
    InvalidConfig(String),
    /// An embedded JSON block could not be parsed
    Json { block: String, message: String },
    /// A DOM call threw
    Dom(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            UiError::Json { block, message } => {
                write!(f, "Invalid JSON in #{}: {}", block, message)
            }
            UiError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type UiResult<T> = Result<T, UiError>;
