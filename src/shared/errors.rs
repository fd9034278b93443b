use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Site configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Dom(format!("{:?}", value))
    }
}
