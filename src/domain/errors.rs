use derive_more::Display;

/// One error type for the whole page runtime.
///
/// Missing DOM anchors are not errors: components report them as
/// [`MountOutcome::Absent`](crate::application::MountOutcome) instead.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Structured data embedded in the page could not be decoded.
    #[display(fmt = "Binding Error: {} ({})", attribute, reason)]
    MalformedData { attribute: &'static str, reason: String },
    /// A required data attribute is missing from its container.
    #[display(fmt = "Binding Error: missing attribute {}", _0)]
    MissingAttribute(&'static str),
    /// Paired series that must line up element by element do not.
    #[display(fmt = "Binding Error: {} labels but {} values", labels, values)]
    LengthMismatch { labels: usize, values: usize },
    #[display(fmt = "Browser API Error: {}", _0)]
    BrowserApi(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wraps a value thrown by a browser API call.
    pub fn browser(context: &str, thrown: wasm_bindgen::JsValue) -> Self {
        let detail = thrown
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&thrown, &"message".into())
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", thrown));
        AppError::BrowserApi(format!("{}: {}", context, detail))
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
