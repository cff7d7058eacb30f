use axum::http::StatusCode;

/// Malformed clock or seconds attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 4 `:`-separated fields in {input:?}, found {found}")]
    FieldCount { input: String, found: usize },
    #[error("{field} is not a number: {input:?}")]
    InvalidNumber { field: &'static str, input: String },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
    #[error("meridiem must be am or pm, got {0:?}")]
    InvalidMeridiem(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TickError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("{element} has no {attribute} attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint answered {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed data items: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
