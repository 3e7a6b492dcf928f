use actix_web::{
    body::BoxBody,
    error::BlockingError,
    http::{
        self,
        header::{self, HeaderValue},
    },
    HttpResponse, ResponseError,
};
use derive_more::Display;
use diesel::result::Error as DBError;
use serde_json::json;

/// Every way a todo request can fail.
///
/// Handlers tell the kinds apart by matching on the variant, the HTTP status
/// comes from [`ResponseError::status_code`].
#[derive(Debug, Clone, Display, PartialEq)]
pub enum TodoApiError {
    /// A required field is missing or invalid, raised before touching storage
    #[display(fmt = "BadRequest: {}", _0)]
    BadRequest(String),

    /// A mutation targeted no existing row
    #[display(fmt = "{}", _0)]
    NotFound(String),

    /// Any other statement failure
    #[display(fmt = "Database Error: {}", _0)]
    DatabaseError(String),

    #[display(fmt = "Database Connection Error")]
    DatabaseConnectionError,

    #[display(fmt = "Internal Server Error")]
    InternalServerError,
}

impl TodoApiError {
    pub fn not_found(todo_id: i64) -> Self {
        TodoApiError::NotFound(format!("todo {} not found", todo_id))
    }

    /// Validation and not-found errors are the caller's fault, everything
    /// else is ours and gets logged
    pub fn is_server_error(&self) -> bool {
        !matches!(
            self,
            TodoApiError::BadRequest(_) | TodoApiError::NotFound(_)
        )
    }
}

impl ResponseError for TodoApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            TodoApiError::BadRequest(_) => http::StatusCode::BAD_REQUEST,
            TodoApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            TodoApiError::DatabaseError(_)
            | TodoApiError::DatabaseConnectionError
            | TodoApiError::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        // 400 and 404 short-circuit with an empty body
        if !self.is_server_error() {
            return HttpResponse::new(self.status_code());
        }

        let mut res = HttpResponse::new(self.status_code());

        res.headers_mut().append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        res.set_body(BoxBody::new(json!({"error": self.to_string()}).to_string()))
    }
}

impl From<r2d2::Error> for TodoApiError {
    fn from(_: r2d2::Error) -> Self {
        TodoApiError::DatabaseConnectionError
    }
}

impl From<BlockingError> for TodoApiError {
    fn from(_: BlockingError) -> Self {
        TodoApiError::InternalServerError
    }
}

impl From<DBError> for TodoApiError {
    fn from(error: DBError) -> Self {
        match error {
            DBError::NotFound => TodoApiError::NotFound(String::from("todo not found")),
            _ => TodoApiError::DatabaseError(error.to_string()),
        }
    }
}
