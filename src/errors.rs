use crate::journal::JournalError;
use axum::http::StatusCode;
use chrono::NaiveDate;
use std::fmt::Display;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn out_of_range(field: &str, min: impl Display, max: impl Display) -> Self {
        Self::bad_request(format!("{field} must be between {min} and {max}"))
    }

    pub fn unsupported_date(field: &str, date: NaiveDate) -> Self {
        Self::bad_request(format!("{field} {date} is outside the supported calendar"))
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        }
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_errors_are_client_errors() {
        let err = AppError::from(JournalError::UnknownMoodTag("Bored".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "unknown mood tag 'Bored'");
    }

    #[test]
    fn range_and_date_messages_name_the_field() {
        assert_eq!(
            AppError::out_of_range("pain_level", 0, 10).message,
            "pain_level must be between 0 and 10"
        );
        let date = NaiveDate::from_ymd_opt(12000, 1, 1).unwrap();
        assert_eq!(
            AppError::unsupported_date("date", date).message,
            "date +12000-01-01 is outside the supported calendar"
        );
    }
}
