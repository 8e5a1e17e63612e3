use std::error::Error;
use std::panic::Location;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;

use crate::database::DatabaseError;

pub(crate) type HandlerResult<T> = Result<T, HandlerError>;

/// An error returned by an HTTP handler.
///
/// Rendered as an [RFC 9457] problem details object.
///
/// [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457.html
#[derive(Debug)]
pub(crate) enum HandlerError
{
	/// The requested resource does not exist.
	NotFound
	{
		resource: &'static str,
	},

	/// Talking to the database failed, or it returned inconsistent data.
	Internal,
}

#[derive(Debug, Serialize)]
struct ProblemDetails
{
	#[serde(rename = "type")]
	problem_type: &'static str,
	title: &'static str,
	status: u16,

	#[serde(skip_serializing_if = "Option::is_none")]
	detail: Option<String>,
}

impl HandlerError
{
	fn status(&self) -> StatusCode
	{
		match self {
			Self::NotFound { .. } => StatusCode::NOT_FOUND,
			Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn detail(&self) -> Option<String>
	{
		match self {
			Self::NotFound { resource } => Some(format!("{resource} not found")),
			Self::Internal => None,
		}
	}
}

impl IntoResponse for HandlerError
{
	fn into_response(self) -> Response
	{
		let status = self.status();
		let problem_details = ProblemDetails {
			problem_type: "about:blank",
			title: status.canonical_reason().unwrap_or("Unknown Error"),
			status: status.as_u16(),
			detail: self.detail(),
		};

		let mut response = (status, Json(problem_details)).into_response();

		response.headers_mut().insert(
			header::CONTENT_TYPE,
			HeaderValue::from_static("application/problem+json"),
		);

		response
	}
}

impl From<DatabaseError> for HandlerError
{
	#[track_caller]
	fn from(error: DatabaseError) -> Self
	{
		tracing::error!(
			loc = %Location::caller(),
			integrity = error.is_integrity_error(),
			error = &error as &dyn Error,
		);

		Self::Internal
	}
}

#[cfg(test)]
mod tests
{
	use http_body_util::BodyExt;

	use super::*;

	async fn render(error: HandlerError) -> (StatusCode, Option<HeaderValue>, serde_json::Value)
	{
		let response = error.into_response();
		let status = response.status();
		let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
		let body = response.into_body().collect().await.unwrap().to_bytes();

		(status, content_type, serde_json::from_slice(&body).unwrap())
	}

	#[tokio::test]
	async fn not_found_is_problem_details()
	{
		let (status, content_type, body) = render(HandlerError::NotFound { resource: "map" }).await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(content_type.unwrap(), "application/problem+json");
		assert_eq!(
			body,
			serde_json::json!({
				"type": "about:blank",
				"title": "Not Found",
				"status": 404,
				"detail": "map not found",
			}),
		);
	}

	#[tokio::test]
	async fn database_errors_are_internal()
	{
		let error = HandlerError::from(DatabaseError::MissingAggregate { table: "maps" });
		let (status, content_type, body) = render(error).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(content_type.unwrap(), "application/problem+json");
		assert_eq!(body["status"], 500);
		assert!(body.get("detail").is_none());
	}
}
