use std::time::Duration;

use axum::body::Body;
use http::{Request, Response};
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};

pub(crate) fn layer() -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<Body> + Clone,
	impl OnRequest<Body> + Clone,
	impl OnResponse<Body> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span)
		.on_request(on_request)
		.on_response(on_response)
		.on_failure(on_failure)
}

fn make_span(_: &Request<Body>) -> tracing::Span
{
	tracing::info_span!(
		target: "csmaps_api::http",
		"request",
		req.method = tracing::field::Empty,
		req.uri = tracing::field::Empty,
		req.version = tracing::field::Empty,
		res.status = tracing::field::Empty,
	)
}

fn on_request(req: &Request<Body>, span: &tracing::Span)
{
	span.record("req.method", tracing::field::debug(req.method()));
	span.record("req.uri", tracing::field::display(req.uri()));
	span.record("req.version", tracing::field::debug(req.version()));

	info!(target: "csmaps_api::http", "starting to process request");
}

fn on_response(res: &Response<Body>, latency: Duration, span: &tracing::Span)
{
	span.record("res.status", res.status().as_u16());

	info!(target: "csmaps_api::http", ?latency, "finished processing request");
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span)
{
	match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			error!(
				target: "csmaps_api::http::error",
				status = status.as_u16(),
				?latency,
				"failed to handle request",
			);
		},
		ServerErrorsFailureClass::Error(error) => {
			error!(
				target: "csmaps_api::http::error",
				error,
				?latency,
				"failed to handle request",
			);
		},
	}
}
