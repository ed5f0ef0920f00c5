use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A typed request in flight. Endpoints declare what they decode into and
/// call sites get uniform status + body handling.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, ApiError> {
		let response = match self.builder.send().await {
			Ok(response) => response,
			Err(err) => return Err(ApiError::Network(err.to_string())),
		};
		let status = response.status();
		let text = match response.text().await {
			Ok(text) => text,
			Err(err) => return Err(ApiError::Network(err.to_string())),
		};
		if !status.is_success() {
			return Err(ApiError::Server {
				status: status.as_u16(),
				body: text,
			});
		}
		match serde_json::from_str(&text) {
			Ok(data) => Ok(data),
			Err(err) => Err(ApiError::Decode(format!("invalid json {text:?}: {err}"))),
		}
	}
}

/// Transport failures may be retried as-is; a rejected request will keep
/// being rejected until its inputs change.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
	#[error("network error: {0}")]
	Network(String),
	#[error("server rejected the request (status {status}): {body}")]
	Server { status: u16, body: String },
	#[error("unreadable response: {0}")]
	Decode(String),
}

impl ApiError {
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::Network(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_transport_failures_are_retryable() {
		assert!(ApiError::Network("timeout".into()).is_retryable());
		assert!(!ApiError::Server {
			status: 500,
			body: String::new()
		}
		.is_retryable());
		assert!(!ApiError::Decode("trailing characters".into()).is_retryable());
	}

	#[test]
	fn server_errors_carry_the_status() {
		let err = ApiError::Server {
			status: 404,
			body: "no such user".into(),
		};
		assert!(err.to_string().contains("404"));
	}
}
