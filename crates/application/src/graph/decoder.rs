//! Response decoding
//!
//! Collapses the three outcomes of a send (transport failure, unparsable
//! body, remote `error` object) into [`GraphApiError`], and hands back the
//! decoded object otherwise.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use graphlink_domain::RawResponse;

use crate::error::{GraphApiError, GraphApiResult};
use crate::ports::TransportError;

/// A decoded JSON object body.
pub type DecodedBody = Map<String, Value>;

/// Shape of the remote `error` object. Only `code` and `message` are
/// guaranteed; the rest is diagnostic.
#[derive(Debug, Deserialize)]
struct RemoteError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    error_subcode: Option<i64>,
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    fbtrace_id: Option<String>,
}

impl From<RemoteError> for GraphApiError {
    fn from(err: RemoteError) -> Self {
        Self::Remote {
            code: err.code,
            subcode: err.error_subcode,
            message: err.message,
            error_type: err.error_type,
            fbtrace_id: err.fbtrace_id,
        }
    }
}

/// Decodes the outcome of a transport call.
///
/// The HTTP status plays no part: a 400 carrying a valid success-shaped body
/// decodes, and a 200 carrying an `error` object fails.
///
/// # Errors
///
/// - [`GraphApiError::Transport`] if the send step failed.
/// - [`GraphApiError::MalformedResponse`] if the body is empty, not JSON, or
///   not a JSON object.
/// - [`GraphApiError::Remote`] if the body has a non-null top-level `error`.
pub fn decode(outcome: Result<RawResponse, TransportError>) -> GraphApiResult<DecodedBody> {
    let response = outcome?;

    let value: Value =
        serde_json::from_str(&response.body).map_err(GraphApiError::syntax_error)?;

    let Value::Object(body) = value else {
        return Err(GraphApiError::syntax_error(
            "expected a JSON object at the top level",
        ));
    };

    if let Some(error) = body.get("error").filter(|error| !error.is_null()) {
        return Err(remote_error(error.clone()));
    }

    Ok(body)
}

fn remote_error(error: Value) -> GraphApiError {
    match serde_json::from_value::<RemoteError>(error) {
        Ok(remote) => remote.into(),
        // `error` present but not an object, e.g. a bare string
        Err(_) => GraphApiError::Remote {
            code: crate::error::GENERIC_ERROR_CODE,
            subcode: None,
            message: "malformed error object".to_string(),
            error_type: None,
            fbtrace_id: None,
        },
    }
}

/// Deserializes a decoded body into a typed view.
///
/// # Errors
///
/// Returns [`GraphApiError::MalformedResponse`] if a required key is missing
/// or has the wrong type.
pub fn project<T: DeserializeOwned>(body: DecodedBody) -> GraphApiResult<T> {
    serde_json::from_value(Value::Object(body)).map_err(|e| GraphApiError::MalformedResponse {
        code: crate::error::GENERIC_ERROR_CODE,
        message: format!("unexpected response shape: {e}"),
    })
}
