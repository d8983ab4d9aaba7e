//! The `{status, message, data}` wrapper every backend response uses.
//!
//! List endpoints put a Spring-style [`Page`] inside `data`, single-record
//! endpoints put the record itself there. Instead of probing optional fields
//! at each call site, every endpoint picks exactly one decoder:
//! [`decode_page`] for lists, [`decode_record`] for single records and
//! [`decode_created`] for create responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps `data`, turning a non-2xx envelope status into an error.
    pub fn into_data(self) -> Result<T> {
        if (200..300).contains(&self.status) {
            Ok(self.data)
        } else {
            Err(ApiError::Envelope {
                status: self.status,
                message: self.message,
            })
        }
    }
}

/// Paginated container. Only `content` matters to the client; the rest is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

/// Envelope with `data` left undecoded, so the status can be checked before
/// the payload is interpreted.
#[derive(Deserialize)]
struct RawEnvelope {
    status: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

fn is_envelope(value: &Value) -> bool {
    value.get("status").is_some_and(Value::is_u64)
        && (value.get("data").is_some() || value.get("message").is_some())
}

fn open_envelope(value: Value) -> Result<Value> {
    let raw: RawEnvelope = serde_json::from_value(value)?;
    Envelope {
        status: raw.status,
        message: raw.message,
        data: raw.data,
    }
    .into_data()
}

/// Decodes a list response: `data.content`.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(body)?;
    let page: Page<T> = serde_json::from_value(open_envelope(value)?)?;
    Ok(page.content)
}

/// Decodes a single-record response: `data`.
///
/// Some endpoints answer with the bare record instead of an envelope; that
/// shape is accepted too.
pub fn decode_record<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    let record = if is_envelope(&value) {
        open_envelope(value)?
    } else {
        value
    };
    Ok(serde_json::from_value(record)?)
}

/// Decodes a create response, whose payload the client does not need.
///
/// A 2xx answer with an empty body or `null` data is still a success and
/// gives `None`; a non-2xx envelope is an error as usual.
pub fn decode_created<T: DeserializeOwned>(body: &str) -> Result<Option<T>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body)?;
    let record = if is_envelope(&value) {
        open_envelope(value)?
    } else {
        value
    };
    if record.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(record)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::subject::Subject;

    #[test]
    fn envelope_error_status_is_an_error() {
        let body = r#"{"status":404,"message":"Alumno no encontrado","data":null}"#;
        let err = decode_record::<Subject>(body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Envelope {
                status: 404,
                message: "Alumno no encontrado".into()
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = decode_page::<Subject>("not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
