use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::service::ContactServiceError;
use crate::utils::validate_not_blank;

pub const SENT_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactRequest {
  #[serde(default)]
  #[validate(custom(function = "validate_not_blank"))]
  pub name: String,
  #[serde(default)]
  #[validate(custom(function = "validate_not_blank"))]
  pub phone: String,
  #[serde(default)]
  #[validate(custom(function = "validate_not_blank"))]
  pub message: String,
}

/// A validated form submission. Fields are trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
  pub name: String,
  pub phone: String,
  pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactResponse {
  pub message: String,
}

impl ContactResponse {
  pub fn sent() -> Self {
    Self {
      message: SENT_MESSAGE.to_string(),
    }
  }
}

impl ContactRequest {
  pub fn into_submission(self) -> Result<ContactSubmission, ContactServiceError> {
    self.validate().map_err(|_| ContactServiceError::MissingFields)?;

    Ok(ContactSubmission {
      name: self.name.trim().to_string(),
      phone: self.phone.trim().to_string(),
      message: self.message.trim().to_string(),
    })
  }
}

impl ContactSubmission {
  /// Parses a raw request body. Anything that is not JSON, or is an empty JSON
  /// value, counts as no data; a body that is present but lacks usable string
  /// fields counts as missing fields.
  pub fn from_body(body: &[u8]) -> Result<Self, ContactServiceError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ContactServiceError::NoData)?;
    if is_empty_payload(&value) {
      return Err(ContactServiceError::NoData);
    }
    if !value.is_object() {
      return Err(ContactServiceError::MissingFields);
    }

    let request: ContactRequest = serde_json::from_value(value).map_err(|_| ContactServiceError::MissingFields)?;
    request.into_submission()
  }
}

fn is_empty_payload(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !*b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(items) => items.is_empty(),
    Value::Object(fields) => fields.is_empty(),
  }
}
