use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

pub mod error;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*[\r\n]+[ \t]*").unwrap());

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank"));
  }

  Ok(())
}

/// Collapses line breaks (and the blanks around them) into a single space so
/// the value can sit inside a header.
pub fn single_line(value: &str) -> String {
  LINE_BREAKS.replace_all(value, " ").into_owned()
}
