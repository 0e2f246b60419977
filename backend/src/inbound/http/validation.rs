//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Error listing every required field the request left out.
pub(crate) fn missing_fields(fields: &[&str]) -> Error {
    Error::invalid_request(format!("Missing required fields: {}", fields.join(", ")))
        .with_details(json!({ "fields": fields, "code": "missing_field" }))
}

/// Collects missing required fields while a request body is converted.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Take a required string; blank counts as missing.
    pub(crate) fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// Take a required non-string value.
    pub(crate) fn value<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    /// `Ok` when nothing was missing.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(missing_fields(&self.missing))
        }
    }
}

/// Treat blank strings as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
