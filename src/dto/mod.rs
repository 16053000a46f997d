use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

pub mod cart;
pub mod catalog;
pub mod checkout;

/// Detail attached to an error body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    /// Messages keyed by the camelCase name of the offending field.
    Fields(BTreeMap<String, Vec<String>>),
    Message(String),
}

impl From<&ValidationErrors> for ErrorDetails {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                (camel_case(&field), messages)
            })
            .collect();
        Self::Fields(fields)
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `{message, errors?}` body used for acknowledgements and error responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: ErrorDetails) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn field_errors_are_keyed_by_camel_case_name() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "first_name",
            ValidationError::new("length").with_message("First name is required".into()),
        );
        errors.add("pincode", ValidationError::new("length"));

        let details = ErrorDetails::from(&errors);
        let ErrorDetails::Fields(fields) = details else {
            panic!("expected field errors");
        };
        assert_eq!(fields["firstName"], vec!["First name is required"]);
        assert_eq!(fields["pincode"], vec!["length"]);
    }
}
