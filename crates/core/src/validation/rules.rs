//! Rule vocabulary and the aggregated failure type.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::lookup::Table;
use super::validators;

/// A single constraint applied to one request field.
///
/// String rules fail on non-string values. Lookup rules ([`Rule::Exists`],
/// [`Rule::Unique`]) are answered by a [`super::RecordLookup`] and only run
/// once every pure rule on the field has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Boolean,
    Integer,
    /// An integer that fits a 32-bit `INTEGER` column.
    Int32,
    AlphaSpace,
    AlphaNum,
    AlphaDash,
    Email,
    Decimal,
    ImageExtension,
    Base64,
    /// Value must be one of the listed strings.
    In(&'static [&'static str]),
    /// Value must be the id of a non-deleted row in the table.
    Exists(Table),
    /// No row in the table may already hold the value in the given column.
    Unique(Table, &'static str),
}

impl Rule {
    /// Message template; `:attribute` is replaced by the field name.
    pub fn template(&self) -> &'static str {
        match self {
            Rule::Required => "The :attribute field is required.",
            Rule::Boolean => "The :attribute field must be true or false.",
            Rule::Integer => "The :attribute must be an integer.",
            Rule::Int32 => {
                "The :attribute must be an integer between -2147483648 and 2147483647."
            }
            Rule::AlphaSpace => {
                "The :attribute must only contain letters, numbers, spaces and dashes."
            }
            Rule::AlphaNum => "The :attribute must only contain letters and numbers.",
            Rule::AlphaDash => {
                "The :attribute must only contain letters, numbers, dashes and underscores."
            }
            Rule::Email => "The :attribute must be a valid email address.",
            Rule::Decimal => "The :attribute must be decimal.",
            Rule::ImageExtension => "The :attribute must jpg, jpeg or png.",
            Rule::Base64 => "The :attribute must be base64 encoded.",
            Rule::In(_) | Rule::Exists(_) => "The selected :attribute is invalid.",
            Rule::Unique(..) => "The :attribute has already been taken.",
        }
    }

    /// Render the failure message for `field`.
    pub fn message(&self, field: &str) -> String {
        self.template()
            .replace(":attribute", &field.replace('_', " "))
    }

    /// Whether this rule needs a [`super::RecordLookup`].
    pub fn is_lookup(&self) -> bool {
        matches!(self, Rule::Exists(_) | Rule::Unique(..))
    }

    /// Evaluate a pure rule against a supplied (non-null) value.
    ///
    /// Presence and lookup rules always pass here; the evaluator handles them.
    pub fn passes(&self, value: &Value) -> bool {
        match self {
            Rule::Required | Rule::Exists(_) | Rule::Unique(..) => true,
            Rule::Boolean => value.is_boolean(),
            Rule::Integer => value.as_i64().is_some(),
            Rule::Int32 => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            Rule::AlphaSpace => value.as_str().is_some_and(validators::alpha_space),
            Rule::AlphaNum => value.as_str().is_some_and(validators::alpha_num),
            Rule::AlphaDash => value.as_str().is_some_and(validators::alpha_dash),
            Rule::Email => value.as_str().is_some_and(validators::email),
            Rule::ImageExtension => value.as_str().is_some_and(validators::image_extension),
            Rule::Base64 => value.as_str().is_some_and(validators::base64),
            Rule::Decimal => match value {
                Value::String(s) => validators::decimal(s),
                Value::Number(n) => validators::decimal(&n.to_string()),
                _ => false,
            },
            Rule::In(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        }
    }
}

/// Every failing field mapped to its messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for messages in self.0.values() {
            for message in messages {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(message)?;
                first = false;
            }
        }
        Ok(())
    }
}
