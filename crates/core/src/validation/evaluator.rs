//! Schema evaluator. Collects every field failure before returning.

use serde_json::{Map, Value};

use super::lookup::RecordLookup;
use super::rules::{FieldErrors, Rule};
use crate::error::CoreError;

/// Rules attached to one request field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// A declarative set of field rules for one operation.
///
/// A partial schema ignores [`Rule::Required`], so only supplied fields are
/// checked. Absent and `null` fields are treated as not supplied.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldSpec],
    partial: bool,
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            partial: false,
        }
    }

    /// The same rules with every field optional.
    pub const fn partial(self) -> Self {
        Self {
            fields: self.fields,
            partial: true,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Validate `data`, returning [`CoreError::Validation`] with every
    /// failing field, or [`CoreError::Internal`] if a lookup fails.
    pub async fn validate(
        &self,
        data: &Map<String, Value>,
        lookup: &dyn RecordLookup,
    ) -> Result<(), CoreError> {
        let mut errors = FieldErrors::default();

        for field in self.fields {
            let value = match data.get(field.name) {
                None | Some(Value::Null) => {
                    if field.is_required() && !self.partial {
                        errors.add(field.name, Rule::Required.message(field.name));
                    }
                    continue;
                }
                Some(Value::String(s)) if s.is_empty() && field.is_required() && !self.partial => {
                    errors.add(field.name, Rule::Required.message(field.name));
                    continue;
                }
                Some(value) => value,
            };

            let mut failed = false;
            for rule in field.rules {
                if !rule.passes(value) {
                    errors.add(field.name, rule.message(field.name));
                    failed = true;
                }
            }
            if failed {
                continue;
            }

            for rule in field.rules.iter().filter(|r| r.is_lookup()) {
                if !passes_lookup(rule, value, lookup).await? {
                    errors.add(field.name, rule.message(field.name));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

async fn passes_lookup(
    rule: &Rule,
    value: &Value,
    lookup: &dyn RecordLookup,
) -> Result<bool, CoreError> {
    match rule {
        Rule::Exists(table) => match value.as_i64() {
            Some(id) => lookup.exists(*table, id).await,
            None => Ok(false),
        },
        Rule::Unique(table, column) => match value.as_str() {
            Some(s) => Ok(!lookup.is_taken(*table, column, s).await?),
            None => Ok(false),
        },
        _ => Ok(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;
    use crate::validation::lookup::Table;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;

    /// Lookup answering from fixed lists.
    #[derive(Default)]
    struct FixedLookup {
        rows: Vec<(Table, DbId)>,
        taken: Vec<(Table, &'static str, String)>,
        broken: bool,
    }

    #[async_trait]
    impl RecordLookup for FixedLookup {
        async fn exists(&self, table: Table, id: DbId) -> Result<bool, CoreError> {
            if self.broken {
                return Err(CoreError::Internal("connection refused".into()));
            }
            Ok(self.rows.contains(&(table, id)))
        }

        async fn is_taken(
            &self,
            table: Table,
            column: &'static str,
            value: &str,
        ) -> Result<bool, CoreError> {
            Ok(self
                .taken
                .iter()
                .any(|(t, c, v)| *t == table && *c == column && v == value))
        }
    }

    const WIDGET: Schema = Schema::new(&[
        FieldSpec::new("name", &[Rule::Required, Rule::AlphaSpace]),
        FieldSpec::new("count", &[Rule::Integer]),
        FieldSpec::new(
            "subtype_id",
            &[Rule::Required, Rule::Integer, Rule::Exists(Table::Subtypes)],
        ),
        FieldSpec::new("email", &[Rule::Email, Rule::Unique(Table::Users, "email")]),
    ]);

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn lookup() -> FixedLookup {
        FixedLookup {
            rows: vec![(Table::Subtypes, 1)],
            taken: vec![(Table::Users, "email", "taken@example.com".into())],
            broken: false,
        }
    }

    #[tokio::test]
    async fn valid_payload_passes() {
        let payload = data(json!({"name": "Dark Magician", "subtype_id": 1, "count": 3}));
        assert_matches!(WIDGET.validate(&payload, &lookup()).await, Ok(()));
    }

    #[tokio::test]
    async fn collects_every_failing_field() {
        let payload = data(json!({"name": "Bad_Name!", "count": "three"}));
        let err = WIDGET.validate(&payload, &lookup()).await.unwrap_err();
        let errors = assert_matches!(err, CoreError::Validation(errors) => errors);

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get("subtype_id").unwrap(),
            ["The subtype id field is required."]
        );
        assert!(errors.contains("name"));
        assert_eq!(errors.get("count").unwrap(), ["The count must be an integer."]);
    }

    #[tokio::test]
    async fn empty_string_counts_as_missing_when_required() {
        let payload = data(json!({"name": "", "subtype_id": 1}));
        let err = WIDGET.validate(&payload, &lookup()).await.unwrap_err();
        let errors = assert_matches!(err, CoreError::Validation(errors) => errors);
        assert_eq!(errors.get("name").unwrap(), ["The name field is required."]);
    }

    #[tokio::test]
    async fn missing_reference_fails_exists() {
        let payload = data(json!({"name": "Kuriboh", "subtype_id": 99}));
        let err = WIDGET.validate(&payload, &lookup()).await.unwrap_err();
        let errors = assert_matches!(err, CoreError::Validation(errors) => errors);
        assert_eq!(
            errors.get("subtype_id").unwrap(),
            ["The selected subtype id is invalid."]
        );
    }

    #[tokio::test]
    async fn lookup_is_skipped_when_pure_rules_fail() {
        let broken = FixedLookup {
            broken: true,
            ..lookup()
        };
        let payload = data(json!({"name": "Kuriboh", "subtype_id": "one"}));
        let err = WIDGET.validate(&payload, &broken).await.unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[tokio::test]
    async fn lookup_failure_is_internal() {
        let broken = FixedLookup {
            broken: true,
            ..lookup()
        };
        let payload = data(json!({"name": "Kuriboh", "subtype_id": 1}));
        let err = WIDGET.validate(&payload, &broken).await.unwrap_err();
        assert_matches!(err, CoreError::Internal(_));
    }

    #[tokio::test]
    async fn unique_rejects_taken_value() {
        let payload = data(json!({
            "name": "Yugi",
            "subtype_id": 1,
            "email": "taken@example.com"
        }));
        let err = WIDGET.validate(&payload, &lookup()).await.unwrap_err();
        let errors = assert_matches!(err, CoreError::Validation(errors) => errors);
        assert_eq!(
            errors.get("email").unwrap(),
            ["The email has already been taken."]
        );
    }

    #[tokio::test]
    async fn partial_schema_only_checks_supplied_fields() {
        let partial = WIDGET.partial();
        assert_matches!(partial.validate(&Map::new(), &lookup()).await, Ok(()));

        let payload = data(json!({"name": ""}));
        let err = partial.validate(&payload, &lookup()).await.unwrap_err();
        let errors = assert_matches!(err, CoreError::Validation(errors) => errors);
        assert_eq!(
            errors.get("name").unwrap(),
            ["The name must only contain letters, numbers, spaces and dashes."]
        );
    }

    #[tokio::test]
    async fn null_is_not_supplied() {
        let payload = data(json!({"name": "Kuriboh", "subtype_id": 1, "count": null}));
        assert_matches!(WIDGET.validate(&payload, &lookup()).await, Ok(()));
    }
}
