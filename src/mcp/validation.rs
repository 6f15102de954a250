//! Tool argument validation
//!
//! The dashboard tools accept a closed object with a single optional string
//! field, `query`. Every violation is collected so the caller can report them
//! all at once.

use serde::Serialize;
use serde_json::{Map, Value};

/// Validated arguments of a dashboard tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardInput {
    /// Free-text focus hint. Echoed verbatim, never interpreted.
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// `query` present but not a string
    StringType,
    /// A field other than `query`
    ExtraForbidden,
    /// The arguments are not an object
    ModelType,
}

impl IssueKind {
    fn message(self) -> &'static str {
        match self {
            IssueKind::StringType => "Input should be a valid string",
            IssueKind::ExtraForbidden => "Extra inputs are not permitted",
            IssueKind::ModelType => "Input should be a valid dictionary",
        }
    }
}

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Path of the offending field; empty for the arguments object itself
    pub loc: Vec<String>,
    pub msg: &'static str,
    /// The rejected value
    pub input: Value,
}

impl ValidationIssue {
    fn new(kind: IssueKind, loc: Vec<String>, input: Value) -> Self {
        Self {
            kind,
            loc,
            msg: kind.message(),
            input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", render_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

/// Renders issues as a JSON array.
fn render_issues(issues: &[ValidationIssue]) -> String {
    serde_json::to_string(issues)
        .unwrap_or_else(|_| format!("{} validation issue(s)", issues.len()))
}

/// Validates raw tool arguments. `null` counts as an empty object.
pub fn validate_dashboard_input(args: &Value) -> Result<DashboardInput, ValidationError> {
    match args {
        Value::Null => Ok(DashboardInput::default()),
        Value::Object(fields) => validate_fields(fields),
        other => Err(ValidationError {
            issues: vec![ValidationIssue::new(
                IssueKind::ModelType,
                Vec::new(),
                other.clone(),
            )],
        }),
    }
}

fn validate_fields(fields: &Map<String, Value>) -> Result<DashboardInput, ValidationError> {
    let mut issues = Vec::new();

    let query = match fields.get("query") {
        None => String::new(),
        Some(Value::String(q)) => q.clone(),
        Some(other) => {
            issues.push(ValidationIssue::new(
                IssueKind::StringType,
                vec!["query".to_string()],
                other.clone(),
            ));
            String::new()
        }
    };

    for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "query") {
        issues.push(ValidationIssue::new(
            IssueKind::ExtraForbidden,
            vec![key.clone()],
            value.clone(),
        ));
    }

    if issues.is_empty() {
        Ok(DashboardInput { query })
    } else {
        Err(ValidationError { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_query_defaults_to_empty() {
        assert_eq!(validate_dashboard_input(&json!({})).unwrap().query, "");
        assert_eq!(validate_dashboard_input(&Value::Null).unwrap().query, "");
    }

    #[test]
    fn accepts_string_query() {
        let input = validate_dashboard_input(&json!({ "query": "office buildings" })).unwrap();
        assert_eq!(input.query, "office buildings");

        let empty = validate_dashboard_input(&json!({ "query": "" })).unwrap();
        assert_eq!(empty.query, "");
    }

    #[test]
    fn rejects_non_string_query() {
        let err = validate_dashboard_input(&json!({ "query": 123 })).unwrap_err();

        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].kind, IssueKind::StringType);
        assert_eq!(err.issues[0].loc, vec!["query"]);
        assert_eq!(err.issues[0].input, json!(123));
    }

    #[test]
    fn rejects_null_query() {
        let err = validate_dashboard_input(&json!({ "query": null })).unwrap_err();
        assert_eq!(err.issues[0].kind, IssueKind::StringType);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = validate_dashboard_input(&json!({ "unexpected": "x" })).unwrap_err();

        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].kind, IssueKind::ExtraForbidden);
        assert_eq!(err.issues[0].loc, vec!["unexpected"]);
    }

    #[test]
    fn reports_every_violation() {
        let err =
            validate_dashboard_input(&json!({ "query": false, "a": 1, "b": 2 })).unwrap_err();

        let kinds: Vec<_> = err.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::StringType,
                IssueKind::ExtraForbidden,
                IssueKind::ExtraForbidden
            ]
        );
    }

    #[test]
    fn rejects_non_object_arguments() {
        let err = validate_dashboard_input(&json!(["query"])).unwrap_err();

        assert_eq!(err.issues[0].kind, IssueKind::ModelType);
        assert!(err.issues[0].loc.is_empty());
    }

    #[test]
    fn display_lists_issues_as_json() {
        let err = validate_dashboard_input(&json!({ "unexpected": "x" })).unwrap_err();
        let rendered = err.to_string();

        assert!(rendered.starts_with('['));
        assert!(rendered.contains("\"type\":\"extra_forbidden\""));
        assert!(rendered.contains("\"loc\":[\"unexpected\"]"));
    }
}
