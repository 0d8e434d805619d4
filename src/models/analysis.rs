use std::collections::BTreeMap;

use garde::Validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path used in [`SchemaIssues`] for problems with the value as a whole.
pub const ROOT_PATH: &str = "_root";

/// Flower identification and care guidance produced by the vision model.
///
/// The server only builds this through [`AnalysisResult::from_value`]; the
/// `Deserialize` impl exists for clients reading `{"result": ...}` back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalysisResult {
    /// Common name, with the Latin name in parentheses when known.
    #[garde(length(min = 1))]
    pub flower_name: String,

    #[garde(length(min = 1))]
    pub watering_schedule: String,

    #[garde(skip)]
    #[serde(default)]
    pub care_recommendations: Vec<String>,

    #[garde(length(min = 1))]
    pub health_assessment: String,

    /// Identification confidence in `[0, 1]`. Out-of-range values are rejected.
    #[garde(range(min = 0.0, max = 1.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[garde(skip)]
    #[serde(default)]
    pub issues: Vec<String>,

    #[garde(skip)]
    #[serde(default)]
    pub tips: Vec<String>,

    #[garde(inner(url))]
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Field-level validation failures, keyed by field path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaIssues(BTreeMap<String, Vec<String>>);

impl SchemaIssues {
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl AnalysisResult {
    /// Validate untrusted model output.
    ///
    /// Type errors are checked per field first, then the constraint rules.
    /// Every failing field is reported; a field is only reported once.
    pub fn from_value(value: Value) -> Result<Self, SchemaIssues> {
        let mut issues = SchemaIssues::default();

        let mut object = match value {
            Value::Object(object) => object,
            other => {
                issues.push(ROOT_PATH, format!("expected object, received {}", kind(&other)));
                return Err(issues);
            }
        };

        let mut fields = FieldReader {
            object: &mut object,
            issues: &mut issues,
        };

        let candidate = AnalysisResult {
            flower_name: fields.required("flower_name"),
            watering_schedule: fields.required("watering_schedule"),
            care_recommendations: fields.list("care_recommendations"),
            health_assessment: fields.required("health_assessment"),
            confidence: fields.optional("confidence"),
            issues: fields.list("issues"),
            tips: fields.list("tips"),
            sources: fields.list("sources"),
        };

        if let Err(report) = candidate.validate() {
            for (path, error) in report.iter() {
                let path = path.to_string();
                if !issues.contains(&path) {
                    issues.push(path, error.to_string());
                }
            }
        }

        if issues.is_empty() {
            Ok(candidate)
        } else {
            Err(issues)
        }
    }
}

/// Pulls typed fields out of a JSON object, recording type errors by key.
struct FieldReader<'a> {
    object: &'a mut Map<String, Value>,
    issues: &'a mut SchemaIssues,
}

impl FieldReader<'_> {
    fn required(&mut self, key: &str) -> String {
        if !self.present(key) {
            self.issues.push(key, "required");
        }
        self.optional(key).unwrap_or_default()
    }

    fn list(&mut self, key: &str) -> Vec<String> {
        self.optional(key).unwrap_or_default()
    }

    /// Absent and `null` both read as `None`.
    fn optional<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        match self.object.remove(key) {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value(value) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    self.issues.push(key, e.to_string());
                    None
                }
            },
        }
    }

    fn present(&self, key: &str) -> bool {
        matches!(self.object.get(key), Some(value) if !value.is_null())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
