use serde_json::{Map, Value};

/// How a form field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
    TextArea,
    /// Drop-down of `(value, label)` pairs
    Select(&'static [(&'static str, &'static str)]),
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used both in the draft and in the request body
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self { name, label, input, required: true }
    }

    pub const fn optional(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self { name, label, input, required: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),
}

/// Current form contents, one string per field, in field order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl FormDraft {
    /// An empty draft for the given field table
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn get(&self, name: &str) -> &str {
        self.position(name)
            .map(|index| self.values[index].as_str())
            .unwrap_or("")
    }

    /// Returns false if the draft has no such field
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.position(name) {
            Some(index) => {
                self.values[index] = value.into();
                true
            }
            None => false,
        }
    }

    /// Builder-style `set`, handy when assembling drafts in code
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|value| value.is_empty())
    }

    /// Every required field must be non-empty once trimmed.
    /// Reports the first offending field in field order.
    pub fn validate(&self) -> Result<(), DraftError> {
        self.fields
            .iter()
            .zip(&self.values)
            .find(|(spec, value)| spec.required && value.trim().is_empty())
            .map_or(Ok(()), |(spec, _)| Err(DraftError::MissingField(spec.name)))
    }

    /// Flat JSON object of the raw string values, as posted to the API
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| (spec.name.to_string(), Value::String(value.clone())))
            .collect();
        Value::Object(map)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }
}
