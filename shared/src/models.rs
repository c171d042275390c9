use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A spending budget for one category over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Server-assigned identifier (absent on locally inserted drafts)
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub amount: f64,
    /// ISO 8601 date as sent by the server
    #[serde(rename = "startDate", default, deserialize_with = "null_as_empty")]
    pub start_date: String,
    /// ISO 8601 date as sent by the server
    #[serde(rename = "endDate", default, deserialize_with = "null_as_empty")]
    pub end_date: String,
}

/// A single income record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "category_or_other")]
    pub category: IncomeCategory,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Where an income came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Salary,
    Freelancing,
    Investment,
    Bank,
    /// Also absorbs any category value the server adds later
    #[serde(other)]
    #[default]
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 5] = [
        IncomeCategory::Salary,
        IncomeCategory::Freelancing,
        IncomeCategory::Investment,
        IncomeCategory::Bank,
        IncomeCategory::Other,
    ];

    /// Wire value, as posted in form bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "salary",
            IncomeCategory::Freelancing => "freelancing",
            IncomeCategory::Investment => "investment",
            IncomeCategory::Bank => "bank",
            IncomeCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Freelancing => "Freelancing",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Bank => "Bank",
            IncomeCategory::Other => "Other",
        }
    }

    /// Parse a form value; anything unrecognised maps to `Other`
    pub fn from_form_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
            .unwrap_or(IncomeCategory::Other)
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login form contents. Wiped from memory when dropped.
#[derive(Clone, Default, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Amounts come back as numbers from the API but as strings from form drafts.
/// A record saved from a blank form holds `null` or `""`; both read as 0.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Raw::Number(value)) => Ok(value),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(0.0),
        Some(Raw::Text(text)) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_or_other<'de, D>(deserializer: D) -> Result<IncomeCategory, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IncomeCategory>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a form amount the way the list shows it; blanks and garbage become 0.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_budget_entry_from_server_json() {
        let entry: BudgetEntry = serde_json::from_value(json!({
            "_id": "65a1",
            "category": "Food",
            "amount": 100,
            "startDate": "2024-01-01T00:00:00.000Z",
            "endDate": "2024-01-31T00:00:00.000Z",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(entry.id.as_deref(), Some("65a1"));
        assert_eq!(entry.category, "Food");
        assert_eq!(entry.amount, 100.0);
        assert_eq!(entry.start_date, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_amount_accepts_numeric_string() {
        let entry: BudgetEntry = serde_json::from_value(json!({
            "category": "Rent",
            "amount": " 1250.5 ",
            "startDate": "2024-02-01",
            "endDate": "2024-02-29"
        }))
        .unwrap();

        assert_eq!(entry.id, None);
        assert_eq!(entry.amount, 1250.5);

        let bad = serde_json::from_value::<BudgetEntry>(json!({
            "category": "Rent",
            "amount": "lots",
            "startDate": "2024-02-01",
            "endDate": "2024-02-29"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_income_entry_wire_names() {
        let entry: IncomeEntry = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "Paycheck",
            "amount": 3000,
            "type": "income",
            "date": "2024-03-15T00:00:00.000Z",
            "category": "salary",
            "description": "March"
        }))
        .unwrap();

        assert_eq!(entry.kind, "income");
        assert_eq!(entry.category, IncomeCategory::Salary);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["type"], "income");
        assert_eq!(value["category"], "salary");
    }

    #[test]
    fn test_unknown_income_category_is_other() {
        let category: IncomeCategory = serde_json::from_value(json!("lottery")).unwrap();
        assert_eq!(category, IncomeCategory::Other);
        assert_eq!(IncomeCategory::from_form_value("bank"), IncomeCategory::Bank);
        assert_eq!(IncomeCategory::from_form_value(""), IncomeCategory::Other);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("me@example.com", "hunter2");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("me@example.com"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_blank_income_record_still_decodes() {
        let entry: IncomeEntry = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "",
            "amount": null,
            "type": null,
            "date": null,
            "category": "",
            "description": null
        }))
        .unwrap();

        assert_eq!(entry.amount, 0.0);
        assert_eq!(entry.date, "");
        assert_eq!(entry.kind, "");
        assert_eq!(entry.description, "");
        assert_eq!(entry.category, IncomeCategory::Other);

        let missing: IncomeEntry = serde_json::from_value(json!({ "_id": "x", "category": null })).unwrap();
        assert_eq!(missing.category, IncomeCategory::Other);
    }

    #[test]
    fn test_blank_budget_record_still_decodes() {
        let entry: BudgetEntry = serde_json::from_value(json!({
            "_id": "65a1",
            "category": "",
            "amount": "",
            "startDate": null,
            "endDate": null
        }))
        .unwrap();

        assert_eq!(entry.amount, 0.0);
        assert_eq!(entry.start_date, "");
        assert_eq!(entry.end_date, "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
    }
}
