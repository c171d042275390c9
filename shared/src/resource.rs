//! # Resources
//!
//! A `Resource` ties together everything one list screen needs to know about
//! its records: the entity type, the form fields, the table columns and the
//! REST endpoints. Budget and Income screens are the same screen
//! parameterized by a different `Resource`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::display::{format_amount, format_display_date};
use crate::draft::{FieldSpec, FormDraft, InputKind};
use crate::models::{parse_amount, BudgetEntry, IncomeCategory, IncomeEntry};

pub trait Resource: 'static {
    type Entry: Clone + PartialEq + Serialize + DeserializeOwned + 'static;

    /// Short name used in log messages
    const NAME: &'static str;
    const FIELDS: &'static [FieldSpec];
    /// Table headings, excluding the leading "#" and trailing "Action"
    const COLUMNS: &'static [&'static str];

    fn list_path() -> String;
    fn create_path() -> String;
    fn update_path(id: &str) -> String;
    fn delete_path(id: &str) -> String;

    fn entry_id(entry: &Self::Entry) -> Option<&str>;

    /// Display cells for one row, in `COLUMNS` order
    fn cells(entry: &Self::Entry) -> Vec<String>;

    /// Local stand-in for a record that was created but not yet re-fetched
    fn entry_from_draft(draft: &FormDraft) -> Self::Entry;

    fn empty_draft() -> FormDraft {
        FormDraft::new(Self::FIELDS)
    }
}

/// Budget entries at `/budgets`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budgets;

impl Resource for Budgets {
    type Entry = BudgetEntry;

    const NAME: &'static str = "budget";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("category", "Category", InputKind::Text),
        FieldSpec::required("amount", "Amount", InputKind::Number),
        FieldSpec::required("startDate", "Start Date", InputKind::Date),
        FieldSpec::required("endDate", "End Date", InputKind::Date),
    ];
    const COLUMNS: &'static [&'static str] = &["Category", "Amount", "Start Date", "End Date"];

    fn list_path() -> String {
        "/budgets/".to_string()
    }

    fn create_path() -> String {
        "/budgets".to_string()
    }

    fn update_path(id: &str) -> String {
        format!("/budgets/{}", id)
    }

    fn delete_path(id: &str) -> String {
        format!("/budgets/{}", id)
    }

    fn entry_id(entry: &BudgetEntry) -> Option<&str> {
        entry.id.as_deref()
    }

    fn cells(entry: &BudgetEntry) -> Vec<String> {
        vec![
            entry.category.clone(),
            format_amount(entry.amount),
            format_display_date(&entry.start_date),
            format_display_date(&entry.end_date),
        ]
    }

    fn entry_from_draft(draft: &FormDraft) -> BudgetEntry {
        BudgetEntry {
            id: None,
            category: draft.get("category").to_string(),
            amount: parse_amount(draft.get("amount")),
            start_date: draft.get("startDate").to_string(),
            end_date: draft.get("endDate").to_string(),
        }
    }
}

const INCOME_CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("salary", "Salary"),
    ("freelancing", "Freelancing"),
    ("investment", "Investment"),
    ("bank", "Bank"),
    ("other", "Other"),
];

/// Income transactions under `/transactions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Incomes;

impl Resource for Incomes {
    type Entry = IncomeEntry;

    const NAME: &'static str = "income";
    // Date is the one income field the form lets through blank.
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", "Title", InputKind::Text),
        FieldSpec::required("amount", "Amount", InputKind::Number),
        FieldSpec::required("type", "Type", InputKind::Text),
        FieldSpec::optional("date", "Date", InputKind::Date),
        FieldSpec::required("category", "Category", InputKind::Select(INCOME_CATEGORY_OPTIONS)),
        FieldSpec::required("description", "Description", InputKind::TextArea),
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Amount", "Date", "Category", "Description"];

    fn list_path() -> String {
        "/transactions/get-incomes".to_string()
    }

    fn create_path() -> String {
        "/transactions/add-income".to_string()
    }

    fn update_path(id: &str) -> String {
        format!("/transactions/update-income/{}", id)
    }

    fn delete_path(id: &str) -> String {
        format!("/transactions/delete-income/{}", id)
    }

    fn entry_id(entry: &IncomeEntry) -> Option<&str> {
        entry.id.as_deref()
    }

    fn cells(entry: &IncomeEntry) -> Vec<String> {
        vec![
            entry.title.clone(),
            format_amount(entry.amount),
            format_display_date(&entry.date),
            entry.category.to_string(),
            entry.description.clone(),
        ]
    }

    fn entry_from_draft(draft: &FormDraft) -> IncomeEntry {
        IncomeEntry {
            id: None,
            title: draft.get("title").to_string(),
            amount: parse_amount(draft.get("amount")),
            kind: draft.get("type").to_string(),
            date: draft.get("date").to_string(),
            category: IncomeCategory::from_form_value(draft.get("category")),
            description: draft.get("description").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_endpoints() {
        assert_eq!(Budgets::list_path(), "/budgets/");
        assert_eq!(Budgets::create_path(), "/budgets");
        assert_eq!(Budgets::update_path("42"), "/budgets/42");
        assert_eq!(Budgets::delete_path("42"), "/budgets/42");
    }

    #[test]
    fn test_income_endpoints() {
        assert_eq!(Incomes::list_path(), "/transactions/get-incomes");
        assert_eq!(Incomes::create_path(), "/transactions/add-income");
        assert_eq!(Incomes::update_path("abc123"), "/transactions/update-income/abc123");
        assert_eq!(Incomes::delete_path("abc123"), "/transactions/delete-income/abc123");
    }

    #[test]
    fn test_columns_match_cells() {
        let budget = Budgets::entry_from_draft(&Budgets::empty_draft());
        assert_eq!(Budgets::cells(&budget).len(), Budgets::COLUMNS.len());

        let income = Incomes::entry_from_draft(&Incomes::empty_draft());
        assert_eq!(Incomes::cells(&income).len(), Incomes::COLUMNS.len());
    }

    #[test]
    fn test_budget_entry_from_draft() {
        let draft = Budgets::empty_draft()
            .with("category", "Food")
            .with("amount", "100")
            .with("startDate", "2024-01-01")
            .with("endDate", "2024-01-31");

        let entry = Budgets::entry_from_draft(&draft);
        assert_eq!(entry.id, None);
        assert_eq!(entry.category, "Food");
        assert_eq!(entry.amount, 100.0);
        assert_eq!(
            Budgets::cells(&entry),
            vec!["Food", "100", "1/1/2024, 12:00:00 AM", "1/31/2024, 12:00:00 AM"]
        );
    }

    #[test]
    fn test_income_draft_allows_blank_date() {
        let draft = Incomes::empty_draft()
            .with("title", "Paycheck")
            .with("amount", "3000")
            .with("type", "income")
            .with("category", "salary")
            .with("description", "March");
        assert!(draft.validate().is_ok());

        let entry = Incomes::entry_from_draft(&draft);
        assert_eq!(entry.category, IncomeCategory::Salary);
        assert_eq!(entry.date, "");
    }

    #[test]
    fn test_income_select_options_cover_every_category() {
        let category = Incomes::FIELDS
            .iter()
            .find(|field| field.name == "category")
            .unwrap();
        match category.input {
            InputKind::Select(options) => {
                let values: Vec<&str> = options.iter().map(|(value, _)| *value).collect();
                let expected: Vec<&str> = IncomeCategory::ALL.iter().map(|c| c.as_str()).collect();
                assert_eq!(values, expected);
            }
            other => panic!("unexpected input kind {:?}", other),
        }
    }
}
