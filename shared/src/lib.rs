//! Platform-independent core of the finance screens: entity types, form
//! drafts, the REST endpoint table, the API client and the list-screen and
//! login workflows. The Yew frontend supplies the browser transport.

pub mod client;
pub mod display;
pub mod draft;
pub mod login;
pub mod models;
pub mod resource;
pub mod screen;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::ApiClient;
pub use display::{format_amount, format_display_date};
pub use draft::{DraftError, FieldSpec, FormDraft, InputKind};
pub use login::{LoginAction, LoginForm};
pub use models::{BudgetEntry, Credentials, IncomeCategory, IncomeEntry};
pub use resource::{Budgets, Incomes, Resource};
pub use screen::{AlertFlag, ListScreen, Refresh, ScreenAction, ScreenError, ALERT_TIMEOUT_MS};
pub use session::Session;
pub use transport::{ApiError, ApiRequest, ApiResponse, Method, Transport};
