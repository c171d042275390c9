//! Login form state and its submit workflow. Like the list screens, the form
//! only changes through actions so the Yew hook and the tests share it.

use std::fmt;
use zeroize::Zeroize;

use crate::client::ApiClient;
use crate::models::Credentials;
use crate::transport::{ApiError, Transport};

#[derive(Debug, Clone, PartialEq)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    Started,
    /// Request settled, successfully or not; wipes both inputs
    Finished,
}

#[derive(Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

impl LoginForm {
    pub fn apply(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => self.email = email,
            LoginAction::SetPassword(password) => {
                self.password.zeroize();
                self.password = password;
            }
            LoginAction::Started => self.submitting = true,
            LoginAction::Finished => {
                self.email.clear();
                self.password.zeroize();
                self.submitting = false;
            }
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    pub fn is_blank(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("submitting", &self.submitting)
            .finish()
    }
}

pub type LoginDispatch<'a> = &'a dyn Fn(LoginAction);

/// Post the typed credentials. The inputs are cleared once the request
/// settles, whatever the outcome; the response body is handed back untouched.
pub async fn submit<T: Transport>(
    api: &ApiClient<T>,
    form: &LoginForm,
    dispatch: LoginDispatch<'_>,
) -> Result<String, ApiError> {
    dispatch(LoginAction::Started);
    let result = api.login(&form.credentials()).await;
    dispatch(LoginAction::Finished);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::test_utils::RecordingTransport;
    use crate::transport::Method;
    use serde_json::json;
    use std::cell::RefCell;

    fn api() -> ApiClient<RecordingTransport> {
        ApiClient::new(
            Session::new("http://localhost:5000", Some("tok".to_string())),
            RecordingTransport::new(),
        )
    }

    fn typed_form() -> RefCell<LoginForm> {
        let mut form = LoginForm::default();
        form.apply(LoginAction::SetEmail("me@example.com".to_string()));
        form.apply(LoginAction::SetPassword("hunter2".to_string()));
        RefCell::new(form)
    }

    #[tokio::test]
    async fn test_successful_login_clears_fields() {
        let api = api();
        api.transport().respond(200, json!({ "accessToken": "fresh" }));
        let form = typed_form();
        let snapshot = form.borrow().clone();
        let dispatch = |action: LoginAction| form.borrow_mut().apply(action);

        let body = submit(&api, &snapshot, &dispatch).await.unwrap();

        assert!(body.contains("fresh"));
        assert!(form.borrow().is_blank());
        assert!(!form.borrow().submitting);

        let sent = api.transport().requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://localhost:5000/auth/login");
        assert_eq!(sent[0].bearer, None);
        assert_eq!(
            sent[0].body,
            Some(json!({ "email": "me@example.com", "password": "hunter2" }))
        );
    }

    #[tokio::test]
    async fn test_rejected_login_still_clears_fields() {
        let api = api();
        api.transport().respond_text(401, "invalid credentials");
        let form = typed_form();
        let snapshot = form.borrow().clone();
        let dispatch = |action: LoginAction| form.borrow_mut().apply(action);

        let result = submit(&api, &snapshot, &dispatch).await;

        assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
        assert!(form.borrow().is_blank());
        assert!(!form.borrow().submitting);
    }

    #[tokio::test]
    async fn test_unreachable_server_still_clears_fields() {
        let api = api();
        api.transport().fail("connection refused");
        let form = typed_form();
        let snapshot = form.borrow().clone();
        let dispatch = |action: LoginAction| form.borrow_mut().apply(action);

        let result = submit(&api, &snapshot, &dispatch).await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
        assert!(form.borrow().is_blank());
    }

    #[test]
    fn test_started_marks_submitting() {
        let mut form = LoginForm::default();
        form.apply(LoginAction::Started);
        assert!(form.submitting);
    }

    #[test]
    fn test_debug_hides_password() {
        let printed = format!("{:?}", typed_form().borrow());
        assert!(printed.contains("me@example.com"));
        assert!(!printed.contains("hunter2"));
    }
}
