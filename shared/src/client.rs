use serde_json::Value;

use crate::draft::FormDraft;
use crate::models::Credentials;
use crate::resource::Resource;
use crate::session::Session;
use crate::transport::{ApiError, ApiRequest, ApiResponse, Method, Transport};

/// API client for the finance backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T> {
    session: Session,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(session: Session, transport: T) -> Self {
        Self { session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch every record of a resource, in server order
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Entry>, ApiError> {
        let response = self.authorized(Method::Get, R::list_path(), None).await?;
        // The list endpoints answer 200 and nothing else on success
        if response.status != 200 {
            return Err(status_error(response));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Create a record from the raw form values. Returns the response body.
    pub async fn create<R: Resource>(&self, draft: &FormDraft) -> Result<String, ApiError> {
        let response = self
            .authorized(Method::Post, R::create_path(), Some(draft.to_json()))
            .await?;
        expect_success(response)
    }

    pub async fn update<R: Resource>(&self, id: &str, draft: &FormDraft) -> Result<String, ApiError> {
        let response = self
            .authorized(Method::Put, R::update_path(id), Some(draft.to_json()))
            .await?;
        expect_success(response)
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> Result<String, ApiError> {
        let response = self.authorized(Method::Delete, R::delete_path(id), None).await?;
        expect_success(response)
    }

    /// Exchange credentials for a login response. Sent without a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let request = ApiRequest {
            method: Method::Post,
            url: self.session.url("/auth/login"),
            bearer: None,
            body: Some(serde_json::to_value(credentials)?),
        };
        let response = self.transport.send(request).await?;
        if response.status != 200 {
            return Err(status_error(response));
        }
        Ok(response.body)
    }

    async fn authorized(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.session.url(&path),
            bearer: self.session.access_token().map(str::to_string),
            body,
        };
        self.transport.send(request).await
    }
}

fn expect_success(response: ApiResponse) -> Result<String, ApiError> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(status_error(response))
    }
}

fn status_error(response: ApiResponse) -> ApiError {
    ApiError::Status {
        status: response.status,
        body: response.body,
    }
}
