use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::transport::{ApiError, ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it sees.
/// Runs dry with a transport error once the queue is empty.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_text(status, &body.to_string());
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.responses.borrow_mut().push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::Transport(message)),
            None => Err(ApiError::Transport("no response queued".to_string())),
        }
    }
}
