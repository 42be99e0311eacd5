use client_core::ApiError;
use gloo::net::http::Request;
use shared::{ChatRequest, ChatResponse, ExpenseRecord, ExpensesPayload};

/// HTTP client for the expense backend.
///
/// Raw payloads stop here: bodies are decoded into the shared types, so
/// field-name normalization and reply fallbacks happen at this boundary and
/// nowhere downstream.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8282".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the expense list for a year.
    pub async fn fetch_expenses(&self, year: &str) -> Result<Vec<ExpenseRecord>, ApiError> {
        let url = format!("{}/v1/expenses?year={}", self.base_url, year);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: "Unable to fetch expenses".to_string(),
            });
        }

        let payload = response
            .json::<ExpensesPayload>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(payload.into_records())
    }

    /// Send a free-text statement or question to the expense assistant.
    pub async fn send_chat(&self, message: &str) -> Result<String, ApiError> {
        let url = format!("{}/v1/expense/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: "Unable to reach the expense assistant".to_string(),
            });
        }

        let reply = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(reply.reply_text())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
