use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Category, CategoryTotalsResponse, CreateCategoryRequest, CreatePersonRequest,
    CreateTransactionRequest, EntityId, ErrorResponse, Person, PersonTotalsResponse, Transaction,
};
use thiserror::Error;

use crate::config::{normalize_base_url, ClientConfig};

/// Failure of a single API call; none of these are retried
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text for the user: the server's own message when it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// API client for the household expenses REST API
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the configured API
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(&config.api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List every registered person
    pub async fn list_people(&self) -> Result<Vec<Person>, ApiError> {
        self.get_json("/pessoas").await
    }

    /// Register a person
    pub async fn create_person(&self, request: &CreatePersonRequest) -> Result<Person, ApiError> {
        self.post_json("/pessoas", request).await
    }

    /// Delete a person; the server removes their transactions too
    pub async fn delete_person(&self, id: EntityId) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&person_path(id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::ensure_success(response).await.map(|_| ())
    }

    /// List every category
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categorias").await
    }

    /// Create a category
    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<Category, ApiError> {
        self.post_json("/categorias", request).await
    }

    /// List every transaction, with embedded category/person when the server includes them
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/transacoes").await
    }

    /// Create a transaction; the server may still reject it with its own message
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.post_json("/transacoes", request).await
    }

    /// Income/expense totals grouped by person
    pub async fn totals_by_person(&self) -> Result<PersonTotalsResponse, ApiError> {
        self.get_json("/consultas/totais-por-pessoa").await
    }

    /// Income/expense totals grouped by category
    pub async fn totals_by_category(&self) -> Result<CategoryTotalsResponse, ApiError> {
        self.get_json("/consultas/totais-por-categoria").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(server_error(status, &body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&ClientConfig::from_env())
    }
}

fn person_path(id: EntityId) -> String {
    format!("/pessoas/{}", id)
}

fn server_error(status: u16, body: &str) -> ApiError {
    ApiError::Server {
        status,
        message: ErrorResponse::message_from_body(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base_and_path() {
        let client = ApiClient::with_base_url("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/pessoas"), "http://localhost:5000/api/pessoas");
        assert_eq!(
            client.url(&person_path(3)),
            "http://localhost:5000/api/pessoas/3"
        );
    }

    #[test]
    fn test_client_from_config() {
        let config = ClientConfig {
            api_base_url: "https://gastos.example".to_string(),
            notification_duration_ms: 3000,
        };
        assert_eq!(ApiClient::new(&config).base_url(), "https://gastos.example");
    }

    #[test]
    fn test_server_message_is_preferred() {
        let error = server_error(400, r#"{"message":"Menores só podem ter despesas"}"#);
        assert_eq!(
            error.user_message("Erro ao cadastrar transação. Tente novamente."),
            "Menores só podem ter despesas"
        );
    }

    #[test]
    fn test_fallback_without_server_message() {
        let fallback = "Erro ao cadastrar pessoa. Tente novamente.";

        let error = server_error(500, "<html>oops</html>");
        assert_eq!(error, ApiError::Server { status: 500, message: None });
        assert_eq!(error.user_message(fallback), fallback);

        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.user_message(fallback), fallback);
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::Server {
            status: 404,
            message: None,
        };
        assert_eq!(error.to_string(), "Server error 404: no details");
    }
}
