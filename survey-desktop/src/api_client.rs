use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use survey_models::{Category, CategoryStat, NeedInput, ParticipantInput, Question, ResponseRow};

/// Thin client for the survey HTTP/JSON API.
///
/// One request per operation; no retries, no recovery. A non-2xx response
/// fails with the status code and the raw body text.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseFailed(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client()
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseFailed(e.to_string()))
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories").await
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.get_json("/questions").await
    }

    pub async fn category_stats(&self) -> Result<Vec<CategoryStat>, ApiError> {
        self.get_json("/stats/categories").await
    }

    /// Full response collection, newest first per the API contract.
    pub async fn list_responses(&self) -> Result<Vec<ResponseRow>, ApiError> {
        self.get_json("/responses").await
    }

    pub async fn register_participant(
        &self,
        participant: &ParticipantInput,
    ) -> Result<Value, ApiError> {
        self.post_json("/participants/register", participant).await
    }

    pub async fn create_need(&self, need: &NeedInput) -> Result<Value, ApiError> {
        self.post_json("/needs", need).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Parse failed: {0}")]
    ParseFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_categories() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/categories")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"name":"Salud","slug":"salud"}]"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let categories = client.list_categories().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "salud");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_carries_code_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/responses")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.list_responses().await.unwrap_err();

        match err {
            ApiError::HttpStatus { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_need_posts_camel_case_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/needs")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "email": "diego@test.com",
                "questionId": 1,
                "categorySlug": "salud",
                "description": "No hay hospital",
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":10}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let need = NeedInput::need(
            "diego@test.com".to_string(),
            "salud".to_string(),
            "No hay hospital".to_string(),
        );
        let created = client.create_need(&need).await.unwrap();

        assert_eq!(created["id"], 10);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/questions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.list_questions().await.unwrap_err();
        assert!(matches!(err, ApiError::ParseFailed(_)));
    }
}
