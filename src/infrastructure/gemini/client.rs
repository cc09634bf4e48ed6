//! Generative content service HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{
    ArticlesPayload, BookSummaryWire, BooksPayload, CategoriesPayload, ConferencesPayload,
    DeviceDetailsWire, ErrorResponse, GenerateContentRequest, GenerateContentResponse,
};
use super::prompts;
use crate::domain::entities::{
    Article, Book, BookDetails, Conference, DeviceCategory, DeviceDetails,
};
use crate::domain::errors::ContentError;
use crate::domain::i18n::Language;
use crate::domain::ports::ContentPort;
use crate::infrastructure::config::ContentServiceConfig;

const USER_AGENT: &str = concat!("biomed-catalog/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-goog-api-key";

/// `generateContent` client backing every catalog fetch.
pub struct GeminiContentClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiContentClient {
    /// Creates a client from configuration.
    ///
    /// Without an API key the client still builds; every request then fails
    /// with [`ContentError::MissingApiKey`].
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &ContentServiceConfig, api_key: Option<String>) -> Result<Self, ContentError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ContentError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, ContentError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ContentError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            });
        };

        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach content service");
                if e.is_timeout() {
                    ContentError::network("request timed out")
                } else if e.is_connect() {
                    ContentError::network("failed to connect to content service")
                } else {
                    ContentError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse generateContent response");
            ContentError::malformed(format!("failed to parse response: {e}"))
        })?;

        body.into_text()
    }

    async fn generate_json<T: DeserializeOwned>(
        &self,
        (prompt, schema): (String, Value),
    ) -> Result<T, ContentError> {
        let text = self
            .generate(&GenerateContentRequest::json(prompt, schema))
            .await?;
        serde_json::from_str(strip_code_fence(&text)).map_err(|e| {
            warn!(error = %e, "Content payload did not match the expected shape");
            ContentError::malformed(e.to_string())
        })
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ContentError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) if !error.error.message.is_empty() => error.error.message,
            _ => format!("HTTP {status}"),
        };

        match status {
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                ContentError::network("content service is temporarily unavailable")
            }
            _ => ContentError::Http {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Drops a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[async_trait]
impl ContentPort for GeminiContentClient {
    async fn device_categories(
        &self,
        language: Language,
    ) -> Result<Vec<DeviceCategory>, ContentError> {
        let payload: CategoriesPayload = self.generate_json(prompts::categories(language)).await?;
        payload.try_into()
    }

    async fn device_details(
        &self,
        device_name: &str,
        language: Language,
    ) -> Result<DeviceDetails, ContentError> {
        let wire: DeviceDetailsWire = self
            .generate_json(prompts::device_details(device_name, language))
            .await?;
        wire.validate(device_name)
    }

    async fn scientific_books(&self, language: Language) -> Result<Vec<Book>, ContentError> {
        let payload: BooksPayload = self.generate_json(prompts::books(language)).await?;
        payload.try_into()
    }

    async fn scientific_book_details(
        &self,
        book: &Book,
        language: Language,
    ) -> Result<BookDetails, ContentError> {
        let wire: BookSummaryWire = self
            .generate_json(prompts::book_details(book, language))
            .await?;
        wire.validate(book)
    }

    async fn global_articles(&self, language: Language) -> Result<Vec<Article>, ContentError> {
        let payload: ArticlesPayload = self.generate_json(prompts::articles(language)).await?;
        payload.try_into()
    }

    async fn conferences_and_exhibitions(
        &self,
        language: Language,
    ) -> Result<Vec<Conference>, ContentError> {
        let payload: ConferencesPayload =
            self.generate_json(prompts::conferences(language)).await?;
        payload.try_into()
    }

    async fn translate_text(&self, text: &str) -> Result<String, ContentError> {
        let translated = self
            .generate(&GenerateContentRequest::text(prompts::translation(text)))
            .await?;
        Ok(translated.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{HeaderMap, Uri, header};
    use axum::response::IntoResponse;
    use axum::routing::any;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    #[derive(Debug, Clone)]
    struct CapturedRequest {
        path: String,
        headers: HeaderMap,
        body: Value,
    }

    /// Local `generateContent` stand-in with one canned reply.
    struct MockBackend {
        status: axum::http::StatusCode,
        body: String,
        requests: Mutex<Vec<CapturedRequest>>,
    }

    impl MockBackend {
        /// Starts serving and returns the backend with its base URL.
        async fn start(status: u16, body: String) -> (Arc<Self>, String) {
            let backend = Arc::new(Self {
                status: axum::http::StatusCode::from_u16(status).unwrap(),
                body,
                requests: Mutex::new(Vec::new()),
            });

            let app = Router::new()
                .route("/{*path}", any(handle_request))
                .with_state(backend.clone());

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.ok();
            });

            (backend, format!("http://{addr}"))
        }

        async fn captured_requests(&self) -> Vec<CapturedRequest> {
            self.requests.lock().await.clone()
        }
    }

    async fn handle_request(
        State(backend): State<Arc<MockBackend>>,
        uri: Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> impl IntoResponse {
        backend.requests.lock().await.push(CapturedRequest {
            path: uri.path().to_string(),
            headers,
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });

        (
            backend.status,
            [(header::CONTENT_TYPE, "application/json")],
            backend.body.clone(),
        )
    }

    fn client_for(base_url: String, api_key: Option<&str>) -> GeminiContentClient {
        let config = ContentServiceConfig {
            base_url,
            timeout_secs: 5,
            ..ContentServiceConfig::default()
        };
        GeminiContentClient::new(&config, api_key.map(str::to_string)).unwrap()
    }

    fn candidate(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
        })
        .to_string()
    }

    #[test]
    fn test_client_creation() {
        let client = GeminiContentClient::new(&ContentServiceConfig::default(), None);
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = client_for("https://example.test/v1beta/".to_string(), Some("k"));
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let client = client_for("http://127.0.0.1:9".to_string(), None);

        let err = client.scientific_books(Language::En).await.unwrap_err();

        assert!(matches!(err, ContentError::MissingApiKey { ref env_var } if env_var == "GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_books_are_parsed_and_validated() {
        let payload = r#"{"books":[{"title":"Medical Instrumentation","author":"John G. Webster","description":"Classic text"}]}"#;
        let (backend, base_url) = MockBackend::start(200, candidate(payload)).await;
        let client = client_for(base_url, Some("key"));

        let books = client.scientific_books(Language::En).await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "John G. Webster");

        let requests = backend.captured_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/models/gemini-2.5-flash:generateContent");
        assert_eq!(requests[0].headers[API_KEY_HEADER], "key");
    }

    #[tokio::test]
    async fn test_json_request_carries_response_schema() {
        let payload = r#"{"categories":[{"name":"Imaging","description":"Scanners","devices":[{"name":"MRI Scanner","imageUrl":"https://img.test/mri.png"}]}]}"#;
        let (backend, base_url) = MockBackend::start(200, candidate(payload)).await;
        let client = client_for(base_url, Some("secret"));

        assert!(client.device_categories(Language::En).await.is_ok());

        let requests = backend.captured_requests().await;
        let request = &requests[0];
        assert_eq!(request.headers[API_KEY_HEADER], "secret");
        let config = &request.body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"], prompts::categories(Language::En).1);
        assert_eq!(request.body["contents"][0]["role"], "user");
    }

    #[tokio::test]
    async fn test_translation_request_has_no_schema() {
        let (backend, base_url) = MockBackend::start(200, candidate("  مرحبا \n")).await;
        let client = client_for(base_url, Some("key"));

        assert_eq!(client.translate_text("hello").await.unwrap(), "مرحبا");

        let requests = backend.captured_requests().await;
        assert!(requests[0].body.get("generationConfig").is_none());
        assert_eq!(requests[0].headers[API_KEY_HEADER], "key");
    }

    #[tokio::test]
    async fn test_invalid_payload_is_rejected() {
        let payload = r#"{"conferences":[{"name":"","url":"https://x"}]}"#;
        let (_backend, base_url) = MockBackend::start(200, candidate(payload)).await;
        let client = client_for(base_url, Some("key"));

        let err = client
            .conferences_and_exhibitions(Language::Ar)
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::Invalid { .. }));
    }

    #[tokio::test]
    async fn test_http_error_carries_service_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        let (_backend, base_url) = MockBackend::start(400, body.to_string()).await;
        let client = client_for(base_url, Some("bad"));

        let err = client.translate_text("hello").await.unwrap_err();

        assert!(
            matches!(err, ContentError::Http { status: 400, ref message } if message == "API key not valid")
        );
    }

    #[tokio::test]
    async fn test_unavailable_service_is_a_network_error() {
        let (_backend, base_url) = MockBackend::start(503, "{}".to_string()).await;
        let client = client_for(base_url, Some("key"));

        let err = client.global_articles(Language::En).await.unwrap_err();

        assert!(matches!(err, ContentError::Network { .. }));
    }
}
