use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

pub mod bookings;
pub mod frontdesk;
pub mod invoices;
pub mod rooms;

/// Every non-2xx answer and every transport/decode failure funnels into one of
/// these; flows turn them into notifications, nothing bubbles past a dialog.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("phiên đăng nhập đã hết hạn, vui lòng đăng nhập lại")]
    SessionExpired,
    #[error("bạn không có quyền thực hiện thao tác này")]
    Forbidden,
    #[error("hệ thống đang gặp sự cố, vui lòng thử lại sau")]
    Server { status: u16, message: Option<String> },
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("không thể kết nối đến máy chủ")]
    Transport(#[from] reqwest::Error),
    #[error("dữ liệu máy chủ trả về không hợp lệ: {0}")]
    Decode(String),
    #[error("cấu hình không hợp lệ: {0}")]
    Config(String),
}

/// Client for the PMS backend under `/api`. Cheap to clone; a clone is handed
/// to background tasks such as the stale-booking sweep.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        // Url::join treats a base without a trailing slash as a file path and
        // would drop the /api segment.
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized)
            .map_err(|err| ApiError::Config(format!("địa chỉ máy chủ không hợp lệ: {}", err)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        })
    }

    /// Reads `FRONTDESK_API_BASE_URL` and (optionally) `FRONTDESK_API_TOKEN`.
    pub fn from_env() -> Result<Self, ApiError> {
        if cfg!(debug_assertions) {
            dotenv::dotenv().ok();
        }

        let base_url = std::env::var("FRONTDESK_API_BASE_URL")
            .map_err(|_| ApiError::Config("FRONTDESK_API_BASE_URL chưa được thiết lập".to_string()))?;
        let token = std::env::var("FRONTDESK_API_TOKEN").ok();
        Self::new(&base_url, token)
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::Config(format!("đường dẫn không hợp lệ: {}", err)))
    }

    /// Request interceptor: every call leaves with the Bearer token when one is
    /// stored.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path)?;
        Self::dispatch(builder).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path)?.query(query);
        Self::dispatch(builder).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::POST, path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Self::dispatch(builder).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, path)?.json(body);
        Self::dispatch(builder).await
    }

    async fn dispatch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        Self::decode_response(response).await
    }

    /// Response interceptor: 2xx decodes, everything else classifies.
    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::classify(status, &body))
    }

    fn classify(status: StatusCode, body: &str) -> ApiError {
        match status.as_u16() {
            401 => ApiError::SessionExpired,
            403 => {
                // The user sees nothing for a 403; keep the event observable.
                log::warn!("forbidden response suppressed: {}", body);
                ApiError::Forbidden
            }
            status if status >= 500 => ApiError::Server {
                status,
                message: Self::server_message(body),
            },
            status => ApiError::Rejected {
                status,
                message: Self::server_message(body)
                    .unwrap_or_else(|| "yêu cầu không hợp lệ".to_string()),
            },
        }
    }

    fn server_message(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")
            .and_then(|message| message.as_str())
            .map(str::to_string)
    }
}
