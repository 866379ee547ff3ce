use std::future::Future;

use chrono::{DateTime, Utc};
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const GENERIC_FAILURE: &str = "We couldn't send your request right now. Please try again.";
pub const TIMEOUT_FAILURE: &str = "The server took too long to respond. Please try again.";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlogAuthor {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<BlogAuthor>,
    #[serde(default)]
    pub comment_count: u32,
}

#[derive(Deserialize)]
struct BlogList {
    blogs: Vec<BlogSummary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadKind {
    CreditRepair,
}

impl LeadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadKind::CreditRepair => "credit-repair",
        }
    }
}

/// Normalized lead as it goes over the wire. Consent stays client-side.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub city: String,
    pub state: String,
    pub problem_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Vec<String>,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("server rejected request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
        details: Vec<String>,
    },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to put in front of the user. Prefers what the server said.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                details,
                ..
            } if !message.trim().is_empty() => {
                if details.is_empty() {
                    message.clone()
                } else {
                    format!("{}: {}", message, details.join(", "))
                }
            }
            ApiError::Timeout => TIMEOUT_FAILURE.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

/// The two backend calls the site makes.
#[allow(async_fn_in_trait)]
pub trait RemoteDataClient {
    async fn list_blogs(&self, limit: u32) -> Result<Vec<BlogSummary>, ApiError>;
    async fn create_lead(&self, kind: LeadKind, payload: &LeadPayload) -> Result<(), ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(config::get_backend_url(), config::REQUEST_TIMEOUT_MS)
    }
}

impl HttpClient {
    pub fn new(base_url: &str, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn blogs_url(&self, limit: u32) -> String {
        format!("{}/api/blogs?limit={}", self.base_url, limit)
    }

    pub fn leads_url(&self, kind: LeadKind) -> String {
        format!("{}/api/leads/{}", self.base_url, kind.as_str())
    }

    async fn with_timeout<T, F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        race_timeout(request, TimeoutFuture::new(self.timeout_ms)).await
    }
}

/// Resolves to `request`'s result, or `ApiError::Timeout` if `timer` fires first.
pub async fn race_timeout<T, F, D>(request: F, timer: D) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    ApiError::Rejected {
        status,
        message: body.message,
        details: body.details,
    }
}

impl RemoteDataClient for HttpClient {
    async fn list_blogs(&self, limit: u32) -> Result<Vec<BlogSummary>, ApiError> {
        let url = self.blogs_url(limit);
        let result = self
            .with_timeout(async {
                let response = Request::get(&url).send().await?;
                if !response.ok() {
                    return Err(rejection(response).await);
                }
                response
                    .json::<BlogList>()
                    .await
                    .map(|list| list.blogs)
                    .map_err(|e| ApiError::Decode(e.to_string()))
            })
            .await;
        if let Err(e) = &result {
            error!("Failed to fetch blogs: {}", e);
        }
        result
    }

    async fn create_lead(&self, kind: LeadKind, payload: &LeadPayload) -> Result<(), ApiError> {
        let url = self.leads_url(kind);
        let result = self
            .with_timeout(async {
                let response = Request::post(&url).json(payload)?.send().await?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(rejection(response).await)
                }
            })
            .await;
        if let Err(e) = &result {
            warn!("Lead submission ({}) failed: {}", kind.as_str(), e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use serde_json::json;

    #[test]
    fn rejection_message_includes_details() {
        let err = ApiError::Rejected {
            status: 409,
            message: Some("Duplicate".to_string()),
            details: vec!["mobile already registered".to_string()],
        };
        assert_eq!(err.user_message(), "Duplicate: mobile already registered");
    }

    #[test]
    fn rejection_without_details_uses_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("Invalid lead".to_string()),
            details: vec![],
        };
        assert_eq!(err.user_message(), "Invalid lead");
    }

    #[test]
    fn falls_back_to_generic_messages() {
        let blank = ApiError::Rejected {
            status: 500,
            message: Some("  ".to_string()),
            details: vec![],
        };
        assert_eq!(blank.user_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::Network("offline".to_string()).user_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::Decode("eof".to_string()).user_message(), GENERIC_FAILURE);
        assert_eq!(ApiError::Timeout.user_message(), TIMEOUT_FAILURE);
    }

    #[test]
    fn parses_blog_list() {
        let body = json!({
            "blogs": [
                {
                    "id": "b1",
                    "slug": "fix-your-score",
                    "title": "Fix your score",
                    "featuredImage": "/img/a.webp",
                    "createdAt": "2024-03-01T10:00:00Z",
                    "author": { "name": "Priya" },
                    "commentCount": 4
                },
                {
                    "id": "b2",
                    "slug": "cibil-basics",
                    "title": "CIBIL basics",
                    "createdAt": "2024-02-01T08:30:00Z"
                }
            ]
        });
        let list: BlogList = serde_json::from_value(body).unwrap();
        assert_eq!(list.blogs.len(), 2);
        assert_eq!(list.blogs[0].author.as_ref().map(|a| a.name.as_str()), Some("Priya"));
        assert_eq!(list.blogs[0].comment_count, 4);
        assert_eq!(list.blogs[1].author, None);
        assert_eq!(list.blogs[1].featured_image, None);
    }

    #[test]
    fn payload_omits_empty_optionals() {
        let payload = LeadPayload {
            full_name: "Amit Verma".to_string(),
            email: "a@b.com".to_string(),
            mobile_number: "9876543210".to_string(),
            city: "Delhi".to_string(),
            state: "Delhi".to_string(),
            problem_type: "Low Score".to_string(),
            income: Some("50000".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["fullName"], "Amit Verma");
        assert_eq!(value["mobileNumber"], "9876543210");
        assert_eq!(value["income"], "50000");
        assert!(value.get("creditScore").is_none());
        assert!(value.get("authorization").is_none());
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = HttpClient::new("http://localhost:3001/", 1_000);
        assert_eq!(client.blogs_url(6), "http://localhost:3001/api/blogs?limit=6");
        assert_eq!(
            client.leads_url(LeadKind::CreditRepair),
            "http://localhost:3001/api/leads/credit-repair"
        );
    }

    #[test]
    fn slow_request_loses_to_timer() {
        let request = future::pending::<Result<(), ApiError>>();
        let outcome = block_on(race_timeout(request, future::ready(())));
        assert_eq!(outcome, Err(ApiError::Timeout));
    }

    #[test]
    fn quick_request_beats_timer() {
        let request = future::ready(Ok::<_, ApiError>(7));
        assert_eq!(block_on(race_timeout(request, future::pending::<()>())), Ok(7));

        let rejected = future::ready(Err::<u8, _>(ApiError::Network("offline".to_string())));
        assert_eq!(
            block_on(race_timeout(rejected, future::pending::<()>())),
            Err(ApiError::Network("offline".to_string()))
        );
    }
}
