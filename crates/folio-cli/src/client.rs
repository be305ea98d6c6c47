//! HTTP client for the `/v1` portfolio API.

use std::time::Duration;

use folio_core::{ProfileView, ProjectView};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    profile: ProfileView,
}

#[derive(Debug, Deserialize)]
struct ProjectsEnvelope {
    projects: Vec<ProjectView>,
}

#[derive(Debug, Deserialize)]
struct TechnologiesEnvelope {
    technologies: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    message: String,
}

pub struct PortfolioClient {
    client: Client,
    base_url: String,
}

impl PortfolioClient {
    /// Creates a client rooted at `base_url` (scheme + host, optional path prefix).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        reqwest::Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("folio-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }

    /// Sends a GET and returns the successful response, mapping 404 and other
    /// non-2xx statuses to typed errors using the API's failure body.
    async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let url = self.endpoint(path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<FailureEnvelope>(&body)
            .map(|f| f.message)
            .unwrap_or(body);

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { message });
        }

        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url,
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self.get(path).await?.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
            context: format!("GET /v1/{path}"),
            source: e,
        })
    }

    /// # Errors
    ///
    /// - [`ClientError::NotFound`] — no profile has been provisioned.
    /// - [`ClientError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] — transport or body failures.
    pub async fn fetch_profile(&self) -> Result<ProfileView, ClientError> {
        let envelope: ProfileEnvelope = self.get_json("profile").await?;
        Ok(envelope.profile)
    }

    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_profile`], minus the 404 case in practice.
    pub async fn fetch_projects(&self) -> Result<Vec<ProjectView>, ClientError> {
        let envelope: ProjectsEnvelope = self.get_json("projects").await?;
        Ok(envelope.projects)
    }

    /// Technology rows exactly as the API returns them.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_profile`].
    pub async fn fetch_technologies(&self) -> Result<Vec<Value>, ClientError> {
        let envelope: TechnologiesEnvelope = self.get_json("technologies").await?;
        Ok(envelope.technologies)
    }

    /// Raw PDF bytes of the resume.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no resume is stored.
    pub async fn fetch_resume(&self) -> Result<Vec<u8>, ClientError> {
        let bytes = self.get("resume").await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Everything a page needs from the initial load.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub profile: Option<ProfileView>,
    pub projects: Vec<ProjectView>,
}

/// Fetches profile and projects concurrently and waits for both to settle.
///
/// A failed fetch degrades to an absent profile or an empty project list so
/// the page can still render.
pub async fn load_snapshot(client: &PortfolioClient) -> Snapshot {
    let (profile, projects) = tokio::join!(client.fetch_profile(), client.fetch_projects());

    let profile = profile
        .inspect_err(|e| tracing::warn!(error = %e, "failed to fetch profile"))
        .ok();
    let projects = projects
        .inspect_err(|e| tracing::warn!(error = %e, "failed to fetch projects"))
        .unwrap_or_default();

    tracing::debug!(
        has_profile = profile.is_some(),
        project_count = projects.len(),
        "snapshot loaded"
    );

    Snapshot { profile, projects }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = PortfolioClient::new("http://localhost:3000/", 5).expect("client");
        assert_eq!(client.endpoint("profile"), "http://localhost:3000/v1/profile");
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let client = PortfolioClient::new("https://example.com/portfolio", 5).expect("client");
        assert_eq!(
            client.endpoint("projects"),
            "https://example.com/portfolio/v1/projects"
        );
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let result = PortfolioClient::new("not a url", 5);
        assert!(
            matches!(result, Err(ClientError::InvalidBaseUrl { .. })),
            "expected InvalidBaseUrl"
        );
    }
}
