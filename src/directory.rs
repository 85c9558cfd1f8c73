//! Client for the external sport listing service.

use crate::model::SportSummary;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The service answered with a non-2xx status.
    #[error("listing service rejected the request (status {status})")]
    Rejected { status: u16, detail: String },
    /// Network failure, timeout, or an unreadable response body.
    #[error("error fetching data: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DirectoryError {
    /// Diagnostic detail: the service-provided message when there is one,
    /// otherwise a generic description.
    pub fn detail(&self) -> String {
        match self {
            DirectoryError::Rejected { detail, .. } if !detail.trim().is_empty() => detail.clone(),
            DirectoryError::Rejected { status, .. } => {
                format!("request rejected with status {status}")
            }
            DirectoryError::Transport(_) => "Error fetching data".to_string(),
        }
    }
}

/// Seam between the wizard controller and the HTTP world.
pub trait SportDirectory {
    /// Validate `token` and fetch the selectable sports in service order.
    fn list_sports(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<SportSummary>, DirectoryError>>;
}

/// reqwest-backed directory hitting the real listing endpoint.
pub struct HttpSportDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSportDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("court-reserve-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl SportDirectory for HttpSportDirectory {
    async fn list_sports(&self, token: &str) -> Result<Vec<SportSummary>, DirectoryError> {
        let url = format!("{}/api/SportCategorys/list", self.base_url);
        let resp = self.client.get(&url).bearer_auth(token).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(DirectoryError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(resp.json().await?)
    }
}

/// Canned directory used by controller and front-end tests.
#[cfg(test)]
pub(crate) enum StubDirectory {
    Accepts(Vec<&'static str>),
    Rejects { status: u16, detail: &'static str },
}

#[cfg(test)]
impl SportDirectory for StubDirectory {
    async fn list_sports(&self, _token: &str) -> Result<Vec<SportSummary>, DirectoryError> {
        match self {
            StubDirectory::Accepts(names) => Ok(names
                .iter()
                .map(|n| SportSummary {
                    name: (*n).to_string(),
                })
                .collect()),
            StubDirectory::Rejects { status, detail } => Err(DirectoryError::Rejected {
                status: *status,
                detail: (*detail).to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_detail_prefers_service_body() {
        let e = DirectoryError::Rejected {
            status: 401,
            detail: "token expired".into(),
        };
        assert_eq!(e.detail(), "token expired");
    }

    #[test]
    fn rejection_detail_falls_back_to_status() {
        let e = DirectoryError::Rejected {
            status: 403,
            detail: "  ".into(),
        };
        assert_eq!(e.detail(), "request rejected with status 403");
    }
}
