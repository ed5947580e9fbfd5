//! HTTP gateway to the Opinionate backend
//!
//! Controllers talk to the backend through the [`Gateway`] trait so flows
//! can be exercised against a recording mock; [`HttpGateway`] is the
//! reqwest implementation used by the binary. Every failure class (network
//! error, non-2xx status, malformed body) collapses to one error per call
//! site; callers report it as a single alert and move on.

use crate::models::{FormField, Profile, TopicsSnapshot, VoteChoice, VoteReceipt};
use crate::upload::SelectedFile;
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Backend operations the controllers depend on.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn fetch_profile(&self) -> Result<Profile>;
    async fn upload_avatar(&self, file: &SelectedFile) -> Result<Profile>;
    async fn fetch_topics(&self) -> Result<TopicsSnapshot>;
    async fn create_topic(&self, fields: Vec<(&'static str, FormField)>) -> Result<()>;
    async fn vote(&self, topic_id: &str, choice: VoteChoice) -> Result<VoteReceipt>;
}

/// Gateway backed by a reqwest client with a per-request timeout.
pub struct HttpGateway {
    base: String,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Url::parse(base_url)
            .with_context(|| format!("Invalid backend base URL: {}", base_url))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn file_part(file: &SelectedFile) -> Result<Part> {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.media_type)
        .with_context(|| format!("Invalid media type: {}", file.media_type))
}

// No Content-Type header is set on multipart requests: the client derives
// it from the form so the boundary in the header matches the body.
fn multipart_form(fields: Vec<(&'static str, FormField)>) -> Result<Form> {
    let mut form = Form::new();
    for (name, field) in fields {
        form = match field {
            FormField::Text(value) => form.text(name, value),
            FormField::File(file) => form.part(name, file_part(&file)?),
        };
    }
    Ok(form)
}

impl Gateway for HttpGateway {
    async fn fetch_profile(&self) -> Result<Profile> {
        let url = self.endpoint("/profile");
        tracing::debug!(%url, "fetching profile");
        let profile = self
            .client
            .get(&url)
            .send()
            .await
            .context("Profile request failed")?
            .error_for_status()
            .context("Profile request rejected")?
            .json()
            .await
            .context("Malformed profile response")?;
        Ok(profile)
    }

    async fn upload_avatar(&self, file: &SelectedFile) -> Result<Profile> {
        let url = self.endpoint("/profile");
        tracing::debug!(%url, file = %file.name, "uploading avatar");
        let form = Form::new().part("avatar", file_part(file)?);
        let profile = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Avatar upload failed")?
            .error_for_status()
            .context("Avatar upload rejected")?
            .json()
            .await
            .context("Malformed profile response")?;
        Ok(profile)
    }

    async fn fetch_topics(&self) -> Result<TopicsSnapshot> {
        let url = self.endpoint("/topics");
        tracing::debug!(%url, "fetching topics");
        let snapshot = self
            .client
            .get(&url)
            .send()
            .await
            .context("Topics request failed")?
            .error_for_status()
            .context("Topics request rejected")?
            .json()
            .await
            .context("Malformed topics response")?;
        Ok(snapshot)
    }

    async fn create_topic(&self, fields: Vec<(&'static str, FormField)>) -> Result<()> {
        let url = self.endpoint("/topics");
        tracing::debug!(%url, "creating topic");
        self.client
            .post(&url)
            .multipart(multipart_form(fields)?)
            .send()
            .await
            .context("Topic creation failed")?
            .error_for_status()
            .context("Topic creation rejected")?;
        Ok(())
    }

    async fn vote(&self, topic_id: &str, choice: VoteChoice) -> Result<VoteReceipt> {
        let url = self.endpoint(&format!("/topics/{}/{}", topic_id, choice.as_str()));
        tracing::debug!(%url, "recording vote");
        let receipt = self
            .client
            .put(&url)
            .send()
            .await
            .context("Vote request failed")?
            .error_for_status()
            .context("Vote request rejected")?
            .json()
            .await
            .context("Malformed vote response")?;
        Ok(receipt)
    }
}
