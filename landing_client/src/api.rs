use std::future::Future;

use landing_models::contact::{ContactSubmission, CONTACT_PATH};
use landing_utils::landing_version;
use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    /// Posts `submission` to the relay endpoint and returns whether the server
    /// answered with a success status.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Clone)]
pub struct ContactApiImpl {
    client: reqwest::Client,
    endpoint: Url,
}

impl ContactApiImpl {
    /// Creates a client for the site hosted at `base_url`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Self::with_client(client_builder().build()?, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &Url) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            endpoint: base_url.join(CONTACT_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder().user_agent(format!("landing-client/{}", landing_version()))
}

impl ContactApi for ContactApiImpl {
    async fn submit(&self, submission: ContactSubmission) -> anyhow::Result<bool> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&submission)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[cfg(feature = "mock")]
impl MockContactApi {
    pub fn with_submit(mut self, submission: ContactSubmission, result: bool) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
