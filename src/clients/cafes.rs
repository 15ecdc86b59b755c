use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::ApiConfig;
use crate::constants::endpoints;
use crate::error::ClientError;
use crate::models::{Cafe, CafeListResponse, Listing, RandomCafeResponse, SearchQuery};
use crate::page::{Form, FormMethod};
use crate::services::{CafeDraft, CafeSource};

/// Where the backend left us after a form submission and its redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReply {
    pub status: StatusCode,
    pub landed_on: String,
}

impl FormReply {
    #[must_use]
    pub fn landed_home(&self) -> bool {
        self.landed_on == endpoints::HOME
    }
}

/// HTTP client for the cafe backend. Keeps a cookie store so a login
/// carries over to the form posts that need a session.
#[derive(Debug, Clone)]
pub struct CafeClient {
    client: Client,
    base_url: Url,
}

impl CafeClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)?;

        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.as_str());

        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// The list endpoints answer 404 with a not-found body, so the body is
    /// decoded whatever the status.
    async fn get_listing(&self, url: Url) -> Result<Listing, ClientError> {
        debug!(url = %url, "Fetching cafes");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: CafeListResponse = serde_json::from_str(&body)?;
        let listing = parsed.into_listing()?;

        debug!(status = %status, cafes = listing.len(), "Cafe list received");
        Ok(listing)
    }

    pub async fn fetch_all(&self) -> Result<Listing, ClientError> {
        let url = self.url(endpoints::ALL_CAFES)?;
        self.get_listing(url).await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Listing, ClientError> {
        let mut url = self.url(&query.mode.endpoint())?;
        url.query_pairs_mut()
            .append_pair(query.mode.as_str(), &query.term);
        self.get_listing(url).await
    }

    /// One cafe picked by the backend. An empty directory makes the backend
    /// fail, which surfaces as a decode error.
    pub async fn random(&self) -> Result<Cafe, ClientError> {
        let url = self.url(endpoints::RANDOM_CAFE)?;
        debug!(url = %url, "Fetching random cafe");

        let body = self.client.get(url).send().await?.text().await?;
        let parsed: RandomCafeResponse = serde_json::from_str(&body)?;
        Ok(parsed.cafe)
    }

    /// Logs in through the backend's HTML login form. A successful login
    /// redirects home; a failed one bounces back to the login page.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let url = self.url(endpoints::LOGIN)?;
        let params = [("InputEmail", email), ("InputPassword", password)];

        let response = self.client.post(url).form(&params).send().await?;
        let reply = Self::reply(endpoints::LOGIN, &response)?;

        if reply.landed_home() {
            info!(email, "Logged in");
            Ok(())
        } else {
            Err(ClientError::LoginRefused {
                email: email.to_string(),
            })
        }
    }

    /// Submits `form` the way a browser would: named fields only, in order.
    pub async fn submit_form(&self, form: &Form) -> Result<FormReply, ClientError> {
        let mut url = self.url(&form.action)?;
        let pairs = form.submission_pairs();

        debug!(action = %form.action, method = form.method.as_str(), fields = pairs.len(), "Submitting form");

        let response = match form.method {
            FormMethod::Get => {
                url.query_pairs_mut().extend_pairs(pairs.iter());
                self.client.get(url).send().await?
            }
            FormMethod::Post => self.client.post(url).form(&pairs).send().await?,
        };

        Self::reply(&form.action, &response)
    }

    pub async fn report_closed(&self, cafe_id: i32) -> Result<FormReply, ClientError> {
        let form = Form::new(
            format!("report-closed-{cafe_id}"),
            endpoints::report_closed(cafe_id),
            FormMethod::Post,
        );
        self.submit_form(&form).await
    }

    /// Overwrites every field of `cafe_id` with `draft`. The backend answers
    /// 403 unless the session belongs to the author or the privileged user,
    /// and stays on the edit page when the new name is taken.
    pub async fn edit_cafe(&self, cafe_id: i32, draft: &CafeDraft) -> Result<FormReply, ClientError> {
        self.submit_form(&draft.to_edit_form(cafe_id)).await
    }

    fn reply(path: &str, response: &reqwest::Response) -> Result<FormReply, ClientError> {
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ClientError::Rejected {
                status,
                path: path.to_string(),
            });
        }

        Ok(FormReply {
            status,
            landed_on: response.url().path().to_string(),
        })
    }
}

#[async_trait]
impl CafeSource for CafeClient {
    async fn fetch_all(&self) -> Result<Listing, ClientError> {
        Self::fetch_all(self).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Listing, ClientError> {
        Self::search(self, query).await
    }
}
