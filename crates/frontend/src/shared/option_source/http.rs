use async_trait::async_trait;
use contracts::shared::select_option::SelectOption;
use gloo_net::http::Request;

use super::{FetchError, OptionSource};
use crate::shared::api_utils::{api_base, join_url};

/// Option source backed by `GET /api/options/{collection}`
#[derive(Clone, Debug)]
pub struct HttpOptionSource {
    base_url: String,
}

impl HttpOptionSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Backend on the same host as the page
    pub fn from_window() -> Self {
        Self::new(api_base())
    }

    pub fn options_url(&self, collection: &str) -> String {
        join_url(
            &self.base_url,
            &format!("/api/options/{}", urlencoding::encode(collection)),
        )
    }
}

#[async_trait(?Send)]
impl OptionSource for HttpOptionSource {
    async fn fetch_options(&self, collection: &str) -> Result<Vec<SelectOption>, FetchError> {
        let url = self.options_url(collection);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_options(&text)
    }
}

fn parse_options(body: &str) -> Result<Vec<SelectOption>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}
