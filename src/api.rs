use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::SearchParams;
use crate::error::FetchError;
use crate::model::{Article, NewsResponse};
use crate::state::Event;

const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"), " (Rust; TUI)");

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url, params: &[(&str, String)]) -> Result<Value, FetchError>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self { client: builder.build()? })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let bytes = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[derive(Clone)]
pub struct NewsClient {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    params: SearchParams,
}

impl NewsClient {
    pub fn new(transport: Arc<dyn Transport>, endpoint: Url, params: SearchParams) -> Self {
        Self { transport, endpoint, params }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Article>, FetchError> {
        let params = self.params.to_query(query);
        tracing::debug!(endpoint = %self.endpoint, ?params, "news search request");

        let body = self.transport.get_json(&self.endpoint, &params).await?;
        let resp: NewsResponse = serde_json::from_value(body)?;
        Ok(resp.into_articles())
    }

    // Earlier requests are neither cancelled nor ignored.
    pub fn spawn(&self, request: u64, query: String, tx: mpsc::Sender<Event>) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            let event = match client.search(&query).await {
                Ok(articles) => {
                    tracing::info!(request, count = articles.len(), "news search finished");
                    Event::FetchSucceeded(articles)
                }
                Err(e) => {
                    tracing::error!(request, error = %e, "Failed to fetch news");
                    Event::FetchFailed(e.message())
                }
            };
            // Receiver gone means the screen has closed.
            let _ = tx.send(event).await;
        })
    }
}
