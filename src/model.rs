use serde::{Deserialize, Serialize};

/// One news item as returned by the search endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,   // preview text
    pub url: String,    // row identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>, // e.g. "2024-03-01T12:00:00+00:00"
}

impl Article {
    /// Calendar part of `date`: its first 10 characters.
    pub fn date_line(&self) -> Option<&str> {
        let date = self.date.as_deref()?;
        let end = date
            .char_indices()
            .nth(10)
            .map(|(i, _)| i)
            .unwrap_or(date.len());
        Some(&date[..end])
    }
}

/// Response envelope. `results` may be missing or null.
#[derive(Debug, Default, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub results: Option<Vec<Article>>,
}

impl NewsResponse {
    pub fn into_articles(self) -> Vec<Article> {
        self.results.unwrap_or_default()
    }
}
