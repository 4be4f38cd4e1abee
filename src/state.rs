use crate::error::FALLBACK_MESSAGE;
use crate::model::Article;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub status: Status,
    pub articles: Vec<Article>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    QueryChanged(String),
    FetchStarted,
    FetchSucceeded(Vec<Article>),
    FetchFailed(String),
}

impl SearchState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// No ordering guard: whichever outcome arrives last wins, loading flag included.
pub fn reduce(state: SearchState, event: Event) -> SearchState {
    match event {
        Event::QueryChanged(query) => SearchState { query, ..state },
        Event::FetchStarted => SearchState { status: Status::Loading, ..state },
        Event::FetchSucceeded(articles) => SearchState {
            status: Status::Idle,
            articles,
            ..state
        },
        Event::FetchFailed(message) => {
            let message = if message.trim().is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            };
            SearchState { status: Status::Error(message), ..state }
        }
    }
}
