use chrono::Local;

use crate::link::LinkOpener;
use crate::model::Article;
use crate::state::{reduce, Event, SearchState, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editing,  // keys go to the query box
    Browsing, // keys move through results
}

#[derive(Debug)]
pub struct App {
    pub search: SearchState,
    pub selected: usize, // index into search.articles
    pub focus: Focus,
    pub notice: String,
    next_request: u64,
}

impl App {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            search: SearchState::with_query(query),
            selected: 0,
            focus: Focus::Editing,
            notice: "Type a query and press Enter. Esc to browse results.".to_string(),
            next_request: 0,
        }
    }

    /// Applies an event, keeping the selection on the same url when the list
    /// is replaced.
    pub fn dispatch(&mut self, event: Event) {
        let selected_url = self.selected_article().map(|a| a.url.clone());
        let replaced = matches!(event, Event::FetchSucceeded(_));

        let state = std::mem::take(&mut self.search);
        self.search = reduce(state, event);

        if replaced {
            self.selected = selected_url
                .and_then(|url| self.search.articles.iter().position(|a| a.url == url))
                .unwrap_or(0);
            let count = self.search.articles.len();
            self.notice = format!(
                "Loaded {} article{} at {}",
                count,
                if count == 1 { "" } else { "s" },
                Local::now().format("%H:%M:%S")
            );
        }
    }

    // Does not look at whether another request is still pending.
    pub fn begin_search(&mut self) -> (u64, String) {
        self.next_request += 1;
        self.dispatch(Event::FetchStarted);
        (self.next_request, self.search.query.clone())
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = self.search.query.clone();
        query.push(c);
        self.dispatch(Event::QueryChanged(query));
    }

    pub fn pop_char(&mut self) {
        let mut query = self.search.query.clone();
        query.pop();
        self.dispatch(Event::QueryChanged(query));
    }

    pub fn clear_query(&mut self) {
        self.dispatch(Event::QueryChanged(String::new()));
    }

    pub fn articles(&self) -> &[Article] {
        &self.search.articles
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.search.articles.get(self.selected)
    }

    pub fn move_down(&mut self) {
        if self.search.articles.is_empty() { return; }
        self.selected = (self.selected + 1).min(self.search.articles.len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.search.articles.is_empty() { return; }
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn open_selected(&mut self, opener: &dyn LinkOpener) {
        let Some(url) = self.selected_article().map(|a| a.url.clone()) else {
            return;
        };
        match opener.open(&url) {
            Ok(()) => {
                tracing::info!(%url, "opened article");
                self.notice = "Opened in browser.".to_string();
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "could not open article");
                self.notice = format!("Could not open browser: {}", e);
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editing => Focus::Browsing,
            Focus::Browsing => Focus::Editing,
        };
    }

    pub fn status_line(&self) -> String {
        match &self.search.status {
            Status::Loading => "Loading...".to_string(),
            Status::Error(msg) => format!("Error: {}", msg),
            Status::Idle => self.notice.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no browser"));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn article(url: &str) -> Article {
        Article {
            title: format!("title {url}"),
            body: String::new(),
            url: url.to_string(),
            image: None,
            date: None,
        }
    }

    #[test]
    fn typing_updates_query() {
        let mut app = App::new("");
        app.push_char('r');
        app.push_char('s');
        app.pop_char();
        assert_eq!(app.search.query, "r");
        app.clear_query();
        assert_eq!(app.search.query, "");
    }

    #[test]
    fn begin_search_is_loading_before_any_reply() {
        let mut app = App::new("");
        let (id, q) = app.begin_search();
        assert_eq!((id, q.as_str()), (1, ""));
        assert!(app.search.is_loading());
        assert_eq!(app.status_line(), "Loading...");

        // No guard against a second search while loading.
        let (id, _) = app.begin_search();
        assert_eq!(id, 2);
        assert!(app.search.is_loading());
    }

    #[test]
    fn selection_follows_url_across_reloads() {
        let mut app = App::new("q");
        app.dispatch(Event::FetchSucceeded(vec![
            article("https://a"),
            article("https://b"),
            article("https://c"),
        ]));
        app.move_down();
        assert_eq!(app.selected_article().unwrap().url, "https://b");

        app.dispatch(Event::FetchSucceeded(vec![article("https://z"), article("https://b")]));
        assert_eq!(app.selected, 1);

        app.dispatch(Event::FetchSucceeded(vec![article("https://y")]));
        assert_eq!(app.selected, 0);
        assert!(app.status_line().starts_with("Loaded 1 article at "));

        app.dispatch(Event::FetchSucceeded(vec![article("https://y"), article("https://x")]));
        assert!(app.status_line().starts_with("Loaded 2 articles at "));
        app.dispatch(Event::FetchSucceeded(vec![]));
        assert!(app.status_line().starts_with("Loaded 0 articles at "));
    }

    #[test]
    fn error_shows_inline_and_keeps_rows() {
        let mut app = App::new("q");
        app.dispatch(Event::FetchSucceeded(vec![article("https://a")]));
        app.begin_search();
        app.dispatch(Event::FetchFailed("Network Error".into()));
        assert_eq!(app.status_line(), "Error: Network Error");
        assert_eq!(app.articles().len(), 1);
        assert!(app.selected_article().is_some());
    }

    #[test]
    fn movement_is_clamped() {
        let mut app = App::new("");
        app.move_down();
        app.move_up();
        assert_eq!(app.selected, 0);
        app.dispatch(Event::FetchSucceeded(vec![article("https://a"), article("https://b")]));
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn opens_selected_url() {
        let mut app = App::new("");
        let opener = RecordingOpener::default();
        app.open_selected(&opener);
        assert!(opener.opened.borrow().is_empty());

        app.dispatch(Event::FetchSucceeded(vec![article("https://a"), article("https://b")]));
        app.move_down();
        app.open_selected(&opener);
        assert_eq!(*opener.opened.borrow(), vec!["https://b".to_string()]);
        assert_eq!(app.notice, "Opened in browser.");
    }

    #[test]
    fn open_failure_leaves_search_state_alone() {
        let mut app = App::new("");
        app.dispatch(Event::FetchSucceeded(vec![article("https://a")]));
        let before = app.search.clone();
        app.open_selected(&RecordingOpener { fail: true, ..Default::default() });
        assert_eq!(app.search, before);
        assert!(app.notice.starts_with("Could not open browser"));
    }

    #[test]
    fn focus_toggles() {
        let mut app = App::new("");
        assert_eq!(app.focus, Focus::Editing);
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Browsing);
    }
}
