//! Output formatting for `--print` mode.
//!
//! Human-readable text for the terminal, JSON for scripting.

use serde::Serialize;

use crate::model::Article;

/// Maximum characters of body shown per article
const BODY_MAX_LEN: usize = 200;

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    results: &'a [Article],
}

/// Formats search results as JSON.
pub fn format_json(query: &str, articles: &[Article]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput { query, results: articles })
}

/// Formats search results for human-readable terminal output.
pub fn format_human(query: &str, articles: &[Article]) -> String {
    if articles.is_empty() {
        return format!("No articles found for \"{}\"", query);
    }

    let mut output = format!(
        "Found {} article{} for \"{}\":\n\n",
        articles.len(),
        if articles.len() == 1 { "" } else { "s" },
        query
    );

    for (i, a) in articles.iter().enumerate() {
        match a.date_line() {
            Some(date) => output.push_str(&format!("{}. {} ({})\n", i + 1, a.title, date)),
            None => output.push_str(&format!("{}. {}\n", i + 1, a.title)),
        }
        if !a.body.is_empty() {
            output.push_str(&format!("   {}\n", truncate(&a.body, BODY_MAX_LEN)));
        }
        output.push_str(&format!("   {}\n\n", a.url));
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max) {
        Some((end, _)) => format!("{}…", &flat[..end]),
        None => flat,
    }
}
