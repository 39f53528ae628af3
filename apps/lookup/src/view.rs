//! Plain-text rendering of the lookup screen.

use std::fmt::Write as _;

use shared::domain::SearchResult;

use crate::controller::reducer::LookupScreen;

pub const PROMPT_HINT: &str = "Enter Semantic Scholar ID or Topic";
pub const HELP: &str = "\
Type a topic to search. Commands:
  :open <n>   show details for result n
  :close      dismiss the detail view
  :quit       exit";

pub fn render_results(screen: &LookupScreen) -> String {
    if screen.is_loading() {
        return "Fetching relevant articles...".to_string();
    }
    if let Some(error) = screen.error() {
        return error.to_string();
    }
    if screen.results().is_empty() {
        return "No matching papers.".to_string();
    }

    let mut out = String::new();
    for (row, result) in screen.results().iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", row + 1, result.title);
        let _ = writeln!(out, "    {}", first_line(&result.summary));
    }
    out.truncate(out.trim_end().len());
    out
}

/// The result list with the detail overlay on top when a row is selected.
pub fn render_screen(screen: &LookupScreen) -> String {
    let list = render_results(screen);
    match screen.selected() {
        Some(result) => format!("{list}\n\n{}", render_detail(result)),
        None => list,
    }
}

pub fn render_detail(result: &SearchResult) -> String {
    format!("== {} ==\n{}", result.title, result.details)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use shared::error::SearchError;

    use super::*;
    use crate::controller::events::UiEvent;

    fn settled(outcome: Result<Vec<SearchResult>, SearchError>) -> LookupScreen {
        let mut screen = LookupScreen::default();
        let ticket = screen.begin_search().expect("ticket");
        screen.apply(UiEvent::SearchSettled { ticket, outcome });
        screen
    }

    #[test]
    fn lists_numbered_titles_with_summaries() {
        let screen = settled(Ok(vec![
            SearchResult::new("Attention", "U1", "Transformers.\nMore text.", None, 3),
            SearchResult::new("ResNets", "U2", "Residual nets.", None, 9),
        ]));
        assert_eq!(
            render_results(&screen),
            " 1. Attention\n    Transformers.\n 2. ResNets\n    Residual nets."
        );
    }

    #[test]
    fn shows_error_message_instead_of_list() {
        let screen = settled(Err(SearchError::network("connection refused")));
        assert_eq!(
            render_results(&screen),
            "Error fetching data: connection refused"
        );
    }

    #[test]
    fn loading_and_empty_states() {
        let mut screen = LookupScreen::default();
        screen.begin_search().expect("ticket");
        assert_eq!(render_results(&screen), "Fetching relevant articles...");

        let screen = settled(Ok(Vec::new()));
        assert_eq!(render_results(&screen), "No matching papers.");
    }

    #[test]
    fn overlay_follows_selection() {
        let mut screen = settled(Ok(vec![
            SearchResult::new("Attention", "U1", "Transformers.", None, 3),
            SearchResult::new("ResNets", "U2", "Residual nets.", None, 9),
        ]));
        let list = render_results(&screen);
        assert_eq!(render_screen(&screen), list);

        screen.select(2).expect("row exists");
        assert_eq!(
            render_screen(&screen),
            format!("{list}\n\n== ResNets ==\nAuthors: Unknown Authors\nCitations: 9\nURL: U2")
        );

        screen.close_detail();
        assert_eq!(render_screen(&screen), list);
        assert!(!render_screen(&screen).contains("== ResNets =="));
    }

    #[test]
    fn detail_shows_title_and_details_block() {
        let names = vec!["X".to_string()];
        let result = SearchResult::new("T", "U", "A", Some(names.as_slice()), 42);
        assert_eq!(
            render_detail(&result),
            "== T ==\nAuthors: X\nCitations: 42\nURL: U"
        );
    }
}
