//! Backend → UI events and user input parsing.

use shared::{domain::SearchResult, error::SearchError};

pub enum UiEvent {
    SearchSettled {
        ticket: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Search(String),
    /// 1-based row number as typed by the user.
    Open(usize),
    Close,
    Quit,
    Help,
    Invalid(String),
}

pub fn parse_input(line: &str) -> Option<InputAction> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(InputAction::Search(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let action = match (parts.next(), parts.next(), parts.next()) {
        (Some("open"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => InputAction::Open(n),
            _ => InputAction::Invalid(format!("not a row number: {n}")),
        },
        (Some("close"), None, None) => InputAction::Close,
        (Some("quit" | "q"), None, None) => InputAction::Quit,
        (Some("help"), None, None) => InputAction::Help,
        _ => InputAction::Invalid(format!("unknown command: {line}")),
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            parse_input("  neural networks \n"),
            Some(InputAction::Search("neural networks".into()))
        );
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn colon_commands_are_recognised() {
        assert_eq!(parse_input(":open 3"), Some(InputAction::Open(3)));
        assert_eq!(parse_input(":close"), Some(InputAction::Close));
        assert_eq!(parse_input(":q"), Some(InputAction::Quit));
        assert_eq!(parse_input(":help"), Some(InputAction::Help));
    }

    #[test]
    fn bad_commands_are_reported() {
        assert!(matches!(parse_input(":open 0"), Some(InputAction::Invalid(_))));
        assert!(matches!(parse_input(":open x"), Some(InputAction::Invalid(_))));
        assert!(matches!(parse_input(":frobnicate"), Some(InputAction::Invalid(_))));
    }
}
