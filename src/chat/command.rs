use inquire::autocompletion::{Autocomplete, Replacement};

use crate::i18n::{Language, Strings};

/// Available slash commands with their localized descriptions.
pub fn slash_commands(strings: &'static Strings) -> [(&'static str, &'static str); 3] {
    [
        ("/help", strings.help_show),
        ("/lang", strings.help_lang),
        ("/quit", strings.help_quit),
    ]
}

/// Slash command autocompleter
#[derive(Clone)]
pub struct SlashCommandCompleter {
    strings: &'static Strings,
}

impl SlashCommandCompleter {
    pub fn new(language: Language) -> Self {
        Self {
            strings: language.strings(),
        }
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.starts_with("//") {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = slash_commands(self.strings)
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Lang,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A chat message, kept exactly as typed.
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies one line of chat input.
///
/// A leading `//` escapes the slash: the line is sent as text with one `/`
/// removed.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    if trimmed.starts_with("//") {
        let indent = input.len() - input.trim_start().len();
        return Input::Text(format!("{}{}", &input[..indent], &input[indent + 1..]));
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("help" | "h" | "?") => Input::Command(SlashCommand::Help),
        Some("lang" | "language" | "l") => Input::Command(SlashCommand::Lang),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input_is_not_trimmed() {
        assert_eq!(
            parse_input("  I can't sleep  "),
            Input::Text("  I can't sleep  ".to_string())
        );
    }

    #[test]
    fn test_parse_lang_command() {
        assert_eq!(parse_input("/lang"), Input::Command(SlashCommand::Lang));
        assert_eq!(parse_input(" /language "), Input::Command(SlashCommand::Lang));
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_quit_commands() {
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(cmd), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_double_slash_sends_text() {
        assert_eq!(parse_input("//shrug"), Input::Text("/shrug".to_string()));
        assert_eq!(
            parse_input("  // I feel lost"),
            Input::Text("  / I feel lost".to_string())
        );
        assert_eq!(parse_input("//lang"), Input::Text("/lang".to_string()));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown arg"),
            Input::Command(SlashCommand::Unknown("unknown arg".to_string()))
        );
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter::new(Language::English);
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter::new(Language::English);
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter::new(Language::English);

        let suggestions = completer.get_suggestions("/l").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/lang"));
    }

    #[test]
    fn test_completer_ignores_escaped_slash() {
        let mut completer = SlashCommandCompleter::new(Language::English);
        assert!(completer.get_suggestions("//").unwrap().is_empty());
    }

    #[test]
    fn test_completer_descriptions_follow_language() {
        let mut completer = SlashCommandCompleter::new(Language::Bengali);
        let suggestions = completer.get_suggestions("/lang").unwrap();
        assert_eq!(
            suggestions,
            vec![format!("/lang  {}", Language::Bengali.strings().help_lang)]
        );
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter::new(Language::English);
        let suggestion = "/lang  Switch between English and Bengali".to_string();
        let completion = completer.get_completion("/l", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/lang".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter::new(Language::English);
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
