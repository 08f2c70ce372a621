#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    New,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "Commands: /new (start a new chat), /help, /quit";

pub fn parse_slash_command(input: &str) -> Option<SlashCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let command = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_string();

    let parsed = match command.as_str() {
        "/new" => SlashCommand::New,
        "/help" => SlashCommand::Help,
        "/quit" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(command),
    };

    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::{parse_slash_command, SlashCommand};

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_slash_command("hello /new"), None);
        assert_eq!(parse_slash_command(""), None);
    }

    #[test]
    fn known_commands_parse_with_surrounding_whitespace() {
        assert_eq!(parse_slash_command("  /new "), Some(SlashCommand::New));
        assert_eq!(parse_slash_command("/help"), Some(SlashCommand::Help));
        assert_eq!(parse_slash_command("/quit now"), Some(SlashCommand::Quit));
    }

    #[test]
    fn unknown_command_keeps_its_name() {
        assert_eq!(
            parse_slash_command("/reset everything"),
            Some(SlashCommand::Unknown("/reset".to_string()))
        );
    }
}
