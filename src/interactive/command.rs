#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Blank,
    Exit,
    Help,
    History,
    Show(usize),
    Copy,
    Topic(String),
    Invalid(String),
}

/// Anything that is not a command is a topic, kept exactly as typed.
pub fn parse(raw: &str) -> FormInput {
    let input = raw.trim();
    if input.is_empty() {
        return FormInput::Blank;
    }
    if matches!(input, "exit" | "quit" | "/exit" | "/quit") {
        return FormInput::Exit;
    }
    let Some(command) = input.strip_prefix('/') else {
        return FormInput::Topic(raw.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("help"), None, _) => FormInput::Help,
        (Some("history"), None, _) => FormInput::History,
        (Some("copy"), None, _) => FormInput::Copy,
        (Some("show"), Some(number), None) => match number.parse::<usize>() {
            Ok(position) if position > 0 => FormInput::Show(position),
            _ => FormInput::Invalid(format!("'{number}' is not a draft number")),
        },
        (Some("show"), _, _) => FormInput::Invalid("usage: /show <number>".to_string()),
        _ => FormInput::Invalid(format!("unknown command '/{command}' (try /help)")),
    }
}
