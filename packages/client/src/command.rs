//! Parsing of lines typed by the user.

/// What a typed line asks the client to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Send a chat message
    Message(String),
    /// Switch to another room
    Join(String),
    /// Tell the room we are typing
    Typing,
    /// Leave the client
    Quit,
    /// Nothing to do
    Empty,
    /// Unrecognized slash command
    Unknown(String),
}

pub const HELP: &str = "commands: /join <room>, /typing, /quit";

/// Parse one input line.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let Some(command) = line.strip_prefix('/') else {
        return Input::Message(line.to_string());
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command, ""),
    };

    match (name, argument) {
        ("join", room) if !room.is_empty() => Input::Join(room.to_string()),
        ("typing", _) => Input::Typing,
        ("quit" | "exit", _) => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}
