use common::games::snake::{Direction, SessionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Event(SessionEvent),
    ToggleWalkThrough,
    Quit,
}

/// Maps one line of console input to a command. Unknown input yields `None`.
pub fn parse_input(line: &str) -> Option<InputCommand> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if !trimmed.is_empty() && trimmed.trim().is_empty() {
        return Some(InputCommand::Event(SessionEvent::TogglePause));
    }

    let command = match trimmed.trim().to_lowercase().as_str() {
        "w" | "up" => InputCommand::Event(SessionEvent::Turn(Direction::Up)),
        "s" | "down" => InputCommand::Event(SessionEvent::Turn(Direction::Down)),
        "a" | "left" => InputCommand::Event(SessionEvent::Turn(Direction::Left)),
        "d" | "right" => InputCommand::Event(SessionEvent::Turn(Direction::Right)),
        "p" | "pause" => InputCommand::Event(SessionEvent::TogglePause),
        "r" | "restart" => InputCommand::Event(SessionEvent::Reset),
        "t" => InputCommand::ToggleWalkThrough,
        "q" | "quit" => InputCommand::Quit,
        _ => return None,
    };
    Some(command)
}
