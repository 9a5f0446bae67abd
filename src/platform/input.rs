//! Input mapping
//!
//! Hosts translate their raw events into `InputEvent`s; this module turns
//! those into the three commands the game understands. Anything else is
//! dropped here so the session never sees it.

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Up,
    R,
    Escape,
    /// Any other key, by character when it has one
    Other(char),
}

/// Host-agnostic input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window close button or OS quit request
    CloseRequested,
}

/// Game-level command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Reset,
    Quit,
}

/// Map one event; `None` for events the game ignores
pub fn map_event(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::KeyDown(Key::Space | Key::Up) => Some(Command::Jump),
        InputEvent::KeyDown(Key::R) => Some(Command::Reset),
        InputEvent::KeyDown(Key::Other('r' | 'R')) => Some(Command::Reset),
        InputEvent::KeyDown(Key::Other(' ')) => Some(Command::Jump),
        InputEvent::KeyDown(Key::Escape) | InputEvent::CloseRequested => Some(Command::Quit),
        _ => None,
    }
}

/// Map a frame's worth of events, preserving order
pub fn map_events(events: &[InputEvent]) -> Vec<Command> {
    events.iter().filter_map(map_event).collect()
}
