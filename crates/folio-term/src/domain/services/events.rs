use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

pub const UI_TICK: time::Duration = time::Duration::from_millis(500);

/// Translates a terminal key press into the editor-style input the state
/// machine consumes. Releases and repeats are dropped.
pub fn key_to_event(keyevent: crossterm::event::KeyEvent) -> Option<Event> {
    if keyevent.kind != KeyEventKind::Press {
        return None;
    }

    let mut shift = keyevent.modifiers.contains(KeyModifiers::SHIFT);
    let key = match keyevent.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            shift = true;
            Key::Tab
        }
        KeyCode::Delete => Key::Delete,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };

    let input = Input {
        key,
        ctrl: keyevent.modifiers.contains(KeyModifiers::CONTROL),
        alt: keyevent.modifiers.contains(KeyModifiers::ALT),
        shift,
    };

    match input {
        Input {
            key: Key::Char('c'),
            ctrl: true,
            alt: false,
            ..
        } => {
            return Some(Event::KeyboardCTRLC);
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Some(Event::KeyboardEnter);
        }
        input => {
            return Some(Event::KeyboardCharInput(input));
        }
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Key(keyevent) => {
                return key_to_event(keyevent);
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = ?err, "failed to read terminal event");
                        None
                    }
                    None => None
                },
                _ = time::sleep(UI_TICK) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
