// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Editor input events and their terminal key bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Backspace,
    Space,
    Char(char),
    Save,
    Quit,
    /// Cursor blink timer fired
    Blink,
    /// Screen needs repainting (resize, mouse)
    Redraw,
}

impl EditorEvent {
    /// Map a key press; keys with no binding give `None`
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => Some(EditorEvent::Save),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') => {
                    Some(EditorEvent::Quit)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Left => Some(EditorEvent::Left),
            KeyCode::Right => Some(EditorEvent::Right),
            KeyCode::Up => Some(EditorEvent::Up),
            KeyCode::Down => Some(EditorEvent::Down),
            KeyCode::Enter => Some(EditorEvent::Confirm),
            KeyCode::Backspace => Some(EditorEvent::Backspace),
            KeyCode::Char(' ') => Some(EditorEvent::Space),
            KeyCode::Char(c) if !c.is_control() => Some(EditorEvent::Char(c)),
            _ => None,
        }
    }

    /// Map any terminal event
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(_, _) | Event::Mouse(_) => Some(EditorEvent::Redraw),
            _ => None,
        }
    }
}
