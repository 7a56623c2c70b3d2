// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interactive song editor.
//!
//! The editor is a small state machine: a cursor over named fields, a
//! Navigate/Input mode toggle, and a window of visible ticks. Every input
//! goes through [`Editor::handle`], which mutates the state and the owned
//! song and tells the caller what to do next. Nothing here touches the
//! terminal, so the whole thing is testable in isolation.

mod event;
mod field;
pub mod session;

pub use event::EditorEvent;
pub use field::{Direction, Field, Neighbors};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::song::{Beat, Song, SongError, Voice};

/// Ticks shown before the active tick when the window scrolls
pub const DEFAULT_LOOKBACK: i64 = 7;

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Arrows move the cursor
    #[default]
    Navigate,
    /// Keys change the focused field
    Input,
}

/// What the caller should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Save,
    Quit,
}

/// Complete cursor state of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub mode: Mode,
    pub field: Field,
    /// Tick under the cursor
    pub active_tick: i64,
    /// First tick of the visible window
    pub first_tick: i64,
    /// Blink phase of the cursor
    pub cursor_on: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            mode: Mode::Navigate,
            field: Field::Name,
            active_tick: 1,
            first_tick: 1,
            cursor_on: false,
        }
    }
}

/// How the focused field reacts to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Tempo,
    Voice(Voice),
}

impl From<Field> for Focus {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => Focus::Name,
            Field::Tempo => Focus::Tempo,
            Field::Cymbal => Focus::Voice(Voice::Cymbal),
            Field::HiHat => Focus::Voice(Voice::HiHat),
            Field::HandClapTambourine => Focus::Voice(Voice::HandClapTambourine),
            Field::RimshotCowbell => Focus::Voice(Voice::RimshotCowbell),
            Field::HiTom => Focus::Voice(Voice::HiTom),
            Field::MidTom => Focus::Voice(Voice::MidTom),
            Field::LowTom => Focus::Voice(Voice::LowTom),
            Field::SnareDrum => Focus::Voice(Voice::SnareDrum),
            Field::BassDrum => Focus::Voice(Voice::BassDrum),
            Field::Accent => Focus::Voice(Voice::Accent),
        }
    }
}

/// Editor state plus the song being edited
#[derive(Debug, Clone)]
pub struct Editor {
    state: EditorState,
    song: Song,
    lookback: i64,
}

impl Editor {
    pub fn new(song: Song) -> Self {
        Self {
            state: EditorState::default(),
            song,
            lookback: DEFAULT_LOOKBACK,
        }
    }

    /// Set how many ticks stay visible behind the cursor
    pub fn with_lookback(mut self, lookback: i64) -> Self {
        self.lookback = lookback.max(0);
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn into_song(self) -> Song {
        self.song
    }

    /// Apply one input event
    pub fn handle(&mut self, event: EditorEvent) -> Effect {
        use EditorEvent as E;

        let focus = Focus::from(self.state.field);

        match (self.state.mode, focus, event) {
            (_, _, E::Save) => Effect::Save,
            (_, _, E::Quit) => Effect::Quit,
            (_, _, E::Blink) => {
                self.state.cursor_on = !self.state.cursor_on;
                Effect::Redraw
            }
            (_, _, E::Redraw) => Effect::Redraw,

            (Mode::Navigate, _, E::Left) => self.navigate(Direction::Left),
            (Mode::Navigate, _, E::Right) => self.navigate(Direction::Right),
            (Mode::Navigate, _, E::Up) => self.navigate(Direction::Up),
            (Mode::Navigate, _, E::Down) => self.navigate(Direction::Down),
            (Mode::Navigate, _, E::Confirm) => {
                self.state.mode = Mode::Input;
                Effect::Redraw
            }

            (Mode::Input, _, E::Confirm) => {
                if focus == Focus::Tempo {
                    self.guard_tempo();
                }
                self.state.mode = Mode::Navigate;
                Effect::Redraw
            }

            (Mode::Input, Focus::Name, E::Char(c)) => {
                self.song.name_mut().push(c);
                Effect::Redraw
            }
            (Mode::Input, Focus::Name, E::Space) => {
                self.song.name_mut().push(' ');
                Effect::Redraw
            }
            (Mode::Input, Focus::Name, E::Backspace) => {
                self.song.name_mut().pop();
                Effect::Redraw
            }

            (Mode::Input, Focus::Tempo, E::Char(c)) => match c.to_digit(10) {
                Some(digit) => {
                    let tempo = self
                        .song
                        .tempo()
                        .checked_mul(10)
                        .and_then(|t| t.checked_add(i64::from(digit)));
                    match tempo {
                        Some(tempo) => {
                            self.song.set_tempo(tempo);
                            Effect::Redraw
                        }
                        None => Effect::None,
                    }
                }
                None => Effect::None,
            },
            (Mode::Input, Focus::Tempo, E::Backspace) => {
                self.song.set_tempo(self.song.tempo() / 10);
                Effect::Redraw
            }

            (Mode::Input, Focus::Voice(voice), E::Left | E::Up) => self.adjust(voice, -1),
            (Mode::Input, Focus::Voice(voice), E::Right | E::Down) => self.adjust(voice, 1),

            _ => Effect::None,
        }
    }

    /// Apply the tempo guard and write the song to `<dir>/<name>.json`
    pub fn save_to(&mut self, dir: &Path) -> Result<PathBuf, SongError> {
        self.guard_tempo();
        if self.song.name().is_empty() {
            return Err(SongError::EmptyName);
        }

        if self.song.name().contains(['/', '\\']) {
            return Err(SongError::UnsafeName(self.song.name().to_string()));
        }

        let path = dir.join(self.song.file_name());
        self.song.save(&path)?;
        Ok(path)
    }

    fn navigate(&mut self, direction: Direction) -> Effect {
        let next = self.state.field.step(direction);

        if next.is_voice() {
            match direction {
                Direction::Left => self.state.active_tick = (self.state.active_tick - 1).max(1),
                Direction::Right => self.state.active_tick += 1,
                Direction::Up | Direction::Down => {}
            }
        }

        self.state.field = next;
        self.state.first_tick = (self.state.active_tick - self.lookback).max(1);
        Effect::Redraw
    }

    fn adjust(&mut self, voice: Voice, delta: i64) -> Effect {
        let tick = self.state.active_tick;
        let mut beat = self
            .song
            .beat_at(tick)
            .copied()
            .unwrap_or_else(|| Beat::empty(tick));

        beat.set_level(voice, i64::from(beat.level(voice)) + delta);
        debug!(tick, ?voice, level = beat.level(voice), "voice changed");
        self.song.upsert(beat);
        Effect::Redraw
    }

    fn guard_tempo(&mut self) {
        if self.song.tempo() <= 0 {
            self.song.set_tempo(1);
        }
    }
}
