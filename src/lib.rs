// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Beats: a step-sequenced drum pattern editor and player.

pub mod config;
pub mod editor;
pub mod logging;
pub mod playback;
pub mod song;
pub mod ui;

pub use config::{Config, ConfigError};
pub use editor::{Editor, EditorEvent, EditorState, Effect, Field, Mode};
pub use playback::{print_steps, Player, Step};
pub use song::{Beat, Song, SongError, Voice};
