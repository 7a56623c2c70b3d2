// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song model for step-sequenced drum patterns.
//!
//! This module provides:
//! - Voices: the fixed percussion catalogue and its legal states
//! - Beats: the state of every voice at one tick
//! - Songs: a validated, sorted, sparse collection of beats plus name and tempo

pub mod beat;
pub mod voice;

pub use beat::Beat;
pub use voice::{
    Accent, BassDrum, Cymbal, HandClapTambourine, HiHat, RimshotCowbell, SnareDrum, Tom, Voice,
    VoiceState,
};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while building, reading or writing a song
#[derive(Debug, Error)]
pub enum SongError {
    #[error("song name should not be empty")]
    EmptyName,

    #[error("song tempo should be greater than 0 (got {0})")]
    InvalidTempo(i64),

    #[error("tick number for beat must be greater than 0 (got {0})")]
    InvalidTick(i64),

    #[error("tick number for beat may not repeat (tick {0})")]
    DuplicateTick(i64),

    #[error("song name {0:?} cannot be used as a file name")]
    UnsafeName(String),

    #[error("malformed song document")]
    Decode(#[from] serde_json::Error),

    #[error("cannot access song file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SongError {
    /// Whether the error is an invariant violation rather than a decode or I/O failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SongError::EmptyName
                | SongError::InvalidTempo(_)
                | SongError::InvalidTick(_)
                | SongError::DuplicateTick(_)
        )
    }
}

/// External document layout
#[derive(Debug, Serialize, Deserialize)]
struct SongDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tempo: i64,
    #[serde(default)]
    beats: Vec<Beat>,
}

/// A whole song: its name, tempo and all of its beats.
///
/// The beat list is sparse, each beat covering its own tick. Beats are kept
/// sorted by tick and no two beats share a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Song name
    name: String,
    /// Tempo in ticks per minute
    tempo: i64,
    /// Beats sorted by tick
    beats: Vec<Beat>,
}

impl Song {
    /// Create a song, making sure its metadata and beat numbering are valid.
    ///
    /// Beats are sorted first, so unsorted input is accepted.
    pub fn new(name: impl Into<String>, tempo: i64, mut beats: Vec<Beat>) -> Result<Self, SongError> {
        let name = name.into();
        beats.sort_by_key(|beat| beat.tick);

        if name.is_empty() {
            return Err(SongError::EmptyName);
        }

        if tempo <= 0 {
            return Err(SongError::InvalidTempo(tempo));
        }

        if let Some(beat) = beats.iter().find(|beat| beat.tick <= 0) {
            return Err(SongError::InvalidTick(beat.tick));
        }

        // Sorted, so any repeat sits next to its twin
        if let Some(pair) = beats.windows(2).find(|pair| pair[0].tick == pair[1].tick) {
            return Err(SongError::DuplicateTick(pair[1].tick));
        }

        Ok(Self { name, tempo, beats })
    }

    /// Create a song with no beats
    pub fn blank(name: impl Into<String>, tempo: i64) -> Result<Self, SongError> {
        Self::new(name, tempo, Vec::new())
    }

    /// The built-in "four on the floor" pattern
    pub fn four_on_the_floor() -> Result<Self, SongError> {
        let kick = |tick| Beat::new(tick).with_level(Voice::BassDrum, 1);
        let hat = |tick| Beat::new(tick).with_level(Voice::HiHat, 1);
        let kick_snare = |tick| {
            Beat::new(tick)
                .with_level(Voice::BassDrum, 1)
                .with_level(Voice::SnareDrum, 1)
        };

        Self::new(
            "four-on-the-floor",
            128,
            vec![
                kick(1),
                hat(3),
                kick_snare(5),
                hat(7),
                kick(9),
                hat(11),
                kick_snare(13),
                hat(15),
            ],
        )
    }

    /// Parse a song from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SongError> {
        let document: SongDocument = serde_json::from_str(json)?;
        Self::new(document.name, document.tempo, document.beats)
    }

    /// Parse a song from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SongError> {
        let document: SongDocument = serde_json::from_reader(reader)?;
        Self::new(document.name, document.tempo, document.beats)
    }

    /// Load a song from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SongError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SongError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let song = Self::from_json(&contents)?;
        debug!(path = %path.display(), beats = song.beats.len(), "song loaded");
        Ok(song)
    }

    /// Encode the song as a JSON document.
    ///
    /// Empty beats after the last audible one are left out.
    pub fn to_json(&self) -> Result<String, SongError> {
        let mut beats = self.beats.clone();
        beats.sort_by_key(|beat| beat.tick);
        let keep = beats
            .iter()
            .rposition(|beat| !beat.is_empty())
            .map_or(0, |index| index + 1);
        beats.truncate(keep);

        let document = SongDocument {
            name: self.name.clone(),
            tempo: self.tempo,
            beats,
        };
        Ok(serde_json::to_string(&document)?)
    }

    /// Write the song to a JSON file, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SongError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SongError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "song saved");
        Ok(())
    }

    /// File name the editor saves this song under
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Get song name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    /// Get tempo
    pub fn tempo(&self) -> i64 {
        self.tempo
    }

    pub(crate) fn set_tempo(&mut self, tempo: i64) {
        self.tempo = tempo;
    }

    /// Get all beats, sorted by tick
    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    /// Get the beat at a tick, if there is one
    pub fn beat_at(&self, tick: i64) -> Option<&Beat> {
        self.beats
            .binary_search_by_key(&tick, |beat| beat.tick)
            .ok()
            .map(|index| &self.beats[index])
    }

    /// Highest tick with a beat on it
    pub fn last_tick(&self) -> Option<i64> {
        self.beats.last().map(|beat| beat.tick)
    }

    /// Replace the beat with the same tick, or add it, keeping beats sorted
    pub fn upsert(&mut self, beat: Beat) {
        if let Some(existing) = self.beats.iter_mut().find(|b| b.tick == beat.tick) {
            *existing = beat;
            return;
        }
        self.beats.push(beat);
        self.beats.sort_by_key(|beat| beat.tick);
    }

    /// Time between ticks
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(60) / self.tempo.clamp(1, u32::MAX as i64) as u32
    }
}
