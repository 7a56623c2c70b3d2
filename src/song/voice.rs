// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Percussion voice catalogue.
//!
//! Every voice has a small closed set of states with fixed integer codes.
//! Raw integers coming from documents or the editor are converted with
//! [`VoiceState::from_raw`], which clamps instead of rejecting, so an
//! out-of-range state can never exist in memory.

use serde::{Deserialize, Serialize};

/// Common behaviour of the per-voice state enums
pub trait VoiceState: Copy + Sized + 'static {
    /// Legal states ordered by their integer code
    const STATES: &'static [Self];

    /// Integer code of this state
    fn raw(self) -> u8;

    /// Convert a raw integer, clamping into the legal range
    fn from_raw(raw: i64) -> Self {
        let max = Self::STATES.len() as i64 - 1;
        Self::STATES[raw.clamp(0, max) as usize]
    }

    /// Highest legal integer code
    fn max_raw() -> u8 {
        (Self::STATES.len() - 1) as u8
    }

    /// Whether the voice is silent
    fn is_off(self) -> bool {
        self.raw() == 0
    }
}

/// Bass drum: off, drum 1 or drum 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum BassDrum {
    #[default]
    Off,
    Drum1,
    Drum2,
}

impl VoiceState for BassDrum {
    const STATES: &'static [Self] = &[BassDrum::Off, BassDrum::Drum1, BassDrum::Drum2];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Snare drum: off, drum 1 or drum 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum SnareDrum {
    #[default]
    Off,
    Drum1,
    Drum2,
}

impl VoiceState for SnareDrum {
    const STATES: &'static [Self] = &[SnareDrum::Off, SnareDrum::Drum1, SnareDrum::Drum2];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Low, mid and hi toms are independent on/off voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Tom {
    #[default]
    Off,
    On,
}

impl VoiceState for Tom {
    const STATES: &'static [Self] = &[Tom::Off, Tom::On];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Rimshot and cowbell share one slot and are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum RimshotCowbell {
    #[default]
    Off,
    Rimshot,
    Cowbell,
}

impl VoiceState for RimshotCowbell {
    const STATES: &'static [Self] = &[
        RimshotCowbell::Off,
        RimshotCowbell::Rimshot,
        RimshotCowbell::Cowbell,
    ];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Hand clap and tambourine share one slot and are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum HandClapTambourine {
    #[default]
    Off,
    HandClap,
    Tambourine,
}

impl VoiceState for HandClapTambourine {
    const STATES: &'static [Self] = &[
        HandClapTambourine::Off,
        HandClapTambourine::HandClap,
        HandClapTambourine::Tambourine,
    ];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Hi-hat: off, closed or open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum HiHat {
    #[default]
    Off,
    Closed,
    Open,
}

impl VoiceState for HiHat {
    const STATES: &'static [Self] = &[HiHat::Off, HiHat::Closed, HiHat::Open];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Cymbal: off, crash or ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Cymbal {
    #[default]
    Off,
    Crash,
    Ride,
}

impl VoiceState for Cymbal {
    const STATES: &'static [Self] = &[Cymbal::Off, Cymbal::Crash, Cymbal::Ride];

    fn raw(self) -> u8 {
        self as u8
    }
}

/// Accent: off or on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Accent {
    #[default]
    Off,
    On,
}

impl VoiceState for Accent {
    const STATES: &'static [Self] = &[Accent::Off, Accent::On];

    fn raw(self) -> u8 {
        self as u8
    }
}

impl From<i64> for BassDrum {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for SnareDrum {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for Tom {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for RimshotCowbell {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for HandClapTambourine {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for HiHat {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for Cymbal {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<i64> for Accent {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<BassDrum> for u8 {
    fn from(state: BassDrum) -> u8 {
        state.raw()
    }
}

impl From<SnareDrum> for u8 {
    fn from(state: SnareDrum) -> u8 {
        state.raw()
    }
}

impl From<Tom> for u8 {
    fn from(state: Tom) -> u8 {
        state.raw()
    }
}

impl From<RimshotCowbell> for u8 {
    fn from(state: RimshotCowbell) -> u8 {
        state.raw()
    }
}

impl From<HandClapTambourine> for u8 {
    fn from(state: HandClapTambourine) -> u8 {
        state.raw()
    }
}

impl From<HiHat> for u8 {
    fn from(state: HiHat) -> u8 {
        state.raw()
    }
}

impl From<Cymbal> for u8 {
    fn from(state: Cymbal) -> u8 {
        state.raw()
    }
}

impl From<Accent> for u8 {
    fn from(state: Accent) -> u8 {
        state.raw()
    }
}

/// The ten voice slots of a beat, in editor row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Cymbal,
    HiHat,
    HandClapTambourine,
    RimshotCowbell,
    HiTom,
    MidTom,
    LowTom,
    SnareDrum,
    BassDrum,
    Accent,
}

impl Voice {
    /// All voices in editor row order
    pub const ALL: [Voice; 10] = [
        Voice::Cymbal,
        Voice::HiHat,
        Voice::HandClapTambourine,
        Voice::RimshotCowbell,
        Voice::HiTom,
        Voice::MidTom,
        Voice::LowTom,
        Voice::SnareDrum,
        Voice::BassDrum,
        Voice::Accent,
    ];

    /// Highest legal level for this voice
    pub fn max_level(self) -> u8 {
        match self {
            Voice::Cymbal => Cymbal::max_raw(),
            Voice::HiHat => HiHat::max_raw(),
            Voice::HandClapTambourine => HandClapTambourine::max_raw(),
            Voice::RimshotCowbell => RimshotCowbell::max_raw(),
            Voice::HiTom | Voice::MidTom | Voice::LowTom => Tom::max_raw(),
            Voice::SnareDrum => SnareDrum::max_raw(),
            Voice::BassDrum => BassDrum::max_raw(),
            Voice::Accent => Accent::max_raw(),
        }
    }

    /// Key used for this voice in song documents
    pub fn key(self) -> &'static str {
        match self {
            Voice::Cymbal => "cy",
            Voice::HiHat => "hh",
            Voice::HandClapTambourine => "hc",
            Voice::RimshotCowbell => "rc",
            Voice::HiTom => "ht",
            Voice::MidTom => "mt",
            Voice::LowTom => "lt",
            Voice::SnareDrum => "sd",
            Voice::BassDrum => "bd",
            Voice::Accent => "ac",
        }
    }
}
