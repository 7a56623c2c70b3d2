// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A single beat: the state of every voice at one tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::voice::{
    Accent, BassDrum, Cymbal, HandClapTambourine, HiHat, RimshotCowbell, SnareDrum, Tom, Voice,
    VoiceState,
};

/// All the sounds happening at a single tick of the rhythm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Beat {
    /// Tick of the song this beat is for (1-based)
    #[serde(default)]
    pub tick: i64,
    #[serde(rename = "bd", default, skip_serializing_if = "is_silent")]
    pub bass_drum: BassDrum,
    #[serde(rename = "sd", default, skip_serializing_if = "is_silent")]
    pub snare_drum: SnareDrum,
    #[serde(rename = "lt", default, skip_serializing_if = "is_silent")]
    pub low_tom: Tom,
    #[serde(rename = "mt", default, skip_serializing_if = "is_silent")]
    pub mid_tom: Tom,
    #[serde(rename = "ht", default, skip_serializing_if = "is_silent")]
    pub hi_tom: Tom,
    #[serde(rename = "rc", default, skip_serializing_if = "is_silent")]
    pub rimshot_cowbell: RimshotCowbell,
    #[serde(rename = "hc", default, skip_serializing_if = "is_silent")]
    pub hand_clap_tambourine: HandClapTambourine,
    #[serde(rename = "hh", default, skip_serializing_if = "is_silent")]
    pub hi_hat: HiHat,
    #[serde(rename = "cy", default, skip_serializing_if = "is_silent")]
    pub cymbal: Cymbal,
    #[serde(rename = "ac", default, skip_serializing_if = "is_silent")]
    pub accent: Accent,
}

impl Beat {
    /// Create a beat with every voice off
    pub fn new(tick: i64) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }

    /// Placeholder for a tick with nothing on it
    pub fn empty(tick: i64) -> Self {
        Self::new(tick)
    }

    /// Whether every voice is off
    pub fn is_empty(&self) -> bool {
        Voice::ALL.iter().all(|&voice| self.level(voice) == 0)
    }

    /// Current level of a voice as its integer code
    pub fn level(&self, voice: Voice) -> u8 {
        match voice {
            Voice::Cymbal => self.cymbal.raw(),
            Voice::HiHat => self.hi_hat.raw(),
            Voice::HandClapTambourine => self.hand_clap_tambourine.raw(),
            Voice::RimshotCowbell => self.rimshot_cowbell.raw(),
            Voice::HiTom => self.hi_tom.raw(),
            Voice::MidTom => self.mid_tom.raw(),
            Voice::LowTom => self.low_tom.raw(),
            Voice::SnareDrum => self.snare_drum.raw(),
            Voice::BassDrum => self.bass_drum.raw(),
            Voice::Accent => self.accent.raw(),
        }
    }

    /// Set a voice from a raw level, clamped to the voice's legal range
    pub fn set_level(&mut self, voice: Voice, raw: i64) {
        match voice {
            Voice::Cymbal => self.cymbal = Cymbal::from_raw(raw),
            Voice::HiHat => self.hi_hat = HiHat::from_raw(raw),
            Voice::HandClapTambourine => {
                self.hand_clap_tambourine = HandClapTambourine::from_raw(raw)
            }
            Voice::RimshotCowbell => self.rimshot_cowbell = RimshotCowbell::from_raw(raw),
            Voice::HiTom => self.hi_tom = Tom::from_raw(raw),
            Voice::MidTom => self.mid_tom = Tom::from_raw(raw),
            Voice::LowTom => self.low_tom = Tom::from_raw(raw),
            Voice::SnareDrum => self.snare_drum = SnareDrum::from_raw(raw),
            Voice::BassDrum => self.bass_drum = BassDrum::from_raw(raw),
            Voice::Accent => self.accent = Accent::from_raw(raw),
        }
    }

    /// Builder: set a voice level
    pub fn with_level(mut self, voice: Voice, raw: i64) -> Self {
        self.set_level(voice, raw);
        self
    }
}

fn is_silent<T: VoiceState>(state: &T) -> bool {
    state.is_off()
}

impl fmt::Display for Beat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if !self.bass_drum.is_off() {
            parts.push(format!("bass_{}", self.bass_drum.raw()));
        }
        if !self.snare_drum.is_off() {
            parts.push(format!("snare_{}", self.snare_drum.raw()));
        }
        if self.low_tom == Tom::On {
            parts.push("low_tom".to_string());
        }
        if self.mid_tom == Tom::On {
            parts.push("mid_tom".to_string());
        }
        if self.hi_tom == Tom::On {
            parts.push("hi_tom".to_string());
        }
        match self.rimshot_cowbell {
            RimshotCowbell::Rimshot => parts.push("rim".to_string()),
            RimshotCowbell::Cowbell => parts.push("cow".to_string()),
            RimshotCowbell::Off => {}
        }
        match self.hand_clap_tambourine {
            HandClapTambourine::HandClap => parts.push("hcp".to_string()),
            HandClapTambourine::Tambourine => parts.push("tamb".to_string()),
            HandClapTambourine::Off => {}
        }
        match self.hi_hat {
            HiHat::Open => parts.push("hh_open".to_string()),
            HiHat::Closed => parts.push("hh_closed".to_string()),
            HiHat::Off => {}
        }
        match self.cymbal {
            Cymbal::Crash => parts.push("cy_crash".to_string()),
            Cymbal::Ride => parts.push("cy_ride".to_string()),
            Cymbal::Off => {}
        }
        if self.accent == Accent::On {
            parts.push("acc".to_string());
        }

        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_beat_is_empty() {
        let beat = Beat::new(4);
        assert_eq!(beat.tick, 4);
        assert!(beat.is_empty());
        assert_eq!(beat.to_string(), "");
    }

    #[test]
    fn test_set_level_clamps() {
        let mut beat = Beat::new(1);

        beat.set_level(Voice::Cymbal, 5);
        assert_eq!(beat.cymbal, Cymbal::Ride);

        beat.set_level(Voice::Cymbal, -1);
        assert_eq!(beat.cymbal, Cymbal::Off);

        beat.set_level(Voice::MidTom, 3);
        assert_eq!(beat.level(Voice::MidTom), 1);
        assert!(!beat.is_empty());
    }

    #[test]
    fn test_levels_are_independent() {
        let beat = Beat::new(1)
            .with_level(Voice::LowTom, 1)
            .with_level(Voice::HiHat, 2);

        assert_eq!(beat.level(Voice::LowTom), 1);
        assert_eq!(beat.level(Voice::MidTom), 0);
        assert_eq!(beat.level(Voice::HiTom), 0);
        assert_eq!(beat.level(Voice::HiHat), 2);
    }

    #[test]
    fn test_display() {
        let beat = Beat::new(5)
            .with_level(Voice::BassDrum, 1)
            .with_level(Voice::SnareDrum, 2);
        assert_eq!(beat.to_string(), "bass_1+snare_2");

        let beat = Beat::new(2)
            .with_level(Voice::RimshotCowbell, 2)
            .with_level(Voice::HandClapTambourine, 1)
            .with_level(Voice::HiHat, 2)
            .with_level(Voice::Cymbal, 1)
            .with_level(Voice::Accent, 1);
        assert_eq!(beat.to_string(), "cow+hcp+hh_open+cy_crash+acc");

        let beat = Beat::new(3)
            .with_level(Voice::LowTom, 1)
            .with_level(Voice::MidTom, 1)
            .with_level(Voice::HiTom, 1);
        assert_eq!(beat.to_string(), "low_tom+mid_tom+hi_tom");
    }

    #[test]
    fn test_json_omits_silent_voices() {
        let beat = Beat::new(3).with_level(Voice::HiHat, 1);
        let json = serde_json::to_string(&beat).unwrap();
        assert_eq!(json, r#"{"tick":3,"hh":1}"#);
    }

    #[test]
    fn test_json_defaults_and_clamps() {
        let beat: Beat = serde_json::from_str(r#"{"tick":9,"bd":1,"ac":4}"#).unwrap();
        assert_eq!(beat.tick, 9);
        assert_eq!(beat.bass_drum, BassDrum::Drum1);
        assert_eq!(beat.accent, Accent::On);
        assert_eq!(beat.cymbal, Cymbal::Off);
    }
}
