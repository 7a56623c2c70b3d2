// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Editor fields and the cursor movement table.

use crate::song::Voice;

/// A focusable field of the editor screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Name,
    Tempo,
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

/// Arrow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Where each arrow leads from a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub left: Field,
    pub right: Field,
    pub up: Field,
    pub down: Field,
}

const fn neighbors(left: Field, right: Field, up: Field, down: Field) -> Neighbors {
    Neighbors {
        left,
        right,
        up,
        down,
    }
}

/// Adjacency table, indexed by `Field as usize`
const NEIGHBORS: [Neighbors; 12] = {
    use Field::*;
    [
        neighbors(Name, Tempo, Name, Cymbal),
        neighbors(Name, Tempo, Tempo, Cymbal),
        neighbors(Cymbal, Cymbal, Name, HiHat),
        neighbors(HiHat, HiHat, Cymbal, HandClapTambourine),
        neighbors(HandClapTambourine, HandClapTambourine, HiHat, RimshotCowbell),
        neighbors(RimshotCowbell, RimshotCowbell, HandClapTambourine, HiTom),
        neighbors(HiTom, HiTom, RimshotCowbell, MidTom),
        neighbors(MidTom, MidTom, HiTom, LowTom),
        neighbors(LowTom, LowTom, MidTom, SnareDrum),
        neighbors(SnareDrum, SnareDrum, LowTom, BassDrum),
        neighbors(BassDrum, BassDrum, SnareDrum, Accent),
        neighbors(Accent, Accent, BassDrum, Accent),
    ]
};

const LABELS: [&str; 12] = [
    "Name:",
    "Tempo:",
    "CYmbal",
    "HiHat",
    "HCP/TAMB",
    "RIM/COWbell",
    "Hi Tom",
    "Mid Tom",
    "Low Tom",
    "Snare Drum",
    "Bass Drum",
    "ACcent",
];

impl Field {
    /// Voice rows in screen order
    pub const VOICES: [Field; 10] = [
        Field::Cymbal,
        Field::HiHat,
        Field::HandClapTambourine,
        Field::RimshotCowbell,
        Field::HiTom,
        Field::MidTom,
        Field::LowTom,
        Field::SnareDrum,
        Field::BassDrum,
        Field::Accent,
    ];

    pub fn neighbors(self) -> Neighbors {
        NEIGHBORS[self as usize]
    }

    /// Field reached by moving in a direction
    pub fn step(self, direction: Direction) -> Field {
        let n = self.neighbors();
        match direction {
            Direction::Left => n.left,
            Direction::Right => n.right,
            Direction::Up => n.up,
            Direction::Down => n.down,
        }
    }

    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Voice edited through this field, if it is a grid row
    pub fn voice(self) -> Option<Voice> {
        match self {
            Field::Name | Field::Tempo => None,
            Field::Cymbal => Some(Voice::Cymbal),
            Field::HiHat => Some(Voice::HiHat),
            Field::HandClapTambourine => Some(Voice::HandClapTambourine),
            Field::RimshotCowbell => Some(Voice::RimshotCowbell),
            Field::HiTom => Some(Voice::HiTom),
            Field::MidTom => Some(Voice::MidTom),
            Field::LowTom => Some(Voice::LowTom),
            Field::SnareDrum => Some(Voice::SnareDrum),
            Field::BassDrum => Some(Voice::BassDrum),
            Field::Accent => Some(Voice::Accent),
        }
    }

    pub fn is_voice(self) -> bool {
        self.voice().is_some()
    }
}
