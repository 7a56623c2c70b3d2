// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Step grid: one row per voice, one column per tick.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use super::field_style;
use crate::editor::{EditorState, Field};
use crate::song::{Song, Voice};

/// Width of the voice label column
const LABEL_WIDTH: u16 = 12;

/// Width of one tick column
const CELL_WIDTH: u16 = 4;

/// Glyph for an empty cell
const REST: char = '·';

/// Glyph for a voice at a level, `None` when silent
pub fn glyph(voice: Voice, level: u8) -> Option<char> {
    let ch = match (voice, level) {
        (_, 0) => return None,
        (Voice::Cymbal, 1) => 'c',
        (Voice::Cymbal, _) => 'r',
        (Voice::HiHat, 1) => 'c',
        (Voice::HiHat, _) => 'o',
        (Voice::HandClapTambourine, 1) => 'h',
        (Voice::HandClapTambourine, _) => 't',
        (Voice::RimshotCowbell, 1) => 'r',
        (Voice::RimshotCowbell, _) => 'c',
        (Voice::SnareDrum | Voice::BassDrum, 1) => '1',
        (Voice::SnareDrum | Voice::BassDrum, _) => '2',
        (Voice::HiTom | Voice::MidTom | Voice::LowTom | Voice::Accent, _) => '□',
    };
    Some(ch)
}

/// Grid widget over a window of ticks
pub struct GridWidget<'a> {
    song: &'a Song,
    state: &'a EditorState,
    visible_ticks: usize,
    block: Option<Block<'a>>,
}

impl<'a> GridWidget<'a> {
    pub fn new(song: &'a Song, state: &'a EditorState, visible_ticks: usize) -> Self {
        Self {
            song,
            state,
            visible_ticks,
            block: None,
        }
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if area.width <= LABEL_WIDTH || area.height == 0 {
            return;
        }

        let columns = ((area.width - LABEL_WIDTH) / CELL_WIDTH) as usize;
        let columns = columns.min(self.visible_ticks);
        let ticks = (0..columns as i64).map(|offset| self.state.first_tick + offset);

        // Tick numbers
        let plain = Style::default().fg(Color::White);
        buf.set_string(area.x, area.y, "Step", plain);
        for (column, tick) in ticks.clone().enumerate() {
            let x = area.x + LABEL_WIDTH + column as u16 * CELL_WIDTH;
            buf.set_string(x, area.y, format!("{:>3}", tick), plain);
        }

        for (row, field) in Field::VOICES.iter().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.bottom() {
                break;
            }
            let Some(voice) = field.voice() else {
                continue;
            };

            let mut label_style = plain;
            if self.state.field == *field {
                label_style = label_style.add_modifier(Modifier::REVERSED);
                if self.state.cursor_on {
                    label_style = label_style.add_modifier(Modifier::BOLD);
                }
            }
            buf.set_string(area.x, y, format!("{:<11}", field.label()), label_style);

            for (column, tick) in ticks.clone().enumerate() {
                let x = area.x + LABEL_WIDTH + column as u16 * CELL_WIDTH + 2;

                let level = self.song.beat_at(tick).map_or(0, |beat| beat.level(voice));
                let (ch, mut style) = match glyph(voice, level) {
                    Some(ch) => (ch, Style::default().fg(Color::Black).bg(Color::White)),
                    None => (REST, Style::default().fg(Color::DarkGray)),
                };

                if self.state.field == *field && tick == self.state.active_tick {
                    style = field_style(self.state, *field);
                }

                buf.set_string(x, y, ch.to_string(), style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::Beat;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.content[(y * buf.area.width + x) as usize].symbol())
            .collect()
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(Voice::Cymbal, 0), None);
        assert_eq!(glyph(Voice::Cymbal, 1), Some('c'));
        assert_eq!(glyph(Voice::Cymbal, 2), Some('r'));
        assert_eq!(glyph(Voice::HiHat, 1), Some('c'));
        assert_eq!(glyph(Voice::HiHat, 2), Some('o'));
        assert_eq!(glyph(Voice::HandClapTambourine, 2), Some('t'));
        assert_eq!(glyph(Voice::RimshotCowbell, 1), Some('r'));
        assert_eq!(glyph(Voice::BassDrum, 2), Some('2'));
        assert_eq!(glyph(Voice::LowTom, 1), Some('□'));
        assert_eq!(glyph(Voice::Accent, 1), Some('□'));
    }

    #[test]
    fn test_render_grid() {
        let song = Song::new(
            "Grid",
            100,
            vec![
                Beat::new(1).with_level(Voice::BassDrum, 1),
                Beat::new(2).with_level(Voice::HiHat, 2),
            ],
        )
        .unwrap();
        let state = EditorState::default();

        let area = Rect::new(0, 0, 12 + 4 * 4, 11);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&song, &state, 16).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "Step          1   2   3   4 ");
        assert_eq!(row_text(&buf, 2), "HiHat         ·   o   ·   · ");
        assert_eq!(row_text(&buf, 9), "Bass Drum     1   ·   ·   · ");
    }

    #[test]
    fn test_render_window_follows_first_tick() {
        let song = Song::blank("Window", 100).unwrap();
        let state = EditorState {
            first_tick: 9,
            active_tick: 16,
            ..Default::default()
        };

        let area = Rect::new(0, 0, 12 + 4 * 3, 2);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&song, &state, 2).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "Step          9  10     ");
    }
}
