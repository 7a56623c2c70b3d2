// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song name and tempo header.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::field_style;
use crate::editor::{EditorState, Field};
use crate::song::Song;

/// Header widget showing the editable song metadata
pub struct HeaderWidget<'a> {
    song: &'a Song,
    state: &'a EditorState,
    block: Option<Block<'a>>,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(song: &'a Song, state: &'a EditorState) -> Self {
        Self {
            song,
            state,
            block: None,
        }
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),    // Name
                Constraint::Length(12), // Tempo
            ])
            .split(area);

        let label = Style::default().fg(Color::White);

        let name = Line::from(vec![
            Span::styled(Field::Name.label(), label),
            Span::raw(" "),
            Span::styled(self.song.name(), field_style(self.state, Field::Name)),
        ]);
        Paragraph::new(name).render(chunks[0], buf);

        let tempo = Line::from(vec![
            Span::styled(Field::Tempo.label(), label),
            Span::raw(" "),
            Span::styled(
                format!("{:>3}", self.song.tempo()),
                field_style(self.state, Field::Tempo),
            ),
        ]);
        Paragraph::new(tempo).render(chunks[1], buf);
    }
}
