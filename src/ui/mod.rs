// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for the song editor.
//!
//! Provides a ratatui-based screen with the song header, the step grid and
//! a status line. Painting is read-only over the editor state.

mod grid;
mod header;

pub use grid::{glyph, GridWidget};
pub use header::HeaderWidget;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::editor::{Editor, EditorState, Field, Mode};

/// Ticks shown in the grid unless configured otherwise
pub const DEFAULT_VISIBLE_TICKS: usize = 16;

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Transient message shown under the grid
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: Option<String>,
    time: Option<Instant>,
}

impl StatusLine {
    /// Set a status message that will be displayed temporarily
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired(&mut self) {
        if let Some(time) = self.time {
            if time.elapsed() > STATUS_TIMEOUT {
                self.message = None;
                self.time = None;
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Style for a field, highlighting it when it holds the cursor.
///
/// Green in Navigate mode, red in Input mode; the blink phase toggles bold.
pub fn field_style(state: &EditorState, field: Field) -> Style {
    if state.field != field {
        return Style::default().fg(Color::White);
    }

    let bg = match state.mode {
        Mode::Navigate => Color::Green,
        Mode::Input => Color::Red,
    };
    let style = Style::default().fg(Color::White).bg(bg);
    if state.cursor_on {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Terminal UI application
pub struct App<B: Backend = CrosstermBackend<Stdout>> {
    /// Terminal handle
    terminal: Terminal<B>,
    /// Number of ticks in the grid
    visible_ticks: usize,
    /// Whether the terminal must be restored on drop
    owns_terminal: bool,
}

impl App {
    /// Take over the terminal: raw mode, alternate screen, mouse capture
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            visible_ticks: DEFAULT_VISIBLE_TICKS,
            owns_terminal: true,
        })
    }
}

impl<B: Backend> App<B> {
    /// Wrap an existing backend without touching terminal modes
    pub fn with_backend(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            visible_ticks: DEFAULT_VISIBLE_TICKS,
            owns_terminal: false,
        })
    }

    /// Set number of ticks shown in the grid
    pub fn set_visible_ticks(&mut self, ticks: usize) {
        self.visible_ticks = ticks.max(1);
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Draw the editor screen
    pub fn draw(&mut self, editor: &Editor, status: &StatusLine) -> io::Result<()> {
        let visible_ticks = self.visible_ticks;
        self.terminal.draw(|frame| {
            render(frame, editor, status.message(), visible_ticks);
        })?;
        Ok(())
    }
}

impl<B: Backend> Drop for App<B> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = cleanup();
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal to cooked mode
fn cleanup() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn render(frame: &mut Frame, editor: &Editor, status: Option<&str>, visible_ticks: usize) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(13),    // Grid
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let header = HeaderWidget::new(editor.song(), editor.state())
        .block(Block::default().borders(Borders::ALL).title(" Beats "));
    frame.render_widget(header, chunks[0]);

    let grid = GridWidget::new(editor.song(), editor.state(), visible_ticks)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM));
    frame.render_widget(grid, chunks[1]);

    render_status_bar(frame, chunks[2], editor.state(), status);
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &EditorState, status: Option<&str>) {
    let text = if let Some(msg) = status {
        Span::styled(msg, Style::default().fg(Color::Yellow))
    } else {
        let hint = match state.mode {
            Mode::Navigate => " Arrows: Move | Enter: Edit | Ctrl+S: Save | Ctrl+Q: Quit",
            Mode::Input => " Arrows: Change | Enter: Done | Ctrl+S: Save | Ctrl+Q: Quit",
        };
        Span::styled(hint, Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(text), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorEvent;
    use crate::song::Song;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App<TestBackend>) -> String {
        let buffer = app.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_status_line() {
        let mut status = StatusLine::default();
        assert!(status.message().is_none());

        status.set("Saved");
        assert_eq!(status.message(), Some("Saved"));

        status.clear_expired();
        assert_eq!(status.message(), Some("Saved"));
    }

    #[test]
    fn test_field_style() {
        let mut state = EditorState::default();
        assert_eq!(field_style(&state, Field::Tempo).bg, None);
        assert_eq!(field_style(&state, Field::Name).bg, Some(Color::Green));

        state.mode = Mode::Input;
        assert_eq!(field_style(&state, Field::Name).bg, Some(Color::Red));

        state.cursor_on = true;
        assert!(field_style(&state, Field::Name)
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_draw_editor_screen() {
        let editor = Editor::new(Song::four_on_the_floor().unwrap());
        let mut app = App::with_backend(TestBackend::new(80, 18)).unwrap();
        app.draw(&editor, &StatusLine::default()).unwrap();

        let text = screen_text(&app);
        assert!(text.contains("Name: four-on-the-floor"));
        assert!(text.contains("Tempo: 128"));
        assert!(text.contains("Bass Drum"));
        assert!(text.contains("Ctrl+S: Save"));
    }

    #[test]
    fn test_draw_status_message() {
        let mut editor = Editor::new(Song::blank("untitled", 100).unwrap());
        editor.handle(EditorEvent::Confirm);

        let mut status = StatusLine::default();
        status.set("Saved untitled.json");

        let mut app = App::with_backend(TestBackend::new(80, 18)).unwrap();
        app.draw(&editor, &status).unwrap();
        assert!(screen_text(&app).contains("Saved untitled.json"));
    }
}
