// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interactive editor session: terminal, input thread and event loop.

use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event;
use ratatui::backend::Backend;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::{Editor, EditorEvent, Effect};
use crate::config::EditorConfig;
use crate::song::Song;
use crate::ui::{App, StatusLine};

/// How long the input thread waits for a key before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Session settings
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub blink_interval: Duration,
    pub save_dir: PathBuf,
    pub visible_ticks: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for SessionOptions {
    fn from(config: &EditorConfig) -> Self {
        Self {
            blink_interval: Duration::from_millis(config.blink_interval_ms.max(1)),
            save_dir: config.save_dir.clone(),
            visible_ticks: config.visible_ticks,
        }
    }
}

/// Run the editor on the real terminal until the user quits.
///
/// Returns the song as it stood when the session ended.
pub async fn run(mut editor: Editor, options: SessionOptions) -> io::Result<Song> {
    let mut app = App::new()?;
    app.set_visible_ticks(options.visible_ticks);

    let (tx, mut rx) = mpsc::channel(16);
    let input = spawn_input_thread(tx);

    let result = drive(&mut editor, &mut app, &mut rx, &options).await;

    // Closing the channel stops the input thread
    drop(rx);
    drop(app);
    if input.join().is_err() {
        warn!("input thread panicked");
    }

    result.map(|()| editor.into_song())
}

/// Forward terminal events until the receiver goes away
fn spawn_input_thread(tx: mpsc::Sender<EditorEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal poll failed");
                    break;
                }
            }

            let terminal_event = match event::read() {
                Ok(terminal_event) => terminal_event,
                Err(e) => {
                    warn!(error = %e, "terminal read failed");
                    break;
                }
            };

            if let Some(editor_event) = EditorEvent::from_terminal(terminal_event) {
                if tx.blocking_send(editor_event).is_err() {
                    break;
                }
            }
        }
        debug!("input thread stopped");
    })
}

/// Event loop: blink timer plus input, until Quit or the input closes
pub async fn drive<B: Backend>(
    editor: &mut Editor,
    app: &mut App<B>,
    events: &mut mpsc::Receiver<EditorEvent>,
    options: &SessionOptions,
) -> io::Result<()> {
    let mut blink = time::interval(options.blink_interval);
    blink.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut status = StatusLine::default();
    app.draw(editor, &status)?;

    loop {
        let event = tokio::select! {
            _ = blink.tick() => EditorEvent::Blink,
            received = events.recv() => match received {
                Some(event) => event,
                None => break,
            },
        };

        match editor.handle(event) {
            Effect::None => continue,
            Effect::Redraw => {}
            Effect::Save => save(editor, &options.save_dir, &mut status),
            Effect::Quit => {
                info!(name = %editor.song().name(), "leaving editor");
                break;
            }
        }

        status.clear_expired();
        app.draw(editor, &status)?;
    }

    Ok(())
}

fn save(editor: &mut Editor, dir: &Path, status: &mut StatusLine) {
    match editor.save_to(dir) {
        Ok(path) => {
            info!(path = %path.display(), "song saved");
            status.set(format!("Saved {}", path.display()));
        }
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::from(e));
            warn!(error = %message, "save failed");
            status.set(format!("Save failed: {}", message));
        }
    }
}
