// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io;

use anyhow::{Context, Result};
use beats::editor::session::{self, SessionOptions};
use beats::{logging, print_steps, Config, Editor, Player, Song};
use tracing::info;

const USAGE: &str = "\
BEATS - Drum Pattern Editor and Player

Usage: beats <COMMAND> [FILE]

Commands:
  play [FILE]    Play a song file (built-in pattern if no file given)
  create [FILE]  Edit a song file (blank pattern if no file given)
  --help         Show this help message

Editor keys: arrows move, Enter toggles input, Ctrl+S saves, Ctrl+Q quits";

/// Subcommand picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Create,
}

fn load_song(path: &str) -> Result<Song> {
    Song::load(path).with_context(|| format!("Failed to load song file: {}", path))
}

async fn play(file: Option<&str>) -> Result<()> {
    let song = match file {
        Some(path) => load_song(path)?,
        None => Song::four_on_the_floor().context("Failed to build default pattern")?,
    };

    println!("Name: {}", song.name());
    println!("Tempo: {} bpm", song.tempo());
    info!(name = %song.name(), tempo = song.tempo(), beats = song.beats().len(), "playing song");

    let (handle, rx) = Player::new(&song).spawn();
    let steps = print_steps(rx, io::stdout().lock())
        .await
        .context("Failed to write playback output")?;
    handle.await.context("Playback task failed")?;

    info!(steps, "playback complete");
    Ok(())
}

async fn create(file: Option<&str>, config: &Config) -> Result<()> {
    let song = match file {
        Some(path) => load_song(path)?,
        None => Song::blank(
            config.editor.new_song_name.as_str(),
            config.editor.new_song_tempo,
        )
        .context("Invalid new song settings in config")?,
    };

    let editor = Editor::new(song).with_lookback(config.editor.lookback);
    let song = session::run(editor, SessionOptions::from(&config.editor))
        .await
        .context("Editor session failed")?;

    info!(name = %song.name(), "editor closed");
    Ok(())
}

async fn run(command: Command, file: Option<&str>) -> Result<()> {
    let config = Config::discover().context("Failed to load configuration")?;
    // The editor owns the terminal, so it never gets stderr logging
    logging::init(&config.log, command == Command::Create)
        .context("Failed to set up logging")?;

    match command {
        Command::Play => play(file).await,
        Command::Create => create(file, &config).await,
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let command = match args[1].as_str() {
        "play" => Command::Play,
        "create" => Command::Create,
        "--help" | "-h" => {
            println!("{}", USAGE);
            return;
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(command, args.get(2).map(String::as_str)).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
