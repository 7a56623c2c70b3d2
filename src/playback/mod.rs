// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Step clock playback.
//!
//! A [`Player`] walks every tick from 1 up to the song's last tick, one tick
//! per interval, and sends a [`Step`] for each over a bounded channel. Ticks
//! with no beat are filled with an empty beat so the stream has no gaps.
//! The channel closes after the last step.

use std::io::Write;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::song::{Beat, Song};

/// One playback event: the beat sounding at a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub tick: i64,
    pub beat: Beat,
}

/// Plays a snapshot of a song on a fixed tick interval
#[derive(Debug, Clone)]
pub struct Player {
    /// Beats sorted by tick
    beats: Vec<Beat>,
    /// Time between ticks
    tick_duration: Duration,
}

impl Player {
    /// Take a snapshot of the song for playback
    pub fn new(song: &Song) -> Self {
        let mut beats = song.beats().to_vec();
        beats.sort_by_key(|beat| beat.tick);

        Self {
            beats,
            tick_duration: song.tick_duration(),
        }
    }

    /// Interval between steps
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Number of steps the player will emit
    pub fn len(&self) -> i64 {
        self.beats.last().map_or(0, |beat| beat.tick.max(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Emit every step on the tick clock, then drop the sender.
    ///
    /// The first step goes out one full interval after the call. Returns
    /// early without error if the receiver goes away.
    pub async fn run(self, tx: mpsc::Sender<Step>) {
        let last_tick = self.len();
        if last_tick == 0 {
            debug!("nothing to play");
            return;
        }

        let mut clock = time::interval_at(Instant::now() + self.tick_duration, self.tick_duration);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut beats = self.beats.into_iter().peekable();

        for tick in 1..=last_tick {
            clock.tick().await;

            let beat = beats
                .next_if(|beat| beat.tick == tick)
                .unwrap_or_else(|| Beat::empty(tick));

            trace!(tick, "step");
            if tx.send(Step { tick, beat }).await.is_err() {
                debug!(tick, "playback receiver closed");
                return;
            }
        }

        debug!(steps = last_tick, "playback finished");
    }

    /// Start playback on its own task.
    ///
    /// Returns the task handle and the receiving end of the step stream.
    pub fn spawn(self) -> (JoinHandle<()>, mpsc::Receiver<Step>) {
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(self.run(tx));
        (handle, rx)
    }
}

/// Write one `tick: beat` line per step until the stream closes.
///
/// Returns the number of steps written.
pub async fn print_steps<W: Write>(
    mut rx: mpsc::Receiver<Step>,
    mut out: W,
) -> std::io::Result<usize> {
    let mut count = 0;
    while let Some(step) = rx.recv().await {
        writeln!(out, "{}: {}", step.tick, step.beat)?;
        out.flush()?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::Voice;

    async fn collect(player: Player) -> Vec<Step> {
        let (handle, mut rx) = player.spawn();
        let mut steps = Vec::new();
        while let Some(step) = rx.recv().await {
            steps.push(step);
        }
        handle.await.unwrap();
        steps
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_song_plays_every_tick() {
        let song = Song::four_on_the_floor().unwrap();
        let steps = collect(Player::new(&song)).await;

        assert_eq!(steps.len(), 15);
        let ticks: Vec<i64> = steps.iter().map(|s| s.tick).collect();
        assert_eq!(ticks, (1..=15).collect::<Vec<_>>());

        for step in &steps {
            assert_eq!(step.beat.tick, step.tick);
            assert_eq!(!step.beat.is_empty(), step.tick % 2 == 1);
        }
        assert_eq!(steps.iter().filter(|s| !s.beat.is_empty()).count(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_song_emits_nothing() {
        let song = Song::blank("Quiet", 120).unwrap();
        let player = Player::new(&song);
        assert!(player.is_empty());

        let steps = collect(player).await;
        assert!(steps.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_follow_tick_interval() {
        let song = Song::new(
            "Timed",
            60,
            vec![Beat::new(3).with_level(Voice::Cymbal, 2)],
        )
        .unwrap();

        let start = Instant::now();
        let (_handle, mut rx) = Player::new(&song).spawn();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.tick, 1);
        assert!(first.beat.is_empty());
        assert_eq!(start.elapsed(), Duration::from_secs(1));

        rx.recv().await.unwrap();
        let third = rx.recv().await.unwrap();
        assert_eq!(third.tick, 3);
        assert_eq!(third.beat.level(Voice::Cymbal), 2);
        assert_eq!(start.elapsed(), Duration::from_secs(3));

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_stops_playback() {
        let song = Song::four_on_the_floor().unwrap();
        let (handle, mut rx) = Player::new(&song).spawn();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.tick, 1);
        drop(rx);

        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_consumer_stalls_playback() {
        let song = Song::new("Slow", 60, vec![Beat::new(5).with_level(Voice::Accent, 1)]).unwrap();

        let start = Instant::now();
        let (handle, mut rx) = Player::new(&song).spawn();

        let mut received = Vec::new();
        while let Some(step) = rx.recv().await {
            received.push((step.tick, start.elapsed()));
            time::sleep(Duration::from_secs(3)).await;
        }
        handle.await.unwrap();

        // One buffered step, then the clock waits on the consumer
        let expected: Vec<(i64, Duration)> = [(1, 1), (2, 4), (3, 7), (4, 10), (5, 13)]
            .into_iter()
            .map(|(tick, secs)| (tick, Duration::from_secs(secs)))
            .collect();
        assert_eq!(received, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_print_steps() {
        let song = Song::new(
            "Printed",
            240,
            vec![
                Beat::new(1)
                    .with_level(Voice::BassDrum, 1)
                    .with_level(Voice::SnareDrum, 1),
                Beat::new(3).with_level(Voice::HiHat, 1),
            ],
        )
        .unwrap();

        let (_handle, rx) = Player::new(&song).spawn();
        let mut out = Vec::new();
        let count = print_steps(rx, &mut out).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1: bass_1+snare_1\n2: \n3: hh_closed\n"
        );
    }
}
