// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for beats
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Song construction and validation
//! - Document encode and decode
//! - Editor event handling
//! - Step stream throughput

use beats::{Beat, Editor, EditorEvent, Player, Song, Voice};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Song with a hit on every tick, shuffled so construction has to sort
fn busy_beats(size: i64) -> Vec<Beat> {
    (1..=size)
        .rev()
        .map(|tick| {
            Beat::new(tick)
                .with_level(Voice::HiHat, tick % 3)
                .with_level(Voice::BassDrum, tick % 2)
        })
        .collect()
}

/// Benchmark construction (sort plus validation)
fn bench_song_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("song_new");

    for size in [16i64, 256, 4096].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || busy_beats(size),
                |beats| black_box(Song::new("bench", 120, beats)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark JSON encode and decode
fn bench_json(c: &mut Criterion) {
    let song = Song::new("bench", 120, busy_beats(256)).unwrap();
    let json = song.to_json().unwrap();

    c.bench_function("to_json_256", |b| b.iter(|| black_box(song.to_json())));
    c.bench_function("from_json_256", |b| {
        b.iter(|| black_box(Song::from_json(black_box(&json))))
    });
}

/// Benchmark the editor transition function
fn bench_editor(c: &mut Criterion) {
    let events = [
        EditorEvent::Down,
        EditorEvent::Right,
        EditorEvent::Confirm,
        EditorEvent::Right,
        EditorEvent::Confirm,
        EditorEvent::Blink,
    ];

    c.bench_function("editor_handle", |b| {
        b.iter_batched(
            || Editor::new(Song::four_on_the_floor().unwrap()),
            |mut editor| {
                for event in events {
                    black_box(editor.handle(event));
                }
                editor
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Benchmark the full step stream with the clock paused
fn bench_playback(c: &mut Criterion) {
    let song = Song::new("bench", 600, busy_beats(64)).unwrap();

    c.bench_function("playback_64_steps", |b| {
        b.iter(|| {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .start_paused(true)
                .build()
                .unwrap();
            runtime.block_on(async {
                let (_handle, mut rx) = Player::new(&song).spawn();
                let mut count = 0;
                while rx.recv().await.is_some() {
                    count += 1;
                }
                black_box(count)
            })
        })
    });
}

criterion_group!(benches, bench_song_new, bench_json, bench_editor, bench_playback);
criterion_main!(benches);
