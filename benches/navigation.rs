//! Benchmarks for cursor navigation over a large document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jotter::editor::EditorBuffer;

fn sample_text() -> String {
    (0..2_000)
        .map(|i| format!("line {i}\twith some words in it"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_vertical_moves(c: &mut Criterion) {
    let mut buffer = EditorBuffer::from_text(&sample_text());
    let middle = buffer.len() / 2;

    c.bench_function("move_down_up", |b| {
        b.iter(|| {
            buffer.set_position(black_box(middle));
            buffer.move_down();
            buffer.move_up();
            buffer.position()
        })
    });
}

fn bench_cursor_visual(c: &mut Criterion) {
    let mut buffer = EditorBuffer::from_text(&sample_text());
    buffer.set_position(buffer.len());

    c.bench_function("cursor_visual_at_end", |b| {
        b.iter(|| black_box(&buffer).cursor_visual())
    });
}

fn bench_word_moves(c: &mut Criterion) {
    let mut buffer = EditorBuffer::from_text(&sample_text());
    let end = buffer.len();

    c.bench_function("move_word_left_line", |b| {
        b.iter(|| {
            buffer.set_position(black_box(end));
            for _ in 0..8 {
                buffer.move_word_left();
            }
            buffer.position()
        })
    });
}

criterion_group!(
    benches,
    bench_vertical_moves,
    bench_cursor_visual,
    bench_word_moves
);
criterion_main!(benches);
