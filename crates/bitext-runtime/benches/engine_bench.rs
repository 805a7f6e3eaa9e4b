//! Benchmarks for the transition engine on document-sized link lists.
//!
//! Measures the cost of the intents that run on every click (selection
//! toggles) against the ones that rebuild the link list (add and remove),
//! and of projecting a full side for rendering.
//!
//! Run with: cargo bench -p bitext-runtime --bench engine_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use bitext_core::{Link, Segment, Side};
use bitext_runtime::{AlignmentState, Intent, Session, reduce};

// ============================================================================
// Setup helpers
// ============================================================================

/// `n` one-to-one automatic links on positions `0..n`.
fn aligned_state(n: u32) -> AlignmentState {
    AlignmentState::new((0..n).map(|p| Link::automatic([p], [p])))
}

// ============================================================================
// Engine benchmarks
// ============================================================================

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_toggle");

    for &n in &[100u32, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let state = aligned_state(n);
            b.iter(|| black_box(reduce(&state, Intent::toggle(Side::Source, n / 2))));
        });
    }
    group.finish();
}

fn bench_add_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_add_link");

    for &n in &[100u32, 1000, 10_000] {
        // Append: touches nothing.
        group.bench_with_input(BenchmarkId::new("append", n), &n, |b, &n| {
            let state = aligned_state(n);
            b.iter(|| black_box(reduce(&state, Intent::add_link([n + 1], [n + 1]))));
        });

        // Coalesce: pulls in three links from the middle of the list.
        group.bench_with_input(BenchmarkId::new("coalesce", n), &n, |b, &n| {
            let state = aligned_state(n);
            let mid = n / 2;
            b.iter(|| {
                black_box(reduce(
                    &state,
                    Intent::add_link([mid, mid + 1], [mid + 2]),
                ))
            });
        });
    }
    group.finish();
}

fn bench_remove_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_remove_link");

    for &n in &[100u32, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let state = aligned_state(n);
            b.iter(|| black_box(reduce(&state, Intent::remove_link([n / 2], []))));
        });
    }
    group.finish();
}

fn bench_project_side(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_project");

    for &n in &[100u32, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let session = Session::new(
                (0..n).map(Segment::source),
                (0..n).map(Segment::target),
                (0..n).map(|p| Link::automatic([p], [p])),
            );
            b.iter(|| black_box(session.project(Side::Source).len()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_toggle,
    bench_add_link,
    bench_remove_link,
    bench_project_side,
);
criterion_main!(benches);
