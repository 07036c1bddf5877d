//! Mood and menu resolver benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use journal_companion::command::CommandResolver;
use journal_companion::mood::MoodResolver;

fn resolver_benchmarks(c: &mut Criterion) {
    let moods = MoodResolver::standard();
    let mood_inputs = ["happy", "  Very Good ", "a bit sad", "05", "very ecstatic", "not a mood"];

    c.bench_function("mood_resolve_mixed", |b| {
        b.iter(|| {
            for input in mood_inputs {
                black_box(moods.resolve(black_box(input)));
            }
        })
    });

    let menu = CommandResolver::standard();
    let menu_inputs = ["1", " DAILY ", "recap", "bye", "", "seven"];

    c.bench_function("command_evaluate_mixed", |b| {
        b.iter(|| {
            for input in menu_inputs {
                black_box(menu.evaluate(black_box(input)));
            }
        })
    });
}

criterion_group!(benches, resolver_benchmarks);
criterion_main!(benches);
