use criterion::{black_box, criterion_group, criterion_main, Criterion};

use santorini::core::{GameRng, GameState};
use santorini::policy::{HeuristicPolicy, MovePolicy, RandomPolicy};
use santorini::rules::legal_actions;

fn bench_policies(c: &mut Criterion) {
    let state = GameState::default();

    c.bench_function("heuristic_best_move", |b| {
        b.iter(|| HeuristicPolicy::best_move(black_box(&state)))
    });

    let mut heuristic = HeuristicPolicy::new(GameRng::new(1));
    c.bench_function("heuristic_select_action", |b| {
        b.iter(|| heuristic.select_action(black_box(&state)))
    });

    let mut random = RandomPolicy::new(GameRng::new(1));
    c.bench_function("random_select_action", |b| {
        b.iter(|| random.select_action(black_box(&state)))
    });

    c.bench_function("legal_actions", |b| b.iter(|| legal_actions(black_box(&state))));
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
