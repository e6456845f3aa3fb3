use criterion::{black_box, criterion_group, criterion_main, Criterion};

use traitors_game::{Assignment, GameRng, PlayerName, DEFAULT_ROSTER};

fn bench_assign(c: &mut Criterion) {
    let roster: Vec<PlayerName> = DEFAULT_ROSTER.iter().map(|n| PlayerName::new(*n)).collect();
    let mut rng = GameRng::new(42);

    c.bench_function("assign_default_roster", |b| {
        b.iter(|| Assignment::assign(black_box(&roster), &mut rng))
    });
}

criterion_group!(benches, bench_assign);
criterion_main!(benches);
