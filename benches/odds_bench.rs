//! Benchmarks for classification and sampling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use poker_odds::cards::Deck;
use poker_odds::eval::classify;
use poker_odds::sim::{SimulationConfig, Simulator};

fn classify_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut deck = Deck::new();
    let hands: Vec<_> = (0..1000)
        .map(|i| {
            if i % 10 == 0 {
                deck.reset();
                deck.shuffle(&mut rng);
            }
            deck.deal_five().unwrap()
        })
        .collect();

    c.bench_function("classify_1000_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(classify(black_box(hand)));
            }
        })
    });
}

fn simulate_benchmark(c: &mut Criterion) {
    c.bench_function("simulate_100k_hands", |b| {
        b.iter(|| {
            let config = SimulationConfig::new(100_000)
                .with_progress(false)
                .with_seed(42);
            let mut simulator = Simulator::new(config).unwrap();
            simulator.run_all().unwrap()
        })
    });
}

criterion_group!(benches, classify_benchmark, simulate_benchmark);
criterion_main!(benches);
