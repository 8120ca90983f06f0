criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        exhausting_river_showdown,
        exhausting_turn_equity,
        exhausting_flop_equity,
        sampling_preflop_equity,
        exhausting_flop_showdown,
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter_batched(
            || {
                let mut deck = Deck::new();
                (0..7).map(|_| deck.draw(rng)).collect::<Hand>()
            },
            |hand| Strength::from(Evaluator::from(hand)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn exhausting_river_showdown(c: &mut criterion::Criterion) {
    let table = table(&["As Ah", "Ks Kh", "Qs Qh"], "2c 7d 9h Jc 3s");
    c.bench_function("settle a 3-way River", |b| {
        b.iter(|| Engine::default().run(&table))
    });
}

fn exhausting_turn_equity(c: &mut criterion::Criterion) {
    let table = table(&["As Ah", "?|?"], "2c 7d 9h Jc");
    c.bench_function("exhaust a Turn against a random hand", |b| {
        b.iter(|| Engine::default().run(&table))
    });
}

fn exhausting_flop_equity(c: &mut criterion::Criterion) {
    let table = table(&["As Ah", "Ks Kh"], "2c 7d 9h");
    c.bench_function("exhaust a heads-up Flop", |b| {
        b.iter(|| Engine::default().run(&table))
    });
}

fn sampling_preflop_equity(c: &mut criterion::Criterion) {
    let table = table(&["As Kd", "?|?", "?|?", "?|?"], "");
    let engine = Engine::from(Config::default().with_seed(Some(0)).with_samples(50_000));
    c.bench_function("sample 50k 4-way Preflops", |b| {
        b.iter(|| engine.run(&table))
    });
}

fn exhausting_flop_showdown(c: &mut criterion::Criterion) {
    let showdown = Showdown::new(
        &Card::parse("Ah Kd").unwrap(),
        &Card::parse("7c 8c 2s").unwrap(),
    )
    .unwrap();
    c.bench_function("showdown percentage on a Flop", |b| {
        b.iter(|| showdown.run(&Engine::default()))
    });
}

fn table(seats: &[&str], board: &str) -> Table {
    let seats = seats.iter().map(|s| Seat::try_from(*s).unwrap()).collect();
    Table::new(seats, &Card::parse(board).unwrap(), &[]).unwrap()
}

use holdem_calc::cards::card::Card;
use holdem_calc::cards::deck::Deck;
use holdem_calc::cards::evaluator::Evaluator;
use holdem_calc::cards::hand::Hand;
use holdem_calc::cards::strength::Strength;
use holdem_calc::equity::config::Config;
use holdem_calc::equity::engine::Engine;
use holdem_calc::equity::seat::Seat;
use holdem_calc::equity::showdown::Showdown;
use holdem_calc::equity::table::Table;
use rand::SeedableRng;
use rand::rngs::SmallRng;
