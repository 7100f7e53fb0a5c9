use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::evaluator::{evaluate, evaluate_holdem};
use holdem_engine::hand::{Board, HoleCards};

fn bench_evaluate_five(c: &mut Criterion) {
    let hi = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let seven = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Nine, Suit::Spades),
    ];
    c.bench_function("evaluate_seven", |b| b.iter(|| evaluate(black_box(&seven))));
}

fn bench_evaluate_holdem(c: &mut Criterion) {
    let hole = HoleCards::try_new(
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
    )
    .unwrap();
    let board: Board = "Ks Qs Js 10s 9s".parse().unwrap();
    c.bench_function("evaluate_holdem", |b| {
        b.iter(|| evaluate_holdem(black_box(&hole), black_box(&board)))
    });
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven, bench_evaluate_holdem);
criterion_main!(benches);
