use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use damas::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn opening_positions() -> Vec<Board> {
    // Alguns lances a partir da posição inicial, sempre com a mesma semente
    let mut rng = StdRng::seed_from_u64(7777);
    let mut board = Board::new(8, 8);
    let mut player = Player::Black;
    let mut boards = vec![board.clone()];
    for _ in 0..6 {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.execute(&mv);
        player = !player;
        boards.push(board.clone());
    }
    boards
}

fn bench_movegen(c: &mut Criterion) {
    let boards = opening_positions();
    c.bench_function("movegen/legal_moves", |bch| {
        bch.iter(|| {
            let mut acc = 0usize;
            for bd in &boards {
                acc += bd.legal_moves(Player::Black).len();
                acc += bd.legal_moves(Player::White).len();
            }
            black_box(acc)
        })
    });
}

fn bench_search_modes(c: &mut Criterion) {
    let board = Board::new(8, 8);
    let mut group = c.benchmark_group("search/opening");
    group.sample_size(10);

    for (name, mode, threads) in [
        ("sequential", SearchMode::Sequential, 1),
        ("parallel_4", SearchMode::Parallel, 4),
    ] {
        let config = SearchConfig { mode, ..SearchConfig::default() }.with_threads(threads).with_depth(3);
        let engine = SearchEngine::new(config).unwrap();
        group.bench_with_input(BenchmarkId::new(name, 3), &board, |bch, bd| {
            bch.iter(|| {
                let mut rng = StdRng::seed_from_u64(13);
                black_box(engine.search(bd, Player::Black, &mut rng).score)
            })
        });
    }
    group.finish();
}

criterion_group!(search_benches, bench_movegen, bench_search_modes);
criterion_main!(search_benches);
