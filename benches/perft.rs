use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use lib::chess::{Board, Color, Square};
use lib::game::{Game, Player};

fn perft(board: &Board, turn: Color, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for (whence, _) in board.pieces(turn) {
        for whither in board.legal_moves(whence, turn).unwrap_or_default() {
            let mut next = *board;
            if next.move_piece(whence, whither, turn, None).is_ok() {
                nodes += perft(&next, !turn, depth - 1);
            }
        }
    }

    nodes
}

fn bench(c: &mut Criterion) {
    let board = Board::default();

    c.benchmark_group("perft")
        .throughput(Throughput::Elements(8902))
        .bench_function("3", |b| b.iter(|| perft(&board, Color::White, 3)));

    c.benchmark_group("game").bench_function("play", |b| {
        b.iter_batched_ref(
            || {
                let mut game = Game::new(1);
                let players = [Player::new("a", Color::White), Player::new("b", Color::Black)];
                game.set_players(players).ok();
                game.start(Color::White).ok();
                game
            },
            |game| game.play(Square::E2, Square::E4, None),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
