use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chessreach::{reachable, Piece, ReachTable, Square};

fn reach_all_squares(piece: Piece) -> usize {
    Square::all().map(|origin| reachable(piece, origin).len()).sum()
}

fn reach_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");
    for piece in Piece::ALL {
        group.bench_function(format!("{piece} from every square"), |b| {
            b.iter(|| reach_all_squares(black_box(piece)))
        });
    }
    group.bench_function("build QUEEN table", |b| {
        b.iter(|| ReachTable::build(black_box(Piece::Queen)))
    });
    group.finish();
}

criterion_group!(benches, reach_benchmark);
criterion_main!(benches);
