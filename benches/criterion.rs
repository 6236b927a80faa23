use criterion::{Criterion, criterion_group, criterion_main};
use lib_game_launcher::{
    data::ProfileStore,
    storage::{decode_store, encode_store},
};

fn build_store(profiles: usize, games_per_profile: usize) -> ProfileStore {
    let mut store = ProfileStore::new();

    for p in 0..profiles {
        let profile = store.create_profile(format!("user_{p}"));
        for g in 0..games_per_profile {
            profile.add_game(
                format!("Game {p}-{g}"),
                format!("/home/user_{p}/games/game_{g}/run.sh"),
            );
        }
    }

    store
}

fn codec_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let store = build_store(50, 20);
    let encoded = encode_store(&store);

    group.bench_function("encode", |b| b.iter(|| encode_store(&store)));
    group.bench_function("decode", |b| b.iter(|| decode_store(&encoded)));
    group.bench_function("round_trip", |b| {
        b.iter(|| decode_store(&encode_store(&store)))
    });

    group.finish();
}

fn store_size_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_size");

    for (profiles, games) in [(1, 10), (10, 50), (100, 100)] {
        let encoded = encode_store(&build_store(profiles, games));

        group.bench_function(format!("decode {profiles}x{games}"), |b| {
            b.iter(|| decode_store(&encoded))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = codec_benchmarks, store_size_benchmarks
}
criterion_main!(benches);
