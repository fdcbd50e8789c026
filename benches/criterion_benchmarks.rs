use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lru_ledger::config::LruCacheConfig;
use lru_ledger::LruCache;

fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None).unwrap()
}

fn filled(cap: usize) -> LruCache<usize, usize> {
    let mut cache = make_lru(cap);
    for i in 0..cap {
        cache.put(i, i);
    }
    cache
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("LRU Operations");

    {
        let mut cache = filled(CACHE_SIZE);

        group.bench_function("get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("put existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(i % CACHE_SIZE, i));
                }
            });
        });
    }

    {
        let mut cache = filled(CACHE_SIZE);
        let mut next = CACHE_SIZE;

        group.bench_function("put with eviction", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.put(next, next));
                    next += 1;
                }
                cache.clear_eviction_log();
            });
        });
    }

    group.bench_function("resize shrink by half", |b| {
        b.iter_batched(
            || filled(CACHE_SIZE),
            |mut cache| black_box(cache.resize(CACHE_SIZE / 2)),
            BatchSize::SmallInput,
        );
    });

    {
        let cache = filled(CACHE_SIZE);
        group.bench_function("describe", |b| {
            b.iter(|| black_box(cache.describe()));
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
