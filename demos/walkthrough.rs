//! LRU Cache Walkthrough
//!
//! Runs a capacity-2 cache through hits, misses, overflow evictions, a grow, a
//! shrink and an update of an evicted key, printing the cache after each step.

use lru_ledger::{CacheMetrics, IntLruCache, LruCache, LruCacheConfig};

fn main() {
    let config = LruCacheConfig::new(2);
    let mut cache: IntLruCache = match LruCache::init(config, None) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("cannot build cache: {}", err);
            return;
        }
    };

    cache.put(1, 10);
    cache.put(2, 20);
    println!("Initial:           {}", cache);

    println!("get(1) => {}", cache.get_or_miss(1));
    println!("After get(1):      {}", cache);

    cache.put(3, 30);
    println!("After put(3):      {}", cache);
    println!("get(2) => {}", cache.get_or_miss(2));

    cache.put(4, 40);
    println!("After put(4):      {}", cache);

    println!("get(1) => {}", cache.get_or_miss(1));
    println!("get(3) => {}", cache.get_or_miss(3));
    println!("get(4) => {}", cache.get_or_miss(4));

    println!(
        "Hits={}, Misses={}, EvictionLog={:?}",
        cache.hit_count(),
        cache.miss_count(),
        cache.evictions()
    );

    if let Err(err) = cache.resize(3) {
        eprintln!("resize failed: {}", err);
        return;
    }
    cache.put(5, 50);
    cache.put(6, 60);
    println!("After resize+adds: {}", cache);

    match cache.resize(2) {
        Ok(evicted) => println!("Shrink evicted {} entries", evicted),
        Err(err) => {
            eprintln!("resize failed: {}", err);
            return;
        }
    }
    println!("After shrink:      {}", cache);
    println!("EvictionLog:       {:?}", cache.evictions());

    cache.put(4, 400);
    println!("After update 4:    {}", cache);
    println!("get(4) => {}", cache.get_or_miss(4));

    if let Err(err) = cache.resize(0) {
        println!("resize(0) rejected: {}", err);
    }

    println!();
    println!("{} metrics:", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("  {:<20} {:>8.3}", name, value);
    }
}
