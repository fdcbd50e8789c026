#![no_std]
extern crate alloc;
extern crate lru_ledger;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use lru_ledger::config::LruCacheConfig;
use lru_ledger::{CacheError, EvictionCause, LruCache};

fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None).unwrap()
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.put("c", 3), Some(("b", 2)));
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.eviction_log(), vec!["b"]);
    assert_eq!(cache.to_string(), "[c=3, a=1]");
}

#[test]
fn test_lru_owned_keys_in_no_std() {
    let mut cache: LruCache<String, Vec<u8>> = make_lru(3);
    for i in 0..5u8 {
        cache.put(format!("key{}", i), vec![i; 4]);
    }
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get("key4"), Some(&vec![4u8; 4]));
    assert_eq!(cache.get("key0"), None);
    let log: Vec<String> = cache.eviction_log();
    assert_eq!(log, vec!["key0".to_string(), "key1".to_string()]);
}

#[test]
fn test_resize_in_no_std() {
    let mut cache = make_lru(4);
    for i in 0..4 {
        cache.put(i, i);
    }
    assert_eq!(cache.resize(1), Ok(3));
    assert_eq!(cache.resize(0), Err(CacheError::InvalidCapacity { requested: 0 }));
    assert_eq!(format!("{}", cache), "[3=3]");
    assert_eq!(format!("{}", EvictionCause::Resize), "resize");
}
