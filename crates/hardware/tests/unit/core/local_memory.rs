//! # Local Memory Tests
//!
//! The first access to a location misses and makes it resident; every later
//! access to it hits. Loads and stores share the rule.

use iss_core::common::MemAddr;
use iss_core::config::MemoryConfig;
use iss_core::core::units::cache::{LocalMemory, MemAccess};

const MISS: MemAccess = MemAccess {
    cycles: 45,
    hit: false,
};
const HIT: MemAccess = MemAccess {
    cycles: 2,
    hit: true,
};

#[test]
fn store_then_load_hits() {
    let mut mem = LocalMemory::default();
    let addr = MemAddr::from(0);

    assert_eq!(mem.store(addr, 10), MISS);
    assert_eq!(mem.load(addr), (10, HIT));
}

#[test]
fn load_then_store_hits() {
    let mut mem = LocalMemory::default();
    let addr = MemAddr::from(200);

    assert_eq!(mem.load(addr), (0, MISS));
    assert_eq!(mem.store(addr, 1), HIT);
}

#[test]
fn locations_are_tracked_independently() {
    let mut mem = LocalMemory::default();

    assert_eq!(mem.store(MemAddr::from(1), 5), MISS);
    assert_eq!(mem.store(MemAddr::from(2), 6), MISS);
    assert_eq!(mem.load(MemAddr::from(1)), (5, HIT));
    assert!(!mem.is_occupied(MemAddr::from(3)));
    assert_eq!(mem.occupied_count(), 2);
}

#[test]
fn peek_does_not_touch_occupancy() {
    let mem = LocalMemory::default();
    assert_eq!(mem.peek(MemAddr::from(9)), 0);
    assert!(!mem.is_occupied(MemAddr::from(9)));
}

#[test]
fn custom_latencies_are_charged() {
    let mut mem = LocalMemory::new(&MemoryConfig {
        hit_latency: 1,
        miss_latency: 10,
    });
    let addr = MemAddr::from(255);

    assert_eq!(mem.store(addr, 0).cycles, 10);
    assert_eq!(mem.load(addr).1.cycles, 1);
}
