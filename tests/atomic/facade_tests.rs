/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::facade::*;
use prism3_atomic_ops::{
    AtomicI16,
    AtomicU32,
    AtomicU64,
    AtomicUsize,
    MemoryOrder,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_load_presets() {
    let atomic = AtomicU32::new(17);
    assert_eq!(load_relaxed(&atomic), 17);
    assert_eq!(load_consume(&atomic), 17);
    assert_eq!(load_acquire(&atomic), 17);
    assert_eq!(load_seq_cst(&atomic), 17);
}

#[test]
fn test_store_presets() {
    let atomic = AtomicU32::new(0);
    store_relaxed(&atomic, 1);
    assert_eq!(atomic.load(MemoryOrder::Relaxed), 1);
    store_release(&atomic, 2);
    assert_eq!(atomic.load(MemoryOrder::Acquire), 2);
    store_seq_cst(&atomic, 3);
    assert_eq!(atomic.load(MemoryOrder::SeqCst), 3);
}

#[test]
fn test_swap_presets() {
    let atomic = AtomicU64::new(1);
    assert_eq!(swap_relaxed(&atomic, 2), 1);
    assert_eq!(swap_acquire(&atomic, 3), 2);
    assert_eq!(swap_release(&atomic, 4), 3);
    assert_eq!(swap_acq_rel(&atomic, 5), 4);
    assert_eq!(load_relaxed(&atomic), 5);
}

#[test]
fn test_cas_presets_success() {
    let atomic = AtomicUsize::new(0);
    let mut expected = 0;
    assert!(cas_relaxed(&atomic, &mut expected, 1));
    expected = 1;
    assert!(cas_acquire(&atomic, &mut expected, 2));
    expected = 2;
    assert!(cas_release(&atomic, &mut expected, 3));
    expected = 3;
    assert!(cas_acq_rel(&atomic, &mut expected, 4));
    expected = 4;
    assert!(cas_seq_cst(&atomic, &mut expected, 5));
    assert_eq!(load_acquire(&atomic), 5);
}

#[test]
fn test_cas_presets_failure_reports_observed() {
    let atomic = AtomicUsize::new(8);
    let presets: [fn(&AtomicUsize, &mut usize, usize) -> bool; 5] = [
        cas_relaxed,
        cas_acquire,
        cas_release,
        cas_acq_rel,
        cas_seq_cst,
    ];
    for cas in presets {
        let mut expected = 0;
        assert!(!cas(&atomic, &mut expected, 1));
        assert_eq!(expected, 8);
    }
    assert_eq!(load_relaxed(&atomic), 8);
}

#[test]
fn test_fetch_add_sub_presets() {
    let atomic = AtomicI16::new(0);
    assert_eq!(fetch_add_relaxed(&atomic, 1), 0);
    assert_eq!(fetch_add_acquire(&atomic, 1), 1);
    assert_eq!(fetch_add_release(&atomic, 1), 2);
    assert_eq!(fetch_add_acq_rel(&atomic, 1), 3);
    assert_eq!(fetch_sub_relaxed(&atomic, 1), 4);
    assert_eq!(fetch_sub_acquire(&atomic, 1), 3);
    assert_eq!(fetch_sub_release(&atomic, 1), 2);
    assert_eq!(fetch_sub_acq_rel(&atomic, 1), 1);
    assert_eq!(fetch_sub_acq_rel(&atomic, 1), 0);
    assert_eq!(load_relaxed(&atomic), -1);
}

#[test]
fn test_bitwise_presets() {
    let atomic = AtomicU32::new(0);
    assert_eq!(fetch_or_relaxed(&atomic, 0b0001), 0);
    assert_eq!(fetch_or_acquire(&atomic, 0b0010), 0b0001);
    assert_eq!(fetch_or_release(&atomic, 0b0100), 0b0011);
    assert_eq!(fetch_or_acq_rel(&atomic, 0b1000), 0b0111);
    assert_eq!(fetch_and_relaxed(&atomic, 0b1110), 0b1111);
    assert_eq!(fetch_and_acquire(&atomic, 0b1100), 0b1110);
    assert_eq!(fetch_and_release(&atomic, 0b1000), 0b1100);
    assert_eq!(fetch_and_acq_rel(&atomic, 0b1111), 0b1000);
    assert_eq!(fetch_xor_relaxed(&atomic, 0b0001), 0b1000);
    assert_eq!(fetch_xor_acquire(&atomic, 0b0010), 0b1001);
    assert_eq!(fetch_xor_release(&atomic, 0b0100), 0b1011);
    assert_eq!(fetch_xor_acq_rel(&atomic, 0b1111), 0b1111);
    assert_eq!(load_relaxed(&atomic), 0);
}

#[test]
fn test_increment_decrement_helpers() {
    let atomic = AtomicU32::new(u32::MAX);
    assert_eq!(increment_relaxed(&atomic), u32::MAX);
    assert_eq!(increment_acq_rel(&atomic), 0);
    assert_eq!(decrement_relaxed(&atomic), 1);
    assert_eq!(decrement_acq_rel(&atomic), 0);
    assert_eq!(load_relaxed(&atomic), u32::MAX);
}

#[test]
fn test_fences_accept_every_preset() {
    fence_acquire();
    fence_release();
    fence_acq_rel();
    fence_seq_cst();
    compiler_barrier();
}

#[test]
fn test_reference_count_release() {
    const NUM_THREADS: usize = 8;
    let refs = Arc::new(AtomicUsize::new(NUM_THREADS));
    let payload = Arc::new(AtomicU64::new(0));
    let mut handles = vec![];

    for id in 0..NUM_THREADS {
        let refs = refs.clone();
        let payload = payload.clone();
        let handle = thread::spawn(move || {
            fetch_add_relaxed(&payload, id as u64);
            decrement_acq_rel(&refs) == 1
        });
        handles.push(handle);
    }

    let last_owners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|last| *last)
        .count();
    assert_eq!(last_owners, 1);
    assert_eq!(load_acquire(&refs), 0);
    assert_eq!(load_acquire(&payload), (0..NUM_THREADS as u64).sum::<u64>());
}
