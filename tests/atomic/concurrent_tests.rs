/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::{
    facade,
    AtomicI32,
    AtomicI64,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
    MemoryOrder,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Test concurrent increments
#[test]
fn test_concurrent_increment() {
    let counter = Arc::new(AtomicI32::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.fetch_add(1, MemoryOrder::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        counter.load(MemoryOrder::Acquire),
        (NUM_THREADS * ITERATIONS_PER_THREAD) as i32
    );
}

// Test concurrent decrements
#[test]
fn test_concurrent_decrement() {
    let counter = Arc::new(AtomicI64::new(10000));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                counter.fetch_sub(1, MemoryOrder::AcqRel);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        counter.load(MemoryOrder::Acquire),
        10000 - (NUM_THREADS * 100) as i64
    );
}

// Test concurrent CAS loops: every thread eventually succeeds exactly once
#[test]
fn test_concurrent_cas() {
    let atomic = Arc::new(AtomicU32::new(0));
    let success_count = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            let mut current = atomic.load(MemoryOrder::Relaxed);
            loop {
                let next = current + 1;
                if atomic.compare_and_swap(
                    &mut current,
                    next,
                    MemoryOrder::AcqRel,
                    MemoryOrder::Relaxed,
                ) {
                    break;
                }
            }
            success_count.fetch_add(1, MemoryOrder::Relaxed);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.load(MemoryOrder::Acquire), NUM_THREADS as u32);
    assert_eq!(success_count.load(MemoryOrder::Relaxed), NUM_THREADS);
}

// Test that a one-shot CAS is won by exactly one thread
#[test]
fn test_concurrent_cas_single_winner() {
    let slot = Arc::new(AtomicUsize::new(0));
    let winners = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for id in 0..NUM_THREADS {
        let slot = slot.clone();
        let winners = winners.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            let mut expected = 0;
            if facade::cas_acq_rel(&slot, &mut expected, id + 1) {
                winners.fetch_add(1, MemoryOrder::Relaxed);
            } else {
                assert_ne!(expected, 0);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(winners.load(MemoryOrder::Relaxed), 1);
    let owner = slot.load(MemoryOrder::Acquire);
    assert!(owner >= 1 && owner <= NUM_THREADS);
}

// Test that concurrent exchanges neither lose nor duplicate values
#[test]
fn test_concurrent_exchange_conserves_values() {
    let atomic = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for id in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            let mut seen = Vec::with_capacity(ITERATIONS_PER_THREAD);
            for i in 0..ITERATIONS_PER_THREAD {
                let token = 1 + id * ITERATIONS_PER_THREAD + i;
                seen.push(atomic.exchange(token, MemoryOrder::AcqRel));
            }
            seen
        });
        handles.push(handle);
    }

    let mut values: Vec<usize> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    values.push(atomic.load(MemoryOrder::SeqCst));
    values.sort_unstable();

    let expected: Vec<usize> = (0..=NUM_THREADS * ITERATIONS_PER_THREAD).collect();
    assert_eq!(values, expected);
}

// Test that readers never observe a mix of two writers' bit patterns
#[test]
fn test_no_torn_reads() {
    const PATTERNS: [u64; 4] = [
        0x0000_0000_0000_0000,
        0xFFFF_FFFF_FFFF_FFFF,
        0x0F0F_0F0F_0F0F_0F0F,
        0xF0F0_F0F0_F0F0_F0F0,
    ];
    let atomic = Arc::new(AtomicU64::new(0));
    let mut handles = vec![];

    for pattern in PATTERNS {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                atomic.store(pattern, MemoryOrder::Relaxed);
            }
        });
        handles.push(handle);
    }

    for _ in 0..2 {
        let atomic = atomic.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                let observed = atomic.load(MemoryOrder::Relaxed);
                assert!(PATTERNS.contains(&observed), "torn read {:#x}", observed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

// Test message passing through a release store and an acquire load
#[test]
fn test_release_acquire_message_passing() {
    for round in 1..=100u64 {
        let data = Arc::new(AtomicU64::new(0));
        let ready = Arc::new(AtomicU8::new(0));

        let consumer = {
            let data = data.clone();
            let ready = ready.clone();
            thread::spawn(move || {
                while ready.load(MemoryOrder::Acquire) == 0 {
                    prism3_atomic_ops::spin_hint();
                }
                data.load(MemoryOrder::Relaxed)
            })
        };

        data.store(round, MemoryOrder::Relaxed);
        ready.store(1, MemoryOrder::Release);

        assert_eq!(consumer.join().unwrap(), round);
    }
}

// Test a spin lock built from exchange and release store
#[test]
fn test_spin_lock_mutual_exclusion() {
    let lock = Arc::new(AtomicU8::new(0));
    let shared = Arc::new(AtomicU64::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let lock = lock.clone();
        let shared = shared.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                while lock.exchange(1, MemoryOrder::Acquire) == 1 {
                    prism3_atomic_ops::spin_hint();
                }
                // Non-atomic read-modify-write under the lock.
                let value = shared.load(MemoryOrder::Relaxed);
                shared.store(value + 1, MemoryOrder::Relaxed);
                lock.store(0, MemoryOrder::Release);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.load(MemoryOrder::Acquire), (NUM_THREADS * 100) as u64);
}
