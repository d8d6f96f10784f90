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
    AtomicPtr,
    MemoryOrder,
};
use std::ptr;
use std::sync::Arc;
use std::thread;

#[test]
fn test_null_and_new() {
    let empty: AtomicPtr<u32> = AtomicPtr::null();
    assert!(empty.load(MemoryOrder::Acquire).is_null());

    let mut value = 5u32;
    let atomic = AtomicPtr::new(&mut value as *mut u32);
    assert_eq!(atomic.load(MemoryOrder::Relaxed), &mut value as *mut u32);
}

#[test]
fn test_exchange_and_cas() {
    let mut first = 1u64;
    let mut second = 2u64;
    let first_ptr: *mut u64 = &mut first;
    let second_ptr: *mut u64 = &mut second;

    let atomic = AtomicPtr::new(first_ptr);
    assert_eq!(atomic.exchange(second_ptr, MemoryOrder::AcqRel), first_ptr);

    let mut expected = first_ptr;
    assert!(!atomic.compare_and_swap(
        &mut expected,
        ptr::null_mut(),
        MemoryOrder::AcqRel,
        MemoryOrder::Acquire,
    ));
    assert_eq!(expected, second_ptr);
    assert!(facade::cas_acq_rel(&atomic, &mut expected, ptr::null_mut()));
    assert!(atomic.into_inner().is_null());
}

#[test]
fn test_debug_shows_address() {
    let atomic: AtomicPtr<u8> = AtomicPtr::null();
    assert!(format!("{:?}", atomic).contains("0x0"));
}

#[test]
fn test_publish_boxed_value() {
    let slot: Arc<AtomicPtr<String>> = Arc::new(AtomicPtr::null());

    let consumer = {
        let slot = slot.clone();
        thread::spawn(move || loop {
            let current = facade::load_acquire(&slot);
            if !current.is_null() {
                // The producer released the slot after initializing the string.
                break unsafe { (*current).clone() };
            }
            prism3_atomic_ops::spin_hint();
        })
    };

    let boxed = Box::into_raw(Box::new(String::from("published")));
    facade::store_release(&slot, boxed);

    assert_eq!(consumer.join().unwrap(), "published");

    let taken = facade::swap_acq_rel(&slot, ptr::null_mut());
    assert_eq!(taken, boxed);
    drop(unsafe { Box::from_raw(taken) });
}
