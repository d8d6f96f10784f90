/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate comprehensive tests for one integer location width.
#[macro_export]
macro_rules! test_atomic_integer {
    ($atomic_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_ops::{
                ops,
                $atomic_type,
                AtomicValue,
                MemoryOrder,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(atomic.load(MemoryOrder::SeqCst), 42);
            }

            #[test]
            fn test_const_new_in_static() {
                static ATOMIC: $atomic_type = <$atomic_type>::new(7);
                assert_eq!(ATOMIC.load(MemoryOrder::Acquire), 7);
            }

            #[test]
            fn test_default() {
                let atomic = <$atomic_type>::default();
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 0);
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(100);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 100);
            }

            #[test]
            fn test_load_store() {
                let atomic = <$atomic_type>::new(0);
                atomic.store(42, MemoryOrder::Release);
                assert_eq!(atomic.load(MemoryOrder::Acquire), 42);
                atomic.store(10, MemoryOrder::Relaxed);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 10);
            }

            #[test]
            fn test_extremes_round_trip() {
                let atomic = <$atomic_type>::new(0);
                for value in [<$value_type>::MIN, <$value_type>::MAX, 0, !0] {
                    atomic.store(value, MemoryOrder::SeqCst);
                    assert_eq!(atomic.load(MemoryOrder::SeqCst), value);
                }
            }

            #[test]
            fn test_exchange() {
                let atomic = <$atomic_type>::new(10);
                let old = atomic.exchange(20, MemoryOrder::AcqRel);
                assert_eq!(old, 10);
                assert_eq!(atomic.load(MemoryOrder::Acquire), 20);
            }

            #[test]
            fn test_compare_and_swap_success() {
                let atomic = <$atomic_type>::new(10);
                let mut expected = 10;
                assert!(atomic.compare_and_swap(
                    &mut expected,
                    20,
                    MemoryOrder::AcqRel,
                    MemoryOrder::Acquire,
                ));
                assert_eq!(expected, 10);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 20);
            }

            #[test]
            fn test_compare_and_swap_failure() {
                let atomic = <$atomic_type>::new(10);
                let mut expected = 15;
                assert!(!atomic.compare_and_swap(
                    &mut expected,
                    20,
                    MemoryOrder::SeqCst,
                    MemoryOrder::SeqCst,
                ));
                assert_eq!(expected, 10);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 10);
            }

            #[test]
            fn test_compare_exchange() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(
                    atomic.compare_exchange(10, 20, MemoryOrder::AcqRel, MemoryOrder::Acquire),
                    Ok(10)
                );
                assert_eq!(
                    atomic.compare_exchange(10, 30, MemoryOrder::AcqRel, MemoryOrder::Acquire),
                    Err(20)
                );
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 20);
            }

            #[test]
            fn test_fetch_add() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.fetch_add(5, MemoryOrder::Relaxed), 10);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 15);
            }

            #[test]
            fn test_fetch_add_wraps() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.fetch_add(1, MemoryOrder::AcqRel), <$value_type>::MAX);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), <$value_type>::MIN);
            }

            #[test]
            fn test_fetch_sub() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.fetch_sub(3, MemoryOrder::Release), 10);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 7);
            }

            #[test]
            fn test_fetch_sub_wraps() {
                let atomic = <$atomic_type>::new(<$value_type>::MIN);
                assert_eq!(atomic.fetch_sub(1, MemoryOrder::AcqRel), <$value_type>::MIN);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), <$value_type>::MAX);
            }

            #[test]
            fn test_fetch_and() {
                let atomic = <$atomic_type>::new(0b1111);
                assert_eq!(atomic.fetch_and(0b1100, MemoryOrder::AcqRel), 0b1111);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 0b1100);
            }

            #[test]
            fn test_fetch_or() {
                let atomic = <$atomic_type>::new(0b1100);
                assert_eq!(atomic.fetch_or(0b0011, MemoryOrder::AcqRel), 0b1100);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 0b1111);
            }

            #[test]
            fn test_fetch_xor() {
                let atomic = <$atomic_type>::new(0b1100);
                assert_eq!(atomic.fetch_xor(0b0110, MemoryOrder::AcqRel), 0b1100);
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 0b1010);
            }

            #[test]
            fn test_free_functions_match_methods() {
                let atomic = <$atomic_type>::new(1);
                ops::store(&atomic, 2, MemoryOrder::Release);
                assert_eq!(ops::fetch_add(&atomic, 3, MemoryOrder::AcqRel), 2);
                assert_eq!(ops::exchange(&atomic, 9, MemoryOrder::SeqCst), 5);
                let mut expected = 9;
                assert!(ops::compare_and_swap(
                    &atomic,
                    &mut expected,
                    4,
                    MemoryOrder::AcqRel,
                    MemoryOrder::Relaxed,
                ));
                assert_eq!(ops::load(&atomic, MemoryOrder::Acquire), atomic.load(MemoryOrder::Acquire));
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 4);
            }

            #[test]
            fn test_get_mut_and_into_inner() {
                let mut atomic = <$atomic_type>::new(1);
                *atomic.get_mut() = 33;
                assert_eq!(atomic.load(MemoryOrder::Relaxed), 33);
                assert_eq!(atomic.into_inner(), 33);
            }

            #[test]
            fn test_from_ptr_views_caller_memory() {
                let mut storage = <$atomic_type>::new(0);
                let ptr = storage.get_mut() as *mut $value_type;
                let view = unsafe { <$atomic_type>::from_ptr(ptr) };
                view.store(12, MemoryOrder::Release);
                assert_eq!(view.fetch_add(1, MemoryOrder::AcqRel), 12);
                assert_eq!(storage.into_inner(), 13);
            }

            #[test]
            fn test_width_matches_size() {
                let width = <$value_type as AtomicValue>::WIDTH;
                assert_eq!(width.bytes(), std::mem::size_of::<$value_type>());
                assert_eq!(std::mem::size_of::<$atomic_type>(), width.bytes());
            }

            #[test]
            fn test_debug_display() {
                let atomic = <$atomic_type>::new(42);
                assert!(format!("{:?}", atomic).contains("42"));
                assert_eq!(format!("{}", atomic), "42");
            }

            #[test]
            fn test_concurrent_fetch_add() {
                let atomic = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..4 {
                    let atomic = atomic.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..25 {
                            atomic.fetch_add(1, MemoryOrder::Relaxed);
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(atomic.load(MemoryOrder::Acquire), 100);
            }
        }
    };
}
