/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(AtomicI8, i8, atomic_i8_tests);
test_atomic_integer!(AtomicU8, u8, atomic_u8_tests);
test_atomic_integer!(AtomicI16, i16, atomic_i16_tests);
test_atomic_integer!(AtomicU16, u16, atomic_u16_tests);
test_atomic_integer!(AtomicI32, i32, atomic_i32_tests);
test_atomic_integer!(AtomicU32, u32, atomic_u32_tests);
test_atomic_integer!(AtomicI64, i64, atomic_i64_tests);
test_atomic_integer!(AtomicU64, u64, atomic_u64_tests);
test_atomic_integer!(AtomicIsize, isize, atomic_isize_tests);
test_atomic_integer!(AtomicUsize, usize, atomic_usize_tests);
