//! # Tests for the Linux FFI Definitions
//!
//! This module contains tests for all exported FFI definitions of the
//! `ffi::linux` module.

use super::*;

// If `libc` is not enabled, just alias it from `native` so the test
// can just use `libc` unconditionally.
#[cfg(not(feature = "libc"))]
use native as libc;

// Compare the memory content of two values byte by byte. Only suitable for
// types without padding.
fn eq_bytes<A, B>(a: &A, b: &B) -> bool {
    // SAFETY: Both references are valid for reads of their entire size.
    let a = unsafe {
        core::slice::from_raw_parts(a as *const A as *const u8, size_of::<A>())
    };
    let b = unsafe {
        core::slice::from_raw_parts(b as *const B as *const u8, size_of::<B>())
    };
    a == b
}

// Compare two `const` definitions for equality. This will compare their type
// layout and memory content for equality.
fn eq_def_const<A, B>(a: &A, b: &B) -> bool {
    size_of::<A>() == size_of::<B>()
    && align_of::<A>() == align_of::<B>()
    && eq_bytes(a, b)
}

// A 3-way variant of `eq_def_const()`.
fn eq3_def_const<A, B, C>(a: &A, b: &B, c: &C) -> bool {
    eq_def_const(a, b) && eq_def_const(a, c)
}

// Verify that all supported platforms are available, by simply checking that
// they expose `abi::I16`.
#[test]
fn platform_availability() {
    assert_eq!(size_of::<x86::abi::I16>(), 2);
    assert_eq!(size_of::<x86_64::abi::I16>(), 2);
    assert_eq!(size_of::<target::abi::I16>(), 2);
    assert_eq!(size_of::<native::abi::I16>(), 2);
    assert_eq!(size_of::<libc::abi::I16>(), 2);
}

// Verify the structure layout of all real platforms. This must hold on any
// host, including 32-bit ones.
#[test]
fn flock_layout() {
    use core::mem::offset_of;

    assert_eq!(size_of::<x86::fcntl::Flock>(), 16);
    assert_eq!(align_of::<x86::fcntl::Flock>(), 4);
    assert_eq!(offset_of!(x86::fcntl::Flock, l_type), 0);
    assert_eq!(offset_of!(x86::fcntl::Flock, l_whence), 2);
    assert_eq!(offset_of!(x86::fcntl::Flock, l_start), 4);
    assert_eq!(offset_of!(x86::fcntl::Flock, l_len), 8);
    assert_eq!(offset_of!(x86::fcntl::Flock, l_pid), 12);

    assert_eq!(size_of::<x86_64::fcntl::Flock>(), 32);
    assert_eq!(align_of::<x86_64::fcntl::Flock>(), 8);
    assert_eq!(offset_of!(x86_64::fcntl::Flock, l_type), 0);
    assert_eq!(offset_of!(x86_64::fcntl::Flock, l_whence), 2);
    assert_eq!(offset_of!(x86_64::fcntl::Flock, l_start), 8);
    assert_eq!(offset_of!(x86_64::fcntl::Flock, l_len), 16);
    assert_eq!(offset_of!(x86_64::fcntl::Flock, l_pid), 24);
}

// Verify the commands are shared across platforms.
#[test]
fn commands() {
    assert_eq!(x86::fcntl::F_GETLK, 5);
    assert_eq!(x86::fcntl::F_SETLK, 6);
    assert_eq!(x86::fcntl::F_SETLKW, 7);
    assert!(eq_def_const(&x86::fcntl::F_SETLKW, &x86_64::fcntl::F_SETLKW));
}

// Compare target APIs with native and libc APIs, and verify they match. The
// C library of x86 maps the commands to their 64-bit variants, so only
// compare on x86_64.
#[cfg(target_arch = "x86_64")]
#[test]
fn comparison() {
    assert!(eq3_def_const(&target::fcntl::F_GETLK, &native::fcntl::F_GETLK, &libc::fcntl::F_GETLK));
    assert!(eq3_def_const(&target::fcntl::F_SETLK, &native::fcntl::F_SETLK, &libc::fcntl::F_SETLK));
    assert!(eq3_def_const(&target::fcntl::F_SETLKW, &native::fcntl::F_SETLKW, &libc::fcntl::F_SETLKW));
    assert_eq!(size_of::<target::fcntl::Flock>(), size_of::<native::fcntl::Flock>());
    assert_eq!(size_of::<target::fcntl::Flock>(), size_of::<libc::fcntl::Flock>());
}

// Verify the native structure against the one of the C library.
#[cfg(all(target_arch = "x86_64", target_os = "linux"))]
#[test]
fn libc_flock() {
    use core::mem::offset_of;

    assert_eq!(size_of::<native::fcntl::Flock>(), size_of::<::libc::flock>());
    assert_eq!(align_of::<native::fcntl::Flock>(), align_of::<::libc::flock>());
    assert_eq!(offset_of!(native::fcntl::Flock, l_type), offset_of!(::libc::flock, l_type));
    assert_eq!(offset_of!(native::fcntl::Flock, l_whence), offset_of!(::libc::flock, l_whence));
    assert_eq!(offset_of!(native::fcntl::Flock, l_start), offset_of!(::libc::flock, l_start));
    assert_eq!(offset_of!(native::fcntl::Flock, l_len), offset_of!(::libc::flock, l_len));
    assert_eq!(offset_of!(native::fcntl::Flock, l_pid), offset_of!(::libc::flock, l_pid));
}
