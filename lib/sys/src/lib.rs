//! # Definitions of the fcntl Record-Locking Interfaces
//!
//! This library provides the raw definitions of the POSIX record-locking
//! interfaces as exposed by the Linux kernel through `fcntl(2)`. It does not
//! require any particular runtime. With the `libc` feature, the same API is
//! additionally provided as aliases to the definitions of the `libc` crate.

#![no_std]

extern crate core;

#[cfg(test)]
extern crate std;

pub mod abi;
pub mod ffi;
