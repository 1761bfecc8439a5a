// Platform Module for x86_64
//
// This module is included multiple times by `../../linux.rs`, using outer
// comments for documentation. It is also the responsibility of the caller
// to define the ABI to use. This module simply re-uses it via
// `use super::abi`.

use super::abi;

#[path = "../common/mod.rs"]
mod common;

pub use common::*;

// `l_whence` is padded to the 8-byte alignment of `l_start`, and the
// trailing `l_pid` to the size of the structure.
static_assertions::const_assert_eq!(size_of::<fcntl::Flock>(), 32);
static_assertions::const_assert_eq!(core::mem::offset_of!(fcntl::Flock, l_start), 8);
static_assertions::const_assert_eq!(core::mem::offset_of!(fcntl::Flock, l_pid), 24);
