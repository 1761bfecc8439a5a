//! # Definitions of Linux Record-Locking Interfaces
//!
//! The raw definitions of the Linux kernel record-locking interface (the
//! `F_GETLK` family of `fcntl(2)` commands and `struct flock`) are provided
//! in this module.
//!
//! This module exposes a set of platform-modules, which are all syntactically
//! equivalent, but define the interfaces for different platforms. Several
//! pseudo-modules are provided, which either alias another platform-module or
//! provide a virtual platform based on another one. In most cases, you want
//! to use the [`native`] platform-module to get access to all the interfaces
//! for the platform of the compilation target.
//!
//! ## Completeness
//!
//! Only the classic (non-`64`-suffixed, non-OFD) record locks are covered.
//! These are defined in `include/uapi/asm-generic/fcntl.h` of the Linux
//! kernel.

// We provide FFI definitions for all supported platforms simultaneously. This
// is useful for tools which generate definitions for a foreign platform, or
// which need to verify the native ABI against a known reference. To aid in
// this, we use a few tricks:
//
//  - Each platform exposes a sub-module `abi`, which defines the basic
//    data-types of the platform. This is taken from [`crate::abi`] and simply
//    re-exported.
//  - Common definitions are shared in the `common` sub-module. It is not
//    exposed by itself, but has to be included manually by each platform. It
//    refers to the ABI of the including platform via `super::abi`, and thus
//    is recompiled for each platform.
//  - The `libc` platform is available if the `libc` feature is selected. It is
//    not a real platform, but rather defines the same API as the other
//    platforms via aliases to the definitions of `libc`.
//  - The `native` platform is also not a real platform. Instead it is a
//    recompilation of one of the other platforms with the native Rust
//    primitives via [`crate::abi::native`]. If a platform is not supported,
//    this will use the `libc` platform (if enabled).
//    Note that this is why we use `./<platform>/mod.rs` rather than
//    `./<platform>.rs`, to ensure the platform directory exists and our usage
//    of `path = "../[...]"` works.

#[cfg(test)]
mod test;

pub mod libc;
pub mod native;

/// # Platform Module for x86
///
/// This module exposes all supported interfaces of [`crate::ffi::linux`] for
/// the x86 platform.
pub mod x86 {
    pub use crate::abi::x86_sysv as abi;

    #[path = "mod.rs"]
    mod inner;

    pub use inner::*;
}

/// # Platform Module for x86_64
///
/// This module exposes all supported interfaces of [`crate::ffi::linux`] for
/// the x86_64 platform.
pub mod x86_64 {
    pub use crate::abi::x86_64_sysv as abi;

    #[path = "mod.rs"]
    mod inner;

    pub use inner::*;
}

/// # Pseudo-Module for the Target Platform
///
/// This module is a straight alias of the platform-module that matches the
/// compilation target. If no platform-module exists for the compilation
/// target, this will be an alias of `native`.
#[cfg(target_arch = "x86")]
pub use x86 as target;

#[cfg(target_arch = "x86_64")]
pub use x86_64 as target;

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub use native as target;
