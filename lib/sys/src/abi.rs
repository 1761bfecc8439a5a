//! Common ABIs
//!
//! This module provides type definitions for a set of platform ABIs. This can
//! be used to introspect or synthesize objects of foreign platform ABIs.
//!
//! The individual sub-modules represent known ABIs of different platforms.
//! Each module exports the same set of symbols. Preferably, this would be
//! represented by a trait, which is implemented by each ABI. Unfortunately,
//! Rust traits are too limited right now to be suitable here (most
//! importantly, they do not allow constant methods). Hence, we instead export
//! a set of modules.
//!
//! Only the types used by the definitions of this crate are provided. The
//! builtin primitives always follow the alignment of the host. Hence, where
//! a foreign ABI requires a stricter alignment than some host might provide
//! (e.g., a 64-bit integer on x86 has an alignment of 4), the type is wrapped
//! in [`Align8`]. Only the layout is modeled this way, not the byte order.
//!
//! [`native`] always represents the ABI of the target platform.

/// Value with a minimum alignment of 8, regardless of the host.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Align8<T>(pub T);

/// # Native ABI
///
/// The native ABI uses the native primitive types of Rust, and thus represents
/// the ABI of the compilation target platform.
///
/// `Long` follows the C `long` of the target (which Linux uses for
/// `__kernel_off_t`).
pub mod native {
    pub type I16 = i16;
    pub type I32 = i32;
    pub type Long = core::ffi::c_long;
}

/// # System-V x86 ABI
///
/// This ABI represents the 32-bit ABI of System-V for x86 systems. It is used
/// by most UNIX compatible systems, including Linux.
pub mod x86_sysv {
    pub type I16 = i16;
    pub type I32 = i32;
    pub type Long = i32;
}

/// # System-V x86-64 ABI
///
/// This ABI represents the 64-bit ABI of System-V for x86 systems. It is used
/// by most UNIX compatible systems, including Linux.
pub mod x86_64_sysv {
    pub type I16 = i16;
    pub type I32 = i32;
    pub type Long = super::Align8<i64>;
}
