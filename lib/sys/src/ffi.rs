//! # Definitions of System Interfaces
//!
//! For all supported system interfaces the respective raw definitions of
//! constants, structures, and types are provided in this module.
//!
//! The definitions are transposed into Rust following a set of rules and
//! guidelines, thus yielding predictable type names and definitions. The idea
//! is to produce the same predictable result, as if a tool like `bindgen`
//! was used.
//!
//! This module only provides the definitions of the system interfaces, but no
//! implementation. In particular, no structure defined here is ever passed to
//! a system call by this crate.
//!
//! ## Transpose Rules
//!
//!  * Type names follow the standard Rust naming scheme, using `CamelCase` for
//!    types and `UPPER_CASE` for constants.
//!
//!  * Structure members keep their C names (including prefixes like `l_`).
//!    This keeps them interchangeable with the definitions of the `libc`
//!    crate, so code can be written generically over both.
//!
//!  * C-enums are always provided as raw integer constants, rather than Rust
//!    enums, to allow arbitrary discriminants.
//!
//! ## Native Alias
//!
//! Each system module exposes the definitions native to the compilation
//! target under a `native` alias. This allows easy interaction with the
//! running system, but prevents any cross-architecture interaction.

pub mod linux;
