// Common Linux Definitions
//
// This module provides a common implementation of the Linux record-locking
// interfaces. It is meant to be used by the platform-modules via:
//
// ```rust,ignore
// #[path = "../common/mod.rs"]
// mod common;
// pub use common::*;
// ```
//
// This module references the including module via `super::xyz`, and requires
// the following definitions to be provided:
//
//  * `super::abi`: This must be an ABI module with the same symbols as
//    defined by `crate::abi::native`.
//
// Sub-modules of this module never reference the including module directly,
// but only ever use the symbols exported here.

use super::abi as abi;

pub mod fcntl;
