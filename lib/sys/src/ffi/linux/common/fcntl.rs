//! # Record Locks
//!
//! POSIX record locks are advisory locks on byte ranges of a file. They are
//! queried and placed via `fcntl(2)` with one of the commands below, each
//! taking a pointer to a [`Flock`] descriptor.
//!
//! Record locks are owned by a process (identified by `l_pid` when queried)
//! and are released when any file descriptor of that process referring to
//! the file is closed.

use super::abi;

// Commands
pub const F_GETLK: abi::I32 = 5;
pub const F_SETLK: abi::I32 = 6;
pub const F_SETLKW: abi::I32 = 7;

/// Lock descriptor of a single record lock.
///
/// `l_whence` is one of `SEEK_SET`, `SEEK_CUR`, or `SEEK_END` and selects the
/// origin `l_start` is relative to. A `l_len` of 0 extends the range to the
/// end of the file, including any future growth.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Flock {
    pub l_type: abi::I16,
    pub l_whence: abi::I16,
    pub l_start: abi::Long,
    pub l_len: abi::Long,
    pub l_pid: abi::I32,
}
