//! # Build-time Probe of the fcntl Lock Descriptor Layout
//!
//! This library measures the layout of the lock descriptor of the platform
//! (`struct flock`) and generates a C header describing it. Consumers of the
//! header can then manipulate the raw bytes of the structure without
//! including the platform definitions themselves.
//!
//! The probe covers exactly the five members `l_type`, `l_whence`, `l_start`,
//! `l_len`, and `l_pid`, and the three commands `F_GETLK`, `F_SETLK`, and
//! `F_SETLKW`. No structure is ever passed to `fcntl(2)`. All measurements
//! are taken on a zeroed instance.

use std::path::Path;

pub mod header;
pub mod layout;
pub mod width;

pub use header::{generate, Header, OpCodes};
pub use layout::{Field, FieldLayout, FlockLayout};
pub use width::{width_label, UnsupportedWidth, Width};

/// Path of the generated header, relative to the working directory.
pub const OUTPUT_PATH: &str = "Fcntl_Lock.h";

/// Errors of the probe.
///
/// A failure of the probe is never recoverable. The caller is expected to
/// abort the dependent build.
#[derive(Debug)]
pub enum Error {
    /// The output file could not be created or truncated.
    OutputOpenFailure(std::io::Error),
    /// A member has a size that matches none of the C integer types.
    UnsupportedFieldWidth {
        field: Field,
        size: usize,
    },
    /// Writing the rendered header failed after the file was opened.
    OutputWriteFailure(std::io::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutputOpenFailure(_) => write!(fmt, "cannot open output for writing"),
            Error::UnsupportedFieldWidth { field, size } => write!(
                fmt,
                "member `{}` has unsupported size {}",
                field.name(),
                size,
            ),
            Error::OutputWriteFailure(_) => write!(fmt, "cannot write output"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::OutputOpenFailure(e) | Error::OutputWriteFailure(e) => Some(e),
            Error::UnsupportedFieldWidth { .. } => None,
        }
    }
}

/// Probes the lock descriptor of the platform and writes the header to
/// [`OUTPUT_PATH`].
pub fn run() -> Result<(), Error> {
    use fcntl_sys::ffi::linux::libc::fcntl;

    let layout = crate::flock_layout!(fcntl::Flock);
    generate(Path::new(OUTPUT_PATH), &layout, OpCodes::platform())
}
