//! # Header Generation
//!
//! The generated header consists of one `#define` per probed fact, in a fixed
//! order consumers rely upon: member types, member offsets, structure size,
//! and the literal values of the lock commands.
//!
//! A header is always rendered completely in memory before anything is
//! written. The output is still opened (and thus truncated) first. Hence, if
//! probing fails, an empty file is left behind, but never a partial header nor
//! a stale header of a previous run.

use std::io::Write;
use std::path::Path;

use crate::layout::{Field, FlockLayout};
use crate::width::{width_label, Width};
use crate::Error;

const NOTICE: &str =
    "/* Please don't change - created automatically during installation. */";

/// Lock commands of the platform, emitted by value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OpCodes {
    pub getlk: libc::c_int,
    pub setlk: libc::c_int,
    pub setlkw: libc::c_int,
}

impl OpCodes {
    /// Yields the commands as defined by the C library of the platform.
    pub fn platform() -> Self {
        use fcntl_sys::ffi::linux::libc::fcntl;

        Self {
            getlk: fcntl::F_GETLK,
            setlk: fcntl::F_SETLK,
            setlkw: fcntl::F_SETLKW,
        }
    }
}

/// Fully classified probe result.
///
/// The header text is rendered via [`core::fmt::Display`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Header {
    widths: [Width; 5],
    layout: FlockLayout,
    codes: OpCodes,
}

impl Header {
    /// Classifies all members of `layout`.
    ///
    /// Fails with [`Error::UnsupportedFieldWidth`] on the first member, in
    /// emission order, whose size matches no C integer type.
    pub fn probe(layout: &FlockLayout, codes: OpCodes) -> Result<Self, Error> {
        let mut widths = [Width::Char; 5];

        for field in Field::ALL {
            let member = layout.field(field);
            log::trace!(
                "{}: size {} offset {}",
                field.name(),
                member.size,
                member.offset,
            );

            let width = width_label(member.size).map_err(|e| {
                Error::UnsupportedFieldWidth { field, size: e.0 }
            })?;
            log::debug!("{}: {}", field.name(), width);

            widths[field as usize] = width;
        }

        Ok(Self {
            widths,
            layout: *layout,
            codes,
        })
    }

    /// Yields the C type selected for a member.
    pub fn width(&self, field: Field) -> Width {
        self.widths[field as usize]
    }
}

// Emit a single definition with the symbol padded to a fixed column.
fn define(
    fmt: &mut core::fmt::Formatter<'_>,
    symbol: &str,
    value: impl core::fmt::Display,
) -> core::fmt::Result {
    writeln!(fmt, "#define {:<16}{}", symbol, value)
}

impl core::fmt::Display for Header {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(fmt, "{}", NOTICE)?;
        writeln!(fmt)?;
        writeln!(fmt, "#include <fcntl.h>")?;

        for field in Field::ALL {
            define(fmt, field.type_symbol(), self.width(field))?;
        }
        for field in Field::ALL {
            define(fmt, field.offset_symbol(), self.layout.field(field).offset)?;
        }

        define(fmt, "STRUCT_SIZE", self.layout.size)?;
        define(fmt, "REAL_F_GETLK", self.codes.getlk)?;
        define(fmt, "REAL_F_SETLK", self.codes.setlk)?;
        define(fmt, "REAL_F_SETLKW", self.codes.setlkw)
    }
}

/// Writes the header for `layout` and `codes` to `path`.
///
/// The file is created, or truncated if it exists. It is closed on all paths
/// before this returns.
pub fn generate(
    path: &Path,
    layout: &FlockLayout,
    codes: OpCodes,
) -> Result<(), Error> {
    let mut file = std::fs::File::create(path).map_err(Error::OutputOpenFailure)?;

    let text = Header::probe(layout, codes)?.to_string();
    log::debug!("writing {} bytes to {}", text.len(), path.display());

    file.write_all(text.as_bytes()).map_err(Error::OutputWriteFailure)
}
