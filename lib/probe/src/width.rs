//! # Integer Widths
//!
//! Members of the lock descriptor are described to consumers by the C integer
//! type of the same size. Only the four classic types `char`, `short`, `int`,
//! and `long` are candidates. Signedness and alignment are not considered.

use libc::{c_char, c_int, c_long, c_short};

/// C integer type selected for a member of a given size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Width {
    Char,
    Short,
    Int,
    Long,
}

/// Size that matches none of the candidate types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnsupportedWidth(pub usize);

impl Width {
    /// All candidates, in the order they are tried.
    pub const CANDIDATES: [Width; 4] = [
        Width::Char,
        Width::Short,
        Width::Int,
        Width::Long,
    ];

    /// Size of the C type on the target platform.
    pub const fn size(self) -> usize {
        match self {
            Width::Char => size_of::<c_char>(),
            Width::Short => size_of::<c_short>(),
            Width::Int => size_of::<c_int>(),
            Width::Long => size_of::<c_long>(),
        }
    }

    /// Name of the C type, as emitted into the header.
    pub const fn label(self) -> &'static str {
        match self {
            Width::Char => "char",
            Width::Short => "short",
            Width::Int => "int",
            Width::Long => "long",
        }
    }
}

impl core::fmt::Display for Width {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.write_str(self.label())
    }
}

/// Classifies a member size as one of the candidate C types.
///
/// The candidates are compared in ascending order and the first exact match
/// wins. Hence, if two types share a size (e.g., `int` and `long` on ILP32),
/// the smaller-ranked one is selected.
pub fn width_label(size: usize) -> Result<Width, UnsupportedWidth> {
    Width::CANDIDATES
        .into_iter()
        .find(|w| w.size() == size)
        .ok_or(UnsupportedWidth(size))
}

#[cfg(test)]
mod test {
    use super::*;

    // Every candidate maps back to itself, unless an earlier candidate shares
    // its size.
    #[test]
    fn candidates() {
        for (i, w) in Width::CANDIDATES.into_iter().enumerate() {
            let first = Width::CANDIDATES[..=i]
                .iter()
                .copied()
                .find(|v| v.size() == w.size())
                .unwrap();
            assert_eq!(width_label(w.size()), Ok(first));
        }
    }

    #[cfg(all(target_family = "unix", target_pointer_width = "64"))]
    #[test]
    fn lp64() {
        assert_eq!(width_label(1), Ok(Width::Char));
        assert_eq!(width_label(2), Ok(Width::Short));
        assert_eq!(width_label(4), Ok(Width::Int));
        assert_eq!(width_label(8), Ok(Width::Long));
    }

    // On ILP32, `long` is never selected and 8-byte members are rejected.
    #[cfg(all(target_family = "unix", target_pointer_width = "32"))]
    #[test]
    fn ilp32() {
        assert_eq!(width_label(4), Ok(Width::Int));
        assert_eq!(width_label(8), Err(UnsupportedWidth(8)));
    }

    #[test]
    fn unsupported() {
        assert_eq!(width_label(0), Err(UnsupportedWidth(0)));
        assert_eq!(width_label(3), Err(UnsupportedWidth(3)));
        assert_eq!(width_label(16), Err(UnsupportedWidth(16)));
    }

    #[test]
    fn labels() {
        assert_eq!(Width::Char.label(), "char");
        assert_eq!(Width::Long.to_string(), "long");
    }
}
