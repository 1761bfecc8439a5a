//! # Lock Descriptor Layout
//!
//! The layout of a lock descriptor is measured on a zeroed instance of the
//! structure. Member offsets are the distance of the member address to the
//! base address of the instance, member sizes are the sizes of their types.
//!
//! [`flock_layout!`](crate::flock_layout) works on any structure with the
//! five members of `struct flock`. Usually, this is the definition of the C
//! library, but the transposed kernel definitions of `fcntl-sys` (or any
//! hand-written mock) work just as well.

/// Member of the lock descriptor covered by the probe.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Type,
    Whence,
    Start,
    Len,
    Pid,
}

impl Field {
    /// All members, in the order they are emitted.
    pub const ALL: [Field; 5] = [
        Field::Type,
        Field::Whence,
        Field::Start,
        Field::Len,
        Field::Pid,
    ];

    /// Name of the structure member.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Type => "l_type",
            Field::Whence => "l_whence",
            Field::Start => "l_start",
            Field::Len => "l_len",
            Field::Pid => "l_pid",
        }
    }

    /// Name of the header symbol carrying the member type.
    pub const fn type_symbol(self) -> &'static str {
        match self {
            Field::Type => "LTYPE_TYPE",
            Field::Whence => "LWHENCE_TYPE",
            Field::Start => "LSTART_TYPE",
            Field::Len => "LLEN_TYPE",
            Field::Pid => "LPID_TYPE",
        }
    }

    /// Name of the header symbol carrying the member offset.
    pub const fn offset_symbol(self) -> &'static str {
        match self {
            Field::Type => "LTYPE_OFFSET",
            Field::Whence => "LWHENCE_OFFSET",
            Field::Start => "LSTART_OFFSET",
            Field::Len => "LLEN_OFFSET",
            Field::Pid => "LPID_OFFSET",
        }
    }
}

/// Size and offset of a single member.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldLayout {
    pub size: usize,
    pub offset: usize,
}

impl FieldLayout {
    /// Measures a member given the base address of its containing structure
    /// and the address of the member.
    ///
    /// Neither pointer is dereferenced. The member must be located within the
    /// structure, at or after `base`.
    pub fn measure<Struct, Member>(
        base: *const Struct,
        member: *const Member,
    ) -> Self {
        Self {
            size: size_of::<Member>(),
            offset: member.addr() - base.addr(),
        }
    }
}

/// Layout of a lock descriptor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FlockLayout {
    /// Member layouts, indexed in the order of [`Field::ALL`].
    pub fields: [FieldLayout; 5],
    /// Size of the entire structure.
    pub size: usize,
}

impl FlockLayout {
    /// Yields the layout of the given member.
    pub fn field(&self, field: Field) -> FieldLayout {
        self.fields[field as usize]
    }
}

/// Measures the [`FlockLayout`] of a structure type.
///
/// The type must have the members `l_type`, `l_whence`, `l_start`, `l_len`,
/// and `l_pid`, and must be valid when zeroed (i.e., plain integers). The
/// instance is never used for anything but taking member addresses.
#[macro_export]
macro_rules! flock_layout {
    (@member $base:ident, $member:ident) => {{
        // SAFETY: `$base` points to a live, zeroed instance. The projection
        //         only computes the member address and never reads from it,
        //         so this is also fine for packed structures.
        let member = unsafe { &raw const (*$base).$member };
        $crate::layout::FieldLayout::measure($base, member)
    }};

    ($ty:ty) => {{
        let probe = ::core::mem::MaybeUninit::<$ty>::zeroed();
        let base: *const $ty = probe.as_ptr();

        $crate::layout::FlockLayout {
            fields: [
                $crate::flock_layout!(@member base, l_type),
                $crate::flock_layout!(@member base, l_whence),
                $crate::flock_layout!(@member base, l_start),
                $crate::flock_layout!(@member base, l_len),
                $crate::flock_layout!(@member base, l_pid),
            ],
            size: ::core::mem::size_of::<$ty>(),
        }
    }};
}
