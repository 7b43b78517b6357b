//! Identifier types.
//!
//! `NodeId` is a zero-cost typed index into the network's node arrays.
//! `PersonId` is owned: it combines the home district's name with a
//! per-district sequence number.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a network node.
    pub struct NodeId(u32);
}

// ── PersonId ──────────────────────────────────────────────────────────────────

/// Identifier of a synthesized person.
///
/// Equality covers both parts, so two ids are distinct whenever their
/// `(district, seq)` pairs differ, even if their textual forms coincide
/// (e.g. district `"A1"` seq 1 vs. district `"A"` seq 11).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId {
    /// Name of the home district.
    pub district: String,
    /// Sequence number within the home district, starting at 0.
    pub seq: u32,
}

impl PersonId {
    pub fn new(district: impl Into<String>, seq: u32) -> Self {
        Self { district: district.into(), seq }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.district, self.seq)
    }
}
