//! Dense, typed arena identifiers.
//!
//! Stops and routes live in `Vec` arenas inside the catalogue; every index
//! (`name → id`, stop → routes, distance table) is keyed by these ids
//! instead of by shared handles.  Graph vertices and edges use the same
//! scheme so that an id is always a position in some `Vec`.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid id".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
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
    /// Position of a stop in the catalogue's stop arena.
    pub struct StopId(u32);
}

typed_id! {
    /// Position of a route in the catalogue's route arena.
    pub struct RouteId(u32);
}

typed_id! {
    /// Vertex of a weighted digraph.
    pub struct VertexId(u32);
}

typed_id! {
    /// Edge of a weighted digraph: its position in the append-only edge list.
    pub struct EdgeId(u32);
}
