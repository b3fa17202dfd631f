//! Catalogue entities and derived statistics.

use tc_core::{GeoPoint, Meters, StopId};

// ── Stop ──────────────────────────────────────────────────────────────────────

/// A named location.  Immutable once added to the catalogue.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name:        String,
    pub coordinates: GeoPoint,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A named, ordered sequence of stops.
///
/// For a round-trip route `stops` is the full cycle (first == last).  For a
/// linear route `stops` holds the outbound leg only; the return leg is the
/// same sequence walked backwards and is never materialized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Route {
    /// A route is active when it has at least one stop.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.stops.is_empty()
    }

    /// Number of stops a passenger riding the whole route passes through.
    ///
    /// `len` for round-trip routes, `2 * len - 1` for linear ones (the
    /// terminal is counted once).
    pub fn total_stop_count(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else {
            (self.stops.len() * 2).saturating_sub(1)
        }
    }

    /// Every stop in riding order, including the synthesized return leg of
    /// a linear route.
    pub fn traversal(&self) -> impl Iterator<Item = StopId> + '_ {
        let skip = if self.is_roundtrip { self.stops.len() } else { 1 };
        self.stops
            .iter()
            .copied()
            .chain(self.stops.iter().rev().skip(skip).copied())
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Aggregate statistics for one route.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStats {
    pub total_stops:  usize,
    pub unique_stops: usize,
    /// Road length of the full traversal, in metres.
    pub length_m:     Meters,
    /// Road length divided by great-circle length.  `INFINITY` when the
    /// stops share coordinates but the road length is positive.
    pub curvature:    f64,
}

/// Routes serving one stop, sorted lexicographically and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopStats<'a> {
    pub routes: Vec<&'a str>,
}

impl StopStats<'_> {
    /// `true` when the stop exists but no route serves it.
    pub fn is_unserved(&self) -> bool {
        self.routes.is_empty()
    }
}
