//! The [`Distance`] value stored per cell of a distance field.

use std::fmt;

/// Hop distance from a cell to its nearest source.
///
/// `Unknown` means no finite distance has been established: either the
/// cell has never been reached, or it is unreachable from every current
/// source.
///
/// `Distance` does not implement `Ord`. Comparisons against a hop count go
/// through [`exceeds`](Self::exceeds) and [`is_below`](Self::is_below),
/// which spell out how `Unknown` is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Distance {
    /// No finite distance established.
    #[default]
    Unknown,
    /// Minimum number of passable-cell hops to the nearest source.
    Hops(u32),
}

impl Distance {
    /// Distance of a source cell.
    pub const ZERO: Self = Self::Hops(0);

    /// `true` if a finite distance is established.
    pub fn is_known(self) -> bool {
        matches!(self, Self::Hops(_))
    }

    /// The hop count, or `None` if unknown.
    pub fn hops(self) -> Option<u32> {
        match self {
            Self::Hops(n) => Some(n),
            Self::Unknown => None,
        }
    }

    /// `true` if this is a known distance strictly greater than `hops`.
    ///
    /// `Unknown` never exceeds anything.
    pub fn exceeds(self, hops: u32) -> bool {
        matches!(self, Self::Hops(n) if n > hops)
    }

    /// `true` if this is a known distance strictly less than `hops`.
    pub fn is_below(self, hops: u32) -> bool {
        matches!(self, Self::Hops(n) if n < hops)
    }

    /// `true` if relaxing to `hops` would improve this value: the cell is
    /// `Unknown` or holds a strictly larger distance.
    pub fn improves_to(self, hops: u32) -> bool {
        match self {
            Self::Unknown => true,
            Self::Hops(n) => n > hops,
        }
    }

    /// Exponential decay transform: `0.0` for `Unknown`, else
    /// `falloff^hops`.
    ///
    /// ```
    /// use attract_core::Distance;
    ///
    /// assert_eq!(Distance::Hops(3).potential(0.5), 0.125);
    /// assert_eq!(Distance::Unknown.potential(0.5), 0.0);
    /// ```
    pub fn potential(self, falloff: f64) -> f64 {
        match self {
            Self::Unknown => 0.0,
            Self::Hops(n) => falloff.powi(n.min(i32::MAX as u32) as i32),
        }
    }

    /// Debug-dump representation: the hop count, or `-1` for `Unknown`.
    pub fn as_signed(self) -> i64 {
        match self {
            Self::Unknown => -1,
            Self::Hops(n) => i64::from(n),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Hops(n) => write!(f, "{n}"),
        }
    }
}

impl From<u32> for Distance {
    fn from(hops: u32) -> Self {
        Self::Hops(hops)
    }
}

impl From<Option<u32>> for Distance {
    fn from(hops: Option<u32>) -> Self {
        hops.map_or(Self::Unknown, Self::Hops)
    }
}
