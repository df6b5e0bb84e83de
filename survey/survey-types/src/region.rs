//! Offset region variants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Polygon;

/// The raw result of shrinking a footprint inward by a clearance margin.
///
/// Inward offsetting can leave the footprint intact, split it into
/// disjoint pieces (e.g. a dumbbell-shaped floor plan pinched in the
/// middle), or consume it entirely when the clearance exceeds the
/// polygon's inscribed radius. Modeling these as a tagged enum keeps
/// the downstream selection and fallback logic exhaustive.
///
/// # Example
///
/// ```
/// use survey_types::{Point2, Polygon, ScanRegion};
///
/// let piece = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ])
/// .unwrap();
///
/// let region = ScanRegion::from_pieces(vec![piece]);
/// assert!(matches!(region, ScanRegion::Single(_)));
/// assert!(!region.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanRegion {
    /// One simple polygon.
    Single(Polygon),
    /// Multiple disjoint pieces.
    Multi(Vec<Polygon>),
    /// Nothing left after offsetting.
    Empty,
}

impl ScanRegion {
    /// Normalize a piece list into the matching variant.
    #[must_use]
    pub fn from_pieces(mut pieces: Vec<Polygon>) -> Self {
        match pieces.len() {
            0 => Self::Empty,
            1 => match pieces.pop() {
                Some(piece) => Self::Single(piece),
                None => Self::Empty,
            },
            _ => Self::Multi(pieces),
        }
    }

    /// Whether no area remains.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of disjoint pieces.
    #[must_use]
    pub const fn piece_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(pieces) => pieces.len(),
            Self::Empty => 0,
        }
    }

    /// Consume the region, keeping the piece with the largest area.
    ///
    /// Returns `None` for [`ScanRegion::Empty`].
    ///
    /// # Example
    ///
    /// ```
    /// use survey_types::{Point2, Polygon, ScanRegion};
    ///
    /// let small = Polygon::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(1.0, 1.0),
    ///     Point2::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    /// let large = Polygon::new(vec![
    ///     Point2::new(5.0, 0.0),
    ///     Point2::new(9.0, 0.0),
    ///     Point2::new(9.0, 4.0),
    ///     Point2::new(5.0, 4.0),
    /// ])
    /// .unwrap();
    ///
    /// let region = ScanRegion::from_pieces(vec![small, large.clone()]);
    /// assert_eq!(region.into_largest_piece(), Some(large));
    /// ```
    #[must_use]
    pub fn into_largest_piece(self) -> Option<Polygon> {
        match self {
            Self::Single(piece) => Some(piece),
            Self::Multi(pieces) => pieces.into_iter().max_by(|a, b| {
                a.area()
                    .partial_cmp(&b.area())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            Self::Empty => None,
        }
    }
}
