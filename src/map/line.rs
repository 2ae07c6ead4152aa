//! Axis-aligned maze segments and their position parametrization.

use std::fmt;
use std::hash::{Hash, Hasher};

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::error::NavigationError;
use crate::map::direction::Direction;

/// An identifier for a line in the navigation graph.
pub type LineId = usize;

/// A maze edge between two grid cells.
///
/// The endpoints are kept in the order they were given, but equality and hashing are
/// undirected: `a -> b` and `b -> a` are the same line.
///
/// Positions along a line are fractions in `[0, 1]`, where `0` is the left end of a
/// horizontal line or the top end of a vertical line.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub start: IVec2,
    pub end: IVec2,
}

impl Line {
    pub const fn new(start: IVec2, end: IVec2) -> Self {
        Self { start, end }
    }

    /// Creates a line from raw `(x0, y0, x1, y1)` coordinates.
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(IVec2::new(x0, y0), IVec2::new(x1, y1))
    }

    /// The top or left endpoint.
    pub fn min(&self) -> IVec2 {
        self.start.min(self.end)
    }

    /// The bottom or right endpoint.
    pub fn max(&self) -> IVec2 {
        self.start.max(self.end)
    }

    /// Normalized endpoint pair used for equality and hashing.
    fn key(&self) -> (IVec2, IVec2) {
        (self.min(), self.max())
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y && self.start.x != self.end.x
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x && self.start.y != self.end.y
    }

    /// Returns true if exactly one of the coordinates differs between the endpoints.
    pub fn is_axis_aligned(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }

    /// Euclidean length in grid units.
    pub fn length(&self) -> f32 {
        self.start.as_vec2().distance(self.end.as_vec2())
    }

    /// Unit step from [`Line::min`] towards [`Line::max`].
    fn axis(&self) -> IVec2 {
        if self.is_horizontal() {
            IVec2::X
        } else {
            IVec2::Y
        }
    }

    /// Number of whole cells between the endpoints.
    fn span(&self) -> i32 {
        (self.max() - self.min()).element_sum()
    }

    /// Returns true if `point` lies on the segment, endpoints included.
    pub fn contains(&self, point: IVec2) -> bool {
        let (min, max) = self.key();
        point.cmpge(min).all() && point.cmple(max).all()
    }

    pub fn is_endpoint(&self, point: IVec2) -> bool {
        point == self.start || point == self.end
    }

    /// Returns the position of `point` along this line.
    pub fn position_of(&self, point: IVec2) -> Result<f32, NavigationError> {
        if !self.contains(point) {
            return Err(NavigationError::NotOnLine { point, line: *self });
        }
        let offset = (point - self.min()).element_sum();
        Ok(offset as f32 / self.span() as f32)
    }

    /// Returns the cell nearest to `position` along this line.
    pub fn point_at(&self, position: f32) -> Result<IVec2, NavigationError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(NavigationError::PositionOutOfRange(position));
        }
        let offset = (position * self.span() as f32).round() as i32;
        Ok(self.min() + self.axis() * offset)
    }

    /// Continuous grid coordinate for `position`, for sub-cell rendering.
    pub fn world_position(&self, position: f32) -> Vec2 {
        self.min().as_vec2() + self.axis().as_vec2() * (position.clamp(0.0, 1.0) * self.span() as f32)
    }

    /// Directions an entity at `point` may travel while staying on this line.
    ///
    /// Interior points allow both directions of the line's axis, an endpoint only allows
    /// travelling back along the line.
    pub fn directions_at(&self, point: IVec2) -> SmallVec<[Direction; 2]> {
        let (towards_min, towards_max) = if self.is_horizontal() {
            (Direction::Left, Direction::Right)
        } else {
            (Direction::Up, Direction::Down)
        };

        let mut directions = SmallVec::new();
        if point != self.min() {
            directions.push(towards_min);
        }
        if point != self.max() {
            directions.push(towards_max);
        }
        directions
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

impl From<(i32, i32, i32, i32)> for Line {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self::from_coords(x0, y0, x1, y1)
    }
}
