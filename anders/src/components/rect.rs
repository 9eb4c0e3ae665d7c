use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{components::Axis, AndersError, AndersResult};

/// An integer axis aligned rectangle, measured in tiles.
///
/// Rooms are stored this way. A valid rectangle has `top_right` strictly above and to the right
/// of `bottom_left`; width and height are `top_right - bottom_left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recti {
    /// Lowest corner on both axes
    pub bottom_left: IVec2,
    /// Highest corner on both axes
    pub top_right: IVec2,
}

impl Recti {
    /// Create a rectangle, rejecting anything without a positive width and height
    pub fn new(bottom_left: IVec2, top_right: IVec2) -> AndersResult<Recti> {
        let rect = Recti {
            bottom_left,
            top_right,
        };
        if !rect.is_valid() {
            return Err(AndersError::DegenerateRect {
                bottom_left,
                top_right,
            });
        }
        Ok(rect)
    }

    /// A rectangle with its bottom left corner at the origin
    pub fn from_size(size: IVec2) -> AndersResult<Recti> {
        Recti::new(IVec2::ZERO, size)
    }

    /// Does this rectangle have a positive width and height?
    pub fn is_valid(&self) -> bool {
        self.top_right.x > self.bottom_left.x && self.top_right.y > self.bottom_left.y
    }

    /// Width and height
    pub fn size(&self) -> IVec2 {
        self.top_right - self.bottom_left
    }

    /// Half the width and height, rounded down
    pub fn half_size(&self) -> IVec2 {
        self.size() / 2
    }

    /// Centre, rounded towards `bottom_left`
    pub fn center(&self) -> IVec2 {
        self.bottom_left + self.half_size()
    }

    /// Size along a single axis
    pub fn extent(&self, axis: Axis) -> i32 {
        self.size()[axis.index()]
    }

    /// Area in square tiles
    pub fn area(&self) -> i64 {
        let size = self.size();
        size.x as i64 * size.y as i64
    }

    /// Do the two rectangles share any area? Rectangles that only touch along an edge do not.
    pub fn overlaps(&self, other: &Recti) -> bool {
        !(self.top_right.y <= other.bottom_left.y
            || other.top_right.y <= self.bottom_left.y
            || self.top_right.x <= other.bottom_left.x
            || other.top_right.x <= self.bottom_left.x)
    }

    /// Is `other` entirely within this rectangle? Shared edges are allowed.
    pub fn contains(&self, other: &Recti) -> bool {
        self.bottom_left.cmple(other.bottom_left).all() && other.top_right.cmple(self.top_right).all()
    }
}

/// A floating point axis aligned rectangle, used for collidable geometry at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Lowest corner on both axes
    pub bottom_left: Vec2,
    /// Highest corner on both axes
    pub top_right: Vec2,
}

impl Rect {
    /// Create a rectangle from its corners
    pub fn new(bottom_left: Vec2, top_right: Vec2) -> Rect {
        Rect {
            bottom_left,
            top_right,
        }
    }

    /// Create a rectangle from its centre and half extents
    pub fn from_center_half_size(center: Vec2, half_size: Vec2) -> Rect {
        Rect {
            bottom_left: center - half_size,
            top_right: center + half_size,
        }
    }

    /// Width and height
    pub fn size(&self) -> Vec2 {
        self.top_right - self.bottom_left
    }

    /// Half the width and height
    pub fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Centre point
    pub fn center(&self) -> Vec2 {
        self.bottom_left + self.half_size()
    }

    /// Do the two rectangles share any area? Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.top_right.y <= other.bottom_left.y
            || other.top_right.y <= self.bottom_left.y
            || self.top_right.x <= other.bottom_left.x
            || other.top_right.x <= self.bottom_left.x)
    }

    /// Is `point` inside the rectangle or on its boundary?
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bottom_left.cmple(point).all() && point.cmple(self.top_right).all()
    }
}

impl From<Recti> for Rect {
    fn from(rect: Recti) -> Self {
        Rect {
            bottom_left: rect.bottom_left.as_vec2(),
            top_right: rect.top_right.as_vec2(),
        }
    }
}
