/// One of the two axes of the dungeon plane.
///
/// `glam` vectors can be indexed with [`Axis::index`], which lets the partitioner and the
/// physics systems pick "the x or the y component" without duplicating code per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

impl Axis {
    /// Both axes, x first
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Component index of this axis in a `Vec2` / `IVec2`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The perpendicular axis
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Pick the axis with the larger value. Ties favour x.
    pub fn larger<T: PartialOrd>(x: T, y: T) -> Axis {
        if x >= y {
            Axis::X
        } else {
            Axis::Y
        }
    }
}
