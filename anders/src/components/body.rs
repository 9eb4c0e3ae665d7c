use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Rect;

bitflags! {
    /// State flags for a body. The first three decide how the physics system treats it.
    #[derive(Serialize, Deserialize, Default)]
    pub struct BodyFlags: u32 {
        /// Never moved by the physics system
        const STATIC = 1 << 0;
        /// Pushed around by collisions
        const RIGID = 1 << 1;
        /// A character: pushed around by collisions and kept inside rooms
        const CHARACTER = 1 << 2;
        /// Controlled by the player
        const PLAYER = 1 << 3;
        /// About to blink
        const PREBLINK = 1 << 4;
        /// Currently ignoring damage
        const INVISIFRAME = 1 << 5;
        /// Controls are scrambled
        const CONFUSION = 1 << 6;
        /// Unable to act
        const STUNNED = 1 << 7;
    }
}

/// The collision volume of anything that moves around the dungeon.
///
/// Stored as a centre and half extents, which is what the collision maths wants. The simulation
/// writes `frame_velocity` each tick and the physics system applies it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    /// Centre of the body
    pub pos: Vec2,
    /// Distance from the centre to each edge
    pub half_size: Vec2,
    /// Movement to apply on the next physics tick
    pub frame_velocity: Vec2,
    /// State flags
    pub flags: BodyFlags,
}

impl Body {
    /// Create a body that isn't moving and has no flags set
    pub fn new(pos: Vec2, half_size: Vec2) -> Body {
        Body {
            pos,
            half_size,
            ..Default::default()
        }
    }

    /// Builder style flag setter
    pub fn with_flags(mut self, flags: BodyFlags) -> Body {
        self.flags = flags;
        self
    }

    /// Is this body immovable?
    pub fn is_static(&self) -> bool {
        self.flags.contains(BodyFlags::STATIC)
    }

    /// The body as a corner-based rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_center_half_size(self.pos, self.half_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_body_rect() {
        let body = Body::new(Vec2::new(10., 10.), Vec2::new(2., 2.));
        let rect = body.rect();
        assert_relative_eq!(rect.bottom_left, Vec2::new(8., 8.));
        assert_relative_eq!(rect.top_right, Vec2::new(12., 12.));
        assert!(!body.is_static());
    }

    #[test]
    pub fn test_body_flags_bits() {
        let body = Body::default().with_flags(BodyFlags::STATIC | BodyFlags::STUNNED);
        assert!(body.is_static());
        assert_eq!(body.flags.bits(), 0b1000_0001);
        assert_eq!(BodyFlags::CHARACTER.bits(), 4);
    }
}
