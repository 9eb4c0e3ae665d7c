#![deny(missing_docs)]

//! Procedural dungeons and the physics to walk around in them.
//!
//! `anders` grows a set of rectangular rooms out of one big rectangle using binary space
//! partitioning, then keeps entities inside those rooms (and out of each other) with a small
//! axis-aligned bounding box solver. It knows nothing about windows, GPUs or textures: feed it
//! positions every tick, draw whatever comes out.
//!
//! # Getting started
//! ```
//! use anders::{DungeonBuilder, components::Body, systems::physics_system};
//! use glam::{IVec2, Vec2};
//!
//! let mut dungeon = DungeonBuilder::new()
//!     .bounds(IVec2::new(100, 100))
//!     .min_room_size(IVec2::new(10, 10))
//!     .seed(Some(42))
//!     .build()
//!     .unwrap();
//! dungeon.generate().unwrap();
//!
//! let rooms = dungeon.room_rects();
//! let mut bodies = vec![Body::new(Vec2::new(50., 50.), Vec2::new(1., 1.))];
//! physics_system(&mut bodies, &rooms, &mut dungeon.random_context);
//! ```

pub use anders_error::AndersError;
pub use dungeon::{Dungeon, DungeonBuilder, DungeonSettings};
pub use glam;

mod anders_error;
/// Components are plain data: rectangles, rooms, bodies and the camera
pub mod components;
/// Contexts are caller-owned state that the systems read from and write to.
///
/// [`contexts::InputContext`] and [`contexts::MouseLook`] have no window backend of their own:
/// whatever owns the window feeds them key and cursor state each frame, and the resulting look
/// offsets drive a [`components::Camera`].
pub mod contexts;
mod dungeon;
/// Systems are functions that build the dungeon or advance the simulation by one tick
pub mod systems;

/// Anders result type
pub type AndersResult<T> = std::result::Result<T, AndersError>;
