#![allow(missing_docs)]
pub mod partition;
pub mod physics;

pub use partition::{find_splittable_room, partition_rooms, split_and_append};
pub use physics::{
    force_entity_inside_rooms, overlaps, physics_system, resolve_entity_collision,
};
