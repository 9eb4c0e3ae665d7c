#![allow(missing_docs)]
pub mod axis;
pub mod body;
pub mod camera;
pub mod rect;
pub mod room_array;

pub use axis::Axis;
pub use body::{Body, BodyFlags};
pub use camera::Camera;
pub use rect::{Rect, Recti};
pub use room_array::RoomArray;
