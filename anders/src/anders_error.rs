use std::collections::TryReserveError;

use glam::IVec2;
use thiserror::Error;

/// Everything that can go wrong while building or simulating a dungeon
#[derive(Error, Debug)]
pub enum AndersError {
    /// A room had to be appended but the room array has no free slot left
    #[error("The room array is full (capacity {capacity})")]
    CapacityExceeded {
        /// Fixed capacity of the array
        capacity: usize,
    },
    /// Memory for a room array of this capacity could not be reserved
    #[error("Unable to reserve space for {capacity} rooms")]
    Allocation {
        /// Capacity that was asked for
        capacity: usize,
        /// Why the reservation failed
        source: TryReserveError,
    },
    /// Rooms must be at least two tiles across, otherwise a split can produce a zero-width room
    #[error("Minimum room size must be at least 2 on both axes, got {0}")]
    InvalidMinRoomSize(IVec2),
    /// A rectangle with zero or negative width or height
    #[error("Rectangle from {bottom_left} to {top_right} has no area")]
    DegenerateRect {
        /// Bottom left corner that was supplied
        bottom_left: IVec2,
        /// Top right corner that was supplied
        top_right: IVec2,
    },
    /// The dungeon settings could not be parsed
    #[error("Unable to parse dungeon settings")]
    Settings(#[from] serde_json::Error),
}
