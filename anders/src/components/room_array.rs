use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::{
    components::{Rect, Recti},
    AndersError, AndersResult,
};

/// A fixed capacity list of rooms.
///
/// Room 0 is the seed rectangle the dungeon grows from. The capacity is decided up front and the
/// array never reallocates: once it is full, [`RoomArray::push`] fails instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomArrayData")]
pub struct RoomArray {
    capacity: usize,
    rooms: Vec<Recti>,
}

#[derive(Deserialize)]
struct RoomArrayData {
    capacity: usize,
    rooms: Vec<Recti>,
}

impl TryFrom<RoomArrayData> for RoomArray {
    type Error = AndersError;

    fn try_from(data: RoomArrayData) -> Result<Self, Self::Error> {
        if data.rooms.is_empty() || data.rooms.len() > data.capacity {
            return Err(AndersError::CapacityExceeded {
                capacity: data.capacity,
            });
        }
        if let Some(room) = data.rooms.iter().find(|r| !r.is_valid()) {
            return Err(AndersError::DegenerateRect {
                bottom_left: room.bottom_left,
                top_right: room.top_right,
            });
        }

        let mut rooms = allocate(data.capacity)?;
        rooms.extend(data.rooms);
        Ok(RoomArray {
            capacity: data.capacity,
            rooms,
        })
    }
}

impl RoomArray {
    /// Create an array holding just `seed`, with space for `capacity` rooms in total
    pub fn new(seed: Recti, capacity: usize) -> AndersResult<RoomArray> {
        if capacity == 0 {
            return Err(AndersError::CapacityExceeded { capacity });
        }
        if !seed.is_valid() {
            return Err(AndersError::DegenerateRect {
                bottom_left: seed.bottom_left,
                top_right: seed.top_right,
            });
        }

        let mut rooms = allocate(capacity)?;
        rooms.push(seed);
        Ok(RoomArray { capacity, rooms })
    }

    /// The most rooms a full partitioning of `seed` can ever produce.
    ///
    /// Every room plus the wall it borders is at least `min_room_size` in both directions, and
    /// those footprints tile the seed, so this is `area / (min.x * min.y)`.
    pub fn worst_case_capacity(seed: &Recti, min_room_size: IVec2) -> usize {
        let min_area = (min_room_size.x.max(1) as i64) * (min_room_size.y.max(1) as i64);
        (seed.area() / min_area).max(1) as usize
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false for an array built through [`RoomArray::new`]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total number of rooms this array can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left
    pub fn remaining(&self) -> usize {
        self.capacity - self.rooms.len()
    }

    /// No free slots left?
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Get a room
    pub fn get(&self, index: usize) -> Option<&Recti> {
        self.rooms.get(index)
    }

    /// All rooms, in creation order
    pub fn as_slice(&self) -> &[Recti] {
        &self.rooms
    }

    /// Iterate over all rooms
    pub fn iter(&self) -> std::slice::Iter<'_, Recti> {
        self.rooms.iter()
    }

    /// Floating point copies of every room, ready to be handed to the physics systems
    pub fn to_rects(&self) -> Vec<Rect> {
        self.rooms.iter().copied().map(Rect::from).collect()
    }

    /// Append a room. Fails rather than growing past the capacity.
    pub fn push(&mut self, room: Recti) -> AndersResult<usize> {
        if self.is_full() {
            return Err(AndersError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.rooms.push(room);
        Ok(self.rooms.len() - 1)
    }

    /// Drop every room except the seed
    pub fn reset(&mut self) {
        self.rooms.truncate(1);
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Recti] {
        &mut self.rooms
    }
}

/// Reserve every slot up front, failing instead of aborting when the capacity is unreasonable
fn allocate(capacity: usize) -> AndersResult<Vec<Recti>> {
    let mut rooms = Vec::new();
    rooms
        .try_reserve_exact(capacity)
        .map_err(|source| AndersError::Allocation { capacity, source })?;
    Ok(rooms)
}

impl<'a> IntoIterator for &'a RoomArray {
    type Item = &'a Recti;
    type IntoIter = std::slice::Iter<'a, Recti>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}
