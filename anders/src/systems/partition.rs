use glam::IVec2;
use log::{debug, warn};

use crate::{
    components::{Axis, Recti, RoomArray},
    contexts::RandomContext,
    AndersError, AndersResult,
};

/// How many random rooms are tried before falling back to a linear scan
pub const MAX_RANDOM_ATTEMPTS: usize = 7;

/// Rooms need to be at least two tiles across on both axes, otherwise the wall left between two
/// halves of a split can eat a whole room.
pub fn validate_min_room_size(min_room_size: IVec2) -> AndersResult<()> {
    if min_room_size.x < 2 || min_room_size.y < 2 {
        return Err(AndersError::InvalidMinRoomSize(min_room_size));
    }
    Ok(())
}

/// Big enough to be cut in half on either axis without going under `min_room_size`?
///
/// Compares half sizes, so a very long and thin room is never split even when its long side
/// would allow it.
pub fn is_splittable(room: &Recti, min_room_size: IVec2) -> bool {
    let half_size = room.half_size();
    min_room_size.x <= half_size.x && min_room_size.y <= half_size.y
}

/// Find a room that can be split.
///
/// A handful of random rooms are tried first, which keeps splits spread over the whole dungeon.
/// If none of those fit, every room is checked in order.
pub fn find_splittable_room(
    rooms: &[Recti],
    min_room_size: IVec2,
    random_context: &mut RandomContext,
) -> Option<usize> {
    if rooms.is_empty() {
        return None;
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let index = random_context.index(rooms.len());
        if is_splittable(&rooms[index], min_room_size) {
            return Some(index);
        }
    }

    rooms
        .iter()
        .position(|room| is_splittable(room, min_room_size))
}

/// Split one room in two and append the second half to `rooms`.
///
/// Returns `Ok(false)` when no room is large enough to split any further; the dungeon is then
/// complete for this `min_room_size`. Running out of capacity is an error. In both cases `rooms`
/// is left untouched.
pub fn split_and_append(
    rooms: &mut RoomArray,
    min_room_size: IVec2,
    random_context: &mut RandomContext,
) -> AndersResult<bool> {
    validate_min_room_size(min_room_size)?;

    let index = match find_splittable_room(rooms.as_slice(), min_room_size, random_context) {
        Some(index) => index,
        None => return Ok(false),
    };

    if rooms.is_full() {
        return Err(AndersError::CapacityExceeded {
            capacity: rooms.capacity(),
        });
    }

    let parent = rooms.as_slice()[index];
    let (kept, appended) = split_room(parent, min_room_size, random_context);
    rooms.as_mut_slice()[index] = kept;
    let new_index = rooms.push(appended)?;

    debug!(
        "[ANDERS_PARTITION] Split room {index} {:?} into {:?} and room {new_index} {:?}",
        parent, kept, appended
    );
    Ok(true)
}

/// Cut `room` across its longer axis. The first half keeps the low side, the second half starts
/// one tile past the cut so a wall runs between them.
fn split_room(
    room: Recti,
    min_room_size: IVec2,
    random_context: &mut RandomContext,
) -> (Recti, Recti) {
    let axis = Axis::larger(room.extent(Axis::X), room.extent(Axis::Y));
    let i = axis.index();

    let axis_half_size = room.extent(axis) / 2;
    let axis_center = room.bottom_left[i] + axis_half_size;
    let max_split = axis_half_size - min_room_size[i];
    let split = if max_split > 0 {
        random_context.range(-max_split, max_split)
    } else {
        0
    };

    let cut = axis_center - split;
    let mut kept = room;
    let mut appended = room;
    kept.top_right[i] = cut;
    appended.bottom_left[i] = cut + 1;

    (kept, appended)
}

/// Keep splitting until no room can be split, the array is full, or `max_splits` splits have
/// happened. Returns the number of successful splits.
pub fn partition_rooms(
    rooms: &mut RoomArray,
    min_room_size: IVec2,
    random_context: &mut RandomContext,
    max_splits: Option<usize>,
) -> AndersResult<usize> {
    validate_min_room_size(min_room_size)?;

    let mut splits = 0;
    while max_splits.map_or(true, |max| splits < max) {
        match split_and_append(rooms, min_room_size, random_context) {
            Ok(true) => splits += 1,
            Ok(false) => break,
            Err(AndersError::CapacityExceeded { capacity }) => {
                warn!("[ANDERS_PARTITION] Room array is full at {capacity} rooms, stopping early");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "[ANDERS_PARTITION] {splits} splits, {} rooms in total",
        rooms.len()
    );
    Ok(splits)
}
