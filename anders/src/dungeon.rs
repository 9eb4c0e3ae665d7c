use glam::IVec2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    components::{Rect, Recti, RoomArray},
    contexts::RandomContext,
    systems::{partition::validate_min_room_size, partition_rooms, split_and_append},
    AndersResult,
};

/// Everything needed to describe a dungeon before it is generated.
///
/// Missing fields fall back to their defaults when parsed, so `{"seed": 7}` is a valid settings
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonSettings {
    /// Width of the seed rectangle, in tiles
    pub width: i32,
    /// Height of the seed rectangle, in tiles
    pub height: i32,
    /// Smallest room the partitioner may produce
    pub min_room_size: IVec2,
    /// Seed for the random context. A random seed is picked when this is empty.
    pub seed: Option<u64>,
    /// Room array capacity. Defaults to the most rooms the dungeon can possibly need.
    pub max_rooms: Option<usize>,
}

impl Default for DungeonSettings {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            min_room_size: IVec2::new(10, 10),
            seed: None,
            max_rooms: None,
        }
    }
}

impl DungeonSettings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> AndersResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for `Dungeon`.
#[derive(Debug, Clone, Default)]
pub struct DungeonBuilder {
    settings: DungeonSettings,
}

impl DungeonBuilder {
    /// Create a `DungeonBuilder` with default settings
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the size of the seed rectangle
    pub fn bounds(&mut self, size: IVec2) -> &mut Self {
        self.settings.width = size.x;
        self.settings.height = size.y;
        self
    }

    /// Set the minimum room size
    pub fn min_room_size(&mut self, min_room_size: IVec2) -> &mut Self {
        self.settings.min_room_size = min_room_size;
        self
    }

    /// Set the random seed
    pub fn seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.settings.seed = seed;
        self
    }

    /// Set the room array capacity
    pub fn max_rooms(&mut self, max_rooms: Option<usize>) -> &mut Self {
        self.settings.max_rooms = max_rooms;
        self
    }

    /// Replace every setting at once
    pub fn settings(&mut self, settings: DungeonSettings) -> &mut Self {
        self.settings = settings;
        self
    }

    /// Validate the settings and create a `Dungeon` holding just the seed room
    pub fn build(&self) -> AndersResult<Dungeon> {
        let settings = &self.settings;
        validate_min_room_size(settings.min_room_size)?;

        let seed_room = Recti::from_size(IVec2::new(settings.width, settings.height))?;
        let capacity = settings.max_rooms.unwrap_or_else(|| {
            RoomArray::worst_case_capacity(&seed_room, settings.min_room_size)
        });
        let rooms = RoomArray::new(seed_room, capacity)?;
        let random_context = match settings.seed {
            Some(seed) => RandomContext::new(seed),
            None => RandomContext::from_entropy(),
        };

        info!(
            "[ANDERS_DUNGEON] Created {}x{} dungeon with seed {} and room for {} rooms",
            settings.width,
            settings.height,
            random_context.seed(),
            capacity
        );

        Ok(Dungeon {
            rooms,
            random_context,
            min_room_size: settings.min_room_size,
        })
    }
}

/// A room array together with the random context and minimum room size used to grow it.
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// Every room generated so far
    pub rooms: RoomArray,
    /// Randomness used by generation. Hand this to the physics systems too.
    pub random_context: RandomContext,
    /// Smallest room the partitioner may produce
    pub min_room_size: IVec2,
}

impl Dungeon {
    /// Split a single room. `Ok(false)` means the dungeon is complete.
    pub fn split(&mut self) -> AndersResult<bool> {
        split_and_append(&mut self.rooms, self.min_room_size, &mut self.random_context)
    }

    /// Split until no room can be split any more. Returns the number of splits.
    pub fn generate(&mut self) -> AndersResult<usize> {
        let splits = partition_rooms(
            &mut self.rooms,
            self.min_room_size,
            &mut self.random_context,
            None,
        )?;
        info!("[ANDERS_DUNGEON] Generated {} rooms", self.rooms.len());
        Ok(splits)
    }

    /// Rooms as floating point rectangles, for the physics systems
    pub fn room_rects(&self) -> Vec<Rect> {
        self.rooms.to_rects()
    }

    /// Go back to the single seed room and reseed, ready to generate again
    pub fn reset(&mut self, seed: u64) {
        self.rooms.reset();
        self.random_context.reseed(seed);
    }
}
