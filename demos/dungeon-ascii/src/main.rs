use std::{env, fs};

use anders::{
    components::{Body, BodyFlags, RoomArray},
    contexts::{FrameContext, FrameReport, FrameStats},
    systems::physics_system,
    Dungeon, DungeonBuilder, DungeonSettings,
};
use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

const TICKS: usize = 240;
const WALKERS: usize = 8;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Unable to read settings from {path}"))?;
            DungeonSettings::from_json(&json)?
        }
        None => DungeonSettings {
            width: 78,
            height: 32,
            min_room_size: [6, 4].into(),
            ..Default::default()
        },
    };

    let mut dungeon = DungeonBuilder::new().settings(settings.clone()).build()?;
    dungeon.generate()?;

    let mut bodies = spawn_bodies(&mut dungeon);
    if let Some(report) = simulate(&mut dungeon, &mut bodies) {
        info!(
            "Simulated {TICKS} ticks, last {} averaged {:.3}ms",
            report.frames, report.average_frame_time
        );
    }

    for line in draw(&dungeon.rooms, &bodies, settings.width, settings.height) {
        println!("{line}");
    }
    info!(
        "Seed {}: {} rooms, {} bodies",
        dungeon.random_context.seed(),
        dungeon.rooms.len(),
        bodies.len()
    );

    Ok(())
}

/// The player starts in the first room, walkers are dropped in the others.
fn spawn_bodies(dungeon: &mut Dungeon) -> Vec<Body> {
    let rooms = dungeon.room_rects();
    let half_size = Vec2::splat(0.4);

    let mut bodies = vec![Body::new(rooms[0].center(), half_size)
        .with_flags(BodyFlags::CHARACTER | BodyFlags::PLAYER)];
    for room in rooms.iter().skip(1).take(WALKERS) {
        bodies.push(Body::new(room.center(), half_size).with_flags(BodyFlags::CHARACTER));
    }
    bodies
}

/// Returns the last frame timing report, if a full interval was simulated
fn simulate(dungeon: &mut Dungeon, bodies: &mut [Body]) -> Option<FrameReport> {
    let rooms = dungeon.room_rects();
    let mut frame_context = FrameContext::new(FrameStats::new(0.5));
    let mut last_report = None;

    for _ in 0..TICKS {
        for body in bodies.iter_mut() {
            let random_context = &mut dungeon.random_context;
            let direction = Vec2::new(random_context.signed_unit(), random_context.signed_unit());
            body.frame_velocity = direction * 0.5;
        }
        physics_system(bodies, &rooms, &mut dungeon.random_context);
        if let Some(report) = frame_context.tick() {
            last_report = Some(report);
        }
    }

    last_report
}

/// Rows of the map, top row first
fn draw(rooms: &RoomArray, bodies: &[Body], width: i32, height: i32) -> Vec<String> {
    let (width, height) = (width.max(0) as usize, height.max(0) as usize);
    let mut tiles = vec![vec!['#'; width]; height];

    for room in rooms {
        for y in room.bottom_left.y..room.top_right.y {
            for x in room.bottom_left.x..room.top_right.x {
                tiles[y as usize][x as usize] = '.';
            }
        }
    }

    for body in bodies {
        let (x, y) = (body.pos.x as usize, body.pos.y as usize);
        if let Some(tile) = tiles.get_mut(y).and_then(|row| row.get_mut(x)) {
            *tile = if body.flags.contains(BodyFlags::PLAYER) {
                '@'
            } else {
                'e'
            };
        }
    }

    tiles
        .into_iter()
        .rev()
        .map(|row| row.into_iter().collect())
        .collect()
}
