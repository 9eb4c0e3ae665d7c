use glam::Vec2;
use log::trace;

use crate::{
    components::{Axis, Body, Rect},
    contexts::RandomContext,
};

/// Fraction of the allowed offset given up when pushing a body back into a room, so it ends up
/// strictly inside instead of exactly on the wall.
pub const CONTAINMENT_BIAS: f32 = 0.001;
/// Fraction of the combined half sizes added when separating two bodies.
pub const SEPARATION_BIAS: f32 = 0.0001;
/// Stand-in for an offset component that is exactly zero.
pub const DEGENERATE_OFFSET: f32 = 0.0001;
/// Upper bound on single float steps taken when the separation bias rounds away
const MAX_SEPARATION_STEPS: usize = 64;

/// Do `a` and `b` share any area? Touching edges do not count.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Where a body sits relative to one room
#[derive(Debug, Clone, Copy)]
struct RoomFit {
    center: Vec2,
    /// Room half size minus body half size: how far the body's centre may stray from the room's
    shrunk_half_size: Vec2,
    offset: Vec2,
    distance: f32,
}

impl RoomFit {
    fn new(body: &Body, room: &Rect) -> Option<RoomFit> {
        let shrunk_half_size = room.half_size() - body.half_size;
        if shrunk_half_size.x < 0. || shrunk_half_size.y < 0. {
            return None;
        }

        let center = room.center();
        let offset = body.pos - center;
        Some(RoomFit {
            center,
            shrunk_half_size,
            offset,
            distance: offset.length(),
        })
    }

    fn contains(&self, pos: Vec2) -> bool {
        Rect::from_center_half_size(self.center, self.shrunk_half_size).contains_point(pos)
    }

    fn contains_on(&self, pos: Vec2, axis: Axis) -> bool {
        let i = axis.index();
        (pos[i] - self.center[i]).abs() <= self.shrunk_half_size[i]
    }

    fn push_inside(&self, body: &mut Body, axis: Axis) {
        let i = axis.index();
        let limit = self.shrunk_half_size[i];
        let offset = (body.pos[i] - self.center[i]).clamp(-limit, limit);
        body.pos[i] = self.center[i] + offset * (1. - CONTAINMENT_BIAS);
    }
}

/// Make sure `body` is completely inside one of `rooms`.
///
/// Does nothing if it already is. Otherwise the body is moved into the room whose centre is
/// closest, along the axis it strayed furthest on first. Rooms too small to hold the body are
/// ignored. Returns whether the body was moved.
pub fn force_entity_inside_rooms(body: &mut Body, rooms: &[Rect]) -> bool {
    let mut best: Option<RoomFit> = None;

    for room in rooms {
        let fit = match RoomFit::new(body, room) {
            Some(fit) => fit,
            None => continue,
        };
        if fit.contains(body.pos) {
            return false;
        }
        if best.map_or(true, |best| fit.distance < best.distance) {
            best = Some(fit);
        }
    }

    let fit = match best {
        Some(fit) => fit,
        None => {
            trace!("[ANDERS_PHYSICS] No room can hold body at {}", body.pos);
            return false;
        }
    };

    let axis = Axis::larger(fit.offset.x.abs(), fit.offset.y.abs());
    fit.push_inside(body, axis);

    let other = axis.other();
    if !fit.contains_on(body.pos, other) {
        fit.push_inside(body, other);
    }

    trace!(
        "[ANDERS_PHYSICS] Pushed body from {} to {}",
        fit.center + fit.offset,
        body.pos
    );
    true
}

/// Push `moving` out of `fixed` if they overlap.
///
/// Only the axis with the larger centre offset is corrected; `moving` is placed just past
/// `fixed`'s edge on that axis, and nudged further by single float steps if rounding left the
/// two overlapping. Returns whether anything moved.
pub fn resolve_entity_collision(
    moving: &mut Body,
    fixed: &Body,
    random_context: &mut RandomContext,
) -> bool {
    if !overlaps(&moving.rect(), &fixed.rect()) {
        return false;
    }

    let mut offset = moving.pos - fixed.pos;
    for axis in Axis::ALL {
        let i = axis.index();
        if offset[i] == 0. {
            offset[i] = if random_context.coin() {
                DEGENERATE_OFFSET
            } else {
                -DEGENERATE_OFFSET
            };
        }
    }

    let axis = Axis::larger(offset.x.abs(), offset.y.abs());
    let i = axis.index();
    let reach = (fixed.half_size[i] + moving.half_size[i]) * (1. + SEPARATION_BIAS);
    moving.pos[i] = fixed.pos[i] + reach.copysign(offset[i]);

    // Far from the origin the bias can be smaller than the gap between two floats
    let away = offset[i] > 0.;
    for _ in 0..MAX_SEPARATION_STEPS {
        if !overlaps(&moving.rect(), &fixed.rect()) {
            break;
        }
        moving.pos[i] = next_float(moving.pos[i], away);
    }

    true
}

/// The closest representable float above (`up`) or below `x`
fn next_float(x: f32, up: bool) -> f32 {
    if !x.is_finite() {
        return x;
    }
    if x == 0. {
        let smallest = f32::from_bits(1);
        return if up { smallest } else { -smallest };
    }

    let bits = x.to_bits();
    if (x > 0.) == up {
        f32::from_bits(bits + 1)
    } else {
        f32::from_bits(bits - 1)
    }
}

/// Advance every body by one tick.
///
/// Non-static bodies move by their `frame_velocity` and are kept inside `rooms`, then every
/// overlapping pair is separated. Static bodies never move: when one is involved it is the fixed
/// side of the collision, and two static bodies are left alone.
pub fn physics_system(bodies: &mut [Body], rooms: &[Rect], random_context: &mut RandomContext) {
    for body in bodies.iter_mut().filter(|body| !body.is_static()) {
        body.pos += body.frame_velocity;
        force_entity_inside_rooms(body, rooms);
    }

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            match (a.is_static(), b.is_static()) {
                (true, true) => {}
                (true, false) => {
                    resolve_entity_collision(b, a, random_context);
                }
                _ => {
                    resolve_entity_collision(a, b, random_context);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BodyFlags;
    use approx::assert_relative_eq;

    fn room(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    fn is_inside(body: &Body, room: &Rect) -> bool {
        let rect = body.rect();
        room.contains_point(rect.bottom_left) && room.contains_point(rect.top_right)
    }

    #[test]
    pub fn test_body_already_inside_is_not_moved() {
        let rooms = [room(0., 0., 40., 40.), room(45., 45., 100., 100.)];
        let mut body = Body::new(Vec2::new(50., 50.), Vec2::new(5., 5.));

        assert!(!force_entity_inside_rooms(&mut body, &rooms));
        assert_eq!(body.pos, Vec2::new(50., 50.));
    }

    #[test]
    pub fn test_body_is_pushed_into_nearest_room() {
        let rooms = [room(0., 0., 40., 40.), room(100., 0., 200., 40.)];
        // Sticking out of the right wall of room 0
        let mut body = Body::new(Vec2::new(42., 20.), Vec2::new(5., 5.));

        assert!(force_entity_inside_rooms(&mut body, &rooms));
        assert!(is_inside(&body, &rooms[0]));
        assert_relative_eq!(body.pos.x, 20. + 15. * (1. - CONTAINMENT_BIAS));
        assert_relative_eq!(body.pos.y, 20.);

        // Second call is a no-op
        let before = body.pos;
        assert!(!force_entity_inside_rooms(&mut body, &rooms));
        assert_eq!(body.pos, before);
    }

    #[test]
    pub fn test_body_outside_on_both_axes_ends_up_inside() {
        let rooms = [room(0., 0., 40., 40.)];
        let mut body = Body::new(Vec2::new(50., 47.), Vec2::new(5., 5.));

        assert!(force_entity_inside_rooms(&mut body, &rooms));
        assert!(is_inside(&body, &rooms[0]));
        assert!(body.pos.x < 35. && body.pos.y < 35.);
    }

    #[test]
    pub fn test_rooms_too_small_for_body_are_ignored() {
        let rooms = [room(0., 0., 4., 4.)];
        let mut body = Body::new(Vec2::new(50., 50.), Vec2::new(5., 5.));
        assert!(!force_entity_inside_rooms(&mut body, &rooms));
        assert!(!force_entity_inside_rooms(&mut body, &[]));
        assert_eq!(body.pos, Vec2::new(50., 50.));
    }

    #[test]
    pub fn test_too_small_nearest_room_falls_back_to_farther_room() {
        // The closet is nearest but cannot hold the body
        let rooms = [room(55., 0., 59., 4.), room(0., 0., 40., 40.)];
        let mut body = Body::new(Vec2::new(52., 2.), Vec2::new(3., 3.));

        assert!(force_entity_inside_rooms(&mut body, &rooms));
        assert!(is_inside(&body, &rooms[1]));
        assert!(!is_inside(&body, &rooms[0]));
    }

    #[test]
    pub fn test_resolve_collision_along_x() {
        let mut random_context = RandomContext::new(0);
        let mut a = Body::new(Vec2::new(10., 10.), Vec2::new(2., 2.));
        let b = Body::new(Vec2::new(11., 10.), Vec2::new(2., 2.));

        assert!(resolve_entity_collision(&mut a, &b, &mut random_context));
        assert!((a.pos.x - b.pos.x).abs() >= 4.);
        assert!(a.pos.x < b.pos.x);
        assert_eq!(a.pos.y, 10.);
        assert!(!overlaps(&a.rect(), &b.rect()));
    }

    #[test]
    pub fn test_resolve_collision_along_y() {
        let mut random_context = RandomContext::new(0);
        let mut a = Body::new(Vec2::new(10.5, 13.), Vec2::new(1., 2.));
        let b = Body::new(Vec2::new(10., 10.), Vec2::new(3., 2.));

        assert!(resolve_entity_collision(&mut a, &b, &mut random_context));
        assert_relative_eq!(a.pos.y, 10. + 4. * (1. + SEPARATION_BIAS));
        assert_eq!(a.pos.x, 10.5);
        assert!(!overlaps(&a.rect(), &b.rect()));
    }

    #[test]
    pub fn test_resolve_collision_without_overlap_is_a_no_op() {
        let mut random_context = RandomContext::new(0);
        let mut a = Body::new(Vec2::new(10., 10.), Vec2::new(2., 2.));
        let b = Body::new(Vec2::new(14., 10.), Vec2::new(2., 2.));

        assert!(!resolve_entity_collision(&mut a, &b, &mut random_context));
        assert_eq!(a.pos, Vec2::new(10., 10.));
    }

    #[test]
    pub fn test_resolve_collision_at_identical_positions() {
        for seed in 0..16 {
            let mut random_context = RandomContext::new(seed);
            let mut a = Body::new(Vec2::new(3., 3.), Vec2::new(1., 1.));
            let b = a;

            assert!(resolve_entity_collision(&mut a, &b, &mut random_context));
            assert!(!overlaps(&a.rect(), &b.rect()));
            assert!(a.pos.x.is_finite() && a.pos.y.is_finite());
        }
    }

    #[test]
    pub fn test_resolve_collision_far_from_origin() {
        let mut random_context = RandomContext::new(0);
        let fixed = Body::new(Vec2::new(2048.42, 5.), Vec2::splat(0.464));
        let mut moving = Body::new(Vec2::new(2048.5592, 5.), Vec2::splat(0.464));

        assert!(resolve_entity_collision(&mut moving, &fixed, &mut random_context));
        assert!(!overlaps(&moving.rect(), &fixed.rect()));
        assert!(moving.pos.x > fixed.pos.x);

        for base in [4096.3, -9000.7, 33000.1, 70000.9] {
            let fixed = Body::new(Vec2::new(base, -base), Vec2::new(0.5, 0.7));
            let mut moving = Body::new(Vec2::new(base - 0.3, -base), Vec2::new(0.6, 0.5));
            assert!(resolve_entity_collision(&mut moving, &fixed, &mut random_context));
            assert!(!overlaps(&moving.rect(), &fixed.rect()), "still overlapping at {base}");
        }
    }

    #[test]
    pub fn test_next_float() {
        assert!(next_float(1., true) > 1.);
        assert!(next_float(1., false) < 1.);
        assert!(next_float(-1., true) > -1.);
        assert!(next_float(-1., false) < -1.);
        assert!(next_float(0., true) > 0.);
        assert!(next_float(0., false) < 0.);
        assert_eq!(next_float(2048., true), 2048. + 2048. * f32::EPSILON);
    }

    #[test]
    pub fn test_physics_system() {
        let rooms = [room(0., 0., 100., 100.)];
        let mut random_context = RandomContext::new(1);
        let wall = Body::new(Vec2::new(50., 50.), Vec2::new(5., 5.)).with_flags(BodyFlags::STATIC);
        let other_wall =
            Body::new(Vec2::new(52., 50.), Vec2::new(5., 5.)).with_flags(BodyFlags::STATIC);
        let mut walker =
            Body::new(Vec2::new(40., 50.), Vec2::new(1., 1.)).with_flags(BodyFlags::CHARACTER);
        walker.frame_velocity = Vec2::new(5., 0.);
        let mut runaway = Body::new(Vec2::new(90., 90.), Vec2::new(1., 1.));
        runaway.frame_velocity = Vec2::new(50., 0.);

        let mut bodies = [wall, other_wall, walker, runaway];
        physics_system(&mut bodies, &rooms, &mut random_context);

        // Statics never move, even though they overlap each other
        assert_eq!(bodies[0].pos, wall.pos);
        assert_eq!(bodies[1].pos, other_wall.pos);

        // The walker stepped into the wall and was pushed back out of it
        assert!(!overlaps(&bodies[2].rect(), &bodies[0].rect()));
        assert!(bodies[2].pos.x < 45.);

        // The runaway was kept inside the room
        assert!(is_inside(&bodies[3], &rooms[0]));
    }
}
