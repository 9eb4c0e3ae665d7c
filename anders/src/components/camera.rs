use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch is kept just short of straight up or down, where `front` and `up` would line up
pub const MAX_PITCH: f32 = 89.;

/// A first person camera steered by yaw and pitch, in degrees.
///
/// `front` is derived from `yaw` and `pitch` by [`Camera::update_front`] and always has unit
/// length. Feed it offsets from [`crate::contexts::MouseLook`] through [`Camera::turn`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec3,
    pub up: Vec3,
    pub front: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for Camera {
    /// At the origin, looking down -z with +y up
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            up: Vec3::Y,
            front: Vec3::NEG_Z,
            yaw: -90.,
            pitch: 0.,
        }
    }
}

impl Camera {
    /// A default camera placed at `pos`
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Rebuild `front` from `yaw` and `pitch`
    pub fn update_front(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
    }

    /// Add a look offset (x to yaw, y to pitch) and update `front`
    pub fn turn(&mut self, offset: Vec2) {
        self.yaw += offset.x;
        self.pitch = (self.pitch + offset.y).clamp(-MAX_PITCH, MAX_PITCH);
        self.update_front();
    }

    /// Unit vector pointing to the camera's right
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Move along `front` by `scale`. Negative values move backwards.
    pub fn move_front(&mut self, scale: f32) {
        self.pos += self.front * scale;
    }

    /// Move along [`Camera::right`] by `scale`. Negative values move left.
    pub fn move_right(&mut self, scale: f32) {
        self.pos += self.right() * scale;
    }

    /// `pos` moved one unit forwards, for callers that want to check the step before taking it
    pub fn front_of(&self, pos: Vec3) -> Vec3 {
        pos + self.front
    }

    pub fn back_of(&self, pos: Vec3) -> Vec3 {
        pos - self.front
    }

    pub fn right_of(&self, pos: Vec3) -> Vec3 {
        pos + self.right()
    }

    pub fn left_of(&self, pos: Vec3) -> Vec3 {
        pos - self.right()
    }

    /// Right handed view matrix
    pub fn look_at(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.pos + self.front, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_default_camera_front_matches_yaw() {
        let mut camera = Camera::default();
        let front = camera.front;
        camera.update_front();
        assert_relative_eq!(camera.front, front, epsilon = 1e-6);
        assert_relative_eq!(camera.right(), Vec3::X, epsilon = 1e-6);
    }

    #[test]
    pub fn test_turn() {
        let mut camera = Camera::default();
        camera.turn(Vec2::new(90., 0.));
        assert_relative_eq!(camera.front, Vec3::X, epsilon = 1e-6);
        assert_relative_eq!(camera.right(), Vec3::Z, epsilon = 1e-6);

        // Looking straight up is not allowed
        camera.turn(Vec2::new(0., 200.));
        assert_eq!(camera.pitch, MAX_PITCH);
        assert!(camera.front.y > 0.99);
        assert_relative_eq!(camera.front.length(), 1., epsilon = 1e-6);

        camera.turn(Vec2::new(0., -400.));
        assert_eq!(camera.pitch, -MAX_PITCH);
    }

    #[test]
    pub fn test_movement() {
        let mut camera = Camera::new(Vec3::new(1., 2., 3.));
        camera.move_front(2.);
        assert_relative_eq!(camera.pos, Vec3::new(1., 2., 1.), epsilon = 1e-6);
        camera.move_right(-1.);
        assert_relative_eq!(camera.pos, Vec3::new(0., 2., 1.), epsilon = 1e-6);

        let pos = camera.pos;
        assert_relative_eq!(camera.front_of(pos), Vec3::new(0., 2., 0.), epsilon = 1e-6);
        assert_relative_eq!(camera.back_of(pos), Vec3::new(0., 2., 2.), epsilon = 1e-6);
        assert_relative_eq!(camera.right_of(pos), Vec3::new(1., 2., 1.), epsilon = 1e-6);
        assert_relative_eq!(camera.left_of(pos), Vec3::new(-1., 2., 1.), epsilon = 1e-6);
        // The v-style helpers never move the camera itself
        assert_eq!(camera.pos, pos);
    }

    #[test]
    pub fn test_look_at() {
        let mut camera = Camera::new(Vec3::new(5., 1., -2.));
        camera.turn(Vec2::new(30., 10.));
        let view = camera.look_at();

        assert_relative_eq!(view.transform_point3(camera.pos), Vec3::ZERO, epsilon = 1e-5);
        assert_relative_eq!(
            view.transform_point3(camera.pos + camera.front),
            Vec3::NEG_Z,
            epsilon = 1e-5
        );
    }
}
