use glam::Vec3;

/// Viewpoint of a test scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    /// Camera at `position` looking down -Z
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            yaw: std::f32::consts::PI,
            pitch: 0.0,
        }
    }

    /// Camera at `position` turned towards `target`
    /// Falls back to looking down -Z when both points coincide
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let dir = target - position;
        if dir.length_squared() < 1e-8 {
            return Self::at(position);
        }
        let dir = dir.normalize();

        Self {
            position,
            yaw: dir.x.atan2(dir.z),
            pitch: dir.y.clamp(-1.0, 1.0).asin(),
        }
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
