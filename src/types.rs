use glam::Vec3;

use crate::math::AABB;

/// Box primitive of a scene
/// Plain-old-data so scene content can be written to and read from disk byte for byte
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxData {
    pub min: [f32; 3],
    pub is_moving: f32, // 1.0 if moving, 0.0 if static
    pub max: [f32; 3],
    pub _pad0: f32,
    pub color: [f32; 3],
    pub _pad1: f32,
    pub center0: [f32; 3], // Start position for moving boxes
    pub _pad2: f32,
    pub center1: [f32; 3], // End position for moving boxes
    pub _pad3: f32,
}

impl BoxData {
    pub const fn new(min: [f32; 3], max: [f32; 3], color: [f32; 3]) -> Self {
        let center = [
            (min[0] + max[0]) * 0.5,
            (min[1] + max[1]) * 0.5,
            (min[2] + max[2]) * 0.5,
        ];
        Self {
            min,
            is_moving: 0.0,
            max,
            _pad0: 0.0,
            color,
            _pad1: 0.0,
            center0: center,
            _pad2: 0.0,
            center1: center,
            _pad3: 0.0,
        }
    }

    /// Cube of edge `size` centred on `center`
    pub fn cube(center: Vec3, size: f32, color: [f32; 3]) -> Self {
        let half = Vec3::splat(size * 0.5);
        Self::new((center - half).to_array(), (center + half).to_array(), color)
    }

    /// Box travelling between two centres, bounded by the whole motion
    pub fn moving(size: Vec3, center0: Vec3, center1: Vec3, color: [f32; 3]) -> Self {
        let half_size = size * 0.5;
        let min = (center0 - half_size).min(center1 - half_size);
        let max = (center0 + half_size).max(center1 + half_size);

        Self {
            is_moving: 1.0,
            center0: center0.to_array(),
            center1: center1.to_array(),
            ..Self::new(min.to_array(), max.to_array(), color)
        }
    }

    pub fn bounds(&self) -> AABB {
        AABB {
            min: Vec3::from_array(self.min),
            max: Vec3::from_array(self.max),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size_is_stable() {
        assert_eq!(std::mem::size_of::<BoxData>(), 80);
    }

    #[test]
    fn test_cube_bounds() {
        let cube = BoxData::cube(Vec3::new(1.0, 2.0, 3.0), 2.0, [1.0, 0.0, 0.0]);
        assert_eq!(cube.bounds().min, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(cube.bounds().max, Vec3::new(2.0, 3.0, 4.0));
        assert!(!cube.is_moving());
    }

    #[test]
    fn test_moving_box_covers_motion() {
        let b = BoxData::moving(
            Vec3::splat(2.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            [0.0, 1.0, 0.0],
        );
        assert!(b.is_moving());
        assert_eq!(b.bounds().min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(b.bounds().max, Vec3::new(1.0, 11.0, 1.0));
        assert_eq!(b.center1, [0.0, 10.0, 0.0]);
    }
}
