use crate::scene::ClientScene;
use crate::types::BoxData;

/// Golden-ratio hue spread so neighbouring seeds get distinct colors
pub fn golden_hue(seed: u32) -> f32 {
    (seed as f32 * 0.618033988749895) % 1.0
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

pub fn ground(half_extent: f32) -> BoxData {
    BoxData::new(
        [-half_extent, -1.0, -half_extent],
        [half_extent, -0.99, half_extent],
        [0.3, 0.3, 0.3],
    )
}

/// Replace the scene content and flush it as one frame
pub fn present(scene: &mut ClientScene, boxes: Vec<BoxData>) {
    scene.replace_boxes(boxes);
    scene.flush();
}
