use particles_core::DEFAULT_COLOR_RGB;

// Point colors the host can cycle through. Color is a material property of
// the renderer; the engine never sees it.

pub const PALETTE: [[f32; 3]; 6] = [
    DEFAULT_COLOR_RGB,  // #ff0066 hot pink
    [0.0, 0.8, 1.0],    // cyan
    [1.0, 0.75, 0.2],   // amber
    [0.55, 0.35, 1.0],  // violet
    [0.3, 1.0, 0.55],   // mint
    [0.95, 0.95, 0.95], // white
];

pub const POINT_ALPHA: f32 = 0.8;

#[inline]
pub fn next_color_index(current: usize) -> usize {
    (current + 1) % PALETTE.len()
}

#[inline]
pub fn color_rgba(index: usize) -> [f32; 4] {
    let [r, g, b] = PALETTE[index % PALETTE.len()];
    [r, g, b, POINT_ALPHA]
}
