//! Disc fan and ring loop generation.

use super::types::{
    ring_radius, RadarVertex, CIRCLE_SEGMENTS, DISC_RADIUS, DISC_VERTEX_COUNT, RING_COUNT,
    RING_VERTEX_COUNT,
};

/// Immutable vertex and index buffers for the whole radar grid.
#[derive(Debug, Clone)]
pub struct StaticGeometry {
    pub disc: Vec<RadarVertex>,
    pub disc_indices: Vec<u16>,
    pub rings: Vec<RadarVertex>,
    pub ring_indices: Vec<u16>,
}

impl StaticGeometry {
    pub fn generate() -> Self {
        Self {
            disc: generate_disc_fan(),
            disc_indices: disc_fan_indices(),
            rings: generate_ring_loops(),
            ring_indices: ring_loop_indices(),
        }
    }
}

/// Point on a circle of `radius` in the XZ plane at `degrees`.
fn circle_point(degrees: usize, radius: f32) -> RadarVertex {
    let angle = (degrees as f32).to_radians();
    RadarVertex {
        position: [angle.cos() * radius, 0.0, angle.sin() * radius],
    }
}

/// Generate the disc as a triangle fan: the center followed by perimeter
/// samples 0..=360 so the last sample closes the loop.
pub fn generate_disc_fan() -> Vec<RadarVertex> {
    let mut vertices = Vec::with_capacity(DISC_VERTEX_COUNT);
    vertices.push(RadarVertex {
        position: [0.0, 0.0, 0.0],
    });
    vertices.extend((0..=CIRCLE_SEGMENTS).map(|i| circle_point(i, DISC_RADIUS)));
    vertices
}

/// Expand the fan into a triangle list `(center, i, i + 1)`.
pub fn disc_fan_indices() -> Vec<u16> {
    (1..=CIRCLE_SEGMENTS as u16)
        .flat_map(|i| [0, i, i + 1])
        .collect()
}

/// Generate the four ring loops, 360 samples each, ring after ring.
pub fn generate_ring_loops() -> Vec<RadarVertex> {
    let mut vertices = Vec::with_capacity(RING_VERTEX_COUNT);
    for ring in 0..RING_COUNT {
        let radius = ring_radius(ring);
        vertices.extend((0..CIRCLE_SEGMENTS).map(|i| circle_point(i, radius)));
    }
    vertices
}

/// Expand each loop into a line list, closing it back to its first sample.
pub fn ring_loop_indices() -> Vec<u16> {
    let n = CIRCLE_SEGMENTS as u16;
    (0..RING_COUNT as u16)
        .flat_map(|ring| {
            let base = ring * n;
            (0..n).flat_map(move |i| [base + i, base + (i + 1) % n])
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RING_SPACING;

    #[test]
    fn disc_fan_has_362_vertices() {
        assert_eq!(generate_disc_fan().len(), 362);
    }

    #[test]
    fn disc_fan_starts_at_center() {
        let disc = generate_disc_fan();
        assert_eq!(disc[0].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn disc_fan_closes_the_loop() {
        let disc = generate_disc_fan();
        let first = disc[1].position;
        let last = disc[DISC_VERTEX_COUNT - 1].position;
        for axis in 0..3 {
            assert!((first[axis] - last[axis]).abs() < 1e-5);
        }
    }

    #[test]
    fn disc_perimeter_lies_on_rim() {
        for v in &generate_disc_fan()[1..] {
            assert!((v.radius_xz() - DISC_RADIUS).abs() < 1e-5);
            assert_eq!(v.position[1], 0.0);
        }
    }

    #[test]
    fn disc_indices_form_360_triangles() {
        let indices = disc_fan_indices();
        assert_eq!(indices.len(), 360 * 3);
        assert_eq!(&indices[..3], &[0, 1, 2]);
        assert_eq!(&indices[indices.len() - 3..], &[0, 360, 361]);
        assert!(indices.iter().all(|&i| (i as usize) < DISC_VERTEX_COUNT));
    }

    #[test]
    fn ring_loops_have_fixed_size() {
        assert_eq!(generate_ring_loops().len(), RING_COUNT * CIRCLE_SEGMENTS);
    }

    #[test]
    fn every_ring_vertex_lies_at_its_radius() {
        let rings = generate_ring_loops();
        for ring in 0..RING_COUNT {
            let radius = RING_SPACING * (ring as f32 + 1.0);
            for i in 0..CIRCLE_SEGMENTS {
                let v = rings[ring * CIRCLE_SEGMENTS + i];
                assert!(
                    (v.radius_xz() - radius).abs() < 1e-5,
                    "ring {ring} vertex {i}: radius {}",
                    v.radius_xz()
                );
                assert_eq!(v.position[1], 0.0);
            }
        }
    }

    #[test]
    fn ring_indices_close_each_loop() {
        let indices = ring_loop_indices();
        assert_eq!(indices.len(), RING_VERTEX_COUNT * 2);
        // Last segment of ring 0 wraps 359 -> 0
        assert_eq!(&indices[718..720], &[359, 0]);
        // First segment of ring 1 starts at its own base
        assert_eq!(&indices[720..722], &[360, 361]);
        assert!(indices.iter().all(|&i| (i as usize) < RING_VERTEX_COUNT));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = StaticGeometry::generate();
        let b = StaticGeometry::generate();
        assert_eq!(a.disc, b.disc);
        assert_eq!(a.rings, b.rings);
    }
}
