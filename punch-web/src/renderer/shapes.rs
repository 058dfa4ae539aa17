//! Shape primitives - triangle-list vertices for circles, rings and lines
//!
//! Positions are canvas pixels; the renderer maps them to clip space in
//! one pass so circles stay round on a non-square canvas.

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Point on a circle of `radius` around `center` at fraction `i / segments`
fn rim(center: (f32, f32), radius: f32, i: u32, segments: u32) -> [f32; 2] {
    let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
    [center.0 + radius * angle.cos(), center.1 + radius * angle.sin()]
}

/// Filled circle (triangle fan unrolled into a list)
pub fn create_circle_vertices(
    center: (f32, f32),
    radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        vertices.push(Vertex { position: [center.0, center.1], color });
        vertices.push(Vertex { position: rim(center, radius, i, segments), color });
        vertices.push(Vertex { position: rim(center, radius, i + 1, segments), color });
    }

    vertices
}

/// Circle outline of stroke `width`, centered on `radius`
pub fn create_ring_vertices(
    center: (f32, f32),
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner = (radius - width / 2.0).max(0.0);
    let outer = radius + width / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let a_in = rim(center, inner, i, segments);
        let a_out = rim(center, outer, i, segments);
        let b_in = rim(center, inner, i + 1, segments);
        let b_out = rim(center, outer, i + 1, segments);

        vertices.push(Vertex { position: a_in, color });
        vertices.push(Vertex { position: a_out, color });
        vertices.push(Vertex { position: b_out, color });

        vertices.push(Vertex { position: a_in, color });
        vertices.push(Vertex { position: b_out, color });
        vertices.push(Vertex { position: b_in, color });
    }

    vertices
}

/// Line segment of stroke `width` (rendered as a quad)
pub fn create_line_vertices(
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.001 {
        return vec![];
    }

    // Perpendicular offset, half the stroke each side
    let px = -dy / len * width / 2.0;
    let py = dx / len * width / 2.0;

    vec![
        Vertex { position: [from.0 - px, from.1 - py], color },
        Vertex { position: [from.0 + px, from.1 + py], color },
        Vertex { position: [to.0 + px, to.1 + py], color },

        Vertex { position: [from.0 - px, from.1 - py], color },
        Vertex { position: [to.0 + px, to.1 + py], color },
        Vertex { position: [to.0 - px, to.1 - py], color },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertices_on_radius() {
        let vertices = create_circle_vertices((10.0, 20.0), 5.0, WHITE, 12);
        assert_eq!(vertices.len(), 36);
        for tri in vertices.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 20.0]);
            let dx = tri[1].position[0] - 10.0;
            let dy = tri[1].position[1] - 20.0;
            assert!(((dx * dx + dy * dy).sqrt() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_line_quad_has_stroke_width() {
        let vertices = create_line_vertices((0.0, 0.0), (10.0, 0.0), 4.0, WHITE);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [0.0, -2.0]);
        assert_eq!(vertices[1].position, [0.0, 2.0]);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(create_line_vertices((3.0, 3.0), (3.0, 3.0), 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_ring_bounds() {
        let vertices = create_ring_vertices((0.0, 0.0), 10.0, 2.0, WHITE, 8);
        assert_eq!(vertices.len(), 48);
        for v in &vertices {
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!(r > 8.99 && r < 11.01);
        }
    }
}
