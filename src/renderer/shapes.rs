//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in field pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle (top-left anchored)
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (x, y, x + w, y + h);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a dashed vertical line from y=0 to `height`
///
/// Dashes are `dash` long with `gap` between them; the last dash is cut
/// at `height`.
pub fn dashed_vline(
    x: f32,
    height: f32,
    line_width: f32,
    dash: f32,
    gap: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if dash <= 0.0 || height <= 0.0 {
        return vertices;
    }

    let left = x - line_width / 2.0;
    let mut y = 0.0;
    while y < height {
        let len = dash.min(height - y);
        vertices.extend(rect(left, y, line_width, len, color));
        y += dash + gap.max(0.0);
    }

    vertices
}
