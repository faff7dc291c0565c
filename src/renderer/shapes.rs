//! Shape generation for 2D primitives

use glam::Vec2;

use super::layout::{DrawCmd, Rect};
use super::vertex::Vertex;

/// Two triangles covering a rectangle
pub fn fill_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, rect.min, rect.max(), color);
    vertices
}

/// Outline centred on the rectangle's edges, `width` pixels thick
pub fn stroke_rect(rect: &Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let outer = rect.inflate(width / 2.0);
    let inner = rect.inflate(-width / 2.0);
    let (o0, o1) = (outer.min, outer.max());
    let (i0, i1) = (inner.min, inner.max());

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full outer width
    push_quad(&mut vertices, o0, Vec2::new(o1.x, i0.y), color);
    push_quad(&mut vertices, Vec2::new(o0.x, i1.y), o1, color);
    // Left and right fill between them
    push_quad(&mut vertices, Vec2::new(o0.x, i0.y), Vec2::new(i0.x, i1.y), color);
    push_quad(&mut vertices, Vec2::new(i1.x, i0.y), Vec2::new(o1.x, i1.y), color);
    vertices
}

/// Tessellate a whole draw list
pub fn tessellate(cmds: &[DrawCmd]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(cmds.len() * 24);
    for cmd in cmds {
        match cmd {
            DrawCmd::Fill { rect, color } => vertices.extend(fill_rect(rect, *color)),
            DrawCmd::Stroke { rect, width, color } => {
                vertices.extend(stroke_rect(rect, *width, *color))
            }
        }
    }
    vertices
}

fn push_quad(vertices: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    if max.x <= min.x || max.y <= min.y {
        return;
    }

    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));

    vertices.push(Vertex::new(min.x, max.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_corners() {
        let v = fill_rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[5].position, [40.0, 60.0]);
    }

    #[test]
    fn test_empty_rect_has_no_vertices() {
        assert!(fill_rect(&Rect::new(0.0, 0.0, 10.0, 0.0), [1.0; 4]).is_empty());
    }

    #[test]
    fn test_stroke_is_four_bars() {
        let v = stroke_rect(&Rect::new(0.0, 0.0, 100.0, 100.0), 8.0, [1.0; 4]);
        assert_eq!(v.len(), 24);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let min_x = xs.iter().cloned().fold(f32::MAX, f32::min);
        let max_x = xs.iter().cloned().fold(f32::MIN, f32::max);
        assert_eq!(min_x, -4.0);
        assert_eq!(max_x, 104.0);
    }

    #[test]
    fn test_tessellate_counts() {
        let cmds = [
            DrawCmd::Fill {
                rect: Rect::new(0.0, 0.0, 1.0, 1.0),
                color: [1.0; 4],
            },
            DrawCmd::Stroke {
                rect: Rect::new(0.0, 0.0, 50.0, 50.0),
                width: 2.0,
                color: [1.0; 4],
            },
        ];
        assert_eq!(tessellate(&cmds).len(), 30);
    }
}
