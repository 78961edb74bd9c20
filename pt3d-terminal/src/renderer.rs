/// Glyph rasterizer for terminal output
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use pt3d_core::Triangle;
use std::io::Write;

/// Glyph/color pair for each shade level: one black floor level, then four
/// dark-grey, four grey, and four white sub-levels over the block ramp.
pub const SHADE_TABLE: [(char, Color); 13] = [
    (' ', Color::Black),
    ('\u{2591}', Color::DarkGrey),
    ('\u{2592}', Color::DarkGrey),
    ('\u{2593}', Color::DarkGrey),
    ('\u{2588}', Color::DarkGrey),
    ('\u{2591}', Color::Grey),
    ('\u{2592}', Color::Grey),
    ('\u{2593}', Color::Grey),
    ('\u{2588}', Color::Grey),
    ('\u{2591}', Color::White),
    ('\u{2592}', Color::White),
    ('\u{2593}', Color::White),
    ('\u{2588}', Color::White),
];

/// Fills screen-space triangles into char/color buffers. Triangles are
/// painted in submission order; the pipeline's depth sort is the only
/// visibility ordering, there is no per-pixel depth test.
pub struct GlyphRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl GlyphRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Black; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Black;
        }
    }

    /// Fill one screen-space triangle with its shade level's glyph.
    pub fn fill_triangle(&mut self, triangle: &Triangle) {
        let index = (triangle.shade as usize).min(SHADE_TABLE.len() - 1);
        let (glyph, color) = SHADE_TABLE[index];

        let [v0, v1, v2] = triangle.vertices;

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                if let Some((w0, w1, w2)) =
                    barycentric((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        let idx = y as usize * self.width + x as usize;
                        self.char_buffer[idx] = glyph;
                        self.color_buffer[idx] = color;
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = Color::Reset;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx];
                if color != current {
                    writer.queue(SetForegroundColor(color))?;
                    current = color;
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Twice the signed area of the triangle a, b, c.
fn edge_function(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

/// Barycentric weights of a point: each sub-triangle's signed area over
/// the whole. Returns None for degenerate (zero-area) triangles, which
/// rasterize as no-ops. Dividing by the signed area keeps the weights
/// positive for interior points under either winding.
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let area = edge_function(v0, v1, v2);
    if area.abs() < 1e-6 {
        return None;
    }

    let w0 = edge_function(v1, v2, p) / area;
    let w1 = edge_function(v2, v0, p) / area;
    Some((w0, w1, 1.0 - w0 - w1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt3d_core::Vec4;

    fn shaded_triangle(shade: u8) -> Triangle {
        let mut tri = Triangle::new(
            Vec4::point(1.0, 1.0, 0.0),
            Vec4::point(8.0, 1.0, 0.0),
            Vec4::point(1.0, 8.0, 0.0),
        );
        tri.shade = shade;
        tri
    }

    #[test]
    fn test_fill_writes_shade_glyph() {
        let mut renderer = GlyphRenderer::new(10, 10);
        renderer.fill_triangle(&shaded_triangle(12));
        // The centroid cell is comfortably inside the triangle.
        let idx = 3 * 10 + 3;
        assert_eq!(renderer.char_buffer[idx], '\u{2588}');
        assert_eq!(renderer.color_buffer[idx], Color::White);
    }

    #[test]
    fn test_later_triangle_overdraws_earlier() {
        let mut renderer = GlyphRenderer::new(10, 10);
        renderer.fill_triangle(&shaded_triangle(12));
        renderer.fill_triangle(&shaded_triangle(1));
        let idx = 3 * 10 + 3;
        assert_eq!(renderer.char_buffer[idx], '\u{2591}');
        assert_eq!(renderer.color_buffer[idx], Color::DarkGrey);
    }

    #[test]
    fn test_degenerate_triangle_is_a_noop() {
        let mut renderer = GlyphRenderer::new(10, 10);
        let mut tri = shaded_triangle(5);
        tri.vertices[1] = tri.vertices[0];
        tri.vertices[2] = tri.vertices[0];
        renderer.fill_triangle(&tri);
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_fill_clamps_to_buffer_bounds() {
        let mut renderer = GlyphRenderer::new(10, 10);
        let mut tri = Triangle::new(
            Vec4::point(-5.0, -5.0, 0.0),
            Vec4::point(25.0, -5.0, 0.0),
            Vec4::point(-5.0, 25.0, 0.0),
        );
        tri.shade = 8;
        renderer.fill_triangle(&tri);
        assert_eq!(renderer.char_buffer[0], '\u{2588}');
    }

    #[test]
    fn test_barycentric_weights_at_vertices_and_center() {
        let (v0, v1, v2) = ((0.0, 0.0), (6.0, 0.0), (0.0, 6.0));
        let (w0, w1, w2) = barycentric(v0, v1, v2, v0).unwrap();
        assert!((w0 - 1.0).abs() < 1e-5 && w1.abs() < 1e-5 && w2.abs() < 1e-5);

        let (w0, w1, w2) = barycentric(v0, v1, v2, (2.0, 2.0)).unwrap();
        assert!((w0 + w1 + w2 - 1.0).abs() < 1e-5);
        assert!(w0 > 0.0 && w1 > 0.0 && w2 > 0.0);

        // Reversed winding still yields positive interior weights.
        let (w0, w1, w2) = barycentric(v2, v1, v0, (2.0, 2.0)).unwrap();
        assert!(w0 > 0.0 && w1 > 0.0 && w2 > 0.0);
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut renderer = GlyphRenderer::new(4, 4);
        renderer.fill_triangle(&Triangle::new(
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(4.0, 0.0, 0.0),
            Vec4::point(0.0, 4.0, 0.0),
        ));
        renderer.clear();
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
        assert!(renderer.color_buffer.iter().all(|&c| c == Color::Black));
    }
}
