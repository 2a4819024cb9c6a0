use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use noto_sans_mono_bitmap::{FontWeight, RasterHeight, get_raster, get_raster_width};
use petgraph::visit::EdgeRef;

use super::{DependencyGraph, Point};

/// Fixed canvas size, 3:2.
pub(crate) const CANVAS_WIDTH: u32 = 1200;
pub(crate) const CANVAS_HEIGHT: u32 = 800;

const MARGIN: f32 = 90.0;
const NODE_RADIUS: i32 = 26;
const ARROW_LENGTH: f32 = 12.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const NODE_FILL: Rgb<u8> = Rgb([173, 216, 230]);
const NODE_OUTLINE: Rgb<u8> = Rgb([70, 130, 180]);
const EDGE_COLOR: Rgb<u8> = Rgb([105, 105, 105]);
const TEXT_COLOR: Rgb<u8> = Rgb([20, 20, 20]);

const FONT_WEIGHT: FontWeight = FontWeight::Regular;
const FONT_HEIGHT: RasterHeight = RasterHeight::Size16;

/// Draws the graph onto a fixed-size canvas.
///
/// `positions` are unit-square coordinates indexed by node index, as
/// produced by [`layout`](super::layout). An empty graph yields a valid
/// blank canvas.
pub(crate) fn render(graph: &DependencyGraph, positions: &[Point]) -> RgbImage {
    let mut image = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    for edge in graph.inner().edge_references() {
        let from = to_canvas(positions[edge.source().index()]);
        let to = to_canvas(positions[edge.target().index()]);
        draw_arrow(&mut image, from, to);
    }

    for node in graph.inner().node_indices() {
        let (cx, cy) = to_canvas(positions[node.index()]);
        #[allow(clippy::cast_possible_truncation)]
        let center = (cx as i32, cy as i32);
        draw_filled_circle_mut(&mut image, center, NODE_RADIUS, NODE_FILL);
        draw_hollow_circle_mut(&mut image, center, NODE_RADIUS, NODE_OUTLINE);

        for (line_index, line) in graph.inner()[node].label.lines().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let top = if line_index == 0 {
                center.1 - 8
            } else {
                center.1 + NODE_RADIUS + 4 + (line_index as i32 - 1) * 18
            };
            draw_text_centered(&mut image, line, center.0, top);
        }
    }

    image
}

/// Encodes the canvas as PNG bytes.
pub(crate) fn encode_png(image: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Maps a unit-square position into the canvas, inset by the margin.
fn to_canvas(position: Point) -> (f32, f32) {
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
    (
        MARGIN + position.x * (width - 2.0 * MARGIN),
        MARGIN + position.y * (height - 2.0 * MARGIN),
    )
}

/// Draws a directed edge, clipped to the node circles, with a two-stroke
/// arrowhead at the target end. Degenerate edges (overlapping nodes,
/// self-loops) are skipped.
fn draw_arrow(image: &mut RgbImage, from: (f32, f32), to: (f32, f32)) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();
    #[allow(clippy::cast_precision_loss)]
    let radius = NODE_RADIUS as f32;
    if length <= 2.0 * radius {
        return;
    }

    let (ux, uy) = (dx / length, dy / length);
    let start = (from.0 + ux * radius, from.1 + uy * radius);
    let end = (to.0 - ux * radius, to.1 - uy * radius);
    draw_line_segment_mut(image, start, end, EDGE_COLOR);

    // Arrowhead: two strokes swept back from the tip.
    let angle = uy.atan2(ux);
    for offset in [2.6_f32, -2.6_f32] {
        let wing = (
            end.0 + ARROW_LENGTH * (angle + offset).cos(),
            end.1 + ARROW_LENGTH * (angle + offset).sin(),
        );
        draw_line_segment_mut(image, end, wing, EDGE_COLOR);
    }
}

/// Draws a line of text horizontally centered on `center_x`, using the
/// pre-rasterized monospace font. Characters outside the font's coverage
/// are skipped but still advance the cursor.
fn draw_text_centered(image: &mut RgbImage, text: &str, center_x: i32, top_y: i32) {
    let advance = get_raster_width(FONT_WEIGHT, FONT_HEIGHT);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let total_width = (text.chars().count() * advance) as i32;
    let mut x = center_x - total_width / 2;

    for character in text.chars() {
        if let Some(glyph) = get_raster(character, FONT_WEIGHT, FONT_HEIGHT) {
            for (row, pixels) in glyph.raster().iter().enumerate() {
                for (column, intensity) in pixels.iter().enumerate() {
                    if *intensity == 0 {
                        continue;
                    }
                    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                    let (px, py) = (x + column as i32, top_y + row as i32);
                    if px < 0 || py < 0 {
                        continue;
                    }
                    #[allow(clippy::cast_sign_loss)]
                    let (px, py) = (px as u32, py as u32);
                    if px >= CANVAS_WIDTH || py >= CANVAS_HEIGHT {
                        continue;
                    }
                    blend(image, px, py, *intensity);
                }
            }
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        {
            x += advance as i32;
        }
    }
}

/// Alpha-blends the text colour over the existing pixel.
fn blend(image: &mut RgbImage, x: u32, y: u32, intensity: u8) {
    let alpha = f32::from(intensity) / 255.0;
    let pixel = image.get_pixel_mut(x, y);
    for channel in 0..3 {
        let background = f32::from(pixel.0[channel]);
        let foreground = f32::from(TEXT_COLOR.0[channel]);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            pixel.0[channel] = (background + (foreground - background) * alpha).round() as u8;
        }
    }
}
