//! Painting resolved cells onto a fresh canvas

use crate::spatial::cell::{Cell, CellShape, Vertex};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Canvas color where no cell is drawn
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Paint `cells` in order onto a black canvas of `(width, height)`
///
/// Later cells overdraw earlier ones. Shapes extending past the canvas are clipped.
pub fn composite(
    dimensions: (u32, u32),
    cells: impl IntoIterator<Item = (Cell, Rgb<u8>)>,
) -> RgbImage {
    let (width, height) = dimensions;
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    for (cell, color) in cells {
        paint(&mut canvas, &cell.shape, color);
    }

    canvas
}

/// Fill a single shape onto `canvas`
pub fn paint(canvas: &mut RgbImage, shape: &CellShape, color: Rgb<u8>) {
    match shape {
        CellShape::Circle { center, radius } => {
            let radius = saturating_i32(*radius);
            draw_filled_ellipse_mut(canvas, pixel_point(*center), radius, radius, color);
        }
        CellShape::Square { origin, side } => {
            fill_rect(canvas, *origin, *side, *side, color);
        }
        CellShape::Rectangle {
            origin,
            width,
            height,
        } => {
            fill_rect(canvas, *origin, *width, *height, color);
        }
        CellShape::Triangle { vertices } => fill_polygon(canvas, vertices, color),
        CellShape::Polygon { vertices } => fill_polygon(canvas, vertices, color),
    }
}

fn fill_rect(canvas: &mut RgbImage, origin: [u32; 2], width: u32, height: u32, color: Rgb<u8>) {
    if width == 0 || height == 0 {
        return;
    }
    let (x, y) = pixel_point(origin);
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), color);
}

fn fill_polygon(canvas: &mut RgbImage, vertices: &[Vertex], color: Rgb<u8>) {
    let points = polygon_points(vertices);
    if points.len() >= 3 {
        draw_polygon_mut(canvas, &points, color);
    }
}

/// Round vertices to pixels, dropping repeats the polygon filler rejects
///
/// Consecutive duplicates collapse and a trailing copy of the first point is removed.
pub fn polygon_points(vertices: &[Vertex]) -> Vec<Point<i32>> {
    let mut points: Vec<Point<i32>> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let [x, y] = vertex.rounded();
        let point = Point::new(x, y);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

fn pixel_point(pixel: [u32; 2]) -> (i32, i32) {
    (saturating_i32(pixel[0]), saturating_i32(pixel[1]))
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
