use image::{Rgb, Rgba};
use imageproc::drawing::{Canvas, draw_line_segment_mut};

/// Color of row `y` in a vertical gradient over `height` rows.
///
/// The ratio is `y / height`, so row 0 is exactly `start` while the last
/// row stops one step short of `end`.
pub fn gradient_color(start: Rgb<u8>, end: Rgb<u8>, y: u32, height: u32) -> Rgb<u8> {
    let ratio = y as f64 / height as f64;
    let mut out = [0u8; 3];
    for (c, channel) in out.iter_mut().enumerate() {
        let from = start[c] as f64;
        let to = end[c] as f64;
        *channel = (from + (to - from) * ratio).floor().clamp(0.0, 255.0) as u8;
    }
    Rgb(out)
}

/// Paint a top-to-bottom gradient across the whole canvas, one full-width line per row
pub fn fill_gradient<C>(canvas: &mut C, start: Rgb<u8>, end: Rgb<u8>)
where
    C: Canvas<Pixel = Rgba<u8>>,
{
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        let Rgb([r, g, b]) = gradient_color(start, end, y, height);
        draw_line_segment_mut(
            canvas,
            (0.0, y as f32),
            (width as f32, y as f32),
            Rgba([r, g, b, 255]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDERS;
    use image::RgbaImage;

    const ORANGE_START: Rgb<u8> = Rgb([255, 107, 53]);
    const ORANGE_END: Rgb<u8> = Rgb([255, 143, 107]);

    #[test]
    fn first_row_is_start_color() {
        assert_eq!(gradient_color(ORANGE_START, ORANGE_END, 0, 600), ORANGE_START);
    }

    #[test]
    fn last_row_stops_short_of_end() {
        // ratio 599/600: 107 + 36 * 0.998 = 142.94, 53 + 54 * 0.998 = 106.91
        assert_eq!(gradient_color(ORANGE_START, ORANGE_END, 599, 600), Rgb([255, 142, 106]));
    }

    #[test]
    fn midpoint_floors() {
        // ratio 0.5: 107 + 18 = 125, 53 + 27 = 80
        assert_eq!(gradient_color(ORANGE_START, ORANGE_END, 300, 600), Rgb([255, 125, 80]));
    }

    #[test]
    fn decreasing_channels_floor_downwards() {
        let c = gradient_color(Rgb([200, 0, 0]), Rgb([0, 0, 0]), 1, 3);
        // 200 - 66.67 = 133.33
        assert_eq!(c, Rgb([133, 0, 0]));
    }

    #[test]
    fn gradient_is_monotonic_for_every_placeholder() {
        for spec in &PLACEHOLDERS {
            let (start, end) = (spec.gradient_start, spec.gradient_end);
            let mut previous = gradient_color(start, end, 0, 600);
            for y in 1..600 {
                let current = gradient_color(start, end, y, 600);
                for c in 0..3 {
                    let prev_from_start = (previous[c] as i32 - start[c] as i32).abs();
                    let cur_from_start = (current[c] as i32 - start[c] as i32).abs();
                    let prev_from_end = (previous[c] as i32 - end[c] as i32).abs();
                    let cur_from_end = (current[c] as i32 - end[c] as i32).abs();
                    assert!(cur_from_start >= prev_from_start, "{} row {y}", spec.filename);
                    assert!(cur_from_end <= prev_from_end, "{} row {y}", spec.filename);
                }
                previous = current;
            }
        }
    }

    #[test]
    fn fill_covers_every_column() {
        let mut canvas = RgbaImage::new(50, 10);
        fill_gradient(&mut canvas, Rgb([0, 0, 0]), Rgb([100, 200, 250]));

        for y in 0..10 {
            let Rgb([r, g, b]) = gradient_color(Rgb([0, 0, 0]), Rgb([100, 200, 250]), y, 10);
            for x in 0..50 {
                assert_eq!(canvas.get_pixel(x, y).0, [r, g, b, 255], "({x}, {y})");
            }
        }
    }
}
