use std::collections::VecDeque;

use raster_paint::primitives::rectangle;
use raster_paint::{flood_fill, CanvasError, Color, PixelBuffer, Point, ShapeStyle};

#[test]
fn test_fill_blank_canvas() {
    let mut buffer = PixelBuffer::new(16, 9, Color::WHITE);
    assert!(flood_fill(&mut buffer, Point::new(3, 4), Color::GREEN).unwrap());
    assert!(buffer.pixels().iter().all(|&c| c == Color::GREEN));
}

#[test]
fn test_fill_with_same_color_is_noop() {
    let mut buffer = PixelBuffer::new(8, 8, Color::WHITE);
    buffer.set(1, 1, Color::BLACK).unwrap();
    let before = buffer.clone();

    assert!(!flood_fill(&mut buffer, Point::new(5, 5), Color::WHITE).unwrap());
    assert_eq!(buffer, before);
}

#[test]
fn test_fill_twice_changes_nothing_the_second_time() {
    let mut buffer = PixelBuffer::new(8, 8, Color::WHITE);
    buffer.set(4, 0, Color::BLACK).unwrap();

    assert!(flood_fill(&mut buffer, Point::new(0, 0), Color::RED).unwrap());
    let once = buffer.clone();
    assert!(!flood_fill(&mut buffer, Point::new(0, 0), Color::RED).unwrap());
    assert_eq!(buffer, once);
}

#[test]
fn test_fill_stays_inside_outline() {
    let mut buffer = PixelBuffer::new(20, 20, Color::WHITE);
    rectangle(&mut buffer, Point::new(5, 5), Point::new(15, 15), Color::BLACK, ShapeStyle::Outline, 1);

    flood_fill(&mut buffer, Point::new(10, 10), Color::RED).unwrap();

    for y in 0..20 {
        for x in 0..20 {
            let on_border = (5..15).contains(&x)
                && (5..15).contains(&y)
                && (x == 5 || x == 14 || y == 5 || y == 14);
            let inside = (6..14).contains(&x) && (6..14).contains(&y);
            let expected = if on_border {
                Color::BLACK
            } else if inside {
                Color::RED
            } else {
                Color::WHITE
            };
            assert_eq!(buffer.get(x, y).unwrap(), expected, "({}, {})", x, y);
        }
    }
}

#[test]
fn test_fill_does_not_leak_diagonally() {
    let mut buffer = PixelBuffer::new(5, 5, Color::BLACK);
    buffer.set(1, 1, Color::WHITE).unwrap();
    buffer.set(2, 2, Color::WHITE).unwrap();

    flood_fill(&mut buffer, Point::new(1, 1), Color::RED).unwrap();

    assert_eq!(buffer.get(1, 1).unwrap(), Color::RED);
    assert_eq!(buffer.get(2, 2).unwrap(), Color::WHITE);
}

#[test]
fn test_fill_seed_out_of_bounds() {
    let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
    assert_eq!(
        flood_fill(&mut buffer, Point::new(4, 0), Color::RED),
        Err(CanvasError::OutOfBounds { x: 4, y: 0, width: 4, height: 4 })
    );
}

#[test]
fn test_fill_large_canvas() {
    // A recursive fill would blow the stack here
    let mut buffer = PixelBuffer::new(1000, 1000, Color::WHITE);
    assert!(flood_fill(&mut buffer, Point::new(500, 500), Color::BLUE).unwrap());
    assert!(buffer.pixels().iter().all(|&c| c == Color::BLUE));
}

/// Reference 4-connected region computed independently with a queue.
fn expected_region(buffer: &PixelBuffer, seed: Point) -> Vec<bool> {
    let (width, height) = buffer.dimensions();
    let target = buffer.get(seed.x, seed.y).unwrap();
    let mut seen = vec![false; (width * height) as usize];
    let mut queue = VecDeque::from([seed]);
    while let Some(p) = queue.pop_front() {
        let Ok(color) = buffer.get(p.x, p.y) else { continue };
        let idx = (p.y as u32 * width + p.x as u32) as usize;
        if color != target || seen[idx] {
            continue;
        }
        seen[idx] = true;
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            queue.push_back(Point::new(p.x + dx, p.y + dy));
        }
    }
    seen
}

#[test]
fn test_fill_matches_connected_region_on_noise() {
    let (width, height) = (37, 23);
    let mut state: u32 = 0x2545_f491;
    let mut buffer = PixelBuffer::new(width, height, Color::WHITE);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state % 3 == 0 {
                buffer.set(x, y, Color::BLACK).unwrap();
            }
        }
    }

    for seed in [Point::new(0, 0), Point::new(18, 11), Point::new(36, 22)] {
        let mut filled = buffer.clone();
        let region = expected_region(&buffer, seed);
        flood_fill(&mut filled, seed, Color::RED).unwrap();

        for (i, (&before, &after)) in buffer.pixels().iter().zip(filled.pixels()).enumerate() {
            if region[i] {
                assert_eq!(after, Color::RED);
            } else {
                assert_eq!(after, before);
            }
        }
    }
}
