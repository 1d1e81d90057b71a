//! Historical trail: every visited cell up to the current step, older
//! entries more transparent

use super::PALETTE;
use crate::rasterizer::Color;
use crate::tour::{Coordinate, TourPath};

/// Marker opacity for step `k` while rendering frame `current`.
/// Divides by the current step index, so the first frames fade quickly.
pub fn trail_opacity(k: usize, current: usize) -> u8 {
    if current == 0 {
        255
    } else {
        (255.0 * k as f64 / current as f64).round().clamp(0.0, 255.0) as u8
    }
}

/// Line color for the segment that ends at `step`
pub fn segment_color(step: usize) -> Color {
    PALETTE[step % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailMarker {
    pub step: usize,
    pub cell: Coordinate,
    pub opacity: u8,
}

/// Connecting line from step `step - 1` to `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSegment {
    pub step: usize,
    pub from: Coordinate,
    pub to: Coordinate,
    pub color: Color,
}

/// Trail for one frame. `segments[k - 1]` ends at `markers[k]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    pub markers: Vec<TrailMarker>,
    pub segments: Vec<TrailSegment>,
}

/// Build the trail for frame `current` (clamped to the path length)
pub fn build_trail(path: &TourPath, current: usize) -> Trail {
    let steps = path.steps();
    if steps.is_empty() {
        return Trail::default();
    }
    let current = current.min(steps.len() - 1);

    let markers = steps[..=current]
        .iter()
        .enumerate()
        .map(|(k, &cell)| TrailMarker {
            step: k,
            cell,
            opacity: trail_opacity(k, current),
        })
        .collect();

    let segments = steps[..=current]
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let step = i + 1;
            TrailSegment {
                step,
                from: pair[0],
                to: pair[1],
                color: segment_color(step).alpha(trail_opacity(step, current)),
            }
        })
        .collect();

    Trail { markers, segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(i32, i32)]) -> TourPath {
        TourPath::new(cells.iter().map(|&(x, y)| Coordinate::new(x, y)).collect())
    }

    #[test]
    fn test_opacity_first_frame() {
        assert_eq!(trail_opacity(0, 0), 255);
    }

    #[test]
    fn test_opacity_interpolates() {
        for current in 1..20 {
            for k in 0..=current {
                let expected = (255.0 * k as f64 / current as f64).round() as u8;
                assert_eq!(trail_opacity(k, current), expected, "k={k} i={current}");
            }
            assert_eq!(trail_opacity(0, current), 0);
            assert_eq!(trail_opacity(current, current), 255);
        }
        assert_eq!(trail_opacity(1, 3), 85);
        assert_eq!(trail_opacity(1, 2), 128);
    }

    #[test]
    fn test_two_step_trail() {
        let p = path(&[(0, 0), (1, 1)]);

        let first = build_trail(&p, 0);
        assert_eq!(first.markers.len(), 1);
        assert_eq!(first.markers[0].opacity, 255);
        assert!(first.segments.is_empty());

        let second = build_trail(&p, 1);
        assert_eq!(second.markers.len(), 2);
        assert_eq!(second.segments.len(), 1);
        let seg = second.segments[0];
        assert_eq!((seg.from, seg.to), (Coordinate::new(0, 0), Coordinate::new(1, 1)));
        assert_eq!(seg.color, PALETTE[1].alpha(255));
    }

    #[test]
    fn test_segment_count_and_palette_cycle() {
        let cells: Vec<(i32, i32)> = (0..10).map(|i| (i % 5, i / 5)).collect();
        let p = path(&cells);
        let trail = build_trail(&p, 9);
        assert_eq!(trail.markers.len(), 10);
        assert_eq!(trail.segments.len(), 9);
        let last = trail.segments[8];
        assert_eq!(last.step, 9);
        assert_eq!(last.color, PALETTE[9 % 7].alpha(255));
        assert_eq!(trail.segments[2].color.a, trail_opacity(3, 9));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(build_trail(&TourPath::default(), 3), Trail::default());
    }
}
