//! Eight-direction resize transitions.
//!
//! Mirrors the teacher's `window_manager::resize_rect` direction match, generalized to
//! floating-point geometry and to clamp width/height against [`SizeConstraints`],
//! back-adjusting the origin on west/north edges so the opposite edge stays anchored
//! when clamping changes the delta (`spec.md` §4.3).

use window_store::{Rect, SizeConstraints};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One of the eight resize-handle directions.
pub enum ResizeDirection {
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Bottom edge.
    South,
    /// Top edge.
    North,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

impl ResizeDirection {
    /// Whether this direction's delta affects the west (x-origin) edge.
    const fn affects_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether this direction's delta affects the north (y-origin) edge.
    const fn affects_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// Whether this direction changes width at all.
    const fn affects_width(self) -> bool {
        !matches!(self, Self::North | Self::South)
    }

    /// Whether this direction changes height at all.
    const fn affects_height(self) -> bool {
        !matches!(self, Self::East | Self::West)
    }
}

/// Applies a resize delta for `direction` starting from `start`, clamping the result
/// to `constraints` and back-adjusting the origin for west/north edges so the
/// opposite (anchored) edge does not move when clamping changes the effective delta.
pub fn apply_resize_delta(
    start: Rect,
    direction: ResizeDirection,
    dx: f64,
    dy: f64,
    constraints: &SizeConstraints,
) -> Rect {
    let raw_w = if direction.affects_width() {
        if direction.affects_west() {
            start.w - dx
        } else {
            start.w + dx
        }
    } else {
        start.w
    };
    let raw_h = if direction.affects_height() {
        if direction.affects_north() {
            start.h - dy
        } else {
            start.h + dy
        }
    } else {
        start.h
    };

    let (w, h) = constraints.clamp(raw_w, raw_h);

    let x = if direction.affects_west() {
        // The east edge (start.x + start.w) must stay fixed: back-solve x from the
        // clamped width rather than trusting the raw delta.
        start.x + start.w - w
    } else {
        start.x
    };
    let y = if direction.affects_north() {
        start.y + start.h - h
    } else {
        start.y
    };

    Rect::new(x, y, w, h)
}
