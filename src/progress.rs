use raylib::prelude::Rectangle;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};

pub const BAR_HEIGHT: i32 = 10;

const SLOT_WIDTH: f32 = 40.0;
const SLOT_HEIGHT: f32 = 28.0;
const ROW_BOTTOM_MARGIN: f32 = 64.0;

/// Continuous progress through the deck, in `(0, 1]`.
pub fn fraction(current: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (current + 1) as f32 / total as f32
}

/// One position dot. `area` is the clickable slot in design space; clicking
/// it jumps straight to `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub active: bool,
    pub area: Rectangle,
}

/// Derives the marker row for the current navigation state: one marker per
/// slide, centered near the bottom edge, the current one flagged active.
pub fn markers(current: usize, total: usize) -> Vec<Marker> {
    let row_width = SLOT_WIDTH * total as f32;
    let start_x = (RENDER_WIDTH as f32 - row_width) / 2.0;
    let y = RENDER_HEIGHT as f32 - ROW_BOTTOM_MARGIN - SLOT_HEIGHT;

    (0..total)
        .map(|index| Marker {
            index,
            active: index == current,
            area: Rectangle::new(start_x + index as f32 * SLOT_WIDTH, y, SLOT_WIDTH, SLOT_HEIGHT),
        })
        .collect()
}
