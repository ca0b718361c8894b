use std::ffi::CString;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::deck::{palette, Background, Content, Layout, Slide};
use crate::progress::{self, Marker, BAR_HEIGHT};
use crate::session::Session;

const MARGIN_X: i32 = 160;
const TOP_MARGIN: i32 = 120;
const CONTENT_WIDTH: i32 = RENDER_WIDTH - 2 * MARGIN_X;
const SCATTER_GLYPHS: usize = 20;

/// Clickable area of the "go back" control, in design space.
pub fn back_control_area() -> Rectangle {
    Rectangle::new(32.0, RENDER_HEIGHT as f32 / 2.0 - 36.0, 72.0, 72.0)
}

pub fn draw_slide<D: RaylibDraw>(d: &mut D, session: &Session) {
    let slide = session.slide();
    draw_background(d, slide);

    let heights: Vec<i32> = slide
        .blocks
        .iter()
        .map(|block| block_height(&block.content))
        .collect();
    let mut y = match slide.layout {
        Layout::Flow => TOP_MARGIN,
        Layout::Centered => (RENDER_HEIGHT - heights.iter().sum::<i32>()) / 2,
    };
    let centered = matches!(slide.layout, Layout::Centered);

    // Layout is computed for every block so positions stay put while the
    // reveal schedule runs; hidden blocks just are not painted yet.
    let mut stat_ordinal = 0;
    for (index, block) in slide.blocks.iter().enumerate() {
        let stat_value = match block.content {
            Content::Stat { .. } => {
                let value = session.stat_display(stat_ordinal);
                stat_ordinal += 1;
                value
            }
            _ => 0,
        };
        if session.is_block_visible(index) {
            draw_block(d, slide, &block.content, y, centered, stat_value);
        }
        y += heights[index];
    }
}

fn draw_background<D: RaylibDraw>(d: &mut D, slide: &Slide) {
    match slide.background {
        Background::Solid(color) => d.clear_background(color),
        Background::Vertical { top, bottom } => {
            d.clear_background(top);
            d.draw_rectangle_gradient_v(0, 0, RENDER_WIDTH, RENDER_HEIGHT, top, bottom);
        }
        Background::Scatter { base, glyph, seed } => {
            d.clear_background(base);
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..SCATTER_GLYPHS {
                let x = rng.random_range(0..RENDER_WIDTH);
                let y = rng.random_range(0..RENDER_HEIGHT);
                let size = rng.random_range(40..96);
                d.draw_text(glyph, x, y, size, slide.ink.fade(0.06));
            }
        }
    }
}

fn block_height(content: &Content) -> i32 {
    match content {
        Content::Kicker(_) => 48,
        Content::Heading(_) => 110,
        Content::Subheading(_) => 70,
        Content::Lead(_) => 64,
        Content::Bullet(_) => 56,
        Content::Card { .. } => 108,
        Content::Stat { .. } => 120,
        Content::Timeline { .. } => 100,
        Content::Numbered { .. } => 96,
        Content::Tags(_) => 72,
        Content::Note(_) => 56,
        Content::Hint(_) => 48,
    }
}

/// Measures string width in pixels for the default font — the free-function
/// form of raylib's `MeasureText`, which the layout helpers call without a
/// `RaylibHandle` in scope.
fn measure_text(text: &str, font_size: i32) -> i32 {
    let c_text = CString::new(text).unwrap();
    unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) }
}

fn text_x(text: &str, size: i32, centered: bool) -> i32 {
    if centered {
        (RENDER_WIDTH - measure_text(text, size)) / 2
    } else {
        MARGIN_X
    }
}

fn draw_block<D: RaylibDraw>(
    d: &mut D,
    slide: &Slide,
    content: &Content,
    y: i32,
    centered: bool,
    stat_value: u32,
) {
    match *content {
        Content::Kicker(text) => {
            d.draw_text(text, text_x(text, 28, centered), y, 28, slide.accent);
        }
        Content::Heading(text) => {
            d.draw_text(text, text_x(text, 80, centered), y, 80, slide.ink);
        }
        Content::Subheading(text) => {
            d.draw_text(text, text_x(text, 48, centered), y, 48, slide.muted);
        }
        Content::Lead(text) => {
            d.draw_text(text, text_x(text, 36, centered), y, 36, slide.muted);
        }
        Content::Bullet(text) => {
            d.draw_circle(MARGIN_X + 8, y + 20, 7.0, slide.accent);
            d.draw_text(text, MARGIN_X + 36, y + 6, 30, slide.ink);
        }
        Content::Card {
            title,
            subtitle,
            detail,
        } => {
            let panel = Rectangle::new(
                MARGIN_X as f32,
                y as f32 + 6.0,
                CONTENT_WIDTH as f32,
                96.0,
            );
            d.draw_rectangle_rounded(panel, 0.25, 8, slide.panel);
            d.draw_text(title, MARGIN_X + 28, y + 18, 34, slide.ink);
            if !subtitle.is_empty() {
                d.draw_text(subtitle, MARGIN_X + 28, y + 56, 22, slide.accent);
            }
            if !detail.is_empty() {
                let detail_y = if subtitle.is_empty() { y + 58 } else { y + 80 };
                d.draw_text(detail, MARGIN_X + 28, detail_y, 22, slide.muted);
            }
        }
        Content::Stat {
            suffix, label, ..
        } => {
            let number = format!("{stat_value}{suffix}");
            d.draw_text(&number, MARGIN_X, y + 8, 72, slide.accent);
            let label_x = MARGIN_X + measure_text(&number, 72) + 28;
            d.draw_text(label, label_x, y + 40, 28, slide.muted);
        }
        Content::Timeline {
            when,
            event,
            detail,
            highlight,
        } => {
            let dot = if highlight { slide.accent } else { slide.muted };
            d.draw_circle(MARGIN_X + 10, y + 34, 8.0, dot);
            if highlight {
                d.draw_circle_lines(MARGIN_X + 10, y + 34, 14.0, slide.accent);
            }
            d.draw_text(when, MARGIN_X + 44, y, 22, slide.muted);
            d.draw_text(event, MARGIN_X + 44, y + 26, 32, slide.ink);
            d.draw_text(detail, MARGIN_X + 44, y + 64, 24, slide.muted);
        }
        Content::Numbered {
            number,
            title,
            detail,
        } => {
            d.draw_text(number, MARGIN_X, y + 8, 56, slide.accent);
            d.draw_text(title, MARGIN_X + 120, y + 8, 34, slide.ink);
            d.draw_text(detail, MARGIN_X + 120, y + 50, 26, slide.muted);
        }
        Content::Tags(tags) => {
            let mut cursor = MARGIN_X;
            for tag in tags {
                let width = measure_text(tag, 26) + 44;
                let pill = Rectangle::new(cursor as f32, y as f32 + 8.0, width as f32, 48.0);
                d.draw_rectangle_rounded(pill, 0.6, 8, slide.panel);
                d.draw_text(tag, cursor + 22, y + 20, 26, slide.ink);
                cursor += width + 16;
            }
        }
        Content::Note(text) => {
            d.draw_text(text, text_x(text, 26, centered), y + 8, 26, slide.muted);
        }
        Content::Hint(text) => {
            d.draw_text(text, text_x(text, 24, centered), y + 8, 24, slide.muted);
        }
    }
}

pub fn draw_chrome<D: RaylibDraw>(d: &mut D, session: &Session, markers: &[Marker]) {
    let slide = session.slide();

    for marker in markers {
        let cx = marker.area.x + marker.area.width / 2.0;
        let cy = marker.area.y + marker.area.height / 2.0;
        if marker.active {
            let pill = Rectangle::new(cx - 16.0, cy - 6.0, 32.0, 12.0);
            d.draw_rectangle_rounded(pill, 1.0, 8, slide.accent);
        } else {
            d.draw_circle_v(Vector2::new(cx, cy), 6.0, slide.muted.fade(0.6));
        }
    }

    if session.current_index() > 0 {
        let area = back_control_area();
        let center = Vector2::new(area.x + area.width / 2.0, area.y + area.height / 2.0);
        d.draw_circle_v(center, area.width / 2.0, slide.ink.fade(0.12));
        d.draw_text("<", center.x as i32 - 8, center.y as i32 - 18, 36, slide.ink);
    }

    let counter = format!("{} / {}", session.current_index() + 1, session.total());
    let counter_x = RENDER_WIDTH - 48 - measure_text(&counter, 26);
    d.draw_text(&counter, counter_x, RENDER_HEIGHT - 56, 26, slide.muted);

    let filled = (progress::fraction(session.current_index(), session.total())
        * RENDER_WIDTH as f32) as i32;
    d.draw_rectangle(
        0,
        RENDER_HEIGHT - BAR_HEIGHT,
        RENDER_WIDTH,
        BAR_HEIGHT,
        palette::GRAY_200,
    );
    d.draw_rectangle_gradient_h(
        0,
        RENDER_HEIGHT - BAR_HEIGHT,
        filled,
        BAR_HEIGHT,
        palette::RED_600,
        palette::RED_500,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides;

    #[test]
    fn every_slide_fits_above_the_chrome() {
        let chrome_top = RENDER_HEIGHT - 64 - 28;
        for slide in slides::deck() {
            let content: i32 = slide
                .blocks
                .iter()
                .map(|block| block_height(&block.content))
                .sum();
            let top = match slide.layout {
                Layout::Flow => TOP_MARGIN,
                Layout::Centered => (RENDER_HEIGHT - content) / 2,
            };
            assert!(
                top + content <= chrome_top,
                "slide {} overflows into the chrome",
                slide.name
            );
        }
    }

    #[test]
    fn back_control_keeps_clear_of_the_marker_row() {
        let back = back_control_area();
        for marker in progress::markers(0, slides::deck().len()) {
            assert!(!marker.area.check_collision_recs(&back));
        }
    }
}
