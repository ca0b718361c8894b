use raylib::prelude::Color;

use crate::constants::{REVEAL_BASE_DELAY_MS, REVEAL_STEP_DELAY_MS};

/// One renderable unit of the deck. Identity is its position in the deck;
/// the engine only ever looks at block delays and stat targets, never at
/// the text itself.
pub struct Slide {
    pub name: &'static str,
    pub layout: Layout,
    pub background: Background,
    pub ink: Color,
    pub muted: Color,
    pub accent: Color,
    pub panel: Color,
    pub blocks: &'static [Block],
}

pub enum Layout {
    Flow,
    Centered,
}

pub enum Background {
    Solid(Color),
    Vertical { top: Color, bottom: Color },
    /// Solid fill plus a decorative glyph scatter, deterministic per seed.
    Scatter { base: Color, glyph: &'static str, seed: u64 },
}

pub struct Block {
    pub delay_ms: u32,
    pub content: Content,
}

pub enum Content {
    Kicker(&'static str),
    Heading(&'static str),
    Subheading(&'static str),
    Lead(&'static str),
    Bullet(&'static str),
    Card {
        title: &'static str,
        subtitle: &'static str,
        detail: &'static str,
    },
    Stat {
        target: u32,
        suffix: &'static str,
        label: &'static str,
    },
    Timeline {
        when: &'static str,
        event: &'static str,
        detail: &'static str,
        highlight: bool,
    },
    Numbered {
        number: &'static str,
        title: &'static str,
        detail: &'static str,
    },
    Tags(&'static [&'static str]),
    Note(&'static str),
    Hint(&'static str),
}

impl Slide {
    pub fn reveal_offsets(&self) -> impl Iterator<Item = u32> + '_ {
        self.blocks.iter().map(|block| block.delay_ms)
    }

    pub fn stat_targets(&self) -> impl Iterator<Item = u32> + '_ {
        self.blocks.iter().filter_map(|block| match block.content {
            Content::Stat { target, .. } => Some(target),
            _ => None,
        })
    }
}

/// Delay of the `i`-th staged block of a slide.
pub const fn stagger(i: u32) -> u32 {
    REVEAL_BASE_DELAY_MS + i * REVEAL_STEP_DELAY_MS
}

pub mod palette {
    use raylib::prelude::Color;

    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const RED_100: Color = Color::new(254, 226, 226, 255);
    pub const RED_200: Color = Color::new(254, 202, 202, 255);
    pub const RED_500: Color = Color::new(239, 68, 68, 255);
    pub const RED_600: Color = Color::new(220, 38, 38, 255);
    pub const RED_800: Color = Color::new(153, 27, 27, 255);
    pub const ORANGE_50: Color = Color::new(255, 247, 237, 255);
    pub const GRAY_50: Color = Color::new(249, 250, 251, 255);
    pub const GRAY_100: Color = Color::new(243, 244, 246, 255);
    pub const GRAY_200: Color = Color::new(229, 231, 235, 255);
    pub const GRAY_400: Color = Color::new(156, 163, 175, 255);
    pub const GRAY_500: Color = Color::new(107, 114, 128, 255);
    pub const GRAY_800: Color = Color::new(31, 41, 55, 255);
    pub const GRAY_900: Color = Color::new(17, 24, 39, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_follows_base_plus_step() {
        assert_eq!(stagger(0), 200);
        assert_eq!(stagger(1), 350);
        assert_eq!(stagger(4), 800);
    }

    #[test]
    fn stat_targets_come_out_in_declaration_order() {
        static BLOCKS: [Block; 3] = [
            Block {
                delay_ms: 0,
                content: Content::Heading("h"),
            },
            Block {
                delay_ms: 100,
                content: Content::Stat {
                    target: 100,
                    suffix: "",
                    label: "a",
                },
            },
            Block {
                delay_ms: 200,
                content: Content::Stat {
                    target: 90,
                    suffix: "%",
                    label: "b",
                },
            },
        ];
        let slide = Slide {
            name: "test",
            layout: Layout::Flow,
            background: Background::Solid(palette::WHITE),
            ink: palette::GRAY_900,
            muted: palette::GRAY_500,
            accent: palette::RED_600,
            panel: palette::GRAY_100,
            blocks: &BLOCKS,
        };
        assert_eq!(slide.stat_targets().collect::<Vec<_>>(), vec![100, 90]);
        assert_eq!(
            slide.reveal_offsets().collect::<Vec<_>>(),
            vec![0, 100, 200]
        );
    }
}
