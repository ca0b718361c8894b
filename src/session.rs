use log::debug;

use crate::constants::STAT_TWEEN_DURATION_MS;
use crate::deck::Slide;
use crate::input::Action;
use crate::navigation::Navigation;
use crate::reveal::Reveal;
use crate::tween::Tween;

/// Top-level presentation state: the navigation position plus everything
/// scoped to the currently mounted slide.
///
/// Slide-scoped state lives in [`Mount`], keyed by `(slide_index,
/// generation)`. Every actual index change replaces the mount wholesale,
/// which cancels all of its pending reveal offsets and tween timers in one
/// move; there is no path on which a disposed mount can still be advanced.
pub struct Session {
    deck: &'static [Slide],
    nav: Navigation,
    mount: Mount,
}

struct Mount {
    slide_index: usize,
    generation: u64,
    reveal: Reveal,
    tweens: Vec<Tween>,
}

impl Mount {
    fn new(deck: &[Slide], slide_index: usize, generation: u64) -> Self {
        let slide = &deck[slide_index];
        let tweens = slide
            .stat_targets()
            .map(|target| {
                let mut tween = Tween::new(target, STAT_TWEEN_DURATION_MS);
                tween.start();
                tween
            })
            .collect();
        Self {
            slide_index,
            generation,
            reveal: Reveal::new(slide.reveal_offsets()),
            tweens,
        }
    }
}

impl Session {
    pub fn new(deck: &'static [Slide]) -> Self {
        Self {
            deck,
            nav: Navigation::new(deck.len()),
            mount: Mount::new(deck, 0, 0),
        }
    }

    /// Applies a navigation action. Returns whether the slide changed; a
    /// boundary no-op leaves the current mount untouched.
    pub fn handle(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::Next => self.nav.next(),
            Action::Prev => self.nav.prev(),
            Action::JumpTo(index) => self.nav.jump_to(index as isize),
        };
        if changed {
            self.remount();
        }
        changed
    }

    /// Clamping jump, usable with arbitrary out-of-range requests.
    pub fn jump_to(&mut self, index: isize) -> bool {
        let changed = self.nav.jump_to(index);
        if changed {
            self.remount();
        }
        changed
    }

    fn remount(&mut self) {
        let generation = self.mount.generation + 1;
        self.mount = Mount::new(self.deck, self.nav.current(), generation);
        debug!(
            "slide change: index={} generation={}",
            self.mount.slide_index, generation
        );
    }

    /// Forwards frame time to the mounted slide. Nothing else in the
    /// session consumes time.
    pub fn update(&mut self, dt_ms: f32) {
        self.mount.reveal.update(dt_ms);
        for tween in &mut self.mount.tweens {
            tween.update(dt_ms);
        }
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    pub fn total(&self) -> usize {
        self.nav.total()
    }

    pub fn generation(&self) -> u64 {
        self.mount.generation
    }

    pub fn slide(&self) -> &'static Slide {
        &self.deck[self.nav.current()]
    }

    pub fn is_block_visible(&self, block: usize) -> bool {
        self.mount.reveal.is_visible(block)
    }

    pub fn stat_count(&self) -> usize {
        self.mount.tweens.len()
    }

    /// Displayed value of the slide's `stat`-th stat block (declaration
    /// order). Out-of-range reads as 0.
    pub fn stat_display(&self, stat: usize) -> u32 {
        self.mount.tweens.get(stat).map_or(0, Tween::displayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{palette, Background, Block, Content, Layout};

    static STAGED_BLOCKS: [Block; 3] = [
        Block {
            delay_ms: 0,
            content: Content::Heading("first"),
        },
        Block {
            delay_ms: 150,
            content: Content::Bullet("second"),
        },
        Block {
            delay_ms: 300,
            content: Content::Stat {
                target: 90,
                suffix: "%",
                label: "third",
            },
        },
    ];

    static PLAIN_BLOCKS: [Block; 1] = [Block {
        delay_ms: 0,
        content: Content::Heading("plain"),
    }];

    const fn test_slide(name: &'static str, blocks: &'static [Block]) -> Slide {
        Slide {
            name,
            layout: Layout::Flow,
            background: Background::Solid(palette::WHITE),
            ink: palette::GRAY_900,
            muted: palette::GRAY_500,
            accent: palette::RED_600,
            panel: palette::GRAY_100,
            blocks,
        }
    }

    static TEST_DECK: [Slide; 4] = [
        test_slide("a", &STAGED_BLOCKS),
        test_slide("b", &PLAIN_BLOCKS),
        test_slide("c", &PLAIN_BLOCKS),
        test_slide("d", &PLAIN_BLOCKS),
    ];

    #[test]
    fn starts_mounted_on_the_first_slide() {
        let session = Session::new(&TEST_DECK);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.generation(), 0);
        assert!(!session.is_block_visible(0));
    }

    #[test]
    fn reveal_schedule_runs_against_mount_time() {
        let mut session = Session::new(&TEST_DECK);
        session.update(150.0);
        assert!(session.is_block_visible(0));
        assert!(session.is_block_visible(1));
        assert!(!session.is_block_visible(2));
        session.update(150.0);
        assert!(session.is_block_visible(2));
    }

    #[test]
    fn navigating_away_and_back_resets_the_schedule() {
        let mut session = Session::new(&TEST_DECK);
        session.update(100.0);
        assert!(session.is_block_visible(0));

        session.handle(Action::Next);
        session.handle(Action::Prev);

        // Fresh mount: everything hidden again.
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_block_visible(0));

        // The schedule is measured from the new mount instant, so the
        // 150 ms block must not fire merely because 150 ms passed since
        // the original mount.
        session.update(60.0);
        assert!(session.is_block_visible(0));
        assert!(!session.is_block_visible(1));
    }

    #[test]
    fn generation_increases_once_per_slide_change() {
        let mut session = Session::new(&TEST_DECK);
        session.handle(Action::Next);
        assert_eq!(session.generation(), 1);
        session.handle(Action::JumpTo(3));
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn boundary_noop_keeps_the_mount() {
        let mut session = Session::new(&TEST_DECK);
        session.update(50.0);
        assert!(session.is_block_visible(0));

        assert!(!session.handle(Action::Prev));
        assert_eq!(session.generation(), 0);
        assert!(session.is_block_visible(0), "no remount on a no-op");
    }

    #[test]
    fn jump_from_marker_moves_directly() {
        let mut session = Session::new(&TEST_DECK);
        assert!(session.handle(Action::JumpTo(3)));
        assert_eq!(session.current_index(), 3);
        assert_eq!(session.generation(), 1, "one remount, not three");
    }

    #[test]
    fn jump_clamps_out_of_range_requests() {
        let mut session = Session::new(&TEST_DECK);
        assert!(session.jump_to(100));
        assert_eq!(session.current_index(), 3);
        assert!(session.jump_to(-5));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn stat_blocks_get_tweens_plain_slides_get_none() {
        let session = Session::new(&TEST_DECK);
        assert_eq!(session.stat_count(), 1);

        let mut session = Session::new(&TEST_DECK);
        session.handle(Action::Next);
        assert_eq!(session.stat_count(), 0);
        assert_eq!(session.stat_display(0), 0);
    }

    #[test]
    fn stat_counts_up_and_lands_on_target() {
        let mut session = Session::new(&TEST_DECK);
        assert_eq!(session.stat_display(0), 0);
        for _ in 0..80 {
            session.update(16.0);
        }
        assert_eq!(session.stat_display(0), 90);
    }

    #[test]
    fn remount_restarts_stats_from_zero() {
        let mut session = Session::new(&TEST_DECK);
        for _ in 0..80 {
            session.update(16.0);
        }
        assert_eq!(session.stat_display(0), 90);

        session.handle(Action::Next);
        session.handle(Action::Prev);
        assert_eq!(session.stat_display(0), 0);
    }
}
