use crate::constants::TWEEN_TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenPhase {
    NotStarted,
    Running,
    Completed,
}

/// Counts a displayed integer up from 0 to `target` on a fixed 16 ms tick.
///
/// Every tick adds `target / (duration / tick)` to an accumulator and shows
/// its floor; the terminal tick pins the value to exactly `target` and stops
/// ticking. The phase machine guarantees the count-up runs at most once per
/// mount: `start` only arms a `NotStarted` tween, and the target is committed
/// at that point; later retarget attempts are dropped.
#[derive(Debug, Clone)]
pub struct Tween {
    target: u32,
    duration_ms: f32,
    increment: f32,
    accumulator: f32,
    carry_ms: f32,
    displayed: u32,
    phase: TweenPhase,
}

impl Tween {
    pub fn new(target: u32, duration_ms: f32) -> Self {
        Self {
            target,
            duration_ms,
            increment: 0.0,
            accumulator: 0.0,
            carry_ms: 0.0,
            displayed: 0,
            phase: TweenPhase::NotStarted,
        }
    }

    /// Arms the count-up. Calling it again (or after completion) is a no-op.
    pub fn start(&mut self) {
        if self.phase != TweenPhase::NotStarted {
            return;
        }
        let ticks = (self.duration_ms / TWEEN_TICK_MS).max(1.0);
        self.increment = self.target as f32 / ticks;
        self.phase = TweenPhase::Running;
    }

    /// Changes the target of a tween that has not been armed yet. Once
    /// `start` has run the committed target is kept and this does nothing.
    pub fn retarget(&mut self, target: u32) {
        if self.phase == TweenPhase::NotStarted {
            self.target = target;
        }
    }

    pub fn update(&mut self, dt_ms: f32) {
        if self.phase != TweenPhase::Running {
            return;
        }
        self.carry_ms += dt_ms.max(0.0);
        while self.carry_ms >= TWEEN_TICK_MS {
            self.carry_ms -= TWEEN_TICK_MS;
            self.accumulator += self.increment;
            if self.accumulator >= self.target as f32 {
                // Terminal tick: no overshoot, no undershoot, timer stops.
                self.displayed = self.target;
                self.carry_ms = 0.0;
                self.phase = TweenPhase::Completed;
                return;
            }
            self.displayed = self.accumulator as u32;
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }
}
