use raylib::prelude::*;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::progress::Marker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    JumpTo(usize),
}

pub fn action_for_key(key: KeyboardKey) -> Option<Action> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(Action::Next),
        KeyboardKey::KEY_LEFT => Some(Action::Prev),
        _ => None,
    }
}

/// Resolves a click at `point` (design space). Specific controls win over
/// the generic advance; exactly one action results per click.
pub fn action_for_click(
    point: Vector2,
    markers: &[Marker],
    back_control: Option<Rectangle>,
) -> Action {
    for marker in markers {
        if marker.area.check_collision_point_rec(point) {
            return Action::JumpTo(marker.index);
        }
    }
    if let Some(area) = back_control {
        if area.check_collision_point_rec(point) {
            return Action::Prev;
        }
    }
    Action::Next
}

/// Maps a window-space mouse position onto the fixed design resolution.
/// The framebuffer is stretched over the whole window, so this is a plain
/// axis scale.
pub fn to_design_space(point: Vector2, screen_width: i32, screen_height: i32) -> Vector2 {
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width.max(1) as f32,
        point.y * RENDER_HEIGHT as f32 / screen_height.max(1) as f32,
    )
}

/// Polls the window for at most one navigation action this frame.
pub fn poll(
    rl: &RaylibHandle,
    markers: &[Marker],
    back_control: Option<Rectangle>,
) -> Option<Action> {
    for key in [
        KeyboardKey::KEY_RIGHT,
        KeyboardKey::KEY_SPACE,
        KeyboardKey::KEY_LEFT,
    ] {
        if rl.is_key_pressed(key) {
            return action_for_key(key);
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let point = to_design_space(
            rl.get_mouse_position(),
            rl.get_screen_width(),
            rl.get_screen_height(),
        );
        return Some(action_for_click(point, markers, back_control));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress;

    fn center(area: Rectangle) -> Vector2 {
        Vector2::new(area.x + area.width / 2.0, area.y + area.height / 2.0)
    }

    #[test]
    fn arrow_and_space_advance_left_goes_back() {
        assert_eq!(action_for_key(KeyboardKey::KEY_RIGHT), Some(Action::Next));
        assert_eq!(action_for_key(KeyboardKey::KEY_SPACE), Some(Action::Next));
        assert_eq!(action_for_key(KeyboardKey::KEY_LEFT), Some(Action::Prev));
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(action_for_key(KeyboardKey::KEY_A), None);
        assert_eq!(action_for_key(KeyboardKey::KEY_ENTER), None);
    }

    #[test]
    fn click_on_open_surface_advances() {
        let markers = progress::markers(0, 11);
        let point = Vector2::new(RENDER_WIDTH as f32 / 2.0, 200.0);
        assert_eq!(action_for_click(point, &markers, None), Action::Next);
    }

    #[test]
    fn click_on_marker_jumps_and_suppresses_advance() {
        let markers = progress::markers(0, 11);
        let point = center(markers[3].area);
        assert_eq!(
            action_for_click(point, &markers, None),
            Action::JumpTo(3)
        );
    }

    #[test]
    fn click_on_back_control_goes_back_not_forward() {
        let markers = progress::markers(2, 11);
        let back = Rectangle::new(32.0, 500.0, 72.0, 72.0);
        let point = center(back);
        assert_eq!(
            action_for_click(point, &markers, Some(back)),
            Action::Prev
        );
    }

    #[test]
    fn absent_back_control_leaves_its_area_as_surface() {
        let markers = progress::markers(0, 11);
        let point = Vector2::new(60.0, 530.0);
        assert_eq!(action_for_click(point, &markers, None), Action::Next);
    }

    #[test]
    fn marker_wins_over_back_control() {
        // A pathological overlap: the marker row is checked first, so the
        // marker action fires and nothing else does.
        let markers = progress::markers(0, 11);
        let overlapping_back = markers[5].area;
        let point = center(overlapping_back);
        assert_eq!(
            action_for_click(point, &markers, Some(overlapping_back)),
            Action::JumpTo(5)
        );
    }

    #[test]
    fn design_space_mapping_scales_with_window() {
        let point = to_design_space(Vector2::new(480.0, 270.0), 960, 540);
        assert_eq!(point.x, RENDER_WIDTH as f32 / 2.0);
        assert_eq!(point.y, RENDER_HEIGHT as f32 / 2.0);
    }

    #[test]
    fn design_space_mapping_survives_degenerate_window() {
        let point = to_design_space(Vector2::new(10.0, 10.0), 0, 0);
        assert!(point.x.is_finite());
        assert!(point.y.is_finite());
    }
}
