//! Per-tick window-to-scene transform.
//!
//! Rules are applied in a fixed order, each one seeing the position left by
//! the previous one:
//!
//! 1. base offset: `x = left + baseX`, `y = top + baseY`; the size is taken
//!    from the offset origin (`w = right - x`, `h = bottom - y`)
//! 2. offset modifiers (`offset*`, `offsetx*`, `offsety*`)
//! 3. snap modifiers (`snap`, `snapx`, `snapy`)
//! 4. loop modifiers (`loop`, `loopx`, `loopy`)
//!
//! Combined and single-axis variants are independent: both fire when both
//! are present.

use crate::models::{CanvasDimensions, Modifier, ModifierSet, OffsetSettings, Position, Size, WindowRect};

/// Target placement of a scene item. Only the position is written back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub size: Size,
}

pub fn compute_placement(
    rect: WindowRect,
    modifiers: &ModifierSet,
    offsets: &OffsetSettings,
    canvas: CanvasDimensions,
) -> Placement {
    let mut x = f64::from(rect.left) + f64::from(offsets.base_x);
    let mut y = f64::from(rect.top) + f64::from(offsets.base_y);
    let w = f64::from(rect.right) - x;
    let h = f64::from(rect.bottom) - y;

    let mod_x = f64::from(offsets.mod_x);
    let mod_y = f64::from(offsets.mod_y);

    if modifiers.has(Modifier::Offset) || modifiers.has(Modifier::OffsetPlus) {
        x += mod_x;
        y += mod_y;
    }
    if modifiers.has(Modifier::OffsetMinus) {
        x -= mod_x;
        y -= mod_y;
    }
    if modifiers.has(Modifier::OffsetX) || modifiers.has(Modifier::OffsetXPlus) {
        x += mod_x;
    }
    if modifiers.has(Modifier::OffsetXMinus) {
        x -= mod_x;
    }
    if modifiers.has(Modifier::OffsetY) || modifiers.has(Modifier::OffsetYPlus) {
        y += mod_y;
    }
    if modifiers.has(Modifier::OffsetYMinus) {
        y -= mod_y;
    }

    let canvas_w = f64::from(canvas.width);
    let canvas_h = f64::from(canvas.height);

    if modifiers.has(Modifier::Snap) {
        x = snap_axis(x, w, canvas_w);
        y = snap_axis(y, h, canvas_h);
    }
    if modifiers.has(Modifier::SnapX) {
        x = snap_axis(x, w, canvas_w);
    }
    if modifiers.has(Modifier::SnapY) {
        y = snap_axis(y, h, canvas_h);
    }

    if modifiers.has(Modifier::Loop) {
        x = loop_axis(x, w, canvas_w);
        y = loop_axis(y, h, canvas_h);
    }
    if modifiers.has(Modifier::LoopX) {
        x = loop_axis(x, w, canvas_w);
    }
    if modifiers.has(Modifier::LoopY) {
        y = loop_axis(y, h, canvas_h);
    }

    Placement {
        position: Position::new(x, y),
        size: Size { width: w, height: h },
    }
}

/// Keep `[pos, pos + len]` inside `[0, bound]`, preferring the leading edge.
pub fn snap_axis(pos: f64, len: f64, bound: f64) -> f64 {
    if pos < 0.0 {
        0.0
    } else if pos + len > bound {
        bound - len
    } else {
        pos
    }
}

/// Wrap to the opposite edge once the box's center leaves `[0, bound]`.
pub fn loop_axis(pos: f64, len: f64, bound: f64) -> f64 {
    let half = len / 2.0;
    if pos < -half {
        pos + bound
    } else if pos > bound - half {
        pos - bound
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: CanvasDimensions = CanvasDimensions { width: 1920, height: 1080 };

    fn offsets() -> OffsetSettings {
        OffsetSettings { base_x: 8, base_y: 50, mod_x: 1920, mod_y: 0 }
    }

    fn zero_offsets() -> OffsetSettings {
        OffsetSettings { base_x: 0, base_y: 0, mod_x: 0, mod_y: 0 }
    }

    fn mods(list: &[Modifier]) -> ModifierSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_base_offset_without_modifiers() {
        let rect = WindowRect::new(100, 200, 300, 600);
        let p = compute_placement(rect, &ModifierSet::new(), &offsets(), CANVAS);

        assert_eq!(p.position, Position::new(108.0, 250.0));
        assert_eq!(p.size, Size { width: 192.0, height: 350.0 });
    }

    #[test]
    fn test_offset_x_plus_moves_only_x() {
        let rect = WindowRect::new(100, 200, 300, 600);
        let p = compute_placement(rect, &mods(&[Modifier::OffsetXPlus]), &offsets(), CANVAS);

        assert_eq!(p.position, Position::new(2028.0, 250.0));
    }

    #[test]
    fn test_offset_minus_subtracts_both_axes() {
        let rect = WindowRect::new(100, 200, 300, 600);
        let settings = OffsetSettings { mod_y: 30, ..offsets() };
        let p = compute_placement(rect, &mods(&[Modifier::OffsetMinus]), &settings, CANVAS);

        assert_eq!(p.position, Position::new(108.0 - 1920.0, 220.0));
    }

    #[test]
    fn test_combined_and_axis_offsets_both_fire() {
        let rect = WindowRect::new(0, 0, 100, 100);
        let settings = OffsetSettings { base_x: 0, base_y: 0, mod_x: 10, mod_y: 5 };
        let p = compute_placement(
            rect,
            &mods(&[Modifier::Offset, Modifier::OffsetX, Modifier::OffsetYMinus]),
            &settings,
            CANVAS,
        );

        assert_eq!(p.position, Position::new(20.0, 0.0));
    }

    #[test]
    fn test_size_is_not_changed_by_modifiers() {
        let rect = WindowRect::new(100, 200, 300, 600);
        let p = compute_placement(rect, &mods(&[Modifier::Offset]), &offsets(), CANVAS);
        assert_eq!(p.size, Size { width: 192.0, height: 350.0 });
    }

    #[test]
    fn test_snapx_clamps_negative_x() {
        // x = -50, w = 200
        let rect = WindowRect::new(-50, 0, 150, 100);
        let p = compute_placement(rect, &mods(&[Modifier::SnapX]), &zero_offsets(), CANVAS);
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn test_snap_clamps_far_edges() {
        let rect = WindowRect::new(1800, 1000, 2000, 1200);
        let p = compute_placement(rect, &mods(&[Modifier::Snap]), &zero_offsets(), CANVAS);
        assert_eq!(p.position, Position::new(1720.0, 880.0));
    }

    #[test]
    fn test_snapy_leaves_x_alone() {
        let rect = WindowRect::new(-50, -20, 150, 80);
        let p = compute_placement(rect, &mods(&[Modifier::SnapY]), &zero_offsets(), CANVAS);
        assert_eq!(p.position, Position::new(-50.0, 0.0));
    }

    #[test]
    fn test_loopx_no_wrap_before_center_crosses() {
        let rect = WindowRect::new(-50, 0, 150, 100);
        let p = compute_placement(rect, &mods(&[Modifier::LoopX]), &zero_offsets(), CANVAS);
        assert_eq!(p.position.x, -50.0);
    }

    #[test]
    fn test_loopx_wraps_when_center_crosses_left_edge() {
        let rect = WindowRect::new(-150, 0, 50, 100);
        let p = compute_placement(rect, &mods(&[Modifier::LoopX]), &zero_offsets(), CANVAS);
        assert_eq!(p.position.x, 1770.0);
    }

    #[test]
    fn test_loop_wraps_right_and_bottom() {
        // w = h = 200, centers past the far edges
        let rect = WindowRect::new(1900, 1000, 2100, 1200);
        let p = compute_placement(rect, &mods(&[Modifier::Loop]), &zero_offsets(), CANVAS);
        assert_eq!(p.position, Position::new(-20.0, -80.0));
    }

    #[test]
    fn test_snap_runs_before_loop() {
        let rect = WindowRect::new(-150, 0, 50, 100);
        let p = compute_placement(
            rect,
            &mods(&[Modifier::SnapX, Modifier::LoopX]),
            &zero_offsets(),
            CANVAS,
        );
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn test_unknown_flags_are_inert() {
        let rect = WindowRect::new(100, 200, 300, 600);
        let mut set = ModifierSet::new();
        set.insert_flag("border");
        let p = compute_placement(rect, &set, &offsets(), CANVAS);
        assert_eq!(p.position, Position::new(108.0, 250.0));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let rect = WindowRect::new(-150, 1000, 50, 1200);
        let set = mods(&[Modifier::Offset, Modifier::Snap, Modifier::Loop]);
        let first = compute_placement(rect, &set, &offsets(), CANVAS);
        let second = compute_placement(rect, &set, &offsets(), CANVAS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_axis_helpers() {
        assert_eq!(snap_axis(10.0, 100.0, 1920.0), 10.0);
        assert_eq!(loop_axis(10.0, 100.0, 1920.0), 10.0);
        assert_eq!(loop_axis(1900.0, 100.0, 1920.0), -20.0);
    }
}
