//! Input mapper: raw device events in, per-tick intents out
//!
//! The sole boundary for keyboard/pointer events. Held keys accumulate into
//! a movement vector; dash/attack/zoom/full-map are edge-triggered and
//! consumed exactly once per tick by `take_tick_input`.

use glam::Vec2;

/// Logical keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Space
    Dash,
    /// E - full-map toggle (Skirmish)
    FullMap,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized 8-directional movement intent from held keys
    pub movement: Vec2,
    /// Edge-triggered dash request
    pub dash: bool,
    /// Edge-triggered attack request (mouse click)
    pub attack: bool,
    /// Accumulated wheel steps since the last tick (already in zoom units)
    pub zoom_delta: f32,
    pub toggle_full_map: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
}

/// Live device state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    pointer: Vec2,
    dash_requested: bool,
    attack_requested: bool,
    zoom_delta: f32,
    full_map_requested: bool,
}

impl InputState {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Dash => self.dash_requested = true,
            Key::FullMap => self.full_map_requested = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.up = false,
            Key::Down => self.down = false,
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            // One-shots are cleared by take_tick_input, not key release
            Key::Dash | Key::FullMap => {}
        }
    }

    pub fn pointer_moved(&mut self, screen_pos: Vec2) {
        self.pointer = screen_pos;
    }

    pub fn clicked(&mut self) {
        self.attack_requested = true;
    }

    /// Wheel movement; positive scrolls in
    pub fn wheel(&mut self, steps: f32) {
        self.zoom_delta += steps * crate::consts::ZOOM_STEP;
    }

    /// Movement intent from the currently held keys (normalized)
    pub fn movement_intent(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }

    /// Produce this tick's input and clear the one-shot triggers
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            movement: self.movement_intent(),
            dash: self.dash_requested,
            attack: self.attack_requested,
            zoom_delta: self.zoom_delta,
            toggle_full_map: self.full_map_requested,
            pointer: self.pointer,
        };
        self.dash_requested = false;
        self.attack_requested = false;
        self.zoom_delta = 0.0;
        self.full_map_requested = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut input = InputState::default();
        input.key_down(Key::Up);
        input.key_down(Key::Right);
        let dir = input.movement_intent();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y < 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::default();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        assert_eq!(input.movement_intent(), Vec2::ZERO);
    }

    #[test]
    fn test_one_shots_cleared_after_take() {
        let mut input = InputState::default();
        input.key_down(Key::Dash);
        input.clicked();
        input.wheel(1.0);
        input.key_down(Key::FullMap);

        let tick = input.take_tick_input();
        assert!(tick.dash);
        assert!(tick.attack);
        assert!(tick.toggle_full_map);
        assert!((tick.zoom_delta - crate::consts::ZOOM_STEP).abs() < 1e-6);

        let tick = input.take_tick_input();
        assert!(!tick.dash);
        assert!(!tick.attack);
        assert!(!tick.toggle_full_map);
        assert_eq!(tick.zoom_delta, 0.0);
    }

    #[test]
    fn test_held_movement_survives_take() {
        let mut input = InputState::default();
        input.key_down(Key::Down);
        input.take_tick_input();
        let tick = input.take_tick_input();
        assert_eq!(tick.movement, Vec2::new(0.0, 1.0));
        input.key_up(Key::Down);
        assert_eq!(input.take_tick_input().movement, Vec2::ZERO);
    }

    #[test]
    fn test_wheel_accumulates_within_tick() {
        let mut input = InputState::default();
        input.wheel(1.0);
        input.wheel(-3.0);
        let tick = input.take_tick_input();
        assert!((tick.zoom_delta + 2.0 * crate::consts::ZOOM_STEP).abs() < 1e-6);
    }
}
