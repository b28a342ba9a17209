//! Render adapter
//!
//! Translates a simulation snapshot into an ordered sequence of draw
//! primitives for a 2D rasterizing surface. World-space commands are
//! positioned in world units under the frame's view transform; overlay
//! commands are in screen pixels. Nothing here mutates entities.

use glam::Vec2;

use crate::consts::*;
use crate::sim::camera::ViewTransform;
use crate::sim::state::{GameState, Player, ResourceKind};

/// RGBA, linear 0..1
pub type Color = [f32; 4];

/// Canvas clear color behind everything
pub const CLEAR_COLOR: Color = [0.067, 0.067, 0.067, 1.0];

const GRID_COLOR: Color = [0.133, 0.133, 0.133, 1.0];
const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
const GRAY: Color = [0.4, 0.4, 0.4, 1.0];
const BAR_BACKGROUND: Color = [0.2, 0.2, 0.2, 1.0];
const HEALTH_GOOD: Color = [0.267, 1.0, 0.267, 1.0];
const HEALTH_WARN: Color = [1.0, 1.0, 0.267, 1.0];
const HEALTH_LOW: Color = [1.0, 0.267, 0.267, 1.0];
const CURRENCY_COLOR: Color = [1.0, 1.0, 0.0, 1.0];
const HEALING_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
const CHEST_FILL: Color = [0.545, 0.271, 0.075, 1.0];
const CHEST_STROKE: Color = [0.396, 0.263, 0.129, 1.0];
const PROJECTILE_COLOR: Color = [1.0, 1.0, 0.0, 1.0];
const RANGE_RING: Color = [1.0, 1.0, 1.0, 0.3];

/// Body colors players are assigned from
pub const PLAYER_PALETTE: [Color; PLAYER_COLOR_COUNT] = [
    [1.0, 0.267, 0.267, 1.0],
    [0.267, 0.267, 1.0, 1.0],
    [0.267, 1.0, 0.267, 1.0],
    [1.0, 1.0, 0.267, 1.0],
    [1.0, 0.267, 1.0, 1.0],
    [0.267, 1.0, 1.0, 1.0],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single draw primitive; the consuming surface rasterizes these in order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Full-world line grid at a fixed spacing
    Grid {
        spacing: f32,
        line_width: f32,
        color: Color,
    },
    Rect {
        center: Vec2,
        size: Vec2,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Text {
        pos: Vec2,
        text: String,
        size_px: f32,
        color: Color,
        align: TextAlign,
    },
}

/// One rendered frame: the camera transform to apply to `world`, then the
/// untransformed screen-space `overlay`
#[derive(Debug, Clone)]
pub struct Frame {
    pub view: ViewTransform,
    pub world: Vec<DrawCmd>,
    pub overlay: Vec<DrawCmd>,
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let mut world = Vec::new();

    world.push(DrawCmd::Grid {
        spacing: 50.0,
        line_width: 1.0,
        color: GRID_COLOR,
    });

    // Human first so their outline reads on top of the grid but under the
    // later entity passes, matching the original draw order
    push_player(&mut world, state.human(), true);
    for player in state.players.iter().filter(|p| p.id != state.human_id) {
        push_player(&mut world, player, false);
    }

    for resource in state.resources.iter().filter(|r| !r.collected) {
        let fill = match resource.kind {
            ResourceKind::Currency => CURRENCY_COLOR,
            ResourceKind::Healing => HEALING_COLOR,
        };
        world.push(DrawCmd::Rect {
            center: resource.pos,
            size: Vec2::splat(20.0),
            fill,
            stroke: Some(Stroke {
                color: BLACK,
                width: 2.0,
            }),
        });
    }

    for chest in state.chests.iter().filter(|c| !c.opened) {
        world.push(DrawCmd::Rect {
            center: chest.pos,
            size: Vec2::splat(30.0),
            fill: CHEST_FILL,
            stroke: Some(Stroke {
                color: CHEST_STROKE,
                width: 2.0,
            }),
        });
    }

    for projectile in &state.projectiles {
        world.push(DrawCmd::Circle {
            center: projectile.pos,
            radius: PROJECTILE_RADIUS,
            fill: Some(PROJECTILE_COLOR),
            stroke: Some(Stroke {
                color: BLACK,
                width: 1.0,
            }),
        });
    }

    // Attack range indicator around the human player
    world.push(DrawCmd::Circle {
        center: state.human().pos,
        radius: ATTACK_RANGE,
        fill: None,
        stroke: Some(Stroke {
            color: RANGE_RING,
            width: 2.0,
        }),
    });

    let overlay = vec![DrawCmd::Text {
        pos: Vec2::new(10.0, 30.0),
        text: format!("Zoom: {:.1}x", state.camera.zoom),
        size_px: 16.0,
        color: WHITE,
        align: TextAlign::Left,
    }];

    Frame {
        view: state.camera.view(),
        world,
        overlay,
    }
}

fn push_player(out: &mut Vec<DrawCmd>, player: &Player, is_human: bool) {
    let palette_idx = player.color as usize % PLAYER_PALETTE.len();

    out.push(DrawCmd::Circle {
        center: player.pos,
        radius: PLAYER_RADIUS,
        fill: Some(PLAYER_PALETTE[palette_idx]),
        stroke: Some(Stroke {
            color: if is_human { WHITE } else { GRAY },
            width: 3.0,
        }),
    });

    // Health bar above the body
    let bar_size = Vec2::new(40.0, 6.0);
    let bar_center = Vec2::new(player.pos.x, player.pos.y - PLAYER_RADIUS - 15.0 + bar_size.y / 2.0);
    out.push(DrawCmd::Rect {
        center: bar_center,
        size: bar_size,
        fill: BAR_BACKGROUND,
        stroke: Some(Stroke {
            color: GRAY,
            width: 1.0,
        }),
    });
    let health_frac = player.health as f32 / player.max_health as f32;
    if health_frac > 0.0 {
        let fill_color = if health_frac > 0.6 {
            HEALTH_GOOD
        } else if health_frac > 0.3 {
            HEALTH_WARN
        } else {
            HEALTH_LOW
        };
        let fill_width = bar_size.x * health_frac;
        out.push(DrawCmd::Rect {
            // Fill anchors to the bar's left edge
            center: Vec2::new(
                bar_center.x - bar_size.x / 2.0 + fill_width / 2.0,
                bar_center.y,
            ),
            size: Vec2::new(fill_width, bar_size.y),
            fill: fill_color,
            stroke: None,
        });
    }

    out.push(DrawCmd::Text {
        pos: Vec2::new(player.pos.x, player.pos.y + PLAYER_RADIUS + 20.0),
        text: player.name.clone(),
        size_px: 12.0,
        color: WHITE,
        align: TextAlign::Center,
    });

    if player.is_dashing {
        out.push(DrawCmd::Circle {
            center: player.pos,
            radius: PLAYER_RADIUS + 5.0,
            fill: None,
            stroke: Some(Stroke {
                color: WHITE,
                width: 2.0,
            }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Chest, GameMode, Resource};

    fn sample_state() -> GameState {
        let mut state = GameState::new(GameMode::Skirmish, "Hero", 7);
        state.resources.push(Resource {
            pos: Vec2::new(100.0, 100.0),
            kind: ResourceKind::Currency,
            collected: false,
        });
        state.resources.push(Resource {
            pos: Vec2::new(200.0, 200.0),
            kind: ResourceKind::Healing,
            collected: true,
        });
        state.chests.push(Chest {
            pos: Vec2::new(300.0, 300.0),
            opened: true,
        });
        state
    }

    #[test]
    fn test_collected_pickups_are_not_drawn() {
        let frame = build_frame(&sample_state());
        let rects = frame
            .world
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { size, .. } if *size == Vec2::splat(20.0)))
            .count();
        // One uncollected resource; the opened chest is skipped entirely
        assert_eq!(rects, 1);
        let chests = frame
            .world
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Rect { size, .. } if *size == Vec2::splat(30.0)))
            .count();
        assert_eq!(chests, 0);
    }

    #[test]
    fn test_attack_range_ring_present() {
        let frame = build_frame(&sample_state());
        assert!(frame.world.iter().any(|cmd| matches!(
            cmd,
            DrawCmd::Circle { radius, fill: None, .. } if *radius == ATTACK_RANGE
        )));
    }

    #[test]
    fn test_overlay_reports_zoom() {
        let frame = build_frame(&sample_state());
        assert!(frame.overlay.iter().any(|cmd| matches!(
            cmd,
            DrawCmd::Text { text, .. } if text == "Zoom: 0.5x"
        )));
    }

    #[test]
    fn test_dash_ring_only_while_dashing() {
        let mut state = sample_state();
        let ring_count = |frame: &Frame| {
            frame
                .world
                .iter()
                .filter(|cmd| matches!(
                    cmd,
                    DrawCmd::Circle { radius, .. } if *radius == PLAYER_RADIUS + 5.0
                ))
                .count()
        };
        assert_eq!(ring_count(&build_frame(&state)), 0);
        state.human_mut().is_dashing = true;
        assert_eq!(ring_count(&build_frame(&state)), 1);
    }

    #[test]
    fn test_full_map_frame_uses_fit_transform() {
        let mut state = sample_state();
        state.camera.toggle_full_map();
        let frame = build_frame(&state);
        assert_eq!(frame.view.zoom, 0.5);
        assert_eq!(frame.view.offset, Vec2::ZERO);
    }
}
