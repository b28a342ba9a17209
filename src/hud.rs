//! Textual HUD boundary
//!
//! Read-only projections of the match state for a UI layer: the player
//! list panel and the health-bar width. The simulation never calls back
//! into UI code.

use crate::sim::state::GameState;

/// Lines for the player-list panel: the human first with wallet and
/// inventory, then the rest of the roster, then the controls help
pub fn player_list_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec!["Players:".to_string()];

    let human = state.human();
    lines.push(format!("{} (you) - {} HP", human.name, human.health));
    lines.push(format!("Gold: {}", human.gold));
    if !human.inventory.is_empty() {
        let items: Vec<&str> = human.inventory.iter().map(|item| item.name()).collect();
        lines.push(format!("Inventory: {}", items.join(", ")));
    }

    for player in state.players.iter().filter(|p| p.id != state.human_id) {
        lines.push(format!("{} - {} HP", player.name, player.health));
    }

    lines.push("Controls:".to_string());
    lines.push("WASD - Move".to_string());
    lines.push("Space - Dash".to_string());
    lines.push("Mouse - Attack".to_string());
    lines
}

/// Health-bar fill width for the UI layer, 0..100
pub fn health_bar_percent(state: &GameState) -> f32 {
    let human = state.human();
    human.health as f32 / human.max_health as f32 * 100.0
}
