//! Arena Brawl entry point
//!
//! Headless demo loop: connect the simulated server, run a few seconds of
//! scripted play at tick cadence, then print the HUD. A windowed host
//! would drive the same `tick`/`build_frame` pair from its frame callback.

use glam::Vec2;

use arena_brawl::consts::TICK_MS;
use arena_brawl::hud;
use arena_brawl::server::{GameServerClient, SimulatedServer};
use arena_brawl::sim::{GameMode, GamePhase, GameState, InputState, Key, tick};

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xA11CE);
    log::info!("Arena Brawl starting (headless demo), seed {seed}");

    let mut state = GameState::new(GameMode::Skirmish, "Pilot", seed);
    let mut server = SimulatedServer::new(500.0, seed);
    let mut input = InputState::default();

    // ~10 seconds of simulated play: wander east, dash once, fire at a
    // fixed point on the way
    for frame in 0..600u32 {
        if let Some(roster) = server.poll(state.clock_ms) {
            state.apply_roster(roster);
        }

        match frame {
            60 => input.key_down(Key::Right),
            120 => input.key_down(Key::Dash),
            240 => input.key_up(Key::Right),
            _ => {}
        }
        if frame > 60 && frame % 90 == 0 {
            input.pointer_moved(Vec2::new(600.0, 300.0));
            input.clicked();
        }

        let tick_input = input.take_tick_input();
        tick(&mut state, &tick_input, TICK_MS);

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let frame = arena_brawl::renderer::build_frame(&state);
    log::info!(
        "final frame: {} world commands, zoom {:.1}",
        frame.world.len(),
        frame.view.zoom
    );

    for line in hud::player_list_lines(&state) {
        println!("{line}");
    }
    println!("Health: {:.0}%", hud::health_bar_percent(&state));
}
