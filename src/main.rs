//! Tank Arena entry point
//!
//! Headless driver: runs one session in simulated time with a scripted pilot,
//! logs what happens, and prints the final snapshot as JSON.
//!
//! Usage: `tank-arena [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use tank_arena::Settings;
    use tank_arena::renderer::{Frame, Snapshot};
    use tank_arena::sim::{Command, Flow, GameClock, GameEvent, GameState};

    /// Cruising speed the pilot accelerates to
    const CRUISE_SPEED: f32 = 2.0;
    /// Frames between rotate commands
    const TURN_EVERY_FRAMES: u32 = 6;

    /// Scripted input: ease up to cruising speed, keep turning left, fire on
    /// a fixed cadence
    struct Pilot {
        fire_every: u32,
        frame: u32,
    }

    impl Pilot {
        fn new(fire_every: u32) -> Self {
            Self {
                fire_every: fire_every.max(1),
                frame: 0,
            }
        }

        fn commands(&mut self, state: &GameState, out: &mut Vec<Command>) {
            self.frame += 1;
            if state.tank.speed < CRUISE_SPEED {
                out.push(Command::Accelerate);
            }
            if self.frame % TURN_EVERY_FRAMES == 0 {
                out.push(Command::RotateLeft);
            }
            if self.frame % self.fire_every == 0 {
                out.push(Command::Fire);
            }
        }
    }

    fn wall_clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }

    fn log_event(event: GameEvent) {
        match event {
            GameEvent::Fired { slot, .. } => log::trace!("fired slot {slot}"),
            GameEvent::TargetHit { target, pos, .. } => {
                log::info!("Hit target {target} at ({:.0}, {:.0})", pos.x, pos.y)
            }
            GameEvent::WaveCleared { wave } => log::info!("Wave {wave} cleared"),
            GameEvent::GameOver { score } => log::info!("Game over - score {score}"),
            GameEvent::Restarted => log::info!("Restarted"),
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Tank Arena (headless) starting...");

        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load_or_default(Path::new(&path)),
            None => Settings::default(),
        };

        let seed = settings.seed.unwrap_or_else(wall_clock_seed);
        let mut state = GameState::new(seed);
        state.effects.reflect = settings.reflect;
        state.effects.shear = settings.shear;

        let mut clock = GameClock::new(settings.frame_hz, settings.max_substeps);
        let mut pilot = Pilot::new(settings.fire_every_frames);
        let mut commands = Vec::new();
        let dt = clock.frame_dt();
        let total_frames = settings.demo_frames();

        'frames: for _ in 0..total_frames {
            if !state.is_over() {
                pilot.commands(&state, &mut commands);
                for command in commands.drain(..) {
                    if state.apply(command) == Flow::Quit {
                        break 'frames;
                    }
                }
            }

            clock.advance(&mut state, dt);

            for event in state.drain_events() {
                log_event(event);
            }
        }

        let snapshot = Snapshot::capture(&state);
        let frame = Frame::build(&snapshot);
        log::info!(
            "Final frame: {} vertices, {} HUD lines, wave {} (seed {})",
            frame.vertex_count(),
            frame.hud.len(),
            snapshot.wave,
            snapshot.seed
        );

        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize snapshot: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; embedders drive the library directly
}
