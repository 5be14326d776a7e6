use life_engine::{Engine, RunState, SimulatorConfig};
use std::env;
use std::fs;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();

    // Optional path to a JSON config holding the grid size, speed, and
    // starting configuration; without one, a seeded random soup is played.
    let config = match env::args().nth(1) {
        Some(path) => {
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => panic!("Error reading config file {}: {}", path, e),
            };
            match SimulatorConfig::from_json(&contents) {
                Ok(config) => config,
                Err(e) => panic!("Error parsing config file: {}", e),
            }
        }
        None => SimulatorConfig {
            density: Some(0.3),
            seed: 42,
            ..SimulatorConfig::default()
        },
    };

    let grid = match config.build_grid() {
        Ok(grid) => grid,
        Err(e) => panic!("Error building the starting grid: {}", e),
    };

    let mut engine = Engine::from_grid(grid, None);
    engine.draw();
    engine.play(config.speed_ms);

    // The engine schedules, the host pumps; stopping happens automatically
    // once a generation leaves the grid unchanged
    while engine.run_state() == RunState::Running {
        if engine.tick().is_some() {
            engine.draw();
        }
        thread::sleep(Duration::from_millis(5));
    }

    println!("\nStabilized after {} generations", engine.generation());
}
