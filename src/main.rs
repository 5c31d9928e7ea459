use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use macroquad::prelude::*;
use tracing::{error, info};

use lifelike::{Cadence, Error, Simulation, SimulationConfig, rendering, telemetry};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life-like Cellular Automaton".to_owned(),
        window_width: 900,
        window_height: 1000,
        window_resizable: true,
        ..Default::default()
    }
}

/// Optional JSON config path as the first argument; defaults otherwise
fn load_config() -> lifelike::Result<SimulationConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| Error::InvalidConfig(format!("cannot read {}: {}", path, e)))?;
            info!(%path, "loading config");
            SimulationConfig::from_json_str(&json)
        }
        None => Ok(SimulationConfig::default()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init_tracing();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "invalid configuration");
            return;
        }
    };

    let mut sim = match Simulation::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!(%e, "cannot build simulation");
            return;
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut reseed = |sim: &mut Simulation| {
        sim.seed(config.width, config.height, config.seed_density, &mut rng)
    };
    if let Err(e) = reseed(&mut sim) {
        error!(%e, "seeding failed");
        return;
    }

    let mut cadence = Cadence::from_millis(config.frame_interval_ms);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            sim.stop();
        }
        if sim.is_stopped() {
            break;
        }

        if is_key_pressed(KeyCode::Space) {
            cadence.toggle_paused();
        }
        if is_key_pressed(KeyCode::Up) {
            cadence.adjust_interval_ms(-10);
        }
        if is_key_pressed(KeyCode::Down) {
            cadence.adjust_interval_ms(10);
        }
        if is_key_pressed(KeyCode::R) {
            if let Err(e) = reseed(&mut sim) {
                error!(%e, "reseeding failed");
                break;
            }
        }

        if cadence.tick(get_frame_time()) {
            if let Err(e) = sim.step() {
                error!(%e, "step failed");
                break;
            }
        }

        clear_background(BLACK);
        if let Some(grid) = sim.grid() {
            rendering::draw_grid(grid, rendering::grid_area());
        }
        rendering::draw_stats_chart(sim.statistics(), rendering::chart_area());
        rendering::draw_status(&sim, &cadence);

        next_frame().await;
    }
}
