//! Coin Rush entry point
//!
//! Native builds run a headless session with the autopilot steering and log
//! the outcome. The browser build enters through `coin_rush::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use coin_rush::consts::MAX_FRAME_DT;
    use coin_rush::sim::GameEvent;
    use coin_rush::{Driver, HighScores, SimConfig};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional args: [seed] [config.json]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| coin_rush::driver::now_ms() as u64);

    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match SimConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut driver = match Driver::new(config, seed, HighScores::load()) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    driver.set_autopilot(true);

    // Simulated 60 Hz frames, no real-time waiting
    let frame_dt = (1.0f32 / 60.0).min(MAX_FRAME_DT);
    while driver.session().is_running() {
        for event in driver.advance(frame_dt) {
            match event {
                GameEvent::CoinCollected { tip, .. } => log::info!("+coin  {}", tip),
                GameEvent::ObstacleHit { label, .. } => log::info!("-hit   {}", label),
                GameEvent::SessionEnded { final_score } => log::info!("Game over: {}", final_score),
            }
        }
    }

    if let Some(summary) = driver.result() {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
