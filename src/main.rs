use std::env;
use std::fs;

use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pacfeat::{
    Direction, ExtendedExtractor, FeatureExtractor, GameSnapshot, GameStateView,
    IdentityExtractor, SimpleExtractor,
};

/// Maze used when no PACFEAT_LAYOUT file is given.
const DEFAULT_LAYOUT: &str = "%%%%%%%%%%\n\
                              %P...%...%\n\
                              %.%%.%.%.%\n\
                              %.%......%\n\
                              %.%.%%%%.%\n\
                              %....G..G%\n\
                              %%%%%%%%%%";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pacfeat=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

/// One-step actions whose destination is an in-bounds, non-wall cell.
fn legal_actions(state: &GameSnapshot) -> Vec<Direction> {
    let walls = state.walls();
    let pacman = state.pacman_position();
    Direction::ALL
        .into_iter()
        .filter(|direction| {
            let next = pacman.step(*direction);
            walls.in_bounds(next) && !walls.get(next)
        })
        .collect()
}

fn render(features: &pacfeat::FeatureVector) -> String {
    let mut entries: Vec<(String, f64)> = features
        .iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
        .iter()
        .map(|(name, value)| format!("{name}={value:.4}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let layout = match env::var("PACFEAT_LAYOUT") {
        Ok(path) => {
            tracing::info!(path = %path, "loading layout");
            fs::read_to_string(path)?
        }
        Err(_) => DEFAULT_LAYOUT.to_string(),
    };
    let snapshot = GameSnapshot::parse(&layout)?;
    tracing::info!(
        width = snapshot.walls().width(),
        height = snapshot.walls().height(),
        ghosts = snapshot.ghost_count(),
        "layout parsed"
    );

    let mut extractors: Vec<(&str, Box<dyn FeatureExtractor>)> = vec![
        ("identity", Box::new(IdentityExtractor)),
        ("simple", Box::new(SimpleExtractor)),
    ];
    if snapshot.ghost_count() >= 2 {
        extractors.push(("extended", Box::new(ExtendedExtractor)));
    } else {
        tracing::warn!("extended extractor needs two ghosts, skipping");
    }

    for action in legal_actions(&snapshot) {
        for (name, extractor) in &extractors {
            let features = extractor.get_features(&snapshot, action);
            tracing::info!(action = %action, extractor = name, features = %render(&features));
        }
    }

    Ok(())
}
