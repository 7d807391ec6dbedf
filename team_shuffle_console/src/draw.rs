use std::io;
use std::process::exit;

use rand::SeedableRng;
use rand::rngs::StdRng;
use team_shuffle::rules::Settings;
use team_shuffle::session::{Session, ShuffleError};
use team_shuffle::share::{self, ShareData};

use crate::share_link;
use crate::tui;


pub struct DrawConfig {
    pub players: Option<String>,
    pub link: Option<String>,
    pub teams: Option<usize>,
    pub capacity: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(config: DrawConfig) -> io::Result<()> {
    // Explicit arguments override whatever the link seeds.
    let base: ShareData = config.link.as_deref().map(share_link::decode).unwrap_or_default();
    let players = match config.players {
        Some(list) => list.split(',').map(|name| name.to_owned()).collect(),
        None => base.players,
    };
    let settings = Settings::clamped(
        config.teams.unwrap_or(base.settings.team_count()),
        config.capacity.unwrap_or(base.settings.capacity_per_team()),
    );
    let mut session = Session::with_seed(&players, settings);

    let result = match config.seed {
        Some(seed) => session.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => session.shuffle(&mut rand::rng()),
    };
    let assignment = match result {
        Ok(assignment) => assignment.clone(),
        Err(ShuffleError::NotEnoughPlayers) => {
            eprintln!("Need at least 2 players to draw teams.");
            exit(1);
        }
        Err(err) => {
            eprintln!("Cannot draw teams: {:?}", err);
            exit(1);
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&assignment).unwrap());
    } else {
        print!("{}", tui::render_assignment(&assignment));
        println!();
        println!("Share link: ?{}", share::encode(session.roster(), session.settings()));
    }
    Ok(())
}
