#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod draw;
mod share_link;
mod tui;
mod tui_main;

use std::io;

use clap::{Command, arg};

fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Team Shuffle")
        .version(clap::crate_version!())
        .about("Random team assignment console app")
        .subcommand_required(true)
        .subcommand(
            Command::new("tui")
                .about("Run an interactive session")
                .arg(arg!([share_link] "Share link (or bare query string) to seed the session")),
        )
        .subcommand(
            Command::new("draw")
                .about("Shuffle once and print the resulting teams")
                .arg(arg!([players] "Comma-separated player names"))
                .arg(
                    arg!(-l --link <link> "Share link to seed players and settings")
                        .required(false),
                )
                .arg(
                    arg!(-t --teams <n> "Number of teams")
                        .value_parser(clap::value_parser!(usize))
                        .required(false),
                )
                .arg(
                    arg!(-c --capacity <n> "Maximum players per team")
                        .value_parser(clap::value_parser!(usize))
                        .required(false),
                )
                .arg(
                    arg!(--seed <seed> "Fixed RNG seed for a reproducible draw")
                        .value_parser(clap::value_parser!(u64))
                        .required(false),
                )
                .arg(arg!(--json "Print the assignment as JSON")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tui", sub_matches)) => tui_main::run(tui_main::TuiConfig {
            share_link: sub_matches.get_one::<String>("share_link").cloned(),
        }),
        Some(("draw", sub_matches)) => draw::run(draw::DrawConfig {
            players: sub_matches.get_one::<String>("players").cloned(),
            link: sub_matches.get_one::<String>("link").cloned(),
            teams: sub_matches.get_one::<usize>("teams").copied(),
            capacity: sub_matches.get_one::<usize>("capacity").copied(),
            seed: sub_matches.get_one::<u64>("seed").copied(),
            json: sub_matches.get_flag("json"),
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
