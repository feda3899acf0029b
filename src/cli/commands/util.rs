//! Shared utilities for CLI commands.

use std::path::{Path, PathBuf};
use std::process;

use chess4f::board::Board;
use chess4f::game::{GameController, GameEnding};
use chess4f::placement::{read_placement_file, BoardLog};
use chess4f::searcher::SearchConfig;
use structopt::StructOpt;

/// Search knobs shared by every command that runs the engine.
#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(long = "min-depth", default_value = "3")]
    pub min_depth: u8,
    #[structopt(long = "max-depth", default_value = "7")]
    pub max_depth: u8,
    #[structopt(long, default_value = "2")]
    pub seed: u64,
}

impl SearchArgs {
    pub fn config(&self) -> SearchConfig {
        if self.min_depth == 0 || self.min_depth > self.max_depth {
            eprintln!(
                "--min-depth must be at least 1 and at most --max-depth ({} > {})",
                self.min_depth, self.max_depth
            );
            process::exit(2);
        }
        SearchConfig {
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            seed: self.seed,
            ..SearchConfig::default()
        }
    }
}

/// The position in `path`, or the starting position. Exits on a bad file.
pub(crate) fn load_board(path: Option<&Path>) -> Board {
    match path {
        None => Board::starting_position(),
        Some(path) => read_placement_file(path).unwrap_or_else(|e| {
            eprintln!("{}: {}", path.display(), e);
            process::exit(1);
        }),
    }
}

/// Prints the board after every move and logs it to `log`.
pub(crate) fn attach_output(game: &mut GameController, log: PathBuf) {
    game.set_board_log(BoardLog::new(log));
    game.set_move_listener(|board, played| {
        println!("{} plays {}", played.color, played);
        println!("{}", board);
    });
}

pub(crate) fn report_ending(ending: GameEnding) {
    match ending {
        GameEnding::Checkmate { winner } => println!("checkmate, {} wins", winner),
        GameEnding::Stalemate => println!("stalemate"),
    }
}
