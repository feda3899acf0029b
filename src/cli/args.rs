//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, play::PlayArgs,
    watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess4f",
    about = "A chess engine that searches deeper on captures and checks ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer. Enter moves as `e2e4`. Your color is chosen at random unless you specify it with `--color`. The initial position can be loaded from a placement file with `--board` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. The initial position can be loaded from a placement file with `--board` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the move the engine would play for `--color` in the position loaded from the placement file given with `--board`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the legal move sequences from the starting position up to `--depth` (default: 3) and report the time it took."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            BestMove(cmd),
            CountPositions(cmd),
        }
    }
}
