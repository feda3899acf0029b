//! Watch command - watch the computer play against itself.

use std::path::PathBuf;
use std::sync::Arc;

use chess4f::game::{GameController, GameMode, MoveSlot};
use structopt::StructOpt;

use super::util::{attach_output, load_board, report_ending, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(long = "board", parse(from_os_str))]
    pub board: Option<PathBuf>,
    #[structopt(long = "log", parse(from_os_str), default_value = "board.log")]
    pub log: PathBuf,
}

impl Command for WatchArgs {
    fn execute(self) {
        let board = load_board(self.board.as_deref());
        println!("{}", board);

        let mut game = GameController::new(
            GameMode::AiVsAi,
            board,
            self.search.config(),
            Arc::new(MoveSlot::new()),
        );
        attach_output(&mut game, self.log);

        match game.play() {
            Ok(ending) => report_ending(ending),
            Err(e) => eprintln!("game aborted: {}", e),
        }
    }
}
