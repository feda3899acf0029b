//! Best move command - print the engine's move for a given position.

use std::path::PathBuf;

use chess4f::board::color::Color;
use chess4f::searcher::Searcher;
use structopt::StructOpt;

use super::util::{load_board, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "c", long = "color")]
    pub color: Color,
    #[structopt(long = "board", parse(from_os_str))]
    pub board: PathBuf,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = load_board(Some(self.board.as_path()));
        let mut searcher = Searcher::new(self.search.config());

        match searcher.choose_move(self.color, &board) {
            Some(best_move) => println!("{}", best_move.to_notation(&board)),
            None if board.is_under_check(self.color) => {
                println!("{} is checkmated", self.color)
            }
            None => println!("{} is stalemated", self.color),
        }
    }
}
