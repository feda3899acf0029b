//! Play command - play a game against the computer.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use chess4f::board::color::Color;
use chess4f::game::{GameController, GameMode, MoveRequest, MoveSlot};
use structopt::StructOpt;

use super::util::{attach_output, load_board, report_ending, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub search: SearchArgs,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(long = "board", parse(from_os_str))]
    pub board: Option<PathBuf>,
    #[structopt(long = "log", parse(from_os_str), default_value = "board.log")]
    pub log: PathBuf,
}

impl Command for PlayArgs {
    fn execute(self) {
        let board = load_board(self.board.as_deref());
        println!("{}", board);
        println!("You play {}. Enter moves like e2e4.", self.color);

        let mode = match self.color {
            Color::White => GameMode::HumanVsAi,
            Color::Black => GameMode::AiVsHuman,
        };
        let slot = Arc::new(MoveSlot::new());
        spawn_stdin_reader(Arc::clone(&slot));

        let mut game = GameController::new(mode, board, self.search.config(), slot);
        attach_output(&mut game, self.log);

        match game.play() {
            Ok(ending) => report_ending(ending),
            Err(e) => eprintln!("game aborted: {}", e),
        }
    }
}

/// Feeds every line typed on stdin into `slot` until stdin closes.
fn spawn_stdin_reader(slot: Arc<MoveSlot>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("error reading input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<MoveRequest>() {
                Ok(request) => {
                    if let Err(e) = slot.submit(request) {
                        eprintln!("{}", e);
                    }
                }
                Err(e) => eprintln!("{}", e),
            }
        }
        slot.close();
    });
}
