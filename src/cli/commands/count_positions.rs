//! Count positions command - count legal move sequences at a given depth.

use std::time::Instant;

use chess4f::board::color::Color;
use chess4f::board::Board;
use chess4f::move_generation::count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let mut board = Board::starting_position();

        for depth in 0..self.depth {
            let start = Instant::now();
            let count = count_positions(depth, &mut board, Color::White);
            let elapsed = start.elapsed();
            println!(
                "depth {}: {} positions in {:.3}s ({:.0} positions/s)",
                depth + 1,
                count,
                elapsed.as_secs_f64(),
                count as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
            );
        }
    }
}
