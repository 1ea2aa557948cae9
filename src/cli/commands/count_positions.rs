//! Count positions command - count possible positions at a given depth.

use std::time::Instant;

use structopt::StructOpt;
use treechess::move_generator::count_positions;
use treechess::Board;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let mut board = Board::default();

        for depth in 1..=self.depth {
            let started = Instant::now();
            let count = count_positions(&mut board, depth);
            let elapsed = started.elapsed();
            let per_second = count as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            println!(
                "depth: {}, positions: {}, elapsed: {:?}, positions/s: {:.0}",
                depth, count, elapsed, per_second
            );
        }
    }
}
