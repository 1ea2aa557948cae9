//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "treechess",
    about = "A mailbox chess engine with a node-budgeted alpha-beta search"
)]
pub enum Chess {
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move after playing the given `--moves` (coordinate moves such as \"e2e4 e7e5\", default: none) from the starting position. The search runs to `--depth` plies (default: 5) and stops early after `--budget` nodes (default: 500000)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable from the starting position in exactly `--depth` legal moves (default: 4), and report the time it took to do so."
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
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
