//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use treechess::game::engine::{Engine, EngineConfig, EngineError};
use treechess::input_handler::parse_move_list;
use treechess::Board;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short, long, default_value = "500000")]
    pub budget: usize,
    #[structopt(short, long, default_value = "")]
    pub moves: String,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let inputs = match parse_move_list(&self.moves) {
            Ok(inputs) => inputs,
            Err(err) => {
                eprintln!("Failed to parse moves: {}", err);
                return;
            }
        };

        let config = EngineConfig {
            search_depth: self.depth,
            node_budget: self.budget,
            starting_position: Board::default(),
        };
        let mut engine = Engine::with_config(config);

        for input in inputs {
            if let Err(err) = engine.make_move_from_input(input) {
                eprintln!("Failed to play {:?}: {}", input, err);
                return;
            }
        }
        println!("{}\n", engine.board());

        match engine.best_move() {
            Ok(best_move) => {
                let stats = engine.search_stats();
                println!("{}", best_move);
                println!(
                    "score: {:?}, positions searched: {}, time: {:?}",
                    stats.last_score, stats.searched_position_count, stats.last_duration
                );
            }
            Err(EngineError::NoAvailableMoves) => {
                println!(
                    "There are no valid moves in the given position ({}).",
                    engine.classify()
                );
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
