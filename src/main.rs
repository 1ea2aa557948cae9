mod cli;

use cli::commands::Command;
use cli::Chess;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Chess::from_args().execute();
}
