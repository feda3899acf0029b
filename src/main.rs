mod cli;

use cli::commands::Command;
use cli::Chess;
use env_logger::Env;
use structopt::StructOpt;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    #[cfg(feature = "instrumentation")]
    chess4f::instrumentation::init_tracing();

    Chess::from_args().execute();

    #[cfg(feature = "instrumentation")]
    chess4f::instrumentation::print_timing_statistics();
}
