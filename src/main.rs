use std::io;

use clap::Parser;
use stopwatch::cli::{run, Cli};
use stopwatch::ui::console::print_error;
use stopwatch::utils::init_logging;

fn main() {
    init_logging();
    let cli = Cli::parse();

    let code = match run(&cli, &mut io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => {
            print_error(format!("{:#}", e));
            1
        }
    };
    std::process::exit(code);
}
