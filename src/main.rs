mod cli;
mod logging;

use std::io::{self, Write};

use cli::CommandLine;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    coffee_shop::run(&commands.config(), &mut out)?;
    out.flush()?;
    Ok(())
}
