use crate::error::{CliError, ErrorType};

mod error;
mod cli;
mod logging;
mod reader;
mod write;
mod process;

fn main() -> Result<(), CliError> {
    logging::init();
    let matches = cli::build();
    process::execute(&matches)
}
