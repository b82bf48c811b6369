use clap::{Arg, ArgMatches, Command};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn build() -> ArgMatches {
    command().get_matches()
}

pub fn command() -> Command<'static> {
    Command::new(NAME)
        .about("Validate, price and book a cinema ticket purchase read from a CSV file")
        .version(VERSION)
        .arg_required_else_help(true)
        .author(AUTHOR)
        .arg(Arg::new("file_path")
            .help("File path where csv file with ticket requests (type,quantity) is located")
            .required(true)
            .index(1)
        )
        .arg(Arg::new("account")
            .help("Account id the tickets are purchased for")
            .short('a')
            .long("account")
            .takes_value(true)
            .allow_hyphen_values(true)
            .required(true)
        )
}
