use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

pub fn cli() -> Command {
    Command::new("tableau")
        .about("Classifies and/or decides satisfiability of formulas in a restricted propositional and binary-predicate first-order fragment")
        .version("0.1.0")
        .arg(
            Arg::new("path")
                .required(false)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Read the mode header and formulas from this file instead of standard input."),
        )
        .arg(
            Arg::new("detail")
                .long("detail")
                .short('d')
                .value_name("LEVEL")
                .value_parser(value_parser!(u8))
                .required(false)
                .num_args(1)
                .help("The level of diagnostic detail (branch and witness counts) printed to stderr after each SAT verdict.
Default: 0"),
        )
}
