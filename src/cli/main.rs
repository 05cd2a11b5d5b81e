mod args;

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use semantic_tableau::config::Config;
use semantic_tableau::report::{self, Mode};
use semantic_tableau::types::err;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = args::cli().get_matches();

    let config = Config {
        detail: matches.get_one::<u8>("detail").copied().unwrap_or(0),
    };

    let path = matches.get_one::<PathBuf>("path").cloned();

    let mut input: Box<dyn Read> = match &path {
        Some(p) => match std::fs::File::open(p) {
            Ok(file) => Box::new(file),
            Err(source) => {
                eprintln!(
                    "{}",
                    err::Io::OpenFile {
                        path: p.clone(),
                        source,
                    }
                );
                std::process::exit(1);
            }
        },
        None => Box::new(std::io::stdin()),
    };

    run(&mut input, &config);
}

fn run(input: &mut dyn Read, config: &Config) {
    let reader = BufReader::new(input);
    let mut lines = reader.lines();

    let Some(Ok(header)) = lines.next() else {
        return;
    };
    let mode = Mode::from_header(&header);

    for line in lines {
        let Ok(formula) = line else { continue };
        let formula = formula.trim_end_matches(['\r', '\n']);
        for response in report::respond(mode, formula) {
            println!("{response}");
        }
        if config.detail > 0 {
            if let Ok(parsed) = semantic_tableau::syntax::parse(formula) {
                let stats = semantic_tableau::tableau::decide_with_stats(parsed).stats;
                eprintln!(
                    "[detail] {formula:?}: {} branch(es) explored, {} closed, {} witness(es) allocated",
                    stats.branches_explored, stats.branches_closed, stats.witnesses_allocated
                );
            }
        }
    }
}
