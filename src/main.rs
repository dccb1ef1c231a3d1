use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser as ClapParser};
use eyre::{bail, WrapErr};
use log::{debug, info, LevelFilter};
use monkey_front::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
    render_error,
};

/// Parses Monkey source and prints its canonical form
#[derive(Debug, ClapParser)]
#[clap(author, version, about)]
struct Args {
    #[clap(short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,

    /// Source file to parse
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath, required_unless_present = "eval")]
    file: Option<PathBuf>,
    /// Parse this source text instead of a file
    #[clap(short = 'e', long = "eval", value_name = "SOURCE", conflicts_with = "file")]
    eval: Option<String>,
    /// Print the token stream instead of the parsed program
    #[clap(long)]
    tokens: bool,
}

impl Args {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used.
    fn log_level_filter(&self) -> LevelFilter {
        match i16::from(self.verbose) - i16::from(self.quiet) {
            i16::MIN..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The source text and the name used for it in diagnostics.
    fn source(&self) -> eyre::Result<(String, String)> {
        match (&self.eval, &self.file) {
            (Some(source), _) => Ok((source.clone(), String::from("shell"))),
            (None, Some(path)) => {
                let source = read_to_string(path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                Ok((source, path.display().to_string()))
            }
            (None, None) => bail!("no source given, pass a FILE or --eval"),
        }
    }
}

fn main() -> eyre::Result<ExitCode> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level_filter())
        .parse_default_env()
        .init();
    debug!("starting with args: {args:?}");

    let (source, file_name) = args.source()?;

    if args.tokens {
        for token in tokenize(source, Some(file_name)) {
            println!("{}", token.debug());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let start = Instant::now();
    let mut parser = Parser::new(Lexer::new(source.clone(), Some(file_name)));
    let program = parser.parse_program();
    info!("Parsed in {:?}", start.elapsed());

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprint!("{}", render_error(error, &source));
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}
