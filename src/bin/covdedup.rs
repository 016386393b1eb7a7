// src/bin/covdedup.rs
use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use covdedup_core::cli::{self, Cli};
use covdedup_core::config::Config;
use covdedup_core::error::CovError;
use covdedup_core::exit::CovExit;
use covdedup_core::logging;

fn main() -> CovExit {
    match run() {
        Ok(code) => code,
        Err(e) => report(&e),
    }
}

fn run() -> Result<CovExit> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let mut config = Config::load()?;
    config.apply_overrides(args.exclude, args.format);

    cli::handle_merge(&args.inputs, &config, io::stdin().lock(), io::stdout().lock())
}

fn report(e: &anyhow::Error) -> CovExit {
    let code = CovExit::for_error(e);
    if code == CovExit::Usage {
        eprintln!("{}", CovError::NoInputs);
    } else {
        eprintln!("{} {e:#}", "error:".red().bold());
    }
    code
}
