//! 命令行入口：运行内置或文件中的配对查找用例并输出报告.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, Command};
use log::{debug, info};

use pairsum::pair::io;
use pairsum::{builtin_cases, run_cases, Case};

fn make_options_parser() -> Command {
    Command::new("pairsum")
        .version("v0.1.0")
        .about("Single-pass pair-sum search over integer sequences")
        .arg(
            Arg::new("cases")
                .short('c')
                .long("cases")
                .value_name("FILE")
                .help("JSON case file to run instead of the builtin cases"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the JSON report will be stored"),
        )
}

fn run() -> Result<bool> {
    let matches = make_options_parser().get_matches();

    let cases = match matches.get_one::<String>("cases") {
        Some(path) => {
            debug!("loading cases from {}", path);
            Case::load_from_file(path)?
        }
        None => builtin_cases(),
    };

    let report = run_cases(&cases);
    println!("{}", report);
    info!("{} cases: {} passed, {} failed", cases.len(), report.passed, report.failed);

    if let Some(path) = matches.get_one::<String>("output") {
        io::write_json(PathBuf::from(path), &report)?;
        debug!("report written to {}", path);
    }

    Ok(report.all_passed())
}

fn main() -> ExitCode {
    if std::env::var("PAIRSUM_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("PAIRSUM_LOG")
            .write_style("PAIRSUM_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
