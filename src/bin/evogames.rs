//! evogames CLI — run evolutionary game experiments
//!
//! Commands:
//!   evogames list                    — list experiments
//!   evogames run <id> [config.json]  — run one experiment
//!   evogames all [config.json]       — run the whole suite
//!   evogames config                  — print the default suite config

use evogames_core::cooperation::CooperationStrategy;
use evogames_core::experiment::{run_experiment, run_suite, SuiteEntry, EXPERIMENT_IDS};
use evogames_core::kin_selection::KinStrategy;
use evogames_core::public_goods::PublicGoodsStrategy;
use evogames_core::stag_hunt::StagHuntStrategy;
use evogames_core::{ConfigError, SuiteConfig};
use std::env;
use std::process::ExitCode;

fn print_usage() {
    println!(
        r#"
evogames — evolutionary game theory simulations

Usage: evogames <command> [options] [--json]

Commands:
  list                           List experiments and strategies
  run    <id> [config.json]      Run one experiment
  all    [config.json]           Run every experiment selected in the config
  config                         Print the default suite config as JSON
  help                           Show this message

Options:
  --json                         Print full reports as JSON instead of summaries

Examples:
  evogames run hawk-dove
  evogames run public-goods my-suite.json --json
  evogames all
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let args: Vec<String> = args.into_iter().filter(|a| a != "--json").collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[1].as_str() {
        "list" => {
            cmd_list();
            Ok(())
        }
        "run" => cmd_run(&args[2..], json),
        "all" => cmd_all(&args[2..], json),
        "config" => SuiteConfig::default().to_json().map(|s| println!("{}", s)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&String>) -> evogames_core::Result<SuiteConfig> {
    match path {
        Some(path) => {
            let config = SuiteConfig::load(path)?;
            println!("  Loaded config from {}", path);
            Ok(config)
        }
        None => Ok(SuiteConfig::default()),
    }
}

fn print_entry(entry: &SuiteEntry, json: bool) -> evogames_core::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entry).map_err(ConfigError::Report)?);
        return Ok(());
    }
    println!("\n  == {} ==", entry.section_title);
    println!("  [{}] {}", entry.id, entry.display_name);
    println!("  {}", "-".repeat(72));
    for line in &entry.summary_lines {
        println!("  {}", line);
    }
    println!("  fingerprint: {}", entry.fingerprint);
    Ok(())
}

fn cmd_list() {
    println!("\n  Experiments:");
    for id in EXPERIMENT_IDS {
        println!("    {}", id);
    }
    println!("\n  Tournament strategies:");
    for s in CooperationStrategy::ALL {
        println!("    {:<24} {}", s.display_name(), s.description());
    }
    println!("\n  Public goods roles:");
    for s in PublicGoodsStrategy::ALL {
        println!("    {:<24} {}", s.display_name(), s.description());
    }
    println!("\n  Stag hunt roles:");
    for s in StagHuntStrategy::ALL {
        println!("    {:<24} {}", s.display_name(), s.description());
    }
    println!("\n  Kin selection strategies:");
    for s in KinStrategy::ALL {
        println!("    {:<24} {}", s.display_name(), s.description());
    }
}

fn cmd_run(args: &[String], json: bool) -> evogames_core::Result<()> {
    let id = args.first().ok_or(ConfigError::MissingArgument("<id>"))?;
    let config = load_config(args.get(1))?;
    let entry = run_experiment(&config, id)?;
    print_entry(&entry, json)
}

fn cmd_all(args: &[String], json: bool) -> evogames_core::Result<()> {
    let config = load_config(args.first())?;
    let report = run_suite(&config)?;
    for entry in &report.entries {
        print_entry(entry, json)?;
    }
    if !json {
        println!("\n  {} experiments complete", report.entries.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_id_fails() {
        let err = cmd_run(&[], false).unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgument("<id>")));
    }

    #[test]
    fn test_run_unknown_id_fails() {
        let err = cmd_run(&["rock-paper-scissors".to_string()], false).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownExperiment(_)));
    }
}
