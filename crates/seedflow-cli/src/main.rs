// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod export;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use export::ExportKind;
use runtime::SampleRuntime;
use seedflow_app::{AppState, DeliveryBoard, PlanTable};
use seedflow_tui::AppRuntime;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `seedflow --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let log_path = setup_tracing(&config)?;
    tracing::info!(
        config = %options.config_path.display(),
        log = ?log_path,
        "seedflow starting"
    );

    let mut state = initial_state(&config);
    let mut runtime = SampleRuntime::new();

    if options.check_only {
        let plan = PlanTable::new(runtime.load_customers()?);
        let board = DeliveryBoard::new(runtime.load_delivery_orders()?);
        tracing::info!(
            customers = plan.customers().len(),
            orders = board.orders().len(),
            "check passed"
        );
        return Ok(());
    }

    if let Some(kind) = options.export {
        let json = match kind {
            ExportKind::Plan => {
                let plan = PlanTable::new(runtime.load_customers()?);
                export::to_json(&export::plan_export(&state, &plan))?
            }
            ExportKind::Deliveries => {
                let board = DeliveryBoard::new(runtime.load_delivery_orders()?);
                export::to_json(&export::delivery_export(&board))?
            }
        };
        println!("{json}");
        return Ok(());
    }

    seedflow_tui::run_app(&mut state, &mut runtime)
}

fn initial_state(config: &Config) -> AppState {
    AppState {
        active_page: config.start_page(),
        sales_year: config.sales_year(),
        agency: config.agency(),
        ..AppState::default()
    }
}

/// Installs a file-backed subscriber when a log directory is configured.
/// Nothing is ever written to the terminal, which the TUI owns.
fn setup_tracing(config: &Config) -> Result<Option<PathBuf>> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let Some(log_dir) = config.log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join(format!("seedflow.{}.log", std::process::id()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    let filter = match EnvFilter::try_from_env("SEEDFLOW_LOG") {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_level())
            .with_context(|| format!("invalid log level {:?}", config.log_level()))?,
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    Ok(Some(log_path))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    export: Option<ExportKind>,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        export: None,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--export" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--export requires plan or deliveries"))?;
                let kind = ExportKind::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown export {:?}; use plan or deliveries",
                        value.as_ref()
                    )
                })?;
                options.export = Some(kind);
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    print!("{}", help_text());
}

fn help_text() -> &'static str {
    "seedflow: seed sales dashboard
  --config <path>          Use a specific config path
  --print-config-path      Print resolved config path
  --print-example-config   Print a v1 config template
  --check                  Validate config and sample data, then exit
  --export <plan|deliveries>
                           Print the built-in sample data for a page as JSON.
                           Edits made in the dashboard are never saved, so
                           they do not appear in the export.
  --help                   Show this help
"
}
