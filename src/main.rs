mod advisory;
mod app;
mod backend;
mod config;
mod controller;
mod filter;
mod models;
mod ui;

use app::{exit_code, print_config_hint, setup_tracing};
use backend::nm::NetworkManagerBackend;
use backend::sample::SampleBackend;
use config::{Cli, Command, Config, DataSource, write_default_config};
use gtk4::prelude::*;
use gtk4::{Application, glib};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    run_application(&config)
}

fn handle_init(output: &Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

fn backends_for(config: &Config) -> ui::Backends {
    let nm = Arc::new(NetworkManagerBackend::new());
    let sample = Arc::new(SampleBackend::new());

    match config.source {
        DataSource::Live => ui::Backends {
            probe: nm.clone(),
            scanner: nm,
            fallback: config.fallback_to_sample.then_some(sample),
        },
        DataSource::Sample => ui::Backends {
            probe: nm,
            scanner: sample,
            fallback: None,
        },
    }
}

fn run_application(config: &Config) -> ExitCode {
    let backends = backends_for(config);
    let show_sort = config.show_sort;

    let app = Application::builder()
        .application_id("io.github.bandfi")
        .build();

    app.connect_activate(move |app| ui::build_ui(app, &backends, show_sort));

    // Our flags are already parsed; keep GTK from seeing them.
    let program: Vec<String> = std::env::args().take(1).collect();
    if app.run_with_args(&program) == glib::ExitCode::SUCCESS {
        exit_code::SUCCESS
    } else {
        tracing::error!("GTK application exited with an error");
        exit_code::runtime_error()
    }
}
