//! Van planner entry point: CLI wiring and config-driven session construction.

use std::path::Path;
use std::process;

use van_werkstatt::config::PlannerConfig;
use van_werkstatt::io::export::export_csv;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    ledger_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("van-werkstatt: heating and energy-balance planner for camper vans");
    eprintln!();
    eprintln!("Usage: van-werkstatt [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load planner inputs from TOML config file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        PlannerConfig::PRESETS.join(", ")
    );
    eprintln!("  --ledger-out <path>      Export the device ledger to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the session REST API");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Open the interactive terminal planner");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the weekender preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        ledger_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--ledger-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --ledger-out requires a path argument");
                    process::exit(1);
                }
                cli.ledger_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.config_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --config and --preset are mutually exclusive");
        process::exit(1);
    }

    cli
}

fn main() {
    let cli = parse_args();

    #[cfg(feature = "tui")]
    if cli.tui {
        van_werkstatt::tui::run(cli.preset.as_deref().unwrap_or("weekender"));
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // --config takes priority, then --preset, then the weekender default
    let config = if let Some(ref path) = cli.config_path {
        match PlannerConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match PlannerConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        PlannerConfig::weekender()
    };

    let session = match config.into_session() {
        Ok(session) => session,
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            process::exit(1);
        }
    };

    match session.recompute() {
        Ok(evaluation) => println!("{evaluation}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    if let Some(ref path) = cli.ledger_out {
        if let Err(e) = export_csv(session.ledger().list(), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Ledger written to {path}");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(van_werkstatt::api::AppState::default());
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(van_werkstatt::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
