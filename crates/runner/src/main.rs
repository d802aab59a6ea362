use agora_runner::{ExportOptions, ExportSession, ReplayRunner, SimulationSettings};

fn print_help() {
    eprintln!(
        r#"Agora Export - turn a recorded simulation event log into an analysis bundle

USAGE:
    agora-export --events <PATH> --output <PATH> [OPTIONS]

OPTIONS:
    --config <PATH>        Simulation config (JSON); defaults to the bundled
                           two-spot shock transfer setup
    --events <PATH>        Recorded event log, one JSON event per line
    --output <PATH>        Where to write the export document
    --offset <N>           Warm-up ticks to drop (default: 0)
    --cohort-size <N>      Agents per cohort (default: 500)
    --plot <PATH>          Also write an SVG price chart
    --help                 Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG               Log level filter (default: info)

EXAMPLES:
    # Export with the bundled config
    agora-export --events run.jsonl --output export.json

    # Drop 100 warm-up ticks and draw the prices
    agora-export --config sim.json --events run.jsonl --output export.json \
        --offset 100 --plot prices.svg
"#
    );
}

fn require_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn parse_count(value: &str, flag: &str) -> u64 {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} expects a non-negative integer, got {:?}", flag, value);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut events_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut plot_path: Option<String> = None;
    let mut options = ExportOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                config_path = Some(require_value(&args, i, "--config"));
            }
            "--events" | "-e" => {
                i += 1;
                events_path = Some(require_value(&args, i, "--events"));
            }
            "--output" | "-o" => {
                i += 1;
                output_path = Some(require_value(&args, i, "--output"));
            }
            "--offset" => {
                i += 1;
                options.offset = parse_count(&require_value(&args, i, "--offset"), "--offset");
            }
            "--cohort-size" => {
                i += 1;
                options.cohort_size =
                    parse_count(&require_value(&args, i, "--cohort-size"), "--cohort-size");
            }
            "--plot" => {
                i += 1;
                plot_path = Some(require_value(&args, i, "--plot"));
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let (Some(events_path), Some(output_path)) = (events_path, output_path) else {
        eprintln!("Error: --events and --output are required");
        print_help();
        std::process::exit(1);
    };

    // Synchronous pipeline, run on the blocking pool
    tokio::task::spawn_blocking(move || -> agora_runner::Result<()> {
        let settings = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path);
                SimulationSettings::load(&path)?
            }
            None => {
                log::info!("Using bundled shock transfer configuration");
                SimulationSettings::load_default()?
            }
        };
        log::info!("Markets: {}", settings.markets.join(", "));
        log::info!("Total ticks: {}", settings.total_ticks());

        let session = ExportSession::new(settings, options)?;
        let output = session.run(&mut ReplayRunner::from_path(events_path))?;

        output.save(&output_path)?;
        if let Some(path) = plot_path {
            output.draw(&path)?;
        }
        Ok(())
    })
    .await??;

    Ok(())
}
