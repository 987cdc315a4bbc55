use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;
use unitvalue::config::ControllerConfig;
use unitvalue::controller::UnitValueController;
use unitvalue::edit::ValueEditBuffer;
use unitvalue::session;
use unitvalue::units::{Bounds, Unit};

#[derive(Parser)]
#[command(name = "unitvalue")]
#[command(about = "Unit-aware numeric value controller", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script of field events and print the notifications
    Replay {
        /// Script file, one command per line
        script: String,

        /// Controller config (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Print JSON lines instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Read commands from stdin and print each notification as it happens
    Repl {
        /// Controller config (TOML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Check how a single entry would be committed
    Check {
        /// Raw text as typed into the field
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Selected unit ("%" or "px")
        #[arg(short, long, default_value = "%")]
        unit: Unit,

        /// Last valid value, used when the entry is reverted
        #[arg(short, long, default_value_t = 0.0)]
        previous: f64,

        /// Lower bound
        #[arg(long, default_value_t = 0.0)]
        min: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unitvalue=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay {
            script,
            config,
            json,
        } => replay(&script, config.as_deref(), json),
        Commands::Repl { config } => repl(config.as_deref()),
        Commands::Check {
            text,
            unit,
            previous,
            min,
        } => check(&text, unit, previous, min),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_controller(
    config_path: Option<&str>,
) -> Result<UnitValueController, Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => ControllerConfig::load_from_file(path)?,
        None => ControllerConfig::default(),
    };
    Ok(UnitValueController::new(config)?)
}

fn replay(
    script_path: &str,
    config_path: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = std::fs::read_to_string(script_path)?;
    let commands = session::parse_script(&script)?;

    let mut executor = session::SessionExecutor::new(load_controller(config_path)?);
    executor.execute_all(&commands)?;

    if json {
        println!("{}", session::format_json_lines(executor.history()));
    } else {
        print!(
            "{}",
            session::format_report(executor.history(), &executor.view())
        );
    }

    Ok(())
}

fn repl(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut executor = session::SessionExecutor::new(load_controller(config_path)?);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim() == "view" {
            println!("{}", session::format_view(&executor.view()));
            continue;
        }

        // Bad lines are reported but do not end the session
        let command = match session::parse_command(&line, idx + 1) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match executor.execute(&command) {
            Ok(Some(event)) => println!("{}", serde_json::to_string(&event)?),
            Ok(None) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
        stdout.flush()?;
    }

    Ok(())
}

fn check(
    text: &str,
    unit: Unit,
    previous: f64,
    min: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    ControllerConfig::default()
        .with_initial_unit(unit)
        .with_min(min)
        .with_initial_value(previous)
        .validate()?;

    let mut buffer = ValueEditBuffer::new(previous);
    buffer.focus();
    buffer.input(text);
    let result = buffer.blur(Bounds::for_unit(unit, min));

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
