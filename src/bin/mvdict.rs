use std::io::{self, BufWriter};
use std::process::exit;

use clap::Parser;
use log::{error, info};

use mvdict::{Result, Shell, DEFAULT_PROMPT};

#[derive(Parser)]
#[command(name = "mvdict", version, about = "An in-memory multi-value dictionary shell")]
struct Cli {
    /// Prompt written before each input line
    #[arg(long, default_value = DEFAULT_PROMPT, value_name = "PROMPT")]
    prompt: String,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("mvdict {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let mut shell = Shell::with_prompt(stdin, stdout, &cli.prompt);
    shell.run()
}
