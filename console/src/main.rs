mod config;
mod terminal;

use clap::Parser;
use common::games::tictactoe::TicTacToeSession;
use common::{log, logger};
use terminal::{ConsoleInput, ConsoleOutput};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML settings file; defaults apply when it does not exist.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,
    /// Write diagnostic logs to stderr.
    #[arg(long)]
    log: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = config::get_config_manager(&args.config).get_config()?;

    if args.log || config.logging.enabled {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            config.logging.prefix.clone()
        };
        logger::init_logger(prefix);
    }

    log!("Loaded settings from {}: {:?}", args.config, config);

    let stdin = std::io::stdin();
    let input = ConsoleInput::new(stdin.lock());
    let output = ConsoleOutput::new(std::io::stdout(), config.display.symbols());

    let outcome = TicTacToeSession::new(input, output).run()?;
    log!("Session finished: {:?}", outcome);

    Ok(())
}
