mod commands;
mod terminal;

use commands::{CommandLine, Commands, clone, find, show};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    if cfg.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Show => {
            print::header("inventory", cfg.quiet);
            Ok(show::show(&cfg))
        }
        Commands::Find { name } => {
            print::header("host lookup", cfg.quiet);
            find::find(&name, &cfg)
        }
        Commands::Clone => {
            print::header("copying inventory", cfg.quiet);
            Ok(clone::clone(&cfg))
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
