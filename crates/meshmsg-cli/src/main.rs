use clap::Parser;
use meshmsg_cli::{logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("meshmsg error: {}", err);
            std::process::exit(1);
        }
    }
}
