use clap::Parser;
use themeflip_cli::{
    cli::{Cli, usage_error_text},
    logging, sync,
};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Usage errors go to stdout and exit 1, not clap's stderr and 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match usage_error_text(&err) {
            Some(usage) => {
                print!("{usage}");
                std::process::exit(1);
            }
            None => {
                let _ = err.print();
                std::process::exit(0);
            }
        },
    };
    logging::init_logging(cli.verbose);

    if let Err(err) = sync::run(&cli.profile).await {
        error!(error = %err, "theme sync failed");
        std::process::exit(1);
    }
}
