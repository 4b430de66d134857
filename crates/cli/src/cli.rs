use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser, Debug)]
#[command(name = "themeflip")]
#[command(about = "Switch the desktop between light and dark, terminals and editors included")]
#[command(version)]
pub struct Cli {
    /// Profile to apply everywhere, e.g. "Light" or "Dark"
    #[arg(value_name = "PROFILE")]
    pub profile: String,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Text for a parse failure that belongs on stdout with exit 1.
///
/// Help and version requests return `None` and keep clap's own routing
/// and exit code.
pub fn usage_error_text(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(err.render().to_string()),
    }
}
