use clap::Parser;
use ikisky::cli::{dispatch, Cli};
use ikisky::error::AppError;
use ikisky::settings::Settings;

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            let e = AppError::from(e);
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    ikisky::init_tracing(&settings.app.log_level, cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = dispatch(cli, &settings, &mut out) {
        tracing::debug!("Command failed: {:?}", e);
        eprintln!("error: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
