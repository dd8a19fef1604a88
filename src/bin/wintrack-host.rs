//! Tracker host process for the streaming application.
//!
//! The application's plugin shim spawns this binary and talks to it over
//! stdin/stdout with length-prefixed JSON messages. Logs go to stderr.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use wintrack_lib::{
    config::{default_config_path, Config},
    logging::{init_logging, install_panic_hook},
    native_host::NativeHost,
    AppError, NativeWindows,
};

#[derive(Parser, Debug)]
#[command(
    name = "wintrack-host",
    version,
    about = "Keeps tagged window-capture scene items aligned with their windows"
)]
struct Args {
    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn config_path(&self) -> Result<PathBuf, AppError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => default_config_path(),
        }
    }
}

fn main() {
    let args = Args::parse();

    init_logging();
    install_panic_hook();

    let config = match args.config_path().and_then(|path| Config::load_or_init(&path)) {
        Ok(config) => config,
        Err(e) => {
            error!("Initialization error: {e}");
            std::process::exit(1);
        }
    };

    let mut host = NativeHost::new(NativeWindows::new(), &config);

    // Runs until the shim sends shutdown or closes the pipe
    if let Err(e) = host.run(std::io::stdin().lock(), std::io::stdout().lock()) {
        // EOF is expected when the application closes the connection
        if e.kind() != std::io::ErrorKind::UnexpectedEof {
            error!("Native host error: {e}");
            std::process::exit(1);
        }
    }
    info!("Host connection closed");
}
