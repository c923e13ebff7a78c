use std::{io::stdout, process::ExitCode};

use env_logger::Env;
use log::error;
use restvpn::{cli, config::load_config, resource::RouteParams};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let cfg = load_config();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::run::<RouteParams>(env!("CARGO_BIN_NAME"), &cfg, &args, &mut stdout()).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let default_filter = if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}
