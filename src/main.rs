//! Binary entry point for `deepren`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = deepren::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
