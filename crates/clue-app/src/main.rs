#![deny(warnings)]

mod cli;
mod console;
mod controller;

fn main() {
    init_tracing();
    if let Err(err) = cli::run_cli() {
        eprintln!("mdclue: {err}");
        std::process::exit(2);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MDCLUE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
