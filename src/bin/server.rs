// CLI entry point for the music theory web API.
//
// Parses the configuration (see `config.rs`), installs the logger and runs
// the HTTP server until the process is killed. See `server.rs` for the
// worker architecture and `api/routes.rs` for the endpoint table.

use music_theory_api::config::{self, Command};
use music_theory_api::server::start_server;

fn main() {
    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(Command::Serve(config)) => config,
        Ok(Command::Help) => {
            println!("{}", config::usage());
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", config::usage());
            std::process::exit(2);
        }
    };

    // validated by parse_args
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).init();

    let (_handle, addr) = match start_server(&config) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to start server on {}: {}", config.bind_addr(), e);
            std::process::exit(1);
        }
    };

    log::info!("Music theory API v{} ready at http://{}", env!("CARGO_PKG_VERSION"), addr);

    // Workers run until the process exits on SIGINT/SIGTERM.
    loop {
        std::thread::park();
    }
}
