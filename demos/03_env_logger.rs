use is_terminal::IsTerminal;
use lib_game_launcher::storage::{StoreFile, decode_store};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// NOTE: run with, e.g. `RUST_LOG=trace cargo run --example 03_env_logger > logs.txt`
fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_line_number(true)
                // Don't output colours for logs not being printed to a terminal
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();

    // Exercises the lenient decode paths: an orphaned game line, a line without '=',
    // and a malformed header are all skipped rather than failing the load
    let store = decode_store(
        "Orphan=/games/orphan\n\
         [Profile: alice]\n\
         Chess=/bin/chess\n\
         not a game line\n\
         [Profile: broken\n\n",
    );
    println!("Decoded {} profile(s)", store.len());

    // A load from a missing file degrades to an empty store with a warning
    let missing = StoreFile::new("definitely/not/here.cfg").load_or_default();
    println!("Loaded {} profile(s)", missing.len());
}
