use std::{thread::sleep, time::Duration};

use lib_game_launcher::{
    data::{GameLauncher, ProfileStore},
    storage::encode_store,
};
use tracing::debug;

/// Pretends to start a process so the example works without real games installed.
struct PretendLauncher;

impl GameLauncher for PretendLauncher {
    fn launch(&self, path: &str) -> Result<(), std::io::Error> {
        println!("(pretending to launch {path})");
        Ok(())
    }
}

fn main() {
    // Init tracing
    tracing_subscriber::fmt::init();

    debug!("Building store");
    let mut store = ProfileStore::new();
    let profile = store.create_profile("alice");
    profile.add_game("Chess", "/usr/bin/gnome-chess");
    profile.add_game("Mines", "/usr/bin/gnome-mines");

    debug!("Playing a short session");
    if let Err(e) = profile.launch(0, &PretendLauncher) {
        eprintln!("{e}");
        return;
    }
    sleep(Duration::from_secs(1));
    profile.stop_running();

    dbg!(profile.game(0).map(|game| game.formatted_play_time()));
    print!("{}", encode_store(&store));
}
