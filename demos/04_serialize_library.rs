use std::io::{Write, stdout};

use lib_game_launcher::data::ProfileStore;

fn main() {
    let mut store = ProfileStore::new();
    let profile = store.create_profile("alice");
    profile.add_game("Chess", "/bin/chess");
    profile.add_game("Go", "/bin/go");

    let serialized = serde_json::to_string_pretty(&store).expect("failed to serialize the store");
    let mut stdout = stdout().lock();
    writeln!(&mut stdout, "{serialized}").expect("failed to write to stdout");
}
