//! The classic menu-driven launcher flow built on top of the library: create profiles,
//! manage their games, launch one at a time, and persist after every change.

use std::{
    io::{self, Write},
    ops::RangeInclusive,
};

use lib_game_launcher::{
    data::ProfileStore,
    error::LibraryError,
    launcher::{ProcessLauncher, is_elevated},
    storage::StoreFile,
};

fn main() -> Result<(), LibraryError> {
    tracing_subscriber::fmt::init();

    if !is_elevated() {
        println!("Note: running without elevated rights; some games may refuse to start.");
    }

    let store_file =
        StoreFile::at_default_location().unwrap_or_else(|| StoreFile::new("library.cfg"));
    println!("Using store file at {:?}", store_file.path());

    let mut store = store_file.load_or_default();

    loop {
        println!("\nMenu:");
        println!("1. Create profile");
        println!("2. Select profile");
        println!("3. Exit");

        let Some(choice) = read_choice("Choose an option: ", 1..=3) else {
            break;
        };

        match choice {
            1 => {
                let Some(username) = read_line("Enter username for the new profile: ") else {
                    break;
                };
                store.create_profile(username.as_str());
                println!("Profile '{username}' created!");
                save(&store_file, &store);
            }
            2 => {
                if store.is_empty() {
                    println!("No profiles yet. Create one first.");
                    continue;
                }

                println!("List of profiles:");
                for (i, username) in store.usernames().enumerate() {
                    println!("{}. {username}", i + 1);
                }

                let max = store.len();
                let Some(choice) = read_choice("Choose profile number (or 0 to go back): ", 0..=max)
                else {
                    break;
                };
                if choice > 0 {
                    profile_menu(&mut store, choice - 1, &store_file)?;
                }
            }
            _ => break,
        }
    }

    save(&store_file, &store);
    println!("Thank you for using the program!");
    Ok(())
}

fn profile_menu(
    store: &mut ProfileStore,
    index: usize,
    store_file: &StoreFile,
) -> Result<(), LibraryError> {
    loop {
        println!("\nProfile: {}", store.select_profile(index)?.username);
        println!("1. Add game");
        println!("2. Remove game");
        println!("3. Library");
        println!("4. Back to profiles");

        let Some(choice) = read_choice("Choose an option: ", 1..=4) else {
            return Ok(());
        };

        match choice {
            1 => {
                let Some(name) = read_line("Enter game name: ") else {
                    return Ok(());
                };
                let Some(path) = read_line("Enter full path to the game executable: ") else {
                    return Ok(());
                };

                store.select_profile(index)?.add_game(name, path);
                println!("Game added to the library!");
                save(store_file, store);
            }
            2 => {
                let profile = store.select_profile(index)?;
                if profile.is_empty() {
                    println!("The game library is empty.");
                    continue;
                }

                for (i, game) in profile.games().iter().enumerate() {
                    println!("{}. {}", i + 1, game.name);
                }

                let max = profile.len();
                let Some(choice) =
                    read_choice("Choose the game number to remove (or 0 to cancel): ", 0..=max)
                else {
                    return Ok(());
                };
                if choice > 0 {
                    let removed = store.select_profile(index)?.remove_game(choice - 1)?;
                    println!("Removed '{}' from the library!", removed.name);
                }
                save(store_file, store);
            }
            3 => library_menu(store, index)?,
            _ => return Ok(()),
        }
    }
}

fn library_menu(store: &mut ProfileStore, index: usize) -> Result<(), LibraryError> {
    let launcher = ProcessLauncher;

    loop {
        let profile = store.select_profile(index)?;
        if profile.is_empty() {
            println!("The game library is empty. Add a game using 'Add game'.");
            return Ok(());
        }

        println!("\nList of available games:");
        for (i, game) in profile.games().iter().enumerate() {
            if game.is_running() {
                println!("{}. {} (Running)", i + 1, game.name);
            } else {
                println!(
                    "{}. {} (Total time: {})",
                    i + 1,
                    game.name,
                    game.formatted_play_time()
                );
            }
        }
        let max = profile.len();

        let Some(input) =
            read_line("Choose a game to launch, 's' to stop the running game, or 0 to go back: ")
        else {
            return Ok(());
        };
        let input = input.trim();

        if input == "0" {
            return Ok(());
        }

        if input.eq_ignore_ascii_case("s") {
            let profile = store.select_profile(index)?;
            match profile.stop_running() {
                Some(stopped) => {
                    let game = profile.game(stopped).expect("stopped game exists");
                    println!("Stopped '{}' at {}.", game.name, game.formatted_play_time());
                }
                None => println!("Nothing is running."),
            }
            continue;
        }

        match input.parse::<usize>() {
            Ok(number) if number >= 1 && number <= max => {
                match store.select_profile(index)?.launch(number - 1, &launcher) {
                    Ok(()) => println!("Launched!"),
                    Err(e) => println!("{e}"),
                }
            }
            _ => println!("Invalid choice."),
        }
    }
}

/// Persisting is best effort: a failed save reports and keeps the in-memory store as is.
fn save(store_file: &StoreFile, store: &ProfileStore) {
    match store_file.save(store) {
        Ok(()) => println!("Profiles saved to {:?}.", store_file.path()),
        Err(e) => println!("Warning: could not save profiles: {e}"),
    }
}

/// Reads until the user enters a number inside the given range. Invalid input repeats
/// the prompt; `None` means stdin was closed.
fn read_choice(prompt: &str, range: RangeInclusive<usize>) -> Option<usize> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<usize>() {
            Ok(choice) if range.contains(&choice) => return Some(choice),
            _ => println!("Invalid choice."),
        }
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
    }
}
