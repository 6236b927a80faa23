//! A Rust library for managing per-user game libraries: profiles own ordered lists of
//! games, games launch as external processes, and play time accumulates per game across
//! explicit start/stop sessions. The whole store persists to a flat text file between
//! runs.
//!
//! # Description
//!
//! This is a Rust library intended to be used as the core of a small game launcher: a
//! front end (menu, TUI, anything) drives a [`data::ProfileStore`] through its API,
//! launches games through the [`data::GameLauncher`] trait, and persists the store with
//! [`storage::StoreFile`] after every mutation. Launched processes are deliberately not
//! supervised; a game counts as playing until it is explicitly stopped or another game
//! is launched from the same profile.
//!
//! # Quick start
//!
//! Add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lib_game_launcher = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lib_game_launcher::data::{GameLauncher, ProfileStore};
//!
//! let mut store = ProfileStore::new();
//! let profile = store.create_profile("alice");
//! profile.add_game("Chess", "/usr/bin/gnome-chess");
//!
//! // Any process source works; this one does nothing so the example stays self-contained.
//! struct NoopLauncher;
//! impl GameLauncher for NoopLauncher {
//!     fn launch(&self, _path: &str) -> Result<(), std::io::Error> {
//!         Ok(())
//!     }
//! }
//!
//! profile.launch(0, &NoopLauncher)?;
//! assert!(profile.game(0).unwrap().is_running());
//!
//! profile.stop_running();
//! println!("{}", profile.game(0).unwrap().formatted_play_time());
//! # Ok::<(), lib_game_launcher::error::LibraryError>(())
//! ```
//!
//! # Persistence
//!
//! Stores are persisted as plain text, one `[Profile: <username>]` block per profile
//! with a `name=path` line per game. Only names and paths survive the trip; running
//! state and play time reset on every load.
//!
//! ```rust,no_run
//! use lib_game_launcher::storage::StoreFile;
//!
//! let store_file = StoreFile::at_default_location().expect("no config directory");
//! let mut store = store_file.load_or_default();
//! store.create_profile("alice");
//! store_file.save(&store)?;
//! # Ok::<(), lib_game_launcher::error::LibraryError>(())
//! ```
//!
//! To launch games for real, use [`launcher::ProcessLauncher`], which spawns the game's
//! executable directly.

pub mod data;
pub mod error;
pub mod launcher;
pub mod storage;

mod parsers;
mod utils;
