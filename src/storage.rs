//! Reading and writing a [`ProfileStore`] to its persisted, line-oriented text format.
//!
//! The format is a sequence of profile blocks, each a `[Profile: <username>]` header
//! followed by one `name=path` line per game and a trailing blank line:
//!
//! ```text
//! [Profile: alice]
//! Chess=/bin/chess
//! Go=/bin/go
//!
//! ```
//!
//! Only names and paths are persisted. Running state and accumulated play time always
//! reset on load.

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::{debug, error, trace, warn};

use crate::{
    data::{Profile, ProfileStore},
    error::LibraryError,
    parsers::{parse_library_line, parse_profile_header},
    utils::default_store_path,
};

/// Renders the whole store in the persisted text format, profiles in store order and
/// games in library order.
pub fn encode_store(store: &ProfileStore) -> String {
    let mut out = String::new();

    for profile in store.profiles() {
        out.push_str("[Profile: ");
        out.push_str(&profile.username);
        out.push_str("]\n");

        for game in profile.games() {
            out.push_str(&game.name);
            out.push('=');
            out.push_str(&game.path);
            out.push('\n');
        }

        out.push('\n');
    }

    out
}

/// Builds a fresh store from persisted text, replacing rather than merging state.
///
/// Lenient by design: blank lines are skipped anywhere, lines without `=` are skipped,
/// and a game line appearing before any profile header is skipped with a warning. Every
/// game comes back not running, with zero play time.
#[tracing::instrument(skip(content))]
pub fn decode_store(content: &str) -> ProfileStore {
    let mut profiles: Vec<Profile> = Vec::new();

    for line in content.lines() {
        if line.is_empty() {
            continue;
        }

        if let Ok((_, username)) = parse_profile_header(line) {
            trace!("Found profile block for {username:?}");
            profiles.push(Profile::new(username));
            continue;
        }

        let Ok((_, (name, path))) = parse_library_line(line) else {
            trace!("Skipping line without '=': {line:?}");
            continue;
        };

        match profiles.last_mut() {
            Some(profile) => profile.add_game(name, path),
            None => warn!("Skipping game line found before any profile header: {line:?}"),
        }
    }

    ProfileStore::from(profiles)
}

/// Handle to the file a [`ProfileStore`] persists to.
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreFile { path: path.into() }
    }

    /// Returns a handle to the store file at the platform's default location, e.g.
    /// `~/.config/game_launcher/library.cfg` on Linux.
    ///
    /// Returns `None` only when no config directory exists for the current user.
    pub fn at_default_location() -> Option<Self> {
        default_store_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole store to the file, creating parent directories as needed.
    #[tracing::instrument(skip(store))]
    pub fn save(&self, store: &ProfileStore) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }

        write(&self.path, encode_store(store)).map_err(|e| {
            error!("Error with writing profile store to {:?}:\n{e}", self.path);
            e
        })?;

        debug!("Saved {} profile(s) to {:?}", store.len(), self.path);
        Ok(())
    }

    /// Reads and decodes the whole store from the file.
    #[tracing::instrument]
    pub fn load(&self) -> Result<ProfileStore, LibraryError> {
        let content = read_to_string(&self.path).map_err(|e| {
            error!("Error with reading profile store at {:?}:\n{e}", self.path);
            e
        })?;

        let store = decode_store(&content);
        debug!(
            "Loaded {} profile(s) from {:?}: {}",
            store.len(),
            self.path,
            store.usernames().format(", ")
        );

        Ok(store)
    }

    /// Like [`StoreFile::load`], but degrades to an empty store when the file is missing
    /// or unreadable. In-memory state is never rolled back on a failed save, and a failed
    /// load starts the run from scratch.
    pub fn load_or_default(&self) -> ProfileStore {
        self.load().unwrap_or_else(|e| {
            warn!("Starting with an empty profile store: {e}");
            ProfileStore::new()
        })
    }
}
