use std::{
    io,
    time::{Duration, Instant},
};

use tracing::{debug, trace};

use crate::{error::LibraryError, utils::format_play_time};

/// Data structure which defines all relevant data about any particular game
///
/// Play time is tracked in whole seconds and only ever grows: each completed session adds
/// its elapsed time to the total. Neither the running state nor the total survives a trip
/// through the persisted store format.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Game {
    pub name: String,
    pub path: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    running_since: Option<Instant>,
    play_time: Duration,
}

impl Game {
    /// Returns a fresh record: not running, with no play time.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Game {
            name: name.into(),
            path: path.into(),
            running_since: None,
            play_time: Duration::ZERO,
        }
    }

    /// Marks the game as running from the current instant.
    ///
    /// Calling this on an already running game resets the session start, silently
    /// discarding the in-progress session's elapsed time.
    pub fn start_session(&mut self) {
        self.start_session_at(Instant::now());
    }

    pub fn start_session_at(&mut self, now: Instant) {
        self.running_since = Some(now);
    }

    /// Ends the current session, crediting its elapsed time (truncated to whole seconds)
    /// to the total play time.
    ///
    /// Returns the credited duration, or `None` if the game was not running.
    pub fn stop_session(&mut self) -> Option<Duration> {
        self.stop_session_at(Instant::now())
    }

    pub fn stop_session_at(&mut self, now: Instant) -> Option<Duration> {
        let started = self.running_since.take()?;
        let elapsed = Duration::from_secs(now.saturating_duration_since(started).as_secs());
        self.play_time += elapsed;
        Some(elapsed)
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Total play time over all completed sessions.
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    /// Total play time rendered as e.g. `2h 45m 8s`
    pub fn formatted_play_time(&self) -> String {
        format_play_time(self.play_time)
    }
}

/// Starts the external process for a game, given the path to its executable.
///
/// Implementations are fire-and-forget: the process is not supervised once started, and
/// session bookkeeping is driven entirely by explicit stops.
pub trait GameLauncher {
    fn launch(&self, path: &str) -> Result<(), io::Error>;
}

/// A named owner of an ordered library of games.
///
/// Games are addressed by position. Removal shifts later positions down by one, so held
/// indices must be re-resolved after any mutation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Profile {
    pub username: String,
    library: Vec<Game>,
}

impl Profile {
    pub fn new(username: impl Into<String>) -> Self {
        Profile {
            username: username.into(),
            library: Vec::new(),
        }
    }

    /// Appends a fresh game record to the library. Names are not checked for uniqueness.
    pub fn add_game(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.library.push(Game::new(name, path));
    }

    /// Removes and returns the game at the given position.
    ///
    /// A running game is removed like any other; its in-progress session is discarded
    /// without ever being credited.
    pub fn remove_game(&mut self, index: usize) -> Result<Game, LibraryError> {
        if index >= self.library.len() {
            return Err(LibraryError::GameNotFound(index));
        }
        Ok(self.library.remove(index))
    }

    pub fn clear_library(&mut self) {
        self.library.clear();
    }

    pub fn games(&self) -> &[Game] {
        &self.library
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        self.library.get(index)
    }

    pub fn game_mut(&mut self, index: usize) -> Option<&mut Game> {
        self.library.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    /// Returns the currently running game and its position, if any.
    pub fn running_game(&self) -> Option<(usize, &Game)> {
        self.library
            .iter()
            .enumerate()
            .find(|(_, game)| game.is_running())
    }

    /// Stops every running game in the library, crediting their sessions.
    ///
    /// Returns the position of the first game stopped, or `None` if nothing was running.
    pub fn stop_running(&mut self) -> Option<usize> {
        self.stop_running_at(Instant::now())
    }

    pub fn stop_running_at(&mut self, now: Instant) -> Option<usize> {
        let mut stopped = None;
        for (index, game) in self.library.iter_mut().enumerate() {
            if game.stop_session_at(now).is_some() {
                trace!("Stopped session for '{}' at index {index}", game.name);
                stopped.get_or_insert(index);
            }
        }
        stopped
    }

    /// Launches the game at the given position through the provided launcher.
    ///
    /// At most one game runs at a time: once the launcher confirms the start, any game
    /// already running is stopped (crediting its session) and the chosen game's session
    /// begins. A failed launch leaves the library completely untouched.
    pub fn launch(
        &mut self,
        index: usize,
        launcher: &dyn GameLauncher,
    ) -> Result<(), LibraryError> {
        self.launch_at(index, launcher, Instant::now())
    }

    pub fn launch_at(
        &mut self,
        index: usize,
        launcher: &dyn GameLauncher,
        now: Instant,
    ) -> Result<(), LibraryError> {
        let game = self
            .library
            .get(index)
            .ok_or(LibraryError::GameNotFound(index))?;

        debug!("Launching '{}' from {:?}", game.name, game.path);
        if let Err(source) = launcher.launch(&game.path) {
            return Err(LibraryError::Launch {
                name: game.name.clone(),
                source,
            });
        }

        self.stop_running_at(now);
        // The position is still valid: stopping sessions never removes records
        self.library[index].start_session_at(now);
        Ok(())
    }
}

/// An ordered collection of user profiles, addressed by position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new profile with an empty library and returns it.
    ///
    /// Duplicate usernames are permitted; profiles are addressed by position, not name.
    pub fn create_profile(&mut self, username: impl Into<String>) -> &mut Profile {
        let index = self.profiles.len();
        self.profiles.push(Profile::new(username));
        &mut self.profiles[index]
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn profile_mut(&mut self, index: usize) -> Option<&mut Profile> {
        self.profiles.get_mut(index)
    }

    /// Returns the profile at the given position, or [`LibraryError::ProfileNotFound`] if
    /// the position is out of range.
    pub fn select_profile(&mut self, index: usize) -> Result<&mut Profile, LibraryError> {
        self.profiles
            .get_mut(index)
            .ok_or(LibraryError::ProfileNotFound(index))
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.username.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl From<Vec<Profile>> for ProfileStore {
    fn from(profiles: Vec<Profile>) -> Self {
        ProfileStore { profiles }
    }
}
