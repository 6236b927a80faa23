use std::{path::PathBuf, time::Duration};

/// Renders a play time as `"{H}h {M}m {S}s"`, without zero padding. Hours keep counting
/// past 24, there is no day rollover.
pub fn format_play_time(play_time: Duration) -> String {
    let total = play_time.as_secs();
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}

/// Returns the default location of the persisted profile store, inside the platform's
/// config directory
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join("game_launcher").join("library.cfg"))
}

#[cfg(test)]
pub mod test {
    use test_case::test_case;

    use super::*;

    #[test_case(0, "0h 0m 0s")]
    #[test_case(59, "0h 0m 59s")]
    #[test_case(60, "0h 1m 0s")]
    #[test_case(61, "0h 1m 1s")]
    #[test_case(3599, "0h 59m 59s")]
    #[test_case(3600, "1h 0m 0s")]
    #[test_case(3725, "1h 2m 5s")]
    #[test_case(86400, "24h 0m 0s"; "no day rollover")]
    #[test_case(90061, "25h 1m 1s")]
    fn test_format_play_time(seconds: u64, expected: &str) {
        assert_eq!(format_play_time(Duration::from_secs(seconds)), expected);
    }

    #[test]
    fn test_default_store_path_ends_with_library_cfg() {
        if let Some(path) = default_store_path() {
            assert!(path.ends_with("game_launcher/library.cfg"));
        }
    }
}
