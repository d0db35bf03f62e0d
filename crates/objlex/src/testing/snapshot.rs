//! # Snapshot Testing Utilities
//!
//! ## Usage
//!
//! ```rust,ignore
//! use objlex::testing::SnapshotTester;
//!
//! let tester = SnapshotTester::new("tests/snapshots");
//! lexer.lex("12 -24 65")?;
//! tester.assert_tokens_snapshot("numbers", &lexer);
//! ```

use crate::error::LexError;
use crate::lexer::Lexer;
use std::path::PathBuf;

/// Snapshot tester for lexer output
pub struct SnapshotTester {
    snapshot_dir: PathBuf,
    update_mode: bool,
}

impl SnapshotTester {
    /// Create a snapshot tester reading from `snapshot_dir`.
    ///
    /// Setting `UPDATE_SNAPSHOTS` or `OBJLEX_UPDATE_SNAPSHOTS` rewrites the
    /// snapshots instead of comparing.
    #[must_use]
    pub fn new(snapshot_dir: impl Into<PathBuf>) -> Self {
        let update_mode = std::env::var("UPDATE_SNAPSHOTS").is_ok()
            || std::env::var("OBJLEX_UPDATE_SNAPSHOTS").is_ok();
        Self {
            snapshot_dir: snapshot_dir.into(),
            update_mode,
        }
    }

    /// Assert that the lexer's unconsumed tokens match the snapshot
    ///
    /// # Panics
    /// Panics if the snapshot doesn't match (and update mode is disabled)
    pub fn assert_tokens_snapshot<T>(&self, name: &str, lexer: &Lexer<T>) {
        self.check_snapshot(name, &lexer.tokens_string());
    }

    /// Assert that the resolved candidates of `text` match the snapshot
    ///
    /// # Panics
    /// Panics if resolving fails or the snapshot doesn't match
    pub fn assert_candidates_snapshot<T>(&self, name: &str, lexer: &Lexer<T>, text: &str) {
        match lexer.candidates_string(text) {
            Ok(actual) => self.check_snapshot(name, &actual),
            Err(err) => panic!("Resolving candidates for snapshot '{name}' failed: {err}"),
        }
    }

    /// Assert that a lex error renders as the snapshot
    ///
    /// # Panics
    /// Panics if the snapshot doesn't match (and update mode is disabled)
    pub fn assert_error_snapshot(&self, name: &str, error: &LexError) {
        self.check_snapshot(name, &format!("{error}\n"));
    }

    fn check_snapshot(&self, name: &str, actual: &str) {
        let path = self.snapshot_dir.join(format!("{name}.snap"));

        if self.update_mode {
            std::fs::create_dir_all(&self.snapshot_dir).ok();
            std::fs::write(&path, actual).expect("Failed to write snapshot");
            return;
        }

        if path.exists() {
            let expected = std::fs::read_to_string(&path).expect("Failed to read snapshot");
            assert!(
                actual == expected,
                "Snapshot mismatch for '{name}':\n\
                --- Expected ---\n{expected}\n\
                --- Actual ---\n{actual}\n\
                \n\
                To update snapshots, run with UPDATE_SNAPSHOTS=1"
            );
        } else {
            panic!(
                "Snapshot '{name}' not found at {}.\n\
                To create it, run with UPDATE_SNAPSHOTS=1",
                path.display()
            );
        }
    }
}
