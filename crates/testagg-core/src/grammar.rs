//! Line grammar for test-event logs.
//!
//! Two line shapes are recognized:
//!
//! ```text
//! testStarted id="1" name="test1"
//! testFinished id="1" duration="100" result=OK
//! testFinished id="1" duration="100" result=FAIL error="Error Message"
//! ```
//!
//! Any amount of whitespace is allowed around `=`. The pattern may appear
//! anywhere in the line.

use crate::model::{FinishEvent, LineEvent, StartEvent, TestOutcome};
use regex::Regex;
use std::sync::OnceLock;

const START_PATTERN: &str = r#"testStarted id\s*=\s*"([0-9]+)" name\s*=\s*"(.+?)""#;
const FINISH_PATTERN: &str = r#"testFinished id\s*=\s*"([0-9]+)" duration\s*=\s*"([0-9]+)" result\s*=\s*([A-Za-z0-9_]+)(?: error\s*=\s*"(.+?)")?"#;

/// Compiled start/finish patterns.
#[derive(Debug, Clone)]
pub struct EventGrammar {
    start: Regex,
    finish: Regex,
}

impl EventGrammar {
    pub fn new() -> Self {
        // Both patterns are constants covered by tests.
        Self {
            start: Regex::new(START_PATTERN).expect("start pattern compiles"),
            finish: Regex::new(FINISH_PATTERN).expect("finish pattern compiles"),
        }
    }

    /// Process-wide grammar instance.
    pub fn shared() -> &'static EventGrammar {
        static GRAMMAR: OnceLock<EventGrammar> = OnceLock::new();
        GRAMMAR.get_or_init(EventGrammar::new)
    }

    /// Classify one line. A line carrying both shapes is a start.
    pub fn classify(&self, line: &str) -> LineEvent {
        if let Some(caps) = self.start.captures(line) {
            return LineEvent::Start(StartEvent {
                id: caps[1].to_string(),
                name: caps[2].to_string(),
            });
        }

        if let Some(caps) = self.finish.captures(line) {
            // Digits only, so the sole failure mode is overflow.
            let Ok(duration_ms) = caps[2].parse::<u64>() else {
                return LineEvent::Unrecognized;
            };
            return LineEvent::Finish(FinishEvent {
                id: caps[1].to_string(),
                duration_ms,
                result: TestOutcome::from_word(&caps[3]),
                error: caps.get(4).map(|m| m.as_str().to_string()),
            });
        }

        LineEvent::Unrecognized
    }
}

impl Default for EventGrammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`EventGrammar::shared`] + [`EventGrammar::classify`].
pub fn classify(line: &str) -> LineEvent {
    EventGrammar::shared().classify(line)
}
