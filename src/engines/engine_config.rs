//! Engine options, set UCI-style by name/value pairs.

use crate::errors::{EngineError, EngineResult};
use crate::search::move_selector::TieBreakSentinel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub tie_break_sentinel: TieBreakSentinel,
    pub prefer_mates: bool,
    /// Include a rendered board in the info lines.
    pub log_board: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tie_break_sentinel: TieBreakSentinel::PreMoveBaseline,
            prefer_mates: true,
            log_board: false,
        }
    }
}

impl EngineConfig {
    /// Apply one option. Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        let v = value.trim().to_ascii_lowercase();
        let invalid = || EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Seed") {
            self.seed = match v.as_str() {
                "" | "none" | "random" => None,
                digits => Some(digits.parse::<u64>().map_err(|_| invalid())?),
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("TieBreakSentinel") {
            self.tie_break_sentinel = match v.as_str() {
                "baseline" | "pre-move" => TieBreakSentinel::PreMoveBaseline,
                "first-candidate" | "first" => TieBreakSentinel::FirstCandidate,
                _ => return Err(invalid()),
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("PreferMates") {
            self.prefer_mates = parse_bool(&v).ok_or_else(invalid)?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("LogBoard") {
            self.log_board = parse_bool(&v).ok_or_else(invalid)?;
            return Ok(());
        }

        Err(EngineError::UnknownOption(name.to_owned()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
