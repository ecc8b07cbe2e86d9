//! Observable events for querycalc
//!
//! Events are explicit and typed; their string form is the `event` key of
//! the log line.

use std::fmt;

/// Observable events during a query run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// T2×T3 join index built
    BcIndexBuilt,
    /// T1 grouped by `a`
    AGroupsBuilt,
    /// Ranked scan stopped early by the pruning bound
    RankingPruned,
    /// Ranked scan finished
    RankingComplete,
    /// Output file written
    ResultWritten,
    /// A table file failed to parse (FATAL)
    InputMalformed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BcIndexBuilt => "BC_INDEX_BUILT",
            Event::AGroupsBuilt => "A_GROUPS_BUILT",
            Event::RankingPruned => "RANKING_PRUNED",
            Event::RankingComplete => "RANKING_COMPLETE",
            Event::ResultWritten => "RESULT_WRITTEN",
            Event::InputMalformed => "INPUT_MALFORMED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::InputMalformed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
