//! Records exchanged with callers of the simulation front-ends.

use std::fmt;

/// Small ordered key/value record returned alongside observations.
///
/// The learning environment currently leaves it empty; it exists so
/// callers can rely on a stable shape.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Info {
    entries: Vec<(String, InfoValue)>,
}

/// Value stored in an [`Info`] record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Info {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`.
    pub fn insert<K: Into<String>, V: Into<InfoValue>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<bool> for InfoValue {
    fn from(v: bool) -> Self {
        InfoValue::Bool(v)
    }
}

impl From<i64> for InfoValue {
    fn from(v: i64) -> Self {
        InfoValue::Int(v)
    }
}

/// Saturates at `i64::MAX`.
impl From<u64> for InfoValue {
    fn from(v: u64) -> Self {
        InfoValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for InfoValue {
    fn from(v: f64) -> Self {
        InfoValue::Float(v)
    }
}

impl From<&str> for InfoValue {
    fn from(v: &str) -> Self {
        InfoValue::Text(v.to_string())
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult<O = Vec<f64>> {
    /// Observation after the step.
    pub observation: O,
    /// Scalar reward for the step.
    pub reward: f64,
    /// The episode ended on its own (collision or goal).
    pub terminated: bool,
    /// The episode was cut off by the step budget.
    pub truncated: bool,
    pub info: Info,
}

impl<O> StepResult<O> {
    /// Whether the caller must reset before stepping again.
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Why an episode terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalCause {
    Collision,
    GoalReached,
}

/// Lifecycle state of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EpisodeStatus {
    Active,
    Terminated(TerminalCause),
    Truncated,
}

impl EpisodeStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, EpisodeStatus::Active)
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeStatus::Active => write!(f, "active"),
            EpisodeStatus::Terminated(TerminalCause::Collision) => write!(f, "collision"),
            EpisodeStatus::Terminated(TerminalCause::GoalReached) => write!(f, "goal"),
            EpisodeStatus::Truncated => write!(f, "truncated"),
        }
    }
}
