use std::time::Duration;

use thiserror::Error;

/// Rejected animator or store input. Raised at construction or activation,
/// never by a running animation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word {index} in the word list is empty")]
    EmptyWord { index: usize },
    #[error("{name} must be greater than zero (got {value:?})")]
    ZeroInterval { name: &'static str, value: Duration },
    #[error("target for skill `{skill}` is {value}%, expected 0-100")]
    TargetOutOfRange { skill: String, value: u32 },
    #[error("skill `{0}` is listed more than once")]
    DuplicateSkill(String),
    #[error("step size must be between 1 and 100 (got {0})")]
    InvalidStep(u32),
    #[error("unknown skill `{0}`")]
    UnknownSkill(String),
}

pub(crate) fn require_nonzero(
    name: &'static str,
    value: Duration,
) -> Result<Duration, InvalidConfiguration> {
    if value.is_zero() {
        Err(InvalidConfiguration::ZeroInterval { name, value })
    } else {
        Ok(value)
    }
}
