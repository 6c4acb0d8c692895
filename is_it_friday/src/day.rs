//! Day classification.
//!
//! A [`Day`] is whatever text the caller supplies; no calendar validation is
//! applied. [`classify`] maps it onto one of the two [`Answer`] literals.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The only day that earns [`Answer::Yessir`].
pub const FRIDAY: &str = "Friday";

/// Free-form name of a day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Day(String);

impl Day {
    /// Wraps `name` without validating it.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the day name exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reports whether the name is exactly `Friday`, respecting case.
    #[must_use]
    pub fn is_friday(&self) -> bool {
        self.0 == FRIDAY
    }
}

impl From<&str> for Day {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Day {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Day {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reply to "is it Friday yet?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// Today is Friday.
    Yessir,
    /// Any other day, or no recognisable day at all.
    Nope,
}

impl Answer {
    /// Returns the literal reply text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yessir => "Yessir",
            Self::Nope => "Nope",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers whether `day` is Friday.
///
/// # Examples
///
/// ```
/// use is_it_friday::day::{Answer, Day, classify};
///
/// assert_eq!(classify(&Day::from("Friday")), Answer::Yessir);
/// assert_eq!(classify(&Day::from("friday")), Answer::Nope);
/// assert_eq!(classify(&Day::from("")), Answer::Nope);
/// ```
#[must_use]
pub fn classify(day: &Day) -> Answer {
    let answer = if day.is_friday() {
        Answer::Yessir
    } else {
        Answer::Nope
    };
    debug!(day = %day, answer = %answer, "classified day");
    answer
}
