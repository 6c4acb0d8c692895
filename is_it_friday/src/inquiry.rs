//! Per-scenario record of the day under test and the answer received.
//!
//! An [`Inquiry`] mirrors the three steps of the "is it Friday yet?"
//! conversation: record today, ask, then confirm what was heard.
use tracing::debug;

use crate::day::{Answer, Day, classify};
use crate::error::InquiryError;

/// Holds today's day and the most recent answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    today: Option<Day>,
    answer: Option<Answer>,
}

impl Inquiry {
    /// Creates an inquiry with neither a day nor an answer recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the day under test.
    ///
    /// Any answer from a previous day is discarded so it cannot be confirmed
    /// against the new day by mistake.
    pub fn set_today(&mut self, day: impl Into<Day>) {
        let day = day.into();
        debug!(today = %day, "recorded today");
        self.today = Some(day);
        self.answer = None;
    }

    /// Returns the recorded day, if any.
    #[must_use]
    pub const fn today(&self) -> Option<&Day> {
        self.today.as_ref()
    }

    /// Returns the recorded answer, if any.
    #[must_use]
    pub const fn answer(&self) -> Option<Answer> {
        self.answer
    }

    /// Asks whether the recorded day is Friday and records the answer.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::TodayUnset`] when no day has been recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use is_it_friday::day::Answer;
    /// use is_it_friday::inquiry::Inquiry;
    ///
    /// let mut inquiry = Inquiry::new();
    /// inquiry.set_today("Friday");
    /// assert_eq!(inquiry.ask(), Ok(Answer::Yessir));
    /// assert!(inquiry.confirm("Yessir").is_ok());
    /// ```
    pub fn ask(&mut self) -> Result<Answer, InquiryError> {
        let today = self.today.as_ref().ok_or(InquiryError::TodayUnset)?;
        let answer = classify(today);
        self.answer = Some(answer);
        Ok(answer)
    }

    /// Confirms that the recorded answer reads exactly `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`InquiryError::NotAsked`] before [`Inquiry::ask`] has run and
    /// [`InquiryError::AnswerMismatch`] when the texts differ.
    pub fn confirm(&self, expected: &str) -> Result<(), InquiryError> {
        let actual = self.answer.ok_or(InquiryError::NotAsked)?;
        confirm_answer(actual, expected)
    }
}

/// Compares `actual` with the `expected` reply text.
///
/// # Errors
///
/// Returns [`InquiryError::AnswerMismatch`] showing both values when they
/// differ.
pub fn confirm_answer(actual: Answer, expected: &str) -> Result<(), InquiryError> {
    if actual.as_str() == expected {
        return Ok(());
    }
    Err(InquiryError::AnswerMismatch {
        expected: expected.to_owned(),
        actual: actual.as_str().to_owned(),
    })
}
