//! Asks whether today is Friday.
//!
//! [`day::classify`] answers `"Yessir"` for exactly `"Friday"` and `"Nope"` for
//! anything else. [`inquiry::Inquiry`] records the day and answer for a single
//! behavioural scenario, and the remaining modules wire the same inquiry into
//! the `is-it-friday` command.

pub mod cli;
pub mod clock;
pub mod day;
pub mod error;
pub mod inquiry;
pub mod runner;

pub use day::{Answer, Day, classify};
pub use error::{FridayError, InquiryError};
pub use inquiry::Inquiry;
