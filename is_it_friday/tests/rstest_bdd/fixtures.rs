//! Fixtures shared by the `is_it_friday` scenarios.
//!
//! `Inquiry` is mutated by every step, so it lives in a `RefCell`; the refusal
//! captured by the negative path is `Clone` and uses a `Slot`.

use is_it_friday::{Inquiry, InquiryError};
use rstest::fixture;
use rstest_bdd::Slot;
use std::cell::RefCell;

/// Today's day and the last answer, scoped to one scenario.
#[derive(Debug, Default)]
pub struct FridayState {
    pub inquiry: RefCell<Inquiry>,
    pub refusal: Slot<InquiryError>,
}

/// Provides a fresh state for every scenario.
#[fixture]
pub fn friday_state() -> FridayState {
    FridayState::default()
}
