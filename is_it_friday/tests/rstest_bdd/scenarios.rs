//! Binds the feature files to the step registry.

use crate::fixtures::{FridayState, friday_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/is_it_friday.feature",
    fixtures = [friday_state: FridayState]
);
