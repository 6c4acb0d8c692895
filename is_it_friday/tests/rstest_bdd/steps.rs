//! Step definitions for the "is it Friday yet?" conversation.

use super::fixtures::FridayState;
use anyhow::{Result, anyhow, bail, ensure};
use is_it_friday::InquiryError;
use rstest_bdd_macros::{given, then, when};

#[given("today is Sunday")]
fn today_is_sunday(friday_state: &FridayState) {
    friday_state.inquiry.borrow_mut().set_today("Sunday");
}

#[given("today is Friday")]
fn today_is_friday(friday_state: &FridayState) {
    friday_state.inquiry.borrow_mut().set_today("Friday");
}

#[given("today is {day:string}")]
fn today_is(friday_state: &FridayState, day: &str) {
    friday_state.inquiry.borrow_mut().set_today(day);
}

#[when("I ask whether it's Friday yet")]
fn ask_whether_its_friday(friday_state: &FridayState) -> Result<()> {
    friday_state.inquiry.borrow_mut().ask()?;
    Ok(())
}

#[when("I try to ask whether it's Friday yet")]
fn try_to_ask(friday_state: &FridayState) -> Result<()> {
    match friday_state.inquiry.borrow_mut().ask() {
        Ok(answer) => bail!("expected the question to be refused, but was told {answer}"),
        Err(err) => friday_state.refusal.set(err),
    }
    Ok(())
}

#[then("I should be told {expected:string}")]
fn should_be_told(friday_state: &FridayState, expected: &str) -> Result<()> {
    friday_state.inquiry.borrow().confirm(expected)?;
    Ok(())
}

#[then("no answer has been given")]
fn no_answer_given(friday_state: &FridayState) -> Result<()> {
    let inquiry = friday_state.inquiry.borrow();
    ensure!(
        inquiry.answer().is_none(),
        "a stale answer {:?} survived the change of day",
        inquiry.answer()
    );
    ensure!(
        inquiry.confirm("Yessir") == Err(InquiryError::NotAsked),
        "confirming must be refused until the new day is asked about"
    );
    Ok(())
}

#[then("I am told today has not been set")]
fn told_today_unset(friday_state: &FridayState) -> Result<()> {
    let refusal = friday_state
        .refusal
        .get()
        .ok_or_else(|| anyhow!("the question must have been refused"))?;
    ensure!(
        refusal == InquiryError::TodayUnset,
        "unexpected refusal {refusal:?}"
    );
    Ok(())
}
