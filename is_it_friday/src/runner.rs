//! Executes a single "is it Friday yet?" inquiry for the command.
use std::io::{self, Write};

use tracing::info;

use crate::cli::FridayConfig;
use crate::clock::Clock;
use crate::day::Answer;
use crate::error::Result;
use crate::inquiry::Inquiry;

/// Resolves today, asks, writes the answer and confirms any expectation.
///
/// The answer line is written before the expectation is checked, so a failed
/// confirmation still shows what was answered.
///
/// # Errors
///
/// Returns [`crate::error::FridayError::Io`] when writing fails and
/// [`crate::error::FridayError::Inquiry`] when the answer differs from
/// `config.expected`.
///
/// # Examples
///
/// ```
/// use is_it_friday::cli::FridayConfig;
/// use is_it_friday::clock::FixedClock;
/// use is_it_friday::day::{Answer, Day};
/// use is_it_friday::runner::run;
///
/// let config = FridayConfig::default();
/// let mut out = Vec::new();
/// let answer = run(&config, &FixedClock(Day::from("Friday")), &mut out)
///     .expect("writing to a Vec succeeds");
///
/// assert_eq!(answer, Answer::Yessir);
/// assert_eq!(out, b"Yessir\n");
/// ```
pub fn run<W: Write>(config: &FridayConfig, clock: &impl Clock, writer: &mut W) -> Result<Answer> {
    let mut inquiry = Inquiry::new();
    inquiry.set_today(config.resolve_today(clock));
    let answer = inquiry.ask()?;
    write_answer(writer, answer)?;
    if let Some(expected) = config.expected.as_deref() {
        inquiry.confirm(expected)?;
    }
    info!(answer = %answer, "answered whether it's Friday");
    Ok(answer)
}

fn write_answer<W: Write>(writer: &mut W, answer: Answer) -> io::Result<()> {
    writer.write_all(answer.as_str().as_bytes())?;
    writer.write_all(b"\n")
}

/// Runs the inquiry against standard output.
///
/// # Errors
///
/// See [`run`].
pub fn print_answer(config: &FridayConfig, clock: &impl Clock) -> Result<Answer> {
    let mut stdout = io::stdout().lock();
    run(config, clock, &mut stdout)
}
