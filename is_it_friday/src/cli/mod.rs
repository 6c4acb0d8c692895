//! Configuration for the `is-it-friday` command.
//!
//! [`FridayConfig`] binds defaults, configuration files and the environment via
//! `OrthoConfig`; [`CommandLine`] carries the flags the user actually typed and
//! is layered over them by [`load_config`], so `IS_IT_FRIDAY_TODAY=Friday` and
//! `--today Friday` are interchangeable.
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::day::Day;

mod loading;

pub use loading::load_config;

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip hooks receive references to field values"
)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Command-line surface of `is-it-friday`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Parser, Serialize)]
#[command(
    name = "is-it-friday",
    bin_name = "is-it-friday",
    about = "Answers whether today is Friday",
    version
)]
pub struct CommandLine {
    /// Overrides configuration discovery with an explicit file path.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
    /// Day to ask about. Defaults to the current weekday.
    #[arg(long, short = 't', value_name = "DAY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
    /// Answer the command must give; a different answer fails the run.
    #[arg(long, short = 'e', value_name = "ANSWER")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Emits debug-level diagnostics on standard error.
    #[arg(long, short = 'v', action = ArgAction::SetTrue)]
    #[serde(skip_serializing_if = "crate::cli::is_false")]
    pub verbose: bool,
}

/// Resolved settings for a single run of the command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(
    prefix = "IS_IT_FRIDAY_",
    discovery(
        app_name = "is_it_friday",
        config_file_name = "is_it_friday.toml",
        dotfile_name = ".is_it_friday.toml",
        project_file_name = ".is_it_friday.toml",
        config_cli_long = "config",
        config_cli_short = 'c',
        config_cli_visible = true,
    )
)]
pub struct FridayConfig {
    /// Day to ask about. Defaults to the current weekday.
    pub today: Option<String>,
    /// Answer the command must give; a different answer fails the run.
    pub expected: Option<String>,
    /// Emits debug-level diagnostics on standard error.
    #[serde(skip_serializing_if = "crate::cli::is_false")]
    #[ortho_config(default = false)]
    pub verbose: bool,
}

impl FridayConfig {
    /// Returns the configured day, or asks `clock` when none was supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use is_it_friday::cli::FridayConfig;
    /// use is_it_friday::clock::FixedClock;
    /// use is_it_friday::day::Day;
    ///
    /// let clock = FixedClock(Day::from("Sunday"));
    /// let mut config = FridayConfig::default();
    /// assert_eq!(config.resolve_today(&clock), Day::from("Sunday"));
    ///
    /// config.today = Some(String::from("Friday"));
    /// assert_eq!(config.resolve_today(&clock), Day::from("Friday"));
    /// ```
    #[must_use]
    pub fn resolve_today(&self, clock: &impl Clock) -> Day {
        self.today
            .as_deref()
            .map_or_else(|| clock.today(), Day::from)
    }
}
