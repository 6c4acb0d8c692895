//! Layers the typed command line over discovered configuration.
//!
//! The CLI layer generated for [`FridayConfig`] always reports `verbose` as
//! `false`, which would mask a file or environment `verbose = true`. It is
//! replaced by a layer built from [`CommandLine`], which omits flags that were
//! not given.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::sync::Arc;

use ortho_config::declarative::LayerComposition;
use ortho_config::{MergeLayer, MergeProvenance, OrthoError};

use super::{CommandLine, FridayConfig};
use crate::error::Result;

/// Resolves the configuration: defaults < file < environment < command line.
///
/// # Errors
///
/// Returns [`crate::error::FridayError::Configuration`] when discovery fails
/// or the merged layers cannot be deserialised.
pub fn load_config(cli: &CommandLine, program_name: impl AsRef<OsStr>) -> Result<FridayConfig> {
    let args = build_composition_args(program_name.as_ref(), cli.config_path.as_deref());
    let composition = FridayConfig::compose_layers_from_iter(args);
    let (mut layers, mut errors) = composition.into_parts();

    layers.retain(|layer| layer.provenance() != MergeProvenance::Cli);
    push_cli_overrides(cli, &mut layers, &mut errors);

    let resolved = LayerComposition::new(layers, errors)
        .into_merge_result(FridayConfig::merge_from_layers)?;
    Ok(resolved)
}

fn build_composition_args(program_name: &OsStr, config_override: Option<&Path>) -> Vec<OsString> {
    let mut args = vec![program_name.to_owned()];
    if let Some(path) = config_override {
        args.push(OsString::from("--config"));
        args.push(path.as_os_str().to_owned());
    }
    args
}

fn push_cli_overrides(
    cli: &CommandLine,
    layers: &mut Vec<MergeLayer<'static>>,
    errors: &mut Vec<Arc<OrthoError>>,
) {
    match ortho_config::sanitize_value(cli) {
        Ok(value) => layers.push(MergeLayer::cli(Cow::Owned(value))),
        Err(err) => errors.push(err),
    }
}
