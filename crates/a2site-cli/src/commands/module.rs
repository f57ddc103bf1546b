//! Module command implementation
//!
//! Speaks the orchestration-module convention: a JSON object of arguments
//! in, exactly one JSON object out, whether the run succeeded or not.

use a2site_core::{ConfigManager, SiteRequest, SiteToggler};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;

use crate::ExitCode;

#[derive(Serialize)]
struct Failure {
    failed: bool,
    msg: String,
}

pub fn run(args: &str) -> Result<ExitCode> {
    match execute(args) {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result)?);
            Ok(ExitCode::Success)
        }
        Err(e) => {
            let failure = Failure {
                failed: true,
                msg: format!("{:#}", e),
            };
            println!("{}", serde_json::to_string(&failure)?);
            Ok(ExitCode::GeneralError)
        }
    }
}

fn execute(args: &str) -> Result<a2site_core::ToggleResult> {
    let raw = read_args(args)?;
    let request: SiteRequest =
        serde_json::from_str(&raw).context("Invalid module arguments")?;

    tracing::debug!(site = %request.name, state = %request.state, "module invoked");

    let settings = ConfigManager::with_defaults()?.load()?;
    let toggler = SiteToggler::from_settings(&settings);

    Ok(toggler.apply(&request)?)
}

fn read_args(args: &str) -> Result<String> {
    if args == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read module arguments from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(args)
            .with_context(|| format!("Failed to read module arguments from {}", args))
    }
}
