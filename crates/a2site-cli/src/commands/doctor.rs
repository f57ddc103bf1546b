//! Doctor command implementation

use a2site_core::{ConfigManager, SiteAction, SiteToggler};
use anyhow::Result;
use serde::Serialize;

use crate::output::OutputContext;
use crate::ExitCode;

#[derive(Serialize)]
struct Check {
    name: String,
    status: String,
    message: String,
}

pub fn run(config: &ConfigManager, ctx: &OutputContext) -> Result<ExitCode> {
    let settings = config.load()?;
    let toggler = SiteToggler::from_settings(&settings);

    let checks: Vec<Check> = [SiteAction::Enable, SiteAction::Disable]
        .into_iter()
        .map(|action| {
            let name = settings.binary_for(action).to_string();
            match toggler.resolve_binary(action) {
                Ok(path) => Check {
                    name,
                    status: "pass".to_string(),
                    message: path.display().to_string(),
                },
                Err(_) => Check {
                    name,
                    status: "fail".to_string(),
                    message: "not found".to_string(),
                },
            }
        })
        .collect();

    let all_passed = checks.iter().all(|c| c.status == "pass");

    if ctx.json {
        ctx.json(&serde_json::json!({
            "checks": checks,
            "all_passed": all_passed
        }))?;
    } else {
        println!("System Diagnostics");
        println!("==================");
        println!();

        for check in &checks {
            let indicator = ctx.found_indicator(check.status == "pass");
            println!("{} {}: {}", indicator, check.name, check.message);
        }

        println!();
        if all_passed {
            ctx.success("All checks passed");
        } else {
            ctx.error("Some checks failed; this system may not use a2ensite/a2dissite to manage Apache");
        }
    }

    if all_passed {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::BinaryNotFound)
    }
}
