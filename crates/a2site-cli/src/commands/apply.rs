//! Apply/Enable/Disable command implementation

use a2site_core::{ConfigManager, SiteAction, SiteRequest, SiteToggler};
use anyhow::Result;

use crate::output::OutputContext;
use crate::ExitCode;

pub fn run(config: &ConfigManager, request: SiteRequest, ctx: &OutputContext) -> Result<ExitCode> {
    let settings = config.load()?;
    let toggler = SiteToggler::from_settings(&settings);

    let result = toggler.apply(&request)?;
    let action = request.state.action();

    if ctx.json {
        ctx.json(&result)?;
    } else if result.changed {
        let done = match action {
            SiteAction::Enable => "enabled",
            SiteAction::Disable => "disabled",
        };
        ctx.success(&format!("Site '{}' {}", request.name, done));
    } else {
        ctx.info(&format!("Site '{}' {}", request.name, action.already_phrase()));
    }

    Ok(ExitCode::Success)
}
