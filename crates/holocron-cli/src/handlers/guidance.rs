use crate::context::ExecutionContext;
use crate::presentation::presenters::present_guidance;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_exists = ctx.config_path().exists();
    let cache_exists = ctx.cache().exists();
    let content = present_guidance(ctx.data_dir(), config_exists, cache_exists);

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::info("holocron"));
    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Write a configuration file").with_command("holocron init"),
        );
    }
    if !cache_exists {
        result = result.with_suggestion(
            Guidance::new("Download the catalog").with_command("holocron sync"),
        );
    }
    result = result.with_suggestion(
        Guidance::new("Start browsing").with_command("holocron browse"),
    );

    ctx.renderer().render(result)
}
