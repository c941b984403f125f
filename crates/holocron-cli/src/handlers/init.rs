use crate::context::ExecutionContext;
use crate::presentation::presenters::present_init;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};
use anyhow::Result;
use holocron_runtime::Config;

pub fn handle(
    ctx: &ExecutionContext,
    base_url: Option<String>,
    page_size: Option<usize>,
) -> Result<()> {
    let config_path = ctx.config_path();
    let mut config = Config::load_from(&config_path)?;

    if let Some(base_url) = base_url {
        config = config.base_url(base_url);
    }
    if let Some(page_size) = page_size {
        config = config.page_size(page_size);
    }

    config.save_to(&config_path)?;
    tracing::info!(path = %config_path.display(), "configuration saved");

    let result = CommandResultViewModel::new(present_init(&config_path, &config))
        .with_badge(StatusBadge::success("Configuration saved"))
        .with_suggestion(Guidance::new("Download the catalog").with_command("holocron sync"));

    ctx.renderer().render(result)
}
