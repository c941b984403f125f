use crate::context::ExecutionContext;
use crate::presentation::presenters::present_sync;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};
use anyhow::Result;
use holocron_runtime::{CatalogSource, Resource};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let loaded = ctx.refresh_catalog()?;
    let cache = ctx.cache();

    let badge = match &loaded.source {
        CatalogSource::Stale { failed } => StatusBadge::warning(format!(
            "Fetch incomplete ({}); kept the cached catalog",
            endpoint_list(failed)
        )),
        CatalogSource::Partial { failed } => StatusBadge::warning(format!(
            "Fetch incomplete ({}); nothing was cached",
            endpoint_list(failed)
        )),
        CatalogSource::Fetched | CatalogSource::Cache => StatusBadge::success("Catalog synced"),
    };

    let result = CommandResultViewModel::new(present_sync(cache.path(), &loaded.snapshot))
        .with_badge(badge)
        .with_suggestion(Guidance::new("List characters").with_command("holocron people list"));

    ctx.renderer().render(result)
}

fn endpoint_list(failed: &[Resource]) -> String {
    failed
        .iter()
        .map(|resource| resource.path())
        .collect::<Vec<_>>()
        .join(", ")
}
