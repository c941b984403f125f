use super::session;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_selection;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer};
use anyhow::{Result, anyhow};
use holocron_engine::BrowseEvent;

pub fn handle(ctx: &ExecutionContext, index: usize, filters: &FilterArgs) -> Result<()> {
    let mut browser = session::open(ctx, filters)?;

    let person = browser
        .current_page()
        .get(index)
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "No character at row {} of page {} ({} rows)",
                index,
                browser.window().page(),
                browser.current_page().len()
            )
        })?;

    let outcome = browser.dispatch(BrowseEvent::Select {
        index,
        locator: person.url.clone(),
    });
    let target = outcome
        .target
        .ok_or_else(|| anyhow!("Selection produced no navigation target"))?;

    let content = present_selection(&target, Some(&person));
    let tip = Guidance::new("Show details")
        .with_command(format!("holocron people show {}", target.id));

    ctx.renderer()
        .render(CommandResultViewModel::new(content).with_suggestion(tip))
}
