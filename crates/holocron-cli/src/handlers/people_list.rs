use super::session;
use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{people_page_guidance, present_people_page};
use crate::presentation::{CommandResultViewModel, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, filters: &FilterArgs) -> Result<()> {
    let browser = session::open(ctx, filters)?;

    let content = present_people_page(
        browser.store(),
        browser.filters(),
        browser.window(),
        browser.view(),
    );
    let tips = people_page_guidance(&content);

    ctx.renderer()
        .render(CommandResultViewModel::new(content).with_suggestions(tips))
}
