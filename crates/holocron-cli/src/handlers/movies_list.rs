use crate::context::ExecutionContext;
use crate::presentation::presenters::present_movie_list;
use crate::presentation::{CommandResultViewModel, Renderer};
use anyhow::Result;
use holocron_engine::EntityStore;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let store = EntityStore::from_snapshot(ctx.catalog()?);

    let content = present_movie_list(store.movies());
    ctx.renderer().render(CommandResultViewModel::new(content))
}
