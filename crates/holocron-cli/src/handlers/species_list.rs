use crate::context::ExecutionContext;
use crate::presentation::presenters::present_species_list;
use crate::presentation::{CommandResultViewModel, Renderer};
use anyhow::Result;
use holocron_engine::EntityStore;

pub fn handle(ctx: &ExecutionContext, search: Option<String>) -> Result<()> {
    let store = EntityStore::from_snapshot(ctx.catalog()?);
    let matches = store.search_species(search.as_deref().unwrap_or(""));

    let content = present_species_list(search, &matches);
    ctx.renderer().render(CommandResultViewModel::new(content))
}
