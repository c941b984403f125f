use crate::context::ExecutionContext;
use crate::presentation::presenters::present_person_detail;
use crate::presentation::{CommandResultViewModel, Renderer};
use anyhow::{Result, anyhow};
use holocron_engine::EntityStore;
use holocron_types::extract_id;

pub fn handle(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let store = EntityStore::from_snapshot(ctx.catalog()?);

    // Accept a full locator as well as a bare id
    let id = extract_id(id);
    let person = store
        .person_by_id(id)
        .ok_or_else(|| anyhow!("No character with id '{}'", id))?;

    let content = present_person_detail(&store, person);
    ctx.renderer().render(CommandResultViewModel::new(content))
}
