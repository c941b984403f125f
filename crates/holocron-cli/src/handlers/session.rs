use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use anyhow::{Result, anyhow};
use holocron_engine::{BrowseEvent, Browser, EntityStore, FilterChange};

/// Turn filter flags into one batch of changes, resolving species and movie
/// queries against the loaded catalog
pub fn filter_changes(store: &EntityStore, args: &FilterArgs) -> Result<Vec<FilterChange>> {
    let mut changes = Vec::new();

    if let Some(query) = &args.species {
        let species = store
            .resolve_species(query)
            .ok_or_else(|| anyhow!("Unknown species '{}'", query))?;
        changes.push(FilterChange::Species(Some(species.url.clone())));
    }
    if let Some(query) = &args.movie {
        let movie = store
            .resolve_movie(query)
            .ok_or_else(|| anyhow!("Unknown movie '{}'", query))?;
        changes.push(FilterChange::Movie(Some(movie.url.clone())));
    }
    if let Some(from) = args.born_from {
        changes.push(FilterChange::BornFrom(Some(from.value())));
    }
    if let Some(to) = args.born_to {
        changes.push(FilterChange::BornTo(Some(to.value())));
    }

    Ok(changes)
}

/// Load the catalog, apply the flags as one filter transition and jump to
/// the requested page
pub fn open(ctx: &ExecutionContext, args: &FilterArgs) -> Result<Browser> {
    let snapshot = ctx.catalog()?;
    let page_size = ctx.config()?.page_size;
    let mut browser = Browser::with_snapshot(snapshot, page_size);

    let changes = filter_changes(browser.store(), args)?;
    if !changes.is_empty() {
        browser.dispatch(BrowseEvent::Batch(changes));
    }

    if args.page > 1 {
        browser.dispatch(BrowseEvent::GoToPage(args.page));
    }

    Ok(browser)
}
