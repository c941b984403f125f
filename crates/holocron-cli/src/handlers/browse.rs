use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_people_page, present_selection};
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer};
use anyhow::{Result, anyhow};
use holocron_engine::{
    BrowseEvent, Browser, FilterChange, FilterDimension, Observer, Reaction, ViewContext,
};
use holocron_types::BirthYear;
use is_terminal::IsTerminal;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  next | n              next page
  prev | p              previous page
  species <query>       filter by species name, id or locator
  movie <query>         filter by movie title, id or locator
  from <year>           born no earlier than (e.g. 41BBY, -41)
  to <year>             born no later than (e.g. 19BBY, 4ABY)
  clear <dimension>     drop one filter (species, movie, from, to)
  reset                 drop every filter
  select <row>          select a 0-based row on the current page
  help                  show this text
  quit | q              leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Next,
    Prev,
    Species(String),
    Movie(String),
    From(String),
    To(String),
    Clear(String),
    Reset,
    Select(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim().to_string()),
        None => (line, String::new()),
    };

    match (word.to_ascii_lowercase().as_str(), rest.is_empty()) {
        ("", _) => ReplCommand::Empty,
        ("next" | "n", true) => ReplCommand::Next,
        ("prev" | "p", true) => ReplCommand::Prev,
        ("species", false) => ReplCommand::Species(rest),
        ("movie" | "film", false) => ReplCommand::Movie(rest),
        ("from", false) => ReplCommand::From(rest),
        ("to", false) => ReplCommand::To(rest),
        ("clear", false) => ReplCommand::Clear(rest),
        ("reset", true) => ReplCommand::Reset,
        ("select" | "s", false) => ReplCommand::Select(rest),
        ("help" | "?", true) => ReplCommand::Help,
        ("quit" | "exit" | "q", true) => ReplCommand::Quit,
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

/// Translate one command into a browse event, resolving queries against the
/// loaded catalog
fn to_event(browser: &Browser, command: ReplCommand) -> Result<Option<BrowseEvent>> {
    let event = match command {
        ReplCommand::Next => BrowseEvent::NextPage,
        ReplCommand::Prev => BrowseEvent::PrevPage,
        ReplCommand::Species(query) => {
            let species = browser
                .store()
                .resolve_species(&query)
                .ok_or_else(|| anyhow!("Unknown species '{}'", query))?;
            BrowseEvent::Filter(FilterChange::Species(Some(species.url.clone())))
        }
        ReplCommand::Movie(query) => {
            let movie = browser
                .store()
                .resolve_movie(&query)
                .ok_or_else(|| anyhow!("Unknown movie '{}'", query))?;
            BrowseEvent::Filter(FilterChange::Movie(Some(movie.url.clone())))
        }
        ReplCommand::From(year) => {
            let year: BirthYear = year.parse()?;
            BrowseEvent::Filter(FilterChange::BornFrom(Some(year.value())))
        }
        ReplCommand::To(year) => {
            let year: BirthYear = year.parse()?;
            BrowseEvent::Filter(FilterChange::BornTo(Some(year.value())))
        }
        ReplCommand::Clear(dimension) => {
            let dimension: FilterDimension = dimension.parse().map_err(|e: String| anyhow!(e))?;
            BrowseEvent::Filter(FilterChange::clear(dimension))
        }
        ReplCommand::Reset => BrowseEvent::ResetFilters,
        ReplCommand::Select(row) => {
            let index: usize = row
                .parse()
                .map_err(|_| anyhow!("Row must be a number, got '{}'", row))?;
            let person = browser
                .current_page()
                .get(index)
                .ok_or_else(|| anyhow!("No character at row {} on this page", index))?;
            BrowseEvent::Select {
                index,
                locator: person.url.clone(),
            }
        }
        ReplCommand::Unknown(line) => {
            return Err(anyhow!("Unknown command '{}' (try 'help')", line));
        }
        ReplCommand::Help | ReplCommand::Quit | ReplCommand::Empty => return Ok(None),
    };
    Ok(Some(event))
}

/// Re-renders the page, or the selection, after every processed event
struct PageObserver {
    renderer: ConsoleRenderer,
}

impl Observer for PageObserver {
    fn name(&self) -> &str {
        "page-renderer"
    }

    fn handle(&mut self, ctx: ViewContext) -> Result<Reaction> {
        if let Some(target) = ctx.target {
            let person = ctx.store.person_by_id(&target.id);
            self.renderer
                .render(CommandResultViewModel::new(present_selection(target, person)))?;
            return Ok(Reaction::Continue);
        }

        let content = present_people_page(ctx.store, ctx.filters, ctx.window, ctx.view);
        let past_end = content.people.is_empty() && content.count > 0;
        let page = content.page;
        self.renderer.render(CommandResultViewModel::new(content))?;

        if past_end {
            return Ok(Reaction::Warn(format!("page {} is past the end of the list", page)));
        }
        Ok(Reaction::Continue)
    }
}

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let snapshot = ctx.catalog()?;
    let page_size = ctx.config()?.page_size;
    let renderer = ctx.renderer().json_lines();
    let json = renderer.is_json();

    let mut browser = Browser::new(page_size);
    browser.subscribe(Box::new(PageObserver { renderer }));
    browser.dispatch(BrowseEvent::Loaded(snapshot));

    let interactive = std::io::stdin().is_terminal();
    if interactive && !json {
        println!("\nType 'help' for commands.");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("holocron> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let command = parse_command(&line?);

        match command {
            ReplCommand::Quit => break,
            // stdout carries only JSON frames in json mode
            ReplCommand::Help if json => eprint!("{}", HELP),
            ReplCommand::Help => print!("{}", HELP),
            _ => {}
        }

        match to_event(&browser, command) {
            Ok(Some(event)) => {
                browser.dispatch(event);
            }
            Ok(None) => {}
            Err(err) => eprintln!("{}", err),
        }
    }

    tracing::debug!(derivations = browser.derivations(), "browse session ended");
    Ok(())
}
