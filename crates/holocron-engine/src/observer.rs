use crate::browser::EventKind;
use crate::filter::FilterState;
use crate::pagination::PageWindow;
use crate::selection::NavigationTarget;
use crate::store::EntityStore;
use crate::view::FilteredView;
use anyhow::Result;
use holocron_types::Person;

/// Reaction returned by observers to the browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Continue,
    Warn(String),
}

/// Read-only view of the session right after an event was processed
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub kind: EventKind,
    pub store: &'a EntityStore,
    pub filters: &'a FilterState,
    pub window: &'a PageWindow,
    pub view: &'a FilteredView,
    pub page: &'a [Person],
    pub target: Option<&'a NavigationTarget>,
}

impl ViewContext<'_> {
    pub fn total_pages(&self) -> usize {
        self.view.total_pages()
    }

    /// 1-based ordinal of the first row on the current page
    pub fn first_ordinal(&self) -> usize {
        crate::selection::resolve_ordinal(self.window.page(), self.window.page_size(), 0)
    }
}

/// Subscriber notified once per processed browse event
pub trait Observer {
    fn name(&self) -> &str;
    fn handle(&mut self, ctx: ViewContext) -> Result<Reaction>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowseEvent, Browser};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MockObserver {
        name: String,
        reactions: Vec<Result<Reaction, String>>,
        seen: Rc<RefCell<Vec<EventKind>>>,
    }

    impl Observer for MockObserver {
        fn name(&self) -> &str {
            &self.name
        }

        fn handle(&mut self, ctx: ViewContext) -> Result<Reaction> {
            let index = self.seen.borrow().len();
            self.seen.borrow_mut().push(ctx.kind);
            match self.reactions.get(index).cloned() {
                Some(Ok(reaction)) => Ok(reaction),
                Some(Err(msg)) => Err(anyhow::anyhow!(msg)),
                None => Ok(Reaction::Continue),
            }
        }
    }

    #[test]
    fn test_failing_observer_does_not_stop_others() {
        let first_seen = Rc::new(RefCell::new(Vec::new()));
        let second_seen = Rc::new(RefCell::new(Vec::new()));

        let mut browser = Browser::new(5);
        browser.subscribe(Box::new(MockObserver {
            name: "flaky".to_string(),
            reactions: vec![Err("boom".to_string()), Ok(Reaction::Warn("hm".to_string()))],
            seen: first_seen.clone(),
        }));
        browser.subscribe(Box::new(MockObserver {
            name: "steady".to_string(),
            reactions: vec![],
            seen: second_seen.clone(),
        }));

        browser.dispatch(BrowseEvent::NextPage);
        browser.dispatch(BrowseEvent::PrevPage);
        browser.dispatch(BrowseEvent::ResetFilters);

        assert_eq!(first_seen.borrow().len(), 3);
        assert_eq!(
            *second_seen.borrow(),
            vec![EventKind::Navigate, EventKind::Navigate, EventKind::Reset]
        );
    }
}
