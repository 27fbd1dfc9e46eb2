//! History controller state

use crate::history::{ForwardEntry, ForwardStack};
use crate::location::Location;
use crate::trail::BreadcrumbEntry;
use crate::NavigationSource;

/// A back/forward request the router has not yet reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReplay {
    /// Why the request was made
    pub source: NavigationSource,
    /// Location the router is expected to report
    pub target: Location,
}

/// Everything a mounted controller remembers between events.
#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    /// Current trail; replaced wholesale on every processed location
    trail: Vec<BreadcrumbEntry>,
    /// Pages available to `go_forward`
    forward: ForwardStack,
    /// Last processed location, used to skip duplicate notifications
    last_location: Option<Location>,
    /// Back/forward request in flight
    pending: Option<PendingReplay>,
}

impl HistoryState {
    /// Empty state; no location processed yet
    pub fn new(max_forward_depth: usize) -> Self {
        Self {
            trail: Vec::new(),
            forward: ForwardStack::with_max_size(max_forward_depth),
            last_location: None,
            pending: None,
        }
    }

    pub fn trail(&self) -> &[BreadcrumbEntry] {
        &self.trail
    }

    pub fn forward_stack(&self) -> &ForwardStack {
        &self.forward
    }

    pub fn last_location(&self) -> Option<&Location> {
        self.last_location.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingReplay> {
        self.pending.as_ref()
    }

    /// Last trail entry
    pub fn current_page(&self) -> Option<&BreadcrumbEntry> {
        self.trail.last()
    }

    /// Second-to-last trail entry
    pub fn parent_page(&self) -> Option<&BreadcrumbEntry> {
        self.trail.len().checked_sub(2).map(|index| &self.trail[index])
    }

    pub fn can_go_back(&self) -> bool {
        self.trail.len() > 1
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Whether `location` repeats the last processed one
    pub fn is_duplicate(&self, location: &Location) -> bool {
        self.last_location
            .as_ref()
            .is_some_and(|last| last.same_place(location))
    }

    /// Install the trail computed for `location`.
    pub(crate) fn replace_trail(&mut self, location: Location, trail: Vec<BreadcrumbEntry>) {
        self.last_location = Some(location);
        self.trail = trail;
    }

    pub(crate) fn push_forward(&mut self, entry: ForwardEntry) {
        self.forward.push(entry);
    }

    pub(crate) fn pop_forward(&mut self) -> Option<ForwardEntry> {
        self.forward.pop()
    }

    pub(crate) fn clear_forward(&mut self) {
        self.forward.clear();
    }

    pub(crate) fn set_pending(&mut self, pending: PendingReplay) {
        self.pending = Some(pending);
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingReplay> {
        self.pending.take()
    }

    /// Forget everything except the forward-stack bound
    pub(crate) fn reset(&mut self) {
        self.trail.clear();
        self.forward.clear();
        self.last_location = None;
        self.pending = None;
    }
}
