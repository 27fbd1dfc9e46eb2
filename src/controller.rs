//! History controller
//!
//! Keeps the current trail in step with the host router and layers logical
//! back/forward on top of it. The controller never touches browser history
//! itself: it asks a [`NavigationSink`] to change the URL and waits for the
//! router to report the resulting location through [`HistoryController::sync`].
//!
//! ```
//! use portal_breadcrumbs::{HistoryController, Location, NavigationConfig, NavigationRequest};
//!
//! let mut controller =
//!     HistoryController::new(NavigationConfig::portal(), Vec::<NavigationRequest>::new());
//! controller.sync(Location::parse("/schools/cs"));
//! assert!(controller.can_go_back());
//!
//! controller.go_back();
//! let request: NavigationRequest = controller.sink_mut().remove(0);
//! assert_eq!(request.to, "/schools");
//!
//! controller.sync(request.to_location());
//! assert!(controller.can_go_forward());
//! ```

use crate::config::NavigationConfig;
use crate::error::ConfigResult;
use crate::history::{ForwardEntry, ForwardStack};
use crate::location::{Location, NavigationRequest};
use crate::state::{HistoryState, PendingReplay};
use crate::trail::{BreadcrumbEntry, TrailBuilder};
use crate::{debug_log, trace_log, NavigationSource, TrailChangeEvent};

// ============================================================================
// NavigationSink
// ============================================================================

/// Where the controller sends URL changes.
///
/// Implemented for closures taking a [`NavigationRequest`] and for
/// `Vec<NavigationRequest>`, which simply records requests.
pub trait NavigationSink {
    /// Ask the router to navigate
    fn navigate(&mut self, request: NavigationRequest);
}

impl<F> NavigationSink for F
where
    F: FnMut(NavigationRequest),
{
    fn navigate(&mut self, request: NavigationRequest) {
        self(request);
    }
}

impl NavigationSink for Vec<NavigationRequest> {
    fn navigate(&mut self, request: NavigationRequest) {
        self.push(request);
    }
}

// ============================================================================
// TrailSnapshot
// ============================================================================

/// Read-only view handed to the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSnapshot {
    /// Current trail, root first
    pub history: Vec<BreadcrumbEntry>,
    /// Last trail entry
    pub current_page: Option<BreadcrumbEntry>,
    /// A parent entry exists
    pub can_go_back: bool,
    /// The forward stack is non-empty
    pub can_go_forward: bool,
}

// ============================================================================
// HistoryController
// ============================================================================

/// Trail state plus logical back/forward for one mounted app shell.
pub struct HistoryController<S> {
    builder: TrailBuilder,
    state: HistoryState,
    sink: S,
}

impl<S: NavigationSink> HistoryController<S> {
    /// Controller over `config`, without validating it
    pub fn new(config: NavigationConfig, sink: S) -> Self {
        Self::with_builder(TrailBuilder::new(config), sink)
    }

    /// Controller over `config`, rejecting malformed tables
    pub fn try_new(config: NavigationConfig, sink: S) -> ConfigResult<Self> {
        Ok(Self::new(config.checked()?, sink))
    }

    /// Controller over an existing trail builder
    pub fn with_builder(builder: TrailBuilder, sink: S) -> Self {
        let depth = builder.resolver().config().max_forward_depth;
        Self {
            builder,
            state: HistoryState::new(depth),
            sink,
        }
    }

    // ------------------------------------------------------------------------
    // Router notifications
    // ------------------------------------------------------------------------

    /// Process a location reported by the router.
    ///
    /// A location matching the target of an outstanding `go_back`/`go_forward`
    /// is a replay; anything else is a user navigation and empties the forward
    /// stack. Returns `None` when the location repeats the last one.
    pub fn sync(&mut self, location: Location) -> Option<TrailChangeEvent> {
        if self.skip_duplicate(&location) {
            return None;
        }

        let source = match self.state.take_pending() {
            Some(pending) if pending.target.same_place(&location) => pending.source,
            Some(pending) => {
                trace_log!(
                    "{:?} to '{}' superseded by '{}'",
                    pending.source,
                    pending.target.href(),
                    location.href()
                );
                NavigationSource::User
            }
            None => NavigationSource::User,
        };

        Some(self.commit(location, source))
    }

    /// Process a location with an explicit classification.
    ///
    /// Any outstanding replay is dropped.
    pub fn apply(&mut self, location: Location, source: NavigationSource) -> Option<TrailChangeEvent> {
        if self.skip_duplicate(&location) {
            return None;
        }
        self.state.take_pending();
        Some(self.commit(location, source))
    }

    fn skip_duplicate(&self, location: &Location) -> bool {
        let duplicate = self.state.is_duplicate(location);
        if duplicate {
            trace_log!("ignoring repeated location '{}'", location.href());
        }
        duplicate
    }

    fn commit(&mut self, location: Location, source: NavigationSource) -> TrailChangeEvent {
        let from = self.state.current_page().map(|entry| entry.path.clone());
        let trail = self.builder.build_for(&location);
        let to = location.href();

        if source == NavigationSource::User {
            self.state.clear_forward();
        }
        self.state.replace_trail(location, trail);

        debug_log!(
            "{:?} navigation {} -> '{}' (trail depth {}, forward {})",
            source,
            from.as_deref().unwrap_or("<none>"),
            to,
            self.state.trail().len(),
            self.state.forward_stack().len()
        );

        TrailChangeEvent { from, to, source }
    }

    // ------------------------------------------------------------------------
    // Back / forward
    // ------------------------------------------------------------------------

    /// Navigate to the parent of the current page.
    ///
    /// The page being left is pushed onto the forward stack. Returns `false`
    /// (and does nothing) when the trail has no parent or a back/forward
    /// request is still waiting for the router.
    pub fn go_back(&mut self) -> bool {
        if self.awaiting_router("go_back") {
            return false;
        }
        let (Some(parent), Some(leaving)) = (
            self.state.parent_page().cloned(),
            self.state.current_page().cloned(),
        ) else {
            debug_log!("go_back ignored: no parent entry");
            return false;
        };

        let origin = self
            .state
            .last_location()
            .and_then(|location| location.origin.clone());
        self.state.push_forward(ForwardEntry::new(leaving, origin));

        self.request(NavigationSource::Back, NavigationRequest::new(parent.path));
        true
    }

    /// Return to the page most recently left with [`go_back`](Self::go_back).
    ///
    /// Returns `false` (and does nothing) when the forward stack is empty or a
    /// back/forward request is still waiting for the router.
    pub fn go_forward(&mut self) -> bool {
        if self.awaiting_router("go_forward") {
            return false;
        }
        let Some(next) = self.state.pop_forward() else {
            debug_log!("go_forward ignored: forward stack empty");
            return false;
        };

        self.request(NavigationSource::Forward, next.request());
        true
    }

    fn awaiting_router(&self, action: &str) -> bool {
        match self.state.pending() {
            Some(pending) => {
                debug_log!(
                    "{} ignored: {:?} to '{}' still pending",
                    action,
                    pending.source,
                    pending.target.href()
                );
                true
            }
            None => false,
        }
    }

    fn request(&mut self, source: NavigationSource, request: NavigationRequest) {
        debug_log!("{:?} requested: '{}'", source, request.to);
        self.state.set_pending(PendingReplay {
            source,
            target: request.to_location(),
        });
        self.sink.navigate(request);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Current trail, root first
    pub fn history(&self) -> &[BreadcrumbEntry] {
        self.state.trail()
    }

    /// Last trail entry, `None` before the first location
    pub fn current_page(&self) -> Option<&BreadcrumbEntry> {
        self.state.current_page()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    /// Pages available to `go_forward`, oldest first
    pub fn forward_stack(&self) -> &ForwardStack {
        self.state.forward_stack()
    }

    /// Everything the UI layer needs in one value
    pub fn snapshot(&self) -> TrailSnapshot {
        TrailSnapshot {
            history: self.history().to_vec(),
            current_page: self.current_page().cloned(),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn builder(&self) -> &TrailBuilder {
        &self.builder
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Forget the trail, forward stack and any outstanding replay.
    pub fn reset(&mut self) {
        debug_log!("resetting history controller");
        self.state.reset();
    }
}

impl<S> std::fmt::Debug for HistoryController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
