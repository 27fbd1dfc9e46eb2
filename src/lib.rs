//! # Portal Breadcrumbs
//!
//! Breadcrumb trails and logical back/forward navigation for the institution
//! portal:
//!
//! - **Label resolution** - Path to display label, driven by static menu tables
//! - **Trail building** - Root-to-page ancestry, including programme pages,
//!   in-page anchors, admin sub-routes and schools reached from a programme
//! - **History control** - Back to the parent entry, forward to the page just
//!   left, kept in sync with the host router
//!
//! # Quick Start
//!
//! ```
//! use portal_breadcrumbs::*;
//!
//! let mut controller =
//!     HistoryController::new(NavigationConfig::portal(), Vec::<NavigationRequest>::new());
//!
//! // The router reports where the user is.
//! controller.sync(Location::parse("/admissions#fees-scholarships"));
//!
//! let labels: Vec<&str> = controller
//!     .history()
//!     .iter()
//!     .map(|entry| entry.label.as_str())
//!     .collect();
//! assert_eq!(labels, ["Home", "Admissions", "Fees & Scholarships"]);
//!
//! // Going back asks the router for the parent page.
//! assert!(controller.go_back());
//! assert_eq!(controller.sink()[0].to, "/admissions");
//! ```
//!
//! # Origin-dependent ancestry
//!
//! A school page opened from a programme page shows the programme as its
//! ancestor; the same page opened directly shows the schools index:
//!
//! ```
//! use portal_breadcrumbs::*;
//!
//! let builder = TrailBuilder::new(NavigationConfig::portal());
//! let origin = OriginContext::from_program("/programs/master-degree/ai", "AI Masters");
//!
//! let referred = builder.build("/schools/cs", "", Some(&origin));
//! let direct = builder.build("/schools/cs", "", None);
//!
//! assert_eq!(referred[2].label, "AI Masters");
//! assert_eq!(direct[1].label, "Schools");
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the `log` crate for logging
//! - `tracing` - Uses the `tracing` crate instead (mutually exclusive with `log`)
//! - `cache` (default) - LRU memo of resolved labels
//! - `serde` - `Serialize`/`Deserialize` for configuration and trail values

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Label cache (optional)
#[cfg(feature = "cache")]
pub mod cache;

// Static tables
mod catalog;
pub mod config;
pub mod degree;

// Error handling
pub mod error;

// Core modules
pub mod controller;
pub mod history;
pub mod location;
pub mod matcher;
pub mod resolver;
pub mod state;
pub mod trail;

// Re-export main types for convenient access
#[cfg(feature = "cache")]
pub use cache::{CacheStats, LabelCache};
pub use config::{
    MenuItem, NavigationConfig, ProgramLabels, Section, SubMenu, SubMenuItem,
    DEFAULT_MAX_FORWARD_DEPTH,
};
pub use controller::{HistoryController, NavigationSink, TrailSnapshot};
pub use degree::DegreeKind;
pub use error::{validate_location_path, ConfigError, ConfigResult};
pub use history::{ForwardEntry, ForwardStack};
pub use location::{Location, NavigationRequest, OriginContext, ProgramOrigin};
pub use matcher::{Captures, RoutePattern, Segment};
pub use resolver::{humanize, LabelResolver, LabelRule, FALLBACK_LABEL, HOME_LABEL};
pub use state::{HistoryState, PendingReplay};
pub use trail::{BreadcrumbEntry, TrailBuilder, TrailRule};

/// Why a location change happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationSource {
    /// The user (or the app) navigated; the forward stack is discarded
    #[default]
    User,
    /// Replay of a [`HistoryController::go_back`] request
    Back,
    /// Replay of a [`HistoryController::go_forward`] request
    Forward,
}

impl NavigationSource {
    /// Whether the change was caused by the controller itself
    pub fn is_replay(self) -> bool {
        !matches!(self, NavigationSource::User)
    }
}

/// Emitted for every processed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailChangeEvent {
    /// Previous current page (None before the first location)
    pub from: Option<String>,
    /// Href of the new location
    pub to: String,
    /// How the change was classified
    pub source: NavigationSource,
}
