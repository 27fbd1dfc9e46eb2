//! Breadcrumb trail construction
//!
//! A trail always starts at the root entry and ends at the current page. In
//! between, the ancestors depend on the shape of the path and, for school
//! pages, on where the user came from. Exactly one ancestry rule fires per
//! build; an anchor level is then appended when the page is a section parent
//! and the hash names one of its sub-menu rows.

use crate::config::{MenuItem, NavigationConfig, Section};
use crate::degree::DegreeKind;
use crate::location::{normalize_path, Location, OriginContext};
use crate::matcher::RoutePattern;
use crate::resolver::{humanize, LabelResolver, HOME_LABEL};
use crate::{debug_log, trace_log};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreadcrumbEntry {
    /// Href this entry navigates to when clicked; may carry a `#hash`
    pub path: String,
    /// Display text
    pub label: String,
}

impl BreadcrumbEntry {
    /// Create an entry
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// The root entry, `Home` at `/`
    pub fn home() -> Self {
        Self::new("/", HOME_LABEL)
    }

    /// Whether this is the root entry
    pub fn is_home(&self) -> bool {
        self.path == "/"
    }
}

/// Ancestry rule that produced a trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailRule {
    /// The root page itself
    Root,
    /// `/programs/{degree}/{slug}`
    ProgramDetail,
    /// Any other `/programs/...` page
    ProgramListing,
    /// School page reached from a programme page
    SchoolReferral,
    /// `/admin/view-student/{id}`
    AdminStudent,
    /// Dashboard or admin root
    Dashboard,
    /// Concrete row of a sub-menu table
    SubRoute,
    /// Anything else
    Default,
}

/// Builds trails from locations using a [`LabelResolver`].
///
/// Stateless between calls: the same input always yields the same trail.
///
/// # Example
///
/// ```
/// use portal_breadcrumbs::{NavigationConfig, TrailBuilder};
///
/// let builder = TrailBuilder::new(NavigationConfig::portal());
/// let trail = builder.build("/programs/bachelor-degree/computer-science", "", None);
///
/// let labels: Vec<&str> = trail.iter().map(|entry| entry.label.as_str()).collect();
/// assert_eq!(
///     labels,
///     ["Home", "All Programmes", "Bachelor Degree", "Computer Science"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TrailBuilder {
    resolver: LabelResolver,
    program_detail: RoutePattern,
    program_any: RoutePattern,
    admin_student: RoutePattern,
}

impl TrailBuilder {
    /// Builder over `config`
    pub fn new(config: NavigationConfig) -> Self {
        Self::with_resolver(LabelResolver::new(config))
    }

    /// Builder over an existing resolver
    pub fn with_resolver(resolver: LabelResolver) -> Self {
        Self {
            resolver,
            program_detail: RoutePattern::from_path("/programs/:degree/:slug"),
            program_any: RoutePattern::from_path("/programs/*"),
            admin_student: RoutePattern::from_path("/admin/view-student/:id"),
        }
    }

    /// Resolver used for labels
    pub fn resolver(&self) -> &LabelResolver {
        &self.resolver
    }

    fn config(&self) -> &NavigationConfig {
        self.resolver.config()
    }

    /// Trail for a reported location
    pub fn build_for(&self, location: &Location) -> Vec<BreadcrumbEntry> {
        self.build(&location.path, location.hash_str(), location.origin.as_ref())
    }

    /// Trail for `path`, optional `hash` (with or without `#`) and origin.
    pub fn build(
        &self,
        path: &str,
        hash: &str,
        origin: Option<&OriginContext>,
    ) -> Vec<BreadcrumbEntry> {
        self.build_with_rule(path, hash, origin).0
    }

    /// Like [`build`](Self::build), also reporting which ancestry rule fired.
    pub fn build_with_rule(
        &self,
        path: &str,
        hash: &str,
        origin: Option<&OriginContext>,
    ) -> (Vec<BreadcrumbEntry>, TrailRule) {
        let path = normalize_path(path);
        let mut trail = vec![BreadcrumbEntry::home()];

        let rule = self.push_ancestry(&mut trail, &path, origin);
        if rule != TrailRule::Root {
            self.push_anchor(&mut trail, &path, hash.trim_start_matches('#'));
        }

        debug_log!(
            "trail for '{}' via {:?}: [{}]",
            path,
            rule,
            trail
                .iter()
                .map(|entry| entry.label.as_str())
                .collect::<Vec<_>>()
                .join(" > ")
        );
        (trail, rule)
    }

    fn push_ancestry(
        &self,
        trail: &mut Vec<BreadcrumbEntry>,
        path: &str,
        origin: Option<&OriginContext>,
    ) -> TrailRule {
        if path == "/" {
            return TrailRule::Root;
        }

        let config = self.config();

        if let Some(captures) = self.program_detail.matches(path) {
            let degree = captures.get("degree").unwrap_or_default();
            let slug = captures.get("slug").unwrap_or_default();
            let kind = DegreeKind::from_segment_or_default(degree);

            push(trail, entry_of(&config.programs.all_programmes));
            push(
                trail,
                BreadcrumbEntry::new(format!("/programs/{}", degree), kind.label()),
            );
            push(trail, BreadcrumbEntry::new(path, humanize(slug)));
            return TrailRule::ProgramDetail;
        }

        if let Some(captures) = self.program_any.matches(path) {
            push(trail, entry_of(&config.programs.all_programmes));

            let first = captures
                .rest()
                .and_then(|rest| rest.split('/').next())
                .unwrap_or_default();
            if DegreeKind::from_segment(first).is_some_and(DegreeKind::is_degree) {
                push(trail, entry_of(&config.programs.degree_programmes));
            }

            push(trail, self.entry_for(path));
            return TrailRule::ProgramListing;
        }

        if let Some(program) = origin.and_then(|origin| origin.from_program.as_ref()) {
            if self.is_school_page(path) {
                let kind = DegreeKind::infer_from_path(&program.path);
                trace_log!(
                    "school '{}' reached from '{}', inferred {:?}",
                    path,
                    program.path,
                    kind
                );

                if kind.listing_path() != program.path {
                    push(trail, BreadcrumbEntry::new(kind.listing_path(), kind.label()));
                }
                push(trail, BreadcrumbEntry::new(&program.path, &program.title));
                push(trail, self.entry_for(path));
                return TrailRule::SchoolReferral;
            }
        }

        if self.admin_student.matches(path).is_some() {
            push(trail, entry_of(&config.admin_dashboard));
            push(trail, self.entry_for(path));
            return TrailRule::AdminStudent;
        }

        if config.is_dashboard_root(path) {
            push(trail, self.entry_for(path));
            return TrailRule::Dashboard;
        }

        if let Some(sub_menu) = config.sub_menu_containing(path) {
            push(trail, entry_of(&sub_menu.parent));
            push(trail, self.entry_for(path));
            return TrailRule::SubRoute;
        }

        push(trail, self.entry_for(path));
        TrailRule::Default
    }

    fn push_anchor(&self, trail: &mut Vec<BreadcrumbEntry>, path: &str, hash: &str) {
        if hash.is_empty() {
            return;
        }
        let Some(sub_menu) = self.config().sub_menu_for_parent(path) else {
            return;
        };
        match sub_menu.find_by_id(hash) {
            Some(item) => {
                push(
                    trail,
                    BreadcrumbEntry::new(format!("{}#{}", path, hash), &item.label),
                );
            }
            None => trace_log!("anchor '#{}' is not a row of {}", hash, sub_menu.section),
        }
    }

    fn is_school_page(&self, path: &str) -> bool {
        let schools = self
            .config()
            .sub_menu(Section::Schools)
            .map_or(Section::Schools.default_path(), |menu| {
                menu.parent.path.as_str()
            });
        path.strip_prefix(schools)
            .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'))
    }

    fn entry_for(&self, path: &str) -> BreadcrumbEntry {
        BreadcrumbEntry::new(path, self.resolver.resolve_label(path))
    }
}

fn entry_of(item: &MenuItem) -> BreadcrumbEntry {
    BreadcrumbEntry::new(&item.path, &item.name)
}

/// Append `entry`, letting it take the place of an immediately preceding
/// entry with the same path. The root entry is never replaced.
fn push(trail: &mut Vec<BreadcrumbEntry>, entry: BreadcrumbEntry) {
    let len = trail.len();
    match trail.last_mut() {
        Some(last) if last.path == entry.path => {
            if len > 1 {
                *last = entry;
            }
        }
        _ => trail.push(entry),
    }
}
