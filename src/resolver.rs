//! Label resolution
//!
//! Maps a location path to the text shown in its breadcrumb. Rules are tried
//! in a fixed order and the first match wins; several rules can match the same
//! path, so the order is part of the contract:
//!
//! 1. `/` is `"Home"`
//! 2. hard-coded labels (dashboards, sign-in)
//! 3. top-level menu and resource entries, then the programme and admin
//!    ancestor entries
//! 4. other `/programs/...` paths, humanised from the path
//! 5. `/admin/view-student/...` is `"View Student"`
//! 6. rows of any sub-menu table
//! 7. `"Page"`
//!
//! Resolution never fails.

use crate::config::NavigationConfig;
use crate::matcher::RoutePattern;
use crate::trace_log;
use std::collections::HashMap;

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, LabelCache};
#[cfg(feature = "cache")]
use std::cell::RefCell;

/// Label of the root entry
pub const HOME_LABEL: &str = "Home";
/// Label for paths no rule recognises
pub const FALLBACK_LABEL: &str = "Page";
/// Label of student detail pages under the admin area
pub const VIEW_STUDENT_LABEL: &str = "View Student";
/// Prefix of student detail pages
pub const VIEW_STUDENT_PREFIX: &str = "/admin/view-student/";

/// Which resolution rule produced a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// The root path
    Root,
    /// Hard-coded dashboard or sign-in label
    Fixed,
    /// Menu, resource, programme or admin ancestor entry
    Menu,
    /// Humanised `/programs/...` path
    Program,
    /// Student detail page under the admin area
    ViewStudent,
    /// Row of a sub-menu table
    SubMenu,
    /// Nothing matched
    Fallback,
}

/// Resolves display labels from a [`NavigationConfig`].
///
/// # Example
///
/// ```
/// use portal_breadcrumbs::{LabelResolver, NavigationConfig};
///
/// let resolver = LabelResolver::new(NavigationConfig::portal());
/// assert_eq!(resolver.resolve_label("/schools/cs"), "Computing & AI");
/// assert_eq!(resolver.resolve_label("/nowhere"), "Page");
/// ```
#[derive(Debug, Clone)]
pub struct LabelResolver {
    config: NavigationConfig,
    fixed: HashMap<String, String>,
    flat: HashMap<String, String>,
    sub_routes: HashMap<String, String>,
    programs: RoutePattern,
    #[cfg(feature = "cache")]
    cache: RefCell<LabelCache>,
}

impl LabelResolver {
    /// Build the lookup indexes for `config`.
    pub fn new(config: NavigationConfig) -> Self {
        let fixed = index(config.fixed_labels.iter().map(|item| (&item.path, &item.name)));
        let flat = index(
            config
                .menu
                .iter()
                .chain(&config.resources)
                .chain([
                    &config.programs.all_programmes,
                    &config.programs.degree_programmes,
                    &config.admin_dashboard,
                ])
                .map(|item| (&item.path, &item.name)),
        );

        let mut sub_routes = HashMap::new();
        for sub_menu in &config.sub_menus {
            for item in &sub_menu.items {
                sub_routes
                    .entry(sub_menu.href_of(item))
                    .or_insert_with(|| item.label.clone());
            }
        }

        trace_log!(
            "label resolver indexed {} fixed, {} menu, {} sub-menu paths",
            fixed.len(),
            flat.len(),
            sub_routes.len()
        );

        Self {
            config,
            fixed,
            flat,
            sub_routes,
            programs: RoutePattern::from_path("/programs/*"),
            #[cfg(feature = "cache")]
            cache: RefCell::new(LabelCache::new()),
        }
    }

    /// Tables this resolver was built from
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Label for `path`. Always non-empty.
    pub fn resolve_label(&self, path: &str) -> String {
        #[cfg(feature = "cache")]
        {
            if let Some(label) = self.cache.borrow_mut().get(path) {
                return label;
            }
        }

        let (label, _rule) = self.explain(path);

        #[cfg(feature = "cache")]
        self.cache
            .borrow_mut()
            .insert(path.to_string(), label.clone());

        label
    }

    /// Label for `path` together with the rule that produced it. Uncached.
    pub fn explain(&self, path: &str) -> (String, LabelRule) {
        let (label, rule) = self.lookup(path);
        trace_log!("label for '{}' is '{}' ({:?})", path, label, rule);
        (label, rule)
    }

    fn lookup(&self, path: &str) -> (String, LabelRule) {
        if path == "/" {
            return (HOME_LABEL.to_string(), LabelRule::Root);
        }
        if let Some(label) = self.fixed.get(path) {
            return (label.clone(), LabelRule::Fixed);
        }
        if let Some(label) = self.flat.get(path) {
            return (label.clone(), LabelRule::Menu);
        }
        if !self.sub_routes.contains_key(path) {
            if let Some(rest) = self.programs.matches(path).as_ref().and_then(|c| c.rest()) {
                return (humanize(rest), LabelRule::Program);
            }
        }
        if path.starts_with(VIEW_STUDENT_PREFIX) {
            return (VIEW_STUDENT_LABEL.to_string(), LabelRule::ViewStudent);
        }
        if let Some(label) = self.sub_routes.get(path) {
            return (label.clone(), LabelRule::SubMenu);
        }
        (FALLBACK_LABEL.to_string(), LabelRule::Fallback)
    }

    /// Whether `path` is a concrete row of some sub-menu table
    pub fn is_sub_route(&self, path: &str) -> bool {
        self.config.sub_menu_containing(path).is_some()
    }

    /// Label-cache statistics
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats().clone()
    }

    /// Drop memoised labels
    #[cfg(feature = "cache")]
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

fn index<'a>(pairs: impl Iterator<Item = (&'a String, &'a String)>) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (path, label) in pairs {
        map.entry(path.clone()).or_insert_with(|| label.clone());
    }
    map
}

/// Turn a route fragment into display text: separators become spaces and
/// every word is capitalised.
///
/// ```
/// use portal_breadcrumbs::humanize;
///
/// assert_eq!(humanize("computer-science"), "Computer Science");
/// assert_eq!(humanize("master-degree/data_science"), "Master Degree Data Science");
/// ```
pub fn humanize(fragment: &str) -> String {
    let words: Vec<String> = fragment
        .split(|c: char| c == '-' || c == '_' || c == '/' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        FALLBACK_LABEL.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MenuItem, Section, SubMenu, SubMenuItem};

    fn resolver() -> LabelResolver {
        LabelResolver::new(NavigationConfig::portal())
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(resolver().explain("/"), ("Home".to_string(), LabelRule::Root));
    }

    #[test]
    fn test_fixed_labels() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_label("/admin"), "Admin Dashboard");
        assert_eq!(resolver.resolve_label("/dashboard"), "Student Dashboard");
        assert_eq!(resolver.resolve_label("/auth"), "Sign In");
    }

    #[test]
    fn test_fixed_label_beats_menu() {
        let config = NavigationConfig::new()
            .with_menu_item(MenuItem::new("Login", "/auth"))
            .with_fixed_label("/auth", "Sign In");
        let resolver = LabelResolver::new(config);
        assert_eq!(resolver.explain("/auth"), ("Sign In".to_string(), LabelRule::Fixed));
    }

    #[test]
    fn test_menu_and_resources() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_label("/admissions"), "Admissions");
        assert_eq!(resolver.resolve_label("/library"), "Library");
        assert_eq!(resolver.resolve_label("/programs/master-degree"), "Master Degree");
    }

    #[test]
    fn test_program_paths_are_humanized() {
        let resolver = resolver();
        assert_eq!(
            resolver.explain("/programs/bachelor-degree/computer-science"),
            (
                "Bachelor Degree Computer Science".to_string(),
                LabelRule::Program
            )
        );
        assert_eq!(resolver.resolve_label("/programs/short_courses"), "Short Courses");
    }

    #[test]
    fn test_sub_menu_row_under_programs_wins_over_humanizing() {
        let config = NavigationConfig::new().with_sub_menu(
            SubMenu::new(Section::Admissions).with_item(SubMenuItem::route(
                "Postgraduate Entry",
                "pg",
                "/programs/pg-entry",
            )),
        );
        let resolver = LabelResolver::new(config);
        assert_eq!(
            resolver.explain("/programs/pg-entry"),
            ("Postgraduate Entry".to_string(), LabelRule::SubMenu)
        );
    }

    #[test]
    fn test_view_student() {
        assert_eq!(
            resolver().explain("/admin/view-student/42"),
            ("View Student".to_string(), LabelRule::ViewStudent)
        );
    }

    #[test]
    fn test_sub_menu_rows() {
        let resolver = resolver();
        assert_eq!(resolver.resolve_label("/schools/cs"), "Computing & AI");
        assert_eq!(resolver.resolve_label("/transactions/receipts"), "Receipts");
        assert_eq!(
            resolver.resolve_label("/admissions#fees-scholarships"),
            "Fees & Scholarships"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            resolver().explain("/unregistered/weird/path"),
            ("Page".to_string(), LabelRule::Fallback)
        );
    }

    #[test]
    fn test_labels_never_empty() {
        let resolver = resolver();
        for path in ["", "/", "//", "/programs/-", "/programs/x", "/?", "/#", "/admin/view-student/"] {
            assert!(!resolver.resolve_label(path).is_empty(), "empty label for {path:?}");
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("computer-science"), "Computer Science");
        assert_eq!(humanize("ph.d-degree"), "Ph.d Degree");
        assert_eq!(humanize("--"), "Page");
        assert_eq!(humanize("ai"), "Ai");
    }

    #[test]
    fn test_is_sub_route() {
        let resolver = resolver();
        assert!(resolver.is_sub_route("/schools/law"));
        assert!(!resolver.is_sub_route("/schools"));
        assert!(!resolver.is_sub_route("/admissions#dates"));
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_repeated_lookups_hit_cache() {
        let resolver = resolver();
        resolver.resolve_label("/schools/cs");
        resolver.resolve_label("/schools/cs");
        let stats = resolver.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);

        resolver.clear_cache();
        assert_eq!(resolver.cache_stats().invalidations, 1);
    }
}
