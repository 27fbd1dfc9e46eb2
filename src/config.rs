//! Static navigation tables
//!
//! Everything the label resolver and trail builder know about the portal's
//! page structure comes from a [`NavigationConfig`]: the top-level menu, the
//! resource links, a handful of fixed labels, and one sub-menu table per
//! parent section.

use crate::error::{validate_location_path, ConfigError, ConfigResult};
use crate::{trace_log, warn_log};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on the forward stack.
pub const DEFAULT_MAX_FORWARD_DEPTH: usize = 1000;

// ============================================================================
// Menu entries
// ============================================================================

/// A labelled link: top-level menu entry, resource link or fixed label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuItem {
    /// Display name
    pub name: String,
    /// Canonical path
    pub path: String,
}

impl MenuItem {
    /// Create a menu item
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One row of a sub-menu table.
///
/// Rows with a concrete `path` are real routes; rows without one are in-page
/// anchors of the parent section, addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubMenuItem {
    /// Display label
    pub label: String,
    /// Anchor id within the parent page
    pub id: String,
    /// Concrete route, if the row is not just an anchor
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Option<String>,
}

impl SubMenuItem {
    /// An in-page anchor row
    pub fn anchor(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            path: None,
        }
    }

    /// A row with its own route
    pub fn route(label: impl Into<String>, id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            path: Some(path.into()),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Parent sections that own a sub-menu table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Section {
    Admissions,
    Schools,
    Transactions,
    StudentPortal,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 4] = [
        Section::Admissions,
        Section::Schools,
        Section::Transactions,
        Section::StudentPortal,
    ];

    /// Parent page path used when a table does not override it
    pub fn default_path(self) -> &'static str {
        match self {
            Section::Admissions => "/admissions",
            Section::Schools => "/schools",
            Section::Transactions => "/transactions",
            Section::StudentPortal => "/student-portal",
        }
    }

    /// Parent page label used when a table does not override it
    pub fn default_label(self) -> &'static str {
        match self {
            Section::Admissions => "Admissions",
            Section::Schools => "Schools",
            Section::Transactions => "Transactions",
            Section::StudentPortal => "Student Portal",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_label())
    }
}

/// Sub-menu table of one parent section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubMenu {
    /// Which section this table belongs to
    pub section: Section,
    /// The parent page (label and path)
    pub parent: MenuItem,
    /// Table rows
    pub items: Vec<SubMenuItem>,
}

impl SubMenu {
    /// Empty table with the section's default parent page
    pub fn new(section: Section) -> Self {
        Self {
            section,
            parent: MenuItem::new(section.default_label(), section.default_path()),
            items: Vec::new(),
        }
    }

    /// Override the parent page
    pub fn with_parent(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.parent = MenuItem::new(name, path);
        self
    }

    /// Append a row
    pub fn with_item(mut self, item: SubMenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Append several rows
    pub fn with_items(mut self, items: impl IntoIterator<Item = SubMenuItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Row whose anchor id is `id`
    pub fn find_by_id(&self, id: &str) -> Option<&SubMenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Row whose concrete path is `path`
    pub fn find_by_path(&self, path: &str) -> Option<&SubMenuItem> {
        self.items
            .iter()
            .find(|item| item.path.as_deref() == Some(path))
    }

    /// Full href a row is addressed by: its own path, or `parent#id`.
    pub fn href_of(&self, item: &SubMenuItem) -> String {
        match &item.path {
            Some(path) => path.clone(),
            None => format!("{}#{}", self.parent.path, item.id),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        validate_location_path(&self.parent.path)?;
        if self.parent.name.trim().is_empty() {
            return Err(ConfigError::EmptyLabel {
                path: self.parent.path.clone(),
            });
        }

        let mut ids = HashSet::new();
        let mut paths = HashSet::new();
        for item in &self.items {
            if item.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel {
                    path: self.href_of(item),
                });
            }
            if !ids.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    section: self.section.to_string(),
                    id: item.id.clone(),
                });
            }
            if let Some(path) = &item.path {
                validate_location_path(path)?;
                if !paths.insert(path.as_str()) {
                    return Err(ConfigError::DuplicatePath { path: path.clone() });
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Programme labels
// ============================================================================

/// Ancestor entries shared by every programme page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramLabels {
    /// Programme index, "All Programmes"
    pub all_programmes: MenuItem,
    /// Grouping entry for bachelor/master/PhD listings, "Degree Programmes"
    pub degree_programmes: MenuItem,
}

impl Default for ProgramLabels {
    fn default() -> Self {
        Self {
            all_programmes: MenuItem::new("All Programmes", "/programs"),
            degree_programmes: MenuItem::new("Degree Programmes", "/programs/degrees"),
        }
    }
}

// ============================================================================
// NavigationConfig
// ============================================================================

/// Complete set of static tables consulted by the breadcrumb core.
///
/// # Example
///
/// ```
/// use portal_breadcrumbs::{MenuItem, NavigationConfig, Section, SubMenu, SubMenuItem};
///
/// let config = NavigationConfig::new()
///     .with_menu_item(MenuItem::new("Admissions", "/admissions"))
///     .with_sub_menu(
///         SubMenu::new(Section::Admissions)
///             .with_item(SubMenuItem::anchor("Fees & Scholarships", "fees-scholarships")),
///     );
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationConfig {
    /// Top-level navigation entries
    pub menu: Vec<MenuItem>,
    /// Resource links (flattened alongside the menu)
    pub resources: Vec<MenuItem>,
    /// Hard-coded labels that beat every pattern rule
    pub fixed_labels: Vec<MenuItem>,
    /// Paths whose trail is just the page itself
    pub dashboard_roots: Vec<String>,
    /// Sub-menu tables, one per section
    pub sub_menus: Vec<SubMenu>,
    /// Programme ancestors
    pub programs: ProgramLabels,
    /// Ancestor entry for admin sub-routes
    pub admin_dashboard: MenuItem,
    /// Forward stack bound (0 = unlimited)
    pub max_forward_depth: usize,
}

impl NavigationConfig {
    /// Empty tables with default programme and admin ancestors
    pub fn new() -> Self {
        Self {
            menu: Vec::new(),
            resources: Vec::new(),
            fixed_labels: Vec::new(),
            dashboard_roots: Vec::new(),
            sub_menus: Vec::new(),
            programs: ProgramLabels::default(),
            admin_dashboard: MenuItem::new("Admin Dashboard", "/admin"),
            max_forward_depth: DEFAULT_MAX_FORWARD_DEPTH,
        }
    }

    /// Add a top-level menu entry
    pub fn with_menu_item(mut self, item: MenuItem) -> Self {
        self.menu.push(item);
        self
    }

    /// Add a resource link
    pub fn with_resource(mut self, item: MenuItem) -> Self {
        self.resources.push(item);
        self
    }

    /// Add a hard-coded label
    pub fn with_fixed_label(mut self, path: impl Into<String>, label: impl Into<String>) -> Self {
        self.fixed_labels.push(MenuItem::new(label, path));
        self
    }

    /// Mark a path as a bare dashboard root
    pub fn with_dashboard_root(mut self, path: impl Into<String>) -> Self {
        self.dashboard_roots.push(path.into());
        self
    }

    /// Add or replace the sub-menu table of a section
    pub fn with_sub_menu(mut self, sub_menu: SubMenu) -> Self {
        self.sub_menus
            .retain(|existing| existing.section != sub_menu.section);
        self.sub_menus.push(sub_menu);
        self
    }

    /// Override the programme ancestors
    pub fn with_program_labels(mut self, programs: ProgramLabels) -> Self {
        self.programs = programs;
        self
    }

    /// Override the admin ancestor entry
    pub fn with_admin_dashboard(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.admin_dashboard = MenuItem::new(name, path);
        self
    }

    /// Bound the forward stack (0 = unlimited)
    pub fn with_max_forward_depth(mut self, depth: usize) -> Self {
        self.max_forward_depth = depth;
        self
    }

    /// Sub-menu table of `section`
    pub fn sub_menu(&self, section: Section) -> Option<&SubMenu> {
        self.sub_menus.iter().find(|menu| menu.section == section)
    }

    /// Sub-menu table whose parent page is `path`
    pub fn sub_menu_for_parent(&self, path: &str) -> Option<&SubMenu> {
        self.sub_menus.iter().find(|menu| menu.parent.path == path)
    }

    /// Sub-menu table containing a row routed at `path`
    pub fn sub_menu_containing(&self, path: &str) -> Option<&SubMenu> {
        self.sub_menus
            .iter()
            .find(|menu| menu.find_by_path(path).is_some())
    }

    /// Whether `path` is a bare dashboard root
    pub fn is_dashboard_root(&self, path: &str) -> bool {
        path == self.admin_dashboard.path || self.dashboard_roots.iter().any(|root| root == path)
    }

    /// Check every table for malformed paths, blank labels and duplicates.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        let flat = self
            .menu
            .iter()
            .chain(&self.resources)
            .chain(&self.fixed_labels)
            .chain([
                &self.programs.all_programmes,
                &self.programs.degree_programmes,
                &self.admin_dashboard,
            ]);
        for item in flat {
            validate_location_path(&item.path)?;
            if item.name.trim().is_empty() {
                return Err(ConfigError::EmptyLabel {
                    path: item.path.clone(),
                });
            }
        }

        for ancestor in [
            &self.programs.all_programmes,
            &self.programs.degree_programmes,
            &self.admin_dashboard,
        ]
        .into_iter()
        .chain(self.sub_menus.iter().map(|sub_menu| &sub_menu.parent))
        {
            if ancestor.path == "/" {
                return Err(ConfigError::InvalidPath {
                    path: ancestor.path.clone(),
                    reason: "ancestor entries cannot be the root",
                });
            }
        }

        for root in &self.dashboard_roots {
            validate_location_path(root)?;
        }

        for sub_menu in &self.sub_menus {
            sub_menu.validate()?;
        }

        trace_log!(
            "navigation config valid: {} menu, {} resources, {} sub-menus",
            self.menu.len(),
            self.resources.len(),
            self.sub_menus.len()
        );
        Ok(())
    }

    /// Validate, logging the problem before handing it back.
    pub(crate) fn checked(self) -> ConfigResult<Self> {
        if let Err(error) = self.validate() {
            warn_log!("rejecting navigation config: {}", error);
            return Err(error);
        }
        Ok(self)
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admissions() -> SubMenu {
        SubMenu::new(Section::Admissions)
            .with_item(SubMenuItem::anchor("Requirements", "requirements"))
            .with_item(SubMenuItem::anchor("Fees & Scholarships", "fees-scholarships"))
    }

    #[test]
    fn test_section_defaults() {
        let menu = SubMenu::new(Section::StudentPortal);
        assert_eq!(menu.parent.path, "/student-portal");
        assert_eq!(menu.parent.name, "Student Portal");
    }

    #[test]
    fn test_sub_menu_lookup() {
        let menu = admissions();
        assert_eq!(
            menu.find_by_id("fees-scholarships").map(|item| item.label.as_str()),
            Some("Fees & Scholarships")
        );
        assert!(menu.find_by_id("missing").is_none());
    }

    #[test]
    fn test_href_of_anchor_and_route() {
        let menu = SubMenu::new(Section::Schools)
            .with_item(SubMenuItem::route("Computing & AI", "cs", "/schools/cs"));
        let cs = &menu.items[0];
        assert_eq!(menu.href_of(cs), "/schools/cs");

        let admissions = admissions();
        assert_eq!(
            admissions.href_of(&admissions.items[0]),
            "/admissions#requirements"
        );
    }

    #[test]
    fn test_with_sub_menu_replaces_same_section() {
        let config = NavigationConfig::new()
            .with_sub_menu(admissions())
            .with_sub_menu(SubMenu::new(Section::Admissions));
        assert_eq!(config.sub_menus.len(), 1);
        assert!(config.sub_menu(Section::Admissions).unwrap().items.is_empty());
    }

    #[test]
    fn test_dashboard_roots() {
        let config = NavigationConfig::new().with_dashboard_root("/dashboard");
        assert!(config.is_dashboard_root("/admin"));
        assert!(config.is_dashboard_root("/dashboard"));
        assert!(!config.is_dashboard_root("/admissions"));
    }

    #[test]
    fn test_validate_ok() {
        let config = NavigationConfig::new()
            .with_menu_item(MenuItem::new("Admissions", "/admissions"))
            .with_sub_menu(admissions());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let config = NavigationConfig::new().with_sub_menu(
            admissions().with_item(SubMenuItem::anchor("Fees again", "fees-scholarships")),
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateId {
                section: "Admissions".to_string(),
                id: "fees-scholarships".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_duplicate_path() {
        let config = NavigationConfig::new().with_sub_menu(
            SubMenu::new(Section::Schools)
                .with_item(SubMenuItem::route("Computing", "cs", "/schools/cs"))
                .with_item(SubMenuItem::route("Computing again", "cs2", "/schools/cs")),
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePath {
                path: "/schools/cs".to_string()
            })
        );
    }

    #[test]
    fn test_validate_bad_menu_path() {
        let config = NavigationConfig::new().with_menu_item(MenuItem::new("About", "about"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_root_ancestors() {
        let admin = NavigationConfig::portal().with_admin_dashboard("Admin", "/");
        assert_eq!(
            admin.validate(),
            Err(ConfigError::InvalidPath {
                path: "/".to_string(),
                reason: "ancestor entries cannot be the root",
            })
        );

        let parent = NavigationConfig::new()
            .with_sub_menu(SubMenu::new(Section::Admissions).with_parent("Start", "/"));
        assert!(matches!(
            parent.validate(),
            Err(ConfigError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_validate_blank_label() {
        let config = NavigationConfig::new().with_fixed_label("/auth", "  ");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyLabel {
                path: "/auth".to_string()
            })
        );
    }
}
