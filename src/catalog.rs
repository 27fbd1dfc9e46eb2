//! The portal's own navigation tables.

use crate::config::{MenuItem, NavigationConfig, Section, SubMenu, SubMenuItem};
use crate::degree::DegreeKind;

impl NavigationConfig {
    /// Navigation tables of the institution portal: top-level menu, resource
    /// links, dashboard labels and the admissions, schools, transactions and
    /// student-portal sub-menus.
    pub fn portal() -> Self {
        let mut config = Self::new()
            .with_menu_item(MenuItem::new("About Us", "/about"))
            .with_menu_item(MenuItem::new("Admissions", "/admissions"))
            .with_menu_item(MenuItem::new("All Programmes", "/programs"))
            .with_menu_item(MenuItem::new("Schools", "/schools"))
            .with_menu_item(MenuItem::new("Campus Life", "/campus-life"))
            .with_menu_item(MenuItem::new("News & Events", "/news"))
            .with_menu_item(MenuItem::new("Contact", "/contact"))
            .with_resource(MenuItem::new("Library", "/library"))
            .with_resource(MenuItem::new("Academic Calendar", "/academic-calendar"))
            .with_resource(MenuItem::new("Transactions", "/transactions"))
            .with_resource(MenuItem::new("Student Portal", "/student-portal"))
            .with_fixed_label("/admin", "Admin Dashboard")
            .with_fixed_label("/dashboard", "Student Dashboard")
            .with_fixed_label("/auth", "Sign In")
            .with_dashboard_root("/dashboard")
            .with_sub_menu(admissions())
            .with_sub_menu(schools())
            .with_sub_menu(transactions())
            .with_sub_menu(student_portal());

        for kind in DegreeKind::ALL {
            config = config.with_resource(MenuItem::new(kind.label(), kind.listing_path()));
        }
        config
    }
}

fn admissions() -> SubMenu {
    SubMenu::new(Section::Admissions).with_items([
        SubMenuItem::anchor("How to Apply", "how-to-apply"),
        SubMenuItem::anchor("Entry Requirements", "requirements"),
        SubMenuItem::anchor("Fees & Scholarships", "fees-scholarships"),
        SubMenuItem::anchor("Important Dates", "dates"),
        SubMenuItem::anchor("International Students", "international"),
    ])
}

fn schools() -> SubMenu {
    SubMenu::new(Section::Schools).with_items([
        SubMenuItem::route("Computing & AI", "cs", "/schools/cs"),
        SubMenuItem::route("Business & Economics", "business", "/schools/business"),
        SubMenuItem::route("Engineering", "engineering", "/schools/engineering"),
        SubMenuItem::route("Health Sciences", "health", "/schools/health"),
        SubMenuItem::route("Law", "law", "/schools/law"),
        SubMenuItem::route("Education & Humanities", "humanities", "/schools/humanities"),
    ])
}

fn transactions() -> SubMenu {
    SubMenu::new(Section::Transactions).with_items([
        SubMenuItem::route("Tuition Payments", "payments", "/transactions/payments"),
        SubMenuItem::route("Receipts", "receipts", "/transactions/receipts"),
        SubMenuItem::anchor("Payment Plans", "plans"),
    ])
}

fn student_portal() -> SubMenu {
    SubMenu::new(Section::StudentPortal).with_items([
        SubMenuItem::route("My Courses", "courses", "/student-portal/courses"),
        SubMenuItem::route("Results", "results", "/student-portal/results"),
        SubMenuItem::route("Timetable", "timetable", "/student-portal/timetable"),
        SubMenuItem::anchor("Profile", "profile"),
    ])
}
