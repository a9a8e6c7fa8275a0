//! Header menu and profile helpers.

use super::route::Route;
use crate::session::{Role, Session};

/// What selecting a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(Route),
    ChangeTheme,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

const MENU: &[(&str, MenuAction)] = &[
    ("Change Theme", MenuAction::ChangeTheme),
    ("Generate QRCodes", MenuAction::Navigate(Route::QrCodes)),
    ("Add Person (Step 1)", MenuAction::Navigate(Route::PersonAdd)),
    ("Show All Person", MenuAction::Navigate(Route::PersonAll)),
    ("Show Assigned Persons", MenuAction::Navigate(Route::PersonAssigned)),
    ("Add Location (Step 2)", MenuAction::Navigate(Route::LocationAdd)),
    ("Show Locations", MenuAction::Navigate(Route::LocationAll)),
    (
        "Assign Person To Location (Step 3)",
        MenuAction::Navigate(Route::PersonAssign),
    ),
    ("Show Person-Location", MenuAction::Navigate(Route::PersonLocation)),
    ("Add Designation", MenuAction::Navigate(Route::DesignationAdd)),
    ("Reports", MenuAction::Navigate(Route::Reports)),
    ("Show Designations", MenuAction::Navigate(Route::DesignationAll)),
    ("Add Holiday", MenuAction::Navigate(Route::HolidayAdd)),
    ("Change Company", MenuAction::Navigate(Route::CompanyChange)),
    ("Change Profile", MenuAction::Navigate(Route::ProfileEdit)),
    ("Change Logo", MenuAction::Navigate(Route::LogoChange)),
    ("About", MenuAction::Navigate(Route::About)),
    ("Log Out", MenuAction::Logout),
];

/// Menu entries visible to `role`, in display order.
///
/// Entries are hidden using the same per-route role rules the guard
/// enforces, so the menu never offers a view that would redirect.
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    MENU.iter()
        .filter(|(_, action)| match action {
            MenuAction::Navigate(route) => route.permits(role),
            _ => true,
        })
        .map(|&(label, action)| MenuItem { label, action })
        .collect()
}

/// Up to two upper-case initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Attendance text for the header, `0/0` when the server sent none.
pub fn attendance_display(session: &Session) -> &str {
    match session.attendance_summary() {
        Some(summary) if !summary.is_empty() => summary,
        _ => "0/0",
    }
}
