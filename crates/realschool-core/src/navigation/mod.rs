//! Routes, the header menu, and the navigation/notification ports.

mod menu;
mod port;
mod route;

pub use menu::{MenuAction, MenuItem, attendance_display, initials, menu_for};
pub use port::{Navigator, Notification, NotificationLevel, Notifier};
pub use route::Route;
