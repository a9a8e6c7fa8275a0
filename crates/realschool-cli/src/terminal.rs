//! Terminal implementations of the navigation and notification ports.

use colored::Colorize;
use realschool_core::navigation::{Navigator, Notification, NotificationLevel, Notifier, Route};

/// Prints each navigation as the route path the client moved to.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        eprintln!("{} {}", "→".dimmed(), route.path().cyan());
    }
}

/// Prints notifications to stderr, coloured by level.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let title = match notification.level {
            NotificationLevel::Info => notification.title.normal(),
            NotificationLevel::Success => notification.title.green().bold(),
            NotificationLevel::Error => notification.title.red().bold(),
        };
        match notification.description {
            Some(description) => eprintln!("{} {}", title, description.dimmed()),
            None => eprintln!("{}", title),
        }
    }
}
