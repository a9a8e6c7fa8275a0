use anyhow::{Result, bail};
use realschool_application::ScreenOutcome;

pub mod dashboard;
pub mod directory;
pub mod session;

/// Unwraps a rendered screen. A redirect or an abandoned view fails the
/// command so the process exits non-zero.
pub fn rendered<T>(outcome: ScreenOutcome<T>) -> Result<T> {
    match outcome {
        ScreenOutcome::Rendered(value) => Ok(value),
        ScreenOutcome::Redirected(route) => bail!("Redirected to {}", route),
        ScreenOutcome::Abandoned => bail!("View closed before it loaded"),
    }
}
