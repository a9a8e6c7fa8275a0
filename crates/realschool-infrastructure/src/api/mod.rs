//! Remote attendance API adapter.

mod client;
mod payload;

pub use client::HttpAttendanceApi;
