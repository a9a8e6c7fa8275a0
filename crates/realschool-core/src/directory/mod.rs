//! Organization directory: persons, locations, designations, assignments.

mod api;
mod model;

pub use api::AttendanceApi;
pub use model::{
    Assignment, Company, Credentials, Designation, FromRecord, Location, NewAssignment,
    NewDesignation, NewLocation, NewPerson, Person, Registration,
};
