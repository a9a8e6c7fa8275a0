//! Application routes and the role → landing mapping.

use crate::session::Role;
use std::fmt;

const OWNER_ONLY: &[Role] = &[Role::Owner];
const STAFF_ONLY: &[Role] = &[Role::Staff];
const STUDENT_ONLY: &[Role] = &[Role::Student];

/// Every view the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login / registration screen (unauthenticated landing)
    Public,
    /// Generic dashboard entry that forwards to the role landing
    Dashboard,
    OwnerDashboard,
    StaffDashboard,
    StudentDashboard,
    PersonAdd,
    PersonAll,
    PersonAssign,
    PersonAssigned,
    PersonLocation,
    LocationAdd,
    LocationAll,
    DesignationAdd,
    DesignationAll,
    QrCodes,
    Reports,
    HolidayAdd,
    CompanyChange,
    ProfileEdit,
    LogoChange,
    About,
}

impl Route {
    pub const ALL: [Route; 21] = [
        Route::Public,
        Route::Dashboard,
        Route::OwnerDashboard,
        Route::StaffDashboard,
        Route::StudentDashboard,
        Route::PersonAdd,
        Route::PersonAll,
        Route::PersonAssign,
        Route::PersonAssigned,
        Route::PersonLocation,
        Route::LocationAdd,
        Route::LocationAll,
        Route::DesignationAdd,
        Route::DesignationAll,
        Route::QrCodes,
        Route::Reports,
        Route::HolidayAdd,
        Route::CompanyChange,
        Route::ProfileEdit,
        Route::LogoChange,
        Route::About,
    ];

    /// The landing route for a role.
    ///
    /// This is the only role → route mapping in the client; the guard, the
    /// post-login redirect and the generic dashboard all go through it.
    pub fn landing_for(role: Role) -> Route {
        match role {
            Role::Owner => Route::OwnerDashboard,
            Role::Staff => Route::StaffDashboard,
            Role::Student => Route::StudentDashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Public => "/",
            Route::Dashboard => "/dashboard",
            Route::OwnerDashboard => "/dashboard/owner",
            Route::StaffDashboard => "/dashboard/staff",
            Route::StudentDashboard => "/dashboard/student",
            Route::PersonAdd => "/person/add",
            Route::PersonAll => "/person/all",
            Route::PersonAssign => "/person/assign",
            Route::PersonAssigned => "/person/assigned",
            Route::PersonLocation => "/person-location",
            Route::LocationAdd => "/location/add",
            Route::LocationAll => "/location/all",
            Route::DesignationAdd => "/designation/add",
            Route::DesignationAll => "/designation/all",
            Route::QrCodes => "/qrcodes",
            Route::Reports => "/reports",
            Route::HolidayAdd => "/holiday/add",
            Route::CompanyChange => "/company/change",
            Route::ProfileEdit => "/profile/edit",
            Route::LogoChange => "/logo/change",
            Route::About => "/about",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether a session is needed to view this route at all.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Public)
    }

    /// Roles allowed on this route; `None` means any signed-in role.
    ///
    /// Each role landing requires exactly the role that lands there, so a
    /// redirect to a landing can never bounce again.
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::OwnerDashboard => Some(OWNER_ONLY),
            Route::StaffDashboard => Some(STAFF_ONLY),
            Route::StudentDashboard => Some(STUDENT_ONLY),
            Route::PersonAdd
            | Route::PersonAssign
            | Route::LocationAdd
            | Route::DesignationAdd
            | Route::DesignationAll
            | Route::HolidayAdd
            | Route::CompanyChange
            | Route::LogoChange => Some(OWNER_ONLY),
            _ => None,
        }
    }

    /// True if `role` may view this route once signed in.
    pub fn permits(&self, role: Role) -> bool {
        match self.required_roles() {
            Some(roles) if !roles.is_empty() => roles.contains(&role),
            _ => true,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_landing_is_defined_and_distinct_for_every_role() {
        let landings: HashSet<Route> = Role::ALL.into_iter().map(Route::landing_for).collect();
        assert_eq!(landings.len(), Role::ALL.len());
        assert!(!landings.contains(&Route::Public));
    }

    #[test]
    fn test_landing_requires_exactly_its_role() {
        for role in Role::ALL {
            let landing = Route::landing_for(role);
            assert_eq!(landing.required_roles(), Some(&[role][..]));
            assert!(landing.permits(role));
        }
    }

    #[test]
    fn test_concrete_landing_paths() {
        assert_eq!(Route::landing_for(Role::Owner).path(), "/dashboard/owner");
        assert_eq!(Route::landing_for(Role::Staff).path(), "/dashboard/staff");
        assert_eq!(Route::landing_for(Role::Student).path(), "/dashboard/student");
    }

    #[test]
    fn test_paths_are_unique_and_parse_back() {
        let paths: HashSet<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn test_admin_routes_are_owner_only() {
        assert!(Route::PersonAdd.permits(Role::Owner));
        assert!(!Route::PersonAdd.permits(Role::Staff));
        assert!(!Route::DesignationAll.permits(Role::Student));
        assert!(Route::PersonAll.permits(Role::Student));
    }

    #[test]
    fn test_only_public_is_unprotected() {
        let unprotected: Vec<Route> = Route::ALL.into_iter().filter(|r| !r.is_protected()).collect();
        assert_eq!(unprotected, vec![Route::Public]);
    }
}
