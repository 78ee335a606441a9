//! Role-route map: where each role lands after signing in.

use market_types::Role;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const BECOME_VENDOR_PATH: &str = "/become-vendor";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const VENDOR_DASHBOARD_PATH: &str = "/vendor/dashboard";

/// Canonical landing page for a role.
///
/// This is the only place a role turns into a path.
pub const fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD_PATH,
        Role::Vendor => VENDOR_DASHBOARD_PATH,
        Role::Customer => HOME_PATH,
    }
}
