//! Role labels as the backend reports them in `roleName`.

use crate::features::portal::PORTALS;

pub const ADMIN: &str = "ADMIN";
pub const CUSTOMER: &str = "CUSTOMER";
pub const CASHIER_STAFF: &str = "CASHIER_STAFF";
pub const ACCOUNTING_STAFF: &str = "ACCOUNTING_STAFF";
pub const SERVICE_STAFF: &str = "SERVICE_STAFF";
pub const TECHNICAL_STAFF: &str = "TECHNICAL_STAFF";

/// Where a freshly signed-in account lands: its staff portal, or home for
/// roles without one.
pub fn landing_path(role_name: &str) -> &'static str {
    PORTALS
        .iter()
        .find(|portal| portal.role == role_name)
        .map_or("/", |portal| portal.base_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_roles_land_on_their_portal() {
        assert_eq!(landing_path(CASHIER_STAFF), "/cashier");
        assert_eq!(landing_path(TECHNICAL_STAFF), "/technical");
        assert_eq!(landing_path(SERVICE_STAFF), "/service");
        assert_eq!(landing_path(ADMIN), "/admin");
        assert_eq!(landing_path(ACCOUNTING_STAFF), "/accounting");
    }

    #[test]
    fn other_roles_land_home() {
        assert_eq!(landing_path(CUSTOMER), "/");
        assert_eq!(landing_path(""), "/");
        assert_eq!(landing_path("service_staff"), "/");
    }
}
