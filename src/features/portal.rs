//! Staff portals: one per staff role, each mounted under its own path with a
//! sidebar menu.

use crate::features::auth::roles;

pub const CONTRACTS_PATH: &str = "/service/contracts";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portal {
    /// Role a session must carry to enter.
    pub role: &'static str,
    pub base_path: &'static str,
    pub title: &'static str,
    /// Whether the portal lists contracts.
    pub manages_contracts: bool,
}

pub const ADMIN: Portal = Portal {
    role: roles::ADMIN,
    base_path: "/admin",
    title: "Quản trị hệ thống",
    manages_contracts: false,
};

pub const CASHIER: Portal = Portal {
    role: roles::CASHIER_STAFF,
    base_path: "/cashier",
    title: "Thu ngân",
    manages_contracts: false,
};

pub const TECHNICAL: Portal = Portal {
    role: roles::TECHNICAL_STAFF,
    base_path: "/technical",
    title: "Kỹ thuật",
    manages_contracts: false,
};

pub const SERVICE: Portal = Portal {
    role: roles::SERVICE_STAFF,
    base_path: "/service",
    title: "Dịch vụ khách hàng",
    manages_contracts: true,
};

pub const ACCOUNTING: Portal = Portal {
    role: roles::ACCOUNTING_STAFF,
    base_path: "/accounting",
    title: "Kế toán",
    manages_contracts: false,
};

pub const PORTALS: [Portal; 5] = [ADMIN, CASHIER, TECHNICAL, SERVICE, ACCOUNTING];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: String,
}

impl Portal {
    /// Main sidebar menu, in display order.
    pub fn menu(&self) -> Vec<MenuItem> {
        let mut items = vec![MenuItem {
            label: "Bảng điều khiển",
            path: self.base_path.to_string(),
        }];
        if self.manages_contracts {
            items.push(MenuItem {
                label: "Quản lý Hợp đồng",
                path: format!("{}/contracts", self.base_path),
            });
        }
        items.push(MenuItem {
            label: "Hồ sơ cá nhân",
            path: format!("{}/profile", self.base_path),
        });
        items.push(MenuItem {
            label: "Đổi mật khẩu",
            path: format!("{}/change-password", self.base_path),
        });
        items
    }
}

/// A menu entry is active only on an exact path match.
pub fn is_active(item: &MenuItem, pathname: &str) -> bool {
    normalize(pathname) == item.path
}

/// The contract-status filter group only appears on the contract list.
pub fn show_status_filter(pathname: &str) -> bool {
    normalize(pathname) == CONTRACTS_PATH
}

fn normalize(pathname: &str) -> &str {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_staff_role_has_a_portal() {
        let role_names: Vec<_> = PORTALS.iter().map(|portal| portal.role).collect();
        assert_eq!(
            role_names,
            vec![
                roles::ADMIN,
                roles::CASHIER_STAFF,
                roles::TECHNICAL_STAFF,
                roles::SERVICE_STAFF,
                roles::ACCOUNTING_STAFF
            ]
        );
        for portal in PORTALS {
            assert_eq!(roles::landing_path(portal.role), portal.base_path);
        }
    }

    #[test]
    fn only_service_menu_lists_contracts() {
        let paths: Vec<_> = SERVICE.menu().into_iter().map(|item| item.path).collect();
        assert_eq!(
            paths,
            vec![
                "/service",
                "/service/contracts",
                "/service/profile",
                "/service/change-password"
            ]
        );
        assert!(CASHIER.menu().iter().all(|item| !item.path.contains("contracts")));
    }

    #[test]
    fn menu_activation_is_exact() {
        let dashboard = &TECHNICAL.menu()[0];
        assert!(is_active(dashboard, "/technical"));
        assert!(is_active(dashboard, "/technical/"));
        assert!(!is_active(dashboard, "/technical/profile"));
    }

    #[test]
    fn status_filter_only_on_contract_list() {
        assert!(show_status_filter("/service/contracts"));
        assert!(show_status_filter("/service/contracts/"));
        assert!(!show_status_filter("/service"));
        assert!(!show_status_filter("/service/contracts/12"));
    }
}
