//! Layout components shared across routes.

mod app_shell;
mod portal_layout;
mod sidebar;

pub(crate) use app_shell::AppShell;
pub(crate) use portal_layout::PortalLayout;
pub(crate) use sidebar::Sidebar;
