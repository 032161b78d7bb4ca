mod forgot_password;
mod home;
mod login;
mod not_found;
mod portal_dashboard;
mod redirect;
mod reset_password;
mod service;
mod staff;
mod verify_account;

pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use portal_dashboard::PortalDashboardPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use service::ServiceContractsPage;
pub(crate) use staff::{StaffChangePasswordPage, StaffProfilePage};
pub(crate) use verify_account::VerifyAccountPage;

use crate::components::PortalLayout;
use crate::features::portal;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const LOGIN: &str = crate::features::auth::guard::LOGIN_PATH;
    pub const FORGOT_PASSWORD: &str = "/forgot";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/verify") view=VerifyAccountPage />
            <Route path=path!("/forgot") view=ForgotPasswordPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
            <ParentRoute path=path!("/admin") view=|| view! { <PortalLayout portal=portal::ADMIN /> }>
                <Route path=path!("") view=PortalDashboardPage />
                <Route path=path!("profile") view=StaffProfilePage />
                <Route path=path!("change-password") view=StaffChangePasswordPage />
            </ParentRoute>
            <ParentRoute path=path!("/cashier") view=|| view! { <PortalLayout portal=portal::CASHIER /> }>
                <Route path=path!("") view=PortalDashboardPage />
                <Route path=path!("profile") view=StaffProfilePage />
                <Route path=path!("change-password") view=StaffChangePasswordPage />
            </ParentRoute>
            <ParentRoute path=path!("/technical") view=|| view! { <PortalLayout portal=portal::TECHNICAL /> }>
                <Route path=path!("") view=PortalDashboardPage />
                <Route path=path!("profile") view=StaffProfilePage />
                <Route path=path!("change-password") view=StaffChangePasswordPage />
            </ParentRoute>
            <ParentRoute path=path!("/service") view=|| view! { <PortalLayout portal=portal::SERVICE /> }>
                <Route path=path!("") view=PortalDashboardPage />
                <Route path=path!("contracts") view=ServiceContractsPage />
                <Route path=path!("profile") view=StaffProfilePage />
                <Route path=path!("change-password") view=StaffChangePasswordPage />
            </ParentRoute>
            <ParentRoute path=path!("/accounting") view=|| view! { <PortalLayout portal=portal::ACCOUNTING /> }>
                <Route path=path!("") view=PortalDashboardPage />
                <Route path=path!("profile") view=StaffProfilePage />
                <Route path=path!("change-password") view=StaffChangePasswordPage />
            </ParentRoute>
        </Routes>
    }
}
