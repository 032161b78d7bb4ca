mod change_password;
mod profile;

pub(crate) use change_password::StaffChangePasswordPage;
pub(crate) use profile::StaffProfilePage;
