//! Staff self-service: viewing one's own profile and changing the password.
//! Both endpoints take the account id from the stored session and require the
//! bearer token saved at login.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod password;
pub mod types;
