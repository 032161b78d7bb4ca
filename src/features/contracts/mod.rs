//! Contract listing for the service portal, filtered by the status chosen in
//! the sidebar.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod status;
pub mod types;
