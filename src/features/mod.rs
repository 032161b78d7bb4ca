pub mod auth;
pub mod contracts;
pub mod portal;
pub mod staff;
