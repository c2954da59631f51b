//! The user store and the actor that owns it.

mod service;
pub mod store;

pub use service::*;
pub use store::{IdPolicy, UserStore};
