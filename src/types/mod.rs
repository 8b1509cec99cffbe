//! Type definitions

pub mod account;
pub mod contact;

pub use account::*;
pub use contact::*;
