//! Page modules.

pub mod home;
