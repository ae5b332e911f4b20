//! The two page widgets that sit beside the password table.

pub mod contact;
pub mod navbar;
