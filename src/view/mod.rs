pub mod html;
pub mod table;
pub mod text;
pub mod toast;

pub use table::{render, RevealState, TableMarkup, TableRow};
pub use toast::Toast;

// Notification texts shown after each action.
pub const MSG_SAVED: &str = "Password Saved";
pub const MSG_DELETED: &str = "Password entry deleted";
pub const MSG_REVEALED: &str = "Password Revealed";
pub const MSG_HIDDEN: &str = "Password Hidden";
