//! Reusable widgets for the TUI

pub mod input;
pub mod notification;
pub mod select;

pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationType, NotificationWidget};
pub use select::SelectInput;
