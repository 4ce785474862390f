pub mod notification;
pub mod scroll_to_top;
