pub mod chat;
pub mod page;
