pub mod data;
pub mod layout;
