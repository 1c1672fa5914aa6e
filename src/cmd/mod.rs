pub mod catalog;
pub mod consistency;
pub mod score;
