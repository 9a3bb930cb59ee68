pub mod catalog;
pub mod dot;
