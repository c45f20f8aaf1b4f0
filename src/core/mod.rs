pub mod catalog;
pub mod demo;
