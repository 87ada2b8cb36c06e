pub mod common;
pub mod frontend;
pub mod models;
pub mod web;
