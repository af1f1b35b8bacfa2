//! HTTP request handlers

pub mod health;
pub mod index;
pub mod locations;
pub mod weather;
