pub mod agenda;
pub mod config;
pub mod roster;
pub mod show;
