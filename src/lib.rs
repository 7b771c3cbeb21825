pub mod api;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod consts;
pub mod error;
pub mod roads;
pub mod session;
pub mod vci;
// cmd and reports are binary modules (see main.rs).
