pub mod batch;
pub mod catalog;
pub mod classify;
pub mod evaluate;
pub mod roads;
