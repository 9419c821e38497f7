//! Terminal front end: a hot-seat table where two players share one keyboard.

pub mod app;
pub mod controller;
pub mod ui;
