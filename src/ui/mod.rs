//! egui rendering. Everything here reads [`AppState`](crate::state::AppState)
//! and only changes it through selection events or the active tab.

pub mod panels;
pub mod plot;
pub mod tables;
