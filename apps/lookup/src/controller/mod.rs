//! Controller layer: UI events, the screen state container, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
