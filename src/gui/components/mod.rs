pub mod controls;
pub mod slide;
