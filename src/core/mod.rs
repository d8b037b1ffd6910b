pub mod actions;
pub mod colour;
pub mod commands;
pub mod data;
pub mod fractals;
pub mod ports;
pub mod scan;
pub mod surface;
