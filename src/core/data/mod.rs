pub mod colour;
pub mod complex;
pub mod grid_point;
pub mod view_state;
