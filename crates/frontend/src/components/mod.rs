pub mod map_view;
pub mod nav_controls;
