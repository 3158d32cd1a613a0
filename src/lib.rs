pub mod game;
pub mod helpers;
pub mod model;
pub mod ui;
