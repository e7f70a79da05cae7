pub mod export;
pub mod house;
pub mod plot;
pub mod ui;
