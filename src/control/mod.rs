pub mod command;
pub mod lander;
pub mod mission;
