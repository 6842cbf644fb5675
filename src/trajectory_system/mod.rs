pub mod kinematics;
pub mod root_finder;
