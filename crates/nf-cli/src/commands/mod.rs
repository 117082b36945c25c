pub mod families;
pub mod generate;
