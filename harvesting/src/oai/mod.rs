pub mod identifier;
pub mod pmh;
