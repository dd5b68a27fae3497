// TabJump shared type definitions

pub mod errors;
pub mod settings;
pub mod tab;
