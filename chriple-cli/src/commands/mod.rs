pub mod build;
pub mod encode;
