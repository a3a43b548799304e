pub mod client;
pub mod entity;
pub mod source;
