pub mod client;
pub mod error;
pub mod health;
pub mod inquiry;
pub mod locale;
pub mod product;
pub mod security;
pub mod shopping_list;
pub mod tags;
