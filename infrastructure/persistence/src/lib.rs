pub mod db;
pub mod client {
    pub mod entity;
    pub mod repository;
}
pub mod session {
    pub mod store;
}
