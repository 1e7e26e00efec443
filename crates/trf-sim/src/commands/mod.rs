pub mod mine;
pub mod verify;
pub mod version;
