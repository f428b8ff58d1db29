pub mod index;
pub mod subscribe;
