pub mod dict;
pub mod index;
