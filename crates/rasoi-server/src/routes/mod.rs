pub mod meta;
pub mod orders;
pub mod suppliers;
pub mod vendors;
