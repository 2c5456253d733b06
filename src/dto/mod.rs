pub mod cart;
pub mod items;
