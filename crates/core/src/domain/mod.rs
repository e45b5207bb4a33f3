pub mod product;
pub mod selection;
