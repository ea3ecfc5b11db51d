pub mod albums;
pub mod panels;
