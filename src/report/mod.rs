pub mod document;
pub mod merger;
pub mod xml;
