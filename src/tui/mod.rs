pub mod colors;
pub mod printer;
