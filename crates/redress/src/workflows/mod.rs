pub mod letters;
pub mod rights;
