pub mod length;
pub mod stemmer;
pub mod stopword;
