pub mod fuzzy;
pub mod results;
