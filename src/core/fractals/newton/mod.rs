pub mod algorithm;
pub mod colour_map;
pub mod errors;
pub mod roots;
