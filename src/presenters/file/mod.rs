pub mod ppm;
pub mod primitive_listing;
