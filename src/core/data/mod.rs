pub mod colour;
pub mod complex;
pub mod fractal_result;
pub mod pixel_buffer;
pub mod pixel_sample;
pub mod point;
pub mod primitive;
pub mod screen;
pub mod view_rect;
pub mod viewport;
pub mod zoom_box;
pub mod zoom_stack;
