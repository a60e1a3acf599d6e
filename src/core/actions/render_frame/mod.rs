pub mod frame_config;
pub mod render_frame;
