pub mod compute_zoom_rect;
pub mod format_significant;
pub mod hsl_to_rgb;
pub mod pixel_to_plane;
