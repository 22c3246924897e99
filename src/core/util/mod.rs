pub mod screen_to_drawing_coords;
