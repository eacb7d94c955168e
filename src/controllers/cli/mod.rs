pub mod render_file;
