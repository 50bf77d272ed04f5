pub mod image_file_writer;
pub mod source_image_reader;
pub mod system_image_viewer;
