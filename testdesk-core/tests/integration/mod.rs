mod engine_seam_tests;
mod navigation_tests;
mod settings_file_tests;
