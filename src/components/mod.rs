pub mod app;
pub mod comic_image;
pub mod comic_result;
pub mod comic_viewer;
pub mod comics_gallery;
pub mod complexity_slider;
pub mod header;
pub mod landing_page;
pub mod load_error;
pub mod progress_modal;
pub mod quiz_modal;
pub mod quiz_results;
pub mod style_selector;
pub mod topic_input;
