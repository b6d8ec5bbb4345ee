pub mod analyze_text;
pub mod classify_image;
pub mod get_ingredient;
pub mod scan_barcode;
