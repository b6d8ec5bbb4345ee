#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub ingredients_text: String,
}

#[derive(Debug, Clone)]
pub struct ScanBarcodeInput {
    pub barcode: String,
}

#[derive(Debug, Clone)]
pub struct ClassifyImageInput {
    pub image_data: Vec<u8>,
    /// Rate-limit key identifying the caller, e.g. the client IP.
    pub caller_key: String,
}
