pub mod extractor;
pub mod ocr;
pub mod patterns;

pub use extractor::FieldExtractor;
pub use ocr::{OcrProvider, TranscriptOcr};
