use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

/// Anything that can turn a card image into text.
///
/// A provider that cannot read the image returns an empty string; callers
/// treat that as "no fields found", not as an error.
pub trait OcrProvider {
    fn recognize(&self, image_path: &Path) -> String;
}

impl<F> OcrProvider for F
where
    F: Fn(&Path) -> String,
{
    fn recognize(&self, image_path: &Path) -> String {
        self(image_path)
    }
}

/// Serves text that was recognized ahead of time and saved as a transcript.
///
/// The path `-` reads the transcript from standard input.
pub struct TranscriptOcr;

impl TranscriptOcr {
    pub fn new() -> Self {
        TranscriptOcr
    }

    fn read_transcript(path: &Path) -> std::io::Result<String> {
        let bytes = if path == Path::new("-") {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        } else {
            fs::read(path)?
        };
        // Scanned text occasionally carries stray bytes; keep what decodes
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for TranscriptOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrProvider for TranscriptOcr {
    fn recognize(&self, image_path: &Path) -> String {
        match Self::read_transcript(image_path) {
            Ok(text) => {
                debug!("Loaded {} bytes of OCR text from {:?}", text.len(), image_path);
                text
            }
            Err(e) => {
                warn!("Error reading OCR text from {:?}: {}", image_path, e);
                String::new()
            }
        }
    }
}
