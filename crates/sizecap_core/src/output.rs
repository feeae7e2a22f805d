/// Content of an emitted asset. Assets may carry either text (CSS, HTML,
/// JSON, ...) or raw bytes (images, fonts, ...).
#[derive(Debug, Clone)]
pub enum AssetSource {
    Text(String),
    Binary(Vec<u8>),
}

/// A non-executable output file carrying literal source content.
#[derive(Debug, Clone)]
pub struct OutputAsset {
    pub source: AssetSource,
}

/// An executable output file containing generated program code.
#[derive(Debug, Clone)]
pub struct OutputChunk {
    pub code: String,
}

/// One entry of a [`crate::Bundle`], discriminated by kind.
#[derive(Debug, Clone)]
pub enum Output {
    Asset(OutputAsset),
    Chunk(OutputChunk),
}

impl Output {
    pub fn asset_text(source: impl Into<String>) -> Self {
        Output::Asset(OutputAsset { source: AssetSource::Text(source.into()) })
    }

    pub fn asset_binary(source: impl Into<Vec<u8>>) -> Self {
        Output::Asset(OutputAsset { source: AssetSource::Binary(source.into()) })
    }

    pub fn chunk(code: impl Into<String>) -> Self {
        Output::Chunk(OutputChunk { code: code.into() })
    }

    /// Byte size as seen by the size check: the UTF-8 length of textual
    /// content. Binary asset sources are not measured and count as zero.
    pub fn measured_size(&self) -> u64 {
        match self {
            Output::Asset(asset) => match &asset.source {
                AssetSource::Text(text) => text.len() as u64,
                AssetSource::Binary(_) => 0,
            },
            Output::Chunk(chunk) => chunk.code.len() as u64,
        }
    }
}
