use std::collections::HashMap;
use std::path::Path;

use super::codec::FigureCodec;
use super::error::FormatError;
use super::json::JsonCodec;
use super::text::TextCodec;
use super::xml::XmlCodec;
use crate::models::Figure;

/// Description of a registered format, for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub suffix: &'static str,
    pub name: &'static str,
    pub implemented: bool,
}

/// Dispatch table from path suffix to figure codec
///
/// Suffixes are matched exactly and case-sensitively against the path
/// extension (with its leading dot). There is no fallback codec.
pub struct FormatRegistry {
    codecs: HashMap<&'static str, Box<dyn FigureCodec>>,
}

impl FormatRegistry {
    /// Create a registry with no formats
    pub fn empty() -> Self {
        FormatRegistry {
            codecs: HashMap::new(),
        }
    }

    /// Create a registry with the built-in `.txt`, `.json` and `.xml` formats
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TextCodec));
        registry.register(Box::new(JsonCodec));
        registry.register(Box::new(XmlCodec));
        registry
    }

    /// Register a codec under its suffix
    /// Returns the codec previously registered for that suffix, if any
    pub fn register(&mut self, codec: Box<dyn FigureCodec>) -> Option<Box<dyn FigureCodec>> {
        log::debug!("Registering {} codec for '{}'", codec.name(), codec.suffix());
        self.codecs.insert(codec.suffix(), codec)
    }

    /// Registered formats, sorted by suffix
    pub fn formats(&self) -> Vec<FormatInfo> {
        let mut formats: Vec<FormatInfo> = self
            .codecs
            .values()
            .map(|codec| FormatInfo {
                suffix: codec.suffix(),
                name: codec.name(),
                implemented: codec.is_implemented(),
            })
            .collect();
        formats.sort_by_key(|info| info.suffix);
        formats
    }

    /// Select the codec for `path`, or fail with `UnsupportedFormat`
    pub fn codec_for(&self, path: &Path) -> Result<&dyn FigureCodec, FormatError> {
        let suffix = suffix_of(path);
        self.codecs
            .get(suffix.as_str())
            .map(|codec| codec.as_ref())
            .ok_or(FormatError::UnsupportedFormat { suffix })
    }

    /// Load a figure, choosing the format from the path suffix
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Figure, FormatError> {
        let path = path.as_ref();
        let codec = self.codec_for(path)?;
        let figure = codec.load(path)?;
        log::info!("Loaded {} figure '{}' from {:?}", codec.name(), figure.name, path);
        Ok(figure)
    }

    /// Save a figure, choosing the format from the path suffix
    /// The file is overwritten as a whole
    pub fn save(&self, path: impl AsRef<Path>, figure: &Figure) -> Result<(), FormatError> {
        let path = path.as_ref();
        let codec = self.codec_for(path)?;
        codec.save(path, figure)?;
        log::info!("Saved {} figure '{}' to {:?}", codec.name(), figure.name, path);
        Ok(())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension of `path` with a leading dot, or empty when there is none
pub fn suffix_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}
