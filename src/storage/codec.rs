use std::fs;
use std::path::Path;

use super::error::FormatError;
use crate::models::Figure;

/// Trait for a figure file format
/// Each implementation is a stateless decode/encode pair selected by suffix
pub trait FigureCodec: Send + Sync {
    /// Suffix this codec is registered under, including the leading dot
    fn suffix(&self) -> &'static str;

    /// Human-readable format name (for messages and logging)
    fn name(&self) -> &'static str;

    /// Whether decode/encode can succeed at all
    fn is_implemented(&self) -> bool {
        true
    }

    /// Parse file contents into a figure
    fn decode(&self, bytes: &[u8]) -> Result<Figure, FormatError>;

    /// Render a figure into file contents
    fn encode(&self, figure: &Figure) -> Result<Vec<u8>, FormatError>;

    /// Read and decode the file at `path`
    fn load(&self, path: &Path) -> Result<Figure, FormatError> {
        let bytes = fs::read(path).map_err(|e| FormatError::io(path, e))?;
        let figure = self.decode(&bytes)?;
        log::debug!("Decoded {} figure from {:?}", self.name(), path);
        Ok(figure)
    }

    /// Encode the figure and overwrite the file at `path`
    /// Nothing is written when encoding fails
    fn save(&self, path: &Path, figure: &Figure) -> Result<(), FormatError> {
        let bytes = self.encode(figure)?;
        fs::write(path, &bytes).map_err(|e| FormatError::io(path, e))?;
        log::debug!(
            "Wrote {} bytes of {} to {:?}",
            bytes.len(),
            self.name(),
            path
        );
        Ok(())
    }
}
