use std::path::Path;

use super::codec::FigureCodec;
use super::error::FormatError;
use crate::models::Figure;

const FORMAT: &str = "XML";

/// Registered placeholder for XML figures
/// Every operation fails with `NotImplemented`, without touching the file
pub struct XmlCodec;

impl FigureCodec for XmlCodec {
    fn suffix(&self) -> &'static str {
        ".xml"
    }

    fn name(&self) -> &'static str {
        FORMAT
    }

    fn is_implemented(&self) -> bool {
        false
    }

    fn decode(&self, _bytes: &[u8]) -> Result<Figure, FormatError> {
        Err(FormatError::NotImplemented { format: FORMAT })
    }

    fn encode(&self, _figure: &Figure) -> Result<Vec<u8>, FormatError> {
        Err(FormatError::NotImplemented { format: FORMAT })
    }

    fn load(&self, _path: &Path) -> Result<Figure, FormatError> {
        self.decode(&[])
    }
}
