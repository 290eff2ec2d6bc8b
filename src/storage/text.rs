use super::codec::FigureCodec;
use super::error::FormatError;
use crate::models::Figure;

const FORMAT: &str = "TXT";

/// Line-oriented format: name, width and height on the first three lines
/// Lines after the third are ignored
pub struct TextCodec;

impl TextCodec {
    fn parse_number(field: &'static str, line: &str) -> Result<f64, FormatError> {
        line.trim()
            .parse::<f64>()
            .map_err(|source| FormatError::InvalidNumber {
                field,
                value: line.to_string(),
                source,
            })
    }
}

impl FigureCodec for TextCodec {
    fn suffix(&self) -> &'static str {
        ".txt"
    }

    fn name(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, bytes: &[u8]) -> Result<Figure, FormatError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| FormatError::invalid_data(FORMAT, format!("not UTF-8 ({})", e)))?;

        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 3 {
            return Err(FormatError::invalid_data(
                FORMAT,
                format!("expected at least 3 lines, found {}", lines.len()),
            ));
        }
        if lines.len() > 3 {
            log::debug!("Ignoring {} extra lines in text figure", lines.len() - 3);
        }

        Ok(Figure {
            name: lines[0].to_string(),
            width: Self::parse_number("width", lines[1])?,
            height: Self::parse_number("height", lines[2])?,
        })
    }

    fn encode(&self, figure: &Figure) -> Result<Vec<u8>, FormatError> {
        // A line break in the name would shift width and height down a line
        if figure.name.contains(['\n', '\r']) {
            return Err(FormatError::invalid_data(
                FORMAT,
                format!("name {:?} contains a line break", figure.name),
            ));
        }
        // f64 Display is the shortest text that parses back to the same value
        Ok(format!("{}\n{}\n{}", figure.name, figure.width, figure.height).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ErrorKind;

    #[test]
    fn test_encode_exact_bytes() {
        let bytes = TextCodec.encode(&Figure::new("Box", 3.5, 2.0)).unwrap();
        assert_eq!(bytes, b"Box\n3.5\n2");
    }

    #[test]
    fn test_decode_basic() {
        let figure = TextCodec.decode(b"Box\n3.5\n2").unwrap();
        assert_eq!(figure, Figure::new("Box", 3.5, 2.0));
    }

    #[test]
    fn test_decode_ignores_extra_lines() {
        let figure = TextCodec.decode(b"Box\n1\n2\nextra\nmore\n").unwrap();
        assert_eq!(figure, Figure::new("Box", 1.0, 2.0));
    }

    #[test]
    fn test_decode_too_few_lines() {
        let inputs: [&[u8]; 4] = [b"", b"Box", b"Box\n3.5", b"Box\n3.5\n"];
        for input in inputs {
            let err = TextCodec.decode(input).unwrap_err();
            assert!(matches!(err, FormatError::InvalidData { .. }), "{:?}", err);
        }
    }

    #[test]
    fn test_decode_non_numeric_width() {
        let err = TextCodec.decode(b"Box\nabc\n2.0").unwrap_err();
        match &err {
            FormatError::InvalidNumber { field, value, .. } => {
                assert_eq!(*field, "width");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_decode_non_numeric_height() {
        let err = TextCodec.decode(b"Box\n1\n").unwrap_err();
        assert!(matches!(err, FormatError::InvalidData { .. }));

        let err = TextCodec.decode(b"Box\n1\n\n").unwrap_err();
        assert!(matches!(err, FormatError::InvalidNumber { field: "height", .. }));
    }

    #[test]
    fn test_name_is_kept_raw() {
        let figure = TextCodec.decode(b"  Big Box  \r\n 4 \r\n5\r\n").unwrap();
        assert_eq!(figure.name, "  Big Box  ");
        assert_eq!(figure.width, 4.0);
        assert_eq!(figure.height, 5.0);
    }

    #[test]
    fn test_decode_strips_byte_order_mark() {
        let figure = TextCodec.decode("\u{feff}Box\n1\n2".as_bytes()).unwrap();
        assert_eq!(figure, Figure::new("Box", 1.0, 2.0));
    }

    #[test]
    fn test_encode_rejects_line_feed_in_name() {
        let err = TextCodec
            .encode(&Figure::new("two\nlines", 1.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidData { .. }), "{:?}", err);
    }

    #[test]
    fn test_encode_rejects_carriage_return_in_name() {
        let err = TextCodec
            .encode(&Figure::new("Box\r", 1.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidData { .. }), "{:?}", err);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = TextCodec.decode(&[0xff, b'\n', b'1', b'\n', b'2']).unwrap_err();
        assert!(matches!(err, FormatError::InvalidData { .. }));
    }

    #[test]
    fn test_round_trip() {
        let figures = [
            Figure::new("Box", 3.5, 2.0),
            Figure::new("tiny", 1e-300, -0.1),
            Figure::new("huge", 1.7976931348623157e308, 123456789.125),
            Figure::new("third", 1.0 / 3.0, 2.0 / 3.0),
        ];
        for figure in figures {
            let bytes = TextCodec.encode(&figure).unwrap();
            assert_eq!(TextCodec.decode(&bytes).unwrap(), figure);
        }
    }
}
