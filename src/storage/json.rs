use super::codec::FigureCodec;
use super::error::FormatError;
use crate::models::Figure;

const FORMAT: &str = "JSON";

/// Pretty-printed JSON object with `name`, `width` and `height` keys
pub struct JsonCodec;

impl FigureCodec for JsonCodec {
    fn suffix(&self) -> &'static str {
        ".json"
    }

    fn name(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, bytes: &[u8]) -> Result<Figure, FormatError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn encode(&self, figure: &Figure) -> Result<Vec<u8>, FormatError> {
        // serde_json would write NaN and infinities as null, which cannot be read back
        if !(figure.width.is_finite() && figure.height.is_finite()) {
            return Err(FormatError::invalid_data(
                FORMAT,
                format!(
                    "width and height must be finite (got {} x {})",
                    figure.width, figure.height
                ),
            ));
        }
        Ok(serde_json::to_vec_pretty(figure)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ErrorKind;

    #[test]
    fn test_decode_compact() {
        let figure = JsonCodec
            .decode(br#"{"name":"Box","width":3.5,"height":2}"#)
            .unwrap();
        assert_eq!(figure, Figure::new("Box", 3.5, 2.0));
    }

    #[test]
    fn test_encode_is_pretty() {
        let bytes = JsonCodec.encode(&Figure::new("Box", 3.5, 2.0)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "{\n  \"name\": \"Box\",\n  \"width\": 3.5,\n  \"height\": 2.0\n}"
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let figure = JsonCodec.decode(br#"{"width": 4}"#).unwrap();
        assert_eq!(figure, Figure::new("", 4.0, 0.0));

        let figure = JsonCodec.decode(b"{}").unwrap();
        assert_eq!(figure, Figure::new("", 0.0, 0.0));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let figure = JsonCodec
            .decode(br#"{"name":"Box","width":1,"height":2,"color":"red"}"#)
            .unwrap();
        assert_eq!(figure, Figure::new("Box", 1.0, 2.0));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let figure = JsonCodec
            .decode(br#"{"Name":"Box","Width":1,"Height":2}"#)
            .unwrap();
        assert_eq!(figure, Figure::new("", 0.0, 0.0));
    }

    #[test]
    fn test_malformed_input() {
        let inputs: [&[u8]; 5] = [
            b"",
            b"{",
            b"not json",
            br#"{"name":"Box","width":"wide","height":2}"#,
            br#"[1, 2, 3]"#,
        ];
        for input in inputs {
            let err = JsonCodec.decode(input).unwrap_err();
            assert!(matches!(err, FormatError::MalformedJson(_)), "{:?}", err);
            assert_eq!(err.kind(), ErrorKind::InvalidData);
        }
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        let err = JsonCodec
            .encode(&Figure::new("Box", f64::NAN, 1.0))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidData { .. }));

        let err = JsonCodec
            .encode(&Figure::new("Box", 1.0, f64::INFINITY))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidData { .. }));

        assert!(JsonCodec.encode(&Figure::new("Box", 3.5, -2.0)).is_ok());
    }

    #[test]
    fn test_round_trip() {
        let figures = [
            Figure::new("Box", 3.5, 2.0),
            Figure::new("quote \" and \\ slash", -1e-12, 6.02e23),
            Figure::new("", 0.0, 0.0),
            Figure::new("unicode ✓", 1.0 / 3.0, 2.5),
        ];
        for figure in figures {
            let bytes = JsonCodec.encode(&figure).unwrap();
            assert_eq!(JsonCodec.decode(&bytes).unwrap(), figure);
        }
    }
}
