use crate::constants::{FIELD_SEPARATOR, N_FIELDS};
use crate::error::RadarError;
use radar_data::{Reading, MAX_ANGLE_DEGREE, MIN_ANGLE_DEGREE};

/// Parses one `<angle>,<distance>` line.
///
/// The angle may carry a fractional part; it is truncated toward zero.
/// An infinite distance is kept so that it clamps to the range limit.
pub fn parse_line(line: &str) -> Result<Reading, RadarError> {
    if !line.contains(FIELD_SEPARATOR) {
        return Err(RadarError::MissingSeparator(line.to_string()));
    }
    let fields = line.split(FIELD_SEPARATOR).collect::<Vec<_>>();
    if fields.len() != N_FIELDS {
        return Err(RadarError::InvalidFieldCount(fields.len()));
    }

    let angle = to_finite(fields[0])?.trunc();
    if angle < MIN_ANGLE_DEGREE as f64 || angle > MAX_ANGLE_DEGREE as f64 {
        return Err(RadarError::AngleOutOfRange(angle as i64));
    }
    let distance = to_number(fields[1])?;
    if distance.is_nan() {
        return Err(RadarError::NonFiniteNumber(fields[1].trim().to_string()));
    }

    Ok(Reading::new(angle as i32, distance))
}

fn to_number(field: &str) -> Result<f64, RadarError> {
    let field = field.trim();
    field
        .parse::<f64>()
        .map_err(|_| RadarError::InvalidNumber(field.to_string()))
}

fn to_finite(field: &str) -> Result<f64, RadarError> {
    let value = to_number(field)?;
    if !value.is_finite() {
        let field = field.trim();
        return Err(RadarError::NonFiniteNumber(field.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("90,12.5").unwrap(), Reading::new(90, 12.5));
        assert_eq!(parse_line("0,0").unwrap(), Reading::new(0, 0.));
        assert_eq!(parse_line("180,250").unwrap(), Reading::new(180, 250.));
        assert_eq!(parse_line(" 45 , 7.25 ").unwrap(), Reading::new(45, 7.25));
    }

    #[test]
    fn test_parse_line_infinite_distance() {
        assert_eq!(
            parse_line("45,inf").unwrap(),
            Reading::new(45, f64::INFINITY)
        );
        assert_eq!(
            parse_line("45,-inf").unwrap(),
            Reading::new(45, f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_parse_line_truncates_angle() {
        assert_eq!(parse_line("45.9,10").unwrap().angle_degree, 45);
        assert_eq!(parse_line("179.99,10").unwrap().angle_degree, 179);
        // -0.5 truncates to zero and is therefore in range
        assert_eq!(parse_line("-0.5,10").unwrap().angle_degree, 0);
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(matches!(
            parse_line("9012.5"),
            Err(RadarError::MissingSeparator(_))
        ));
        assert!(matches!(
            parse_line("90,12.5,3"),
            Err(RadarError::InvalidFieldCount(3))
        ));
        assert!(matches!(
            parse_line("ninety,12.5"),
            Err(RadarError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_line("90,"),
            Err(RadarError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_line("90,NaN"),
            Err(RadarError::NonFiniteNumber(_))
        ));
        assert!(matches!(
            parse_line("inf,10"),
            Err(RadarError::NonFiniteNumber(_))
        ));
        assert!(matches!(
            parse_line("181,10"),
            Err(RadarError::AngleOutOfRange(181))
        ));
        assert!(matches!(
            parse_line("-3,10"),
            Err(RadarError::AngleOutOfRange(-3))
        ));
    }

    #[test]
    fn test_malformed_errors_are_classified() {
        assert!(parse_line("garbage").unwrap_err().is_malformed_line());
        assert!(parse_line("200,1").unwrap_err().is_malformed_line());
    }
}
