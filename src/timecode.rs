use crate::errors::FormatError;

/// Turns an FCPXML time attribute into `MM:SS` display text.
///
/// FCPXML writes times as seconds with a trailing `s`, either rational
/// ("1579/25s") or decimal ("95.7s"). The suffix is optional here. The
/// minutes field is zero-padded to two digits but grows past two when the
/// value calls for it.
pub fn normalize(raw: &str) -> Result<String, FormatError> {
    let seconds = parse_seconds(raw)?;

    let minutes = (seconds / 60.0).floor() as u64;
    let remaining_seconds = (seconds % 60.0).floor() as u64;

    Ok(format!("{:02}:{:02}", minutes, remaining_seconds))
}

fn parse_seconds(raw: &str) -> Result<f64, FormatError> {
    let value = raw.strip_suffix('s').unwrap_or(raw);

    let seconds = match value.split_once('/') {
        Some((num, den)) => {
            let num: u64 = num
                .parse()
                .map_err(|_| FormatError::Unparseable(raw.to_owned()))?;
            let den: u64 = den
                .parse()
                .map_err(|_| FormatError::Unparseable(raw.to_owned()))?;
            if den == 0 {
                return Err(FormatError::ZeroDenominator(raw.to_owned()));
            }
            num as f64 / den as f64
        }
        None => value
            .parse::<f64>()
            .map_err(|_| FormatError::Unparseable(raw.to_owned()))?,
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(FormatError::Unparseable(raw.to_owned()));
    }

    Ok(seconds)
}
