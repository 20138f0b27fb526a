use crate::constants::Degree;

/// Estimate the accuracy of a numeric string based on its decimal precision.
///
/// Arguments
/// ---------------
/// * `field`: a string slice containing the numeric value (e.g., `"56.78"`), typically the last component of an angle
/// * `factor`: a scale factor to apply to the accuracy (e.g., `1.0 / 3600.0` for arcseconds)
///
/// Return
/// ----------
/// * the estimated accuracy scaled by `factor`
fn compute_accuracy(field: &str, factor: f64) -> f64 {
    let field = field.trim();
    match field.find('.') {
        Some(dot_pos) => {
            let digits_after_dot = field.len() - dot_pos - 1;
            10f64.powi(-(digits_after_dot as i32)) * factor
        }
        None => factor,
    }
}

/// Split a sexagesimal string into its three numeric components.
fn split_sexagesimal(value: &str) -> Option<(&str, f64, f64, &str, f64)> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [first, minutes, seconds] = parts.as_slice() else {
        return None;
    };

    let m: f64 = minutes.parse().ok()?;
    let s: f64 = seconds.parse().ok()?;
    if !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&s) {
        return None;
    }
    let lead: f64 = first.trim_start_matches(['-', '+']).parse().ok()?;
    Some((first, lead, m, seconds, s))
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: a string representing the right ascension in the format `HH MM SS.SS`
///
/// Returns
/// -------
/// * `Option<(Degree, Degree)>`: the right ascension in degrees and the accuracy of the
///   last field in degrees of time-arc. Returns `None` if the input format is invalid.
pub fn parse_ra_to_deg(ra: &str) -> Option<(Degree, Degree)> {
    let (first, h, m, s_raw, s) = split_sexagesimal(ra)?;
    if first.starts_with(['-', '+']) || !(0.0..24.0).contains(&h) {
        return None;
    }

    let ra_deg = (h + m / 60.0 + s / 3600.0) * 15.0;
    let acc = compute_accuracy(s_raw, 15.0 / 3600.0);
    Some((ra_deg, acc))
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: a string representing the declination in the format `±DD MM SS.SS`
///
/// Returns
/// -------
/// * `Option<(Degree, Degree)>`: the declination in degrees and the accuracy of the
///   last field in degrees. Returns `None` if the input format is invalid.
pub fn parse_dec_to_deg(dec: &str) -> Option<(Degree, Degree)> {
    let (first, d, m, s_raw, s) = split_sexagesimal(dec)?;

    let sign = if first.starts_with('-') { -1.0 } else { 1.0 };
    let dec_deg = sign * (d + m / 60.0 + s / 3600.0);
    if !(-90.0..=90.0).contains(&dec_deg) {
        return None;
    }
    let acc = compute_accuracy(s_raw, 1. / 3600.);
    Some((dec_deg, acc))
}

/// Format a right ascension in degrees as `HHhMMmSS.SSs`.
///
/// Rounding is done on the total number of centiseconds so that a value
/// such as `59.999s` carries into the minutes instead of printing `60.00s`.
pub fn format_ra_hms(ra_deg: Degree) -> String {
    const CS_PER_DAY: i64 = 24 * 3600 * 100;
    let total = ((ra_deg / 15.0) * 360_000.0).round() as i64;
    let total = total.rem_euclid(CS_PER_DAY);

    let h = total / 360_000;
    let m = (total % 360_000) / 6_000;
    let cs = total % 6_000;
    format!("{h:02}h{m:02}m{:02}.{:02}s", cs / 100, cs % 100)
}

/// Format a declination in degrees as `±DD°MM'SS.S"`.
pub fn format_dec_dms(dec_deg: Degree) -> String {
    let sign = if dec_deg < 0.0 { '-' } else { '+' };
    let total = (dec_deg.abs() * 36_000.0).round() as i64;

    let d = total / 36_000;
    let m = (total % 36_000) / 600;
    let ds = total % 600;
    format!("{sign}{d:02}°{m:02}'{:02}.{}\"", ds / 10, ds % 10)
}
