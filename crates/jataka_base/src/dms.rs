//! Degree-minute-second display formatting.

use std::fmt::{Display, Formatter};

/// How rounded seconds that reach 60 are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DmsStyle {
    /// Seconds are rounded independently and may read `60"`.
    #[default]
    Reference,
    /// A rounded `60"` carries into minutes, and `60'` into degrees.
    Carry,
}

/// Degrees-minutes-seconds representation of an angle, seconds rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    /// Sign of the original angle.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u64,
    /// Arc-minutes.
    pub minutes: u8,
    /// Rounded arc-seconds (0..=60 in reference style).
    pub seconds: u8,
}

impl Dms {
    /// The value printed for missing or non-numeric input.
    pub const ZERO: Dms = Dms {
        negative: false,
        degrees: 0,
        minutes: 0,
        seconds: 0,
    };
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}° {}' {}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Convert decimal degrees to rounded DMS.
///
/// Negative input is split on its absolute value. Returns `None` for NaN
/// or infinite input.
pub fn deg_to_dms(deg: f64, style: DmsStyle) -> Option<Dms> {
    if !deg.is_finite() {
        return None;
    }
    let d = deg.abs();
    let whole = d.floor();
    let minutes_dec = (d - whole) * 60.0;
    let minutes = minutes_dec.floor();
    let seconds = ((minutes_dec - minutes) * 60.0).round();

    let mut dms = Dms {
        negative: deg < 0.0,
        degrees: whole as u64,
        minutes: minutes as u8,
        seconds: seconds as u8,
    };
    if style == DmsStyle::Carry {
        if dms.seconds >= 60 {
            dms.seconds -= 60;
            dms.minutes += 1;
        }
        if dms.minutes >= 60 {
            dms.minutes -= 60;
            dms.degrees += 1;
        }
    }
    Some(dms)
}

/// Format decimal degrees as `D° M' S"` in reference style.
///
/// NaN prints as `0° 0' 0"`.
pub fn format_dms(deg: f64) -> String {
    format_dms_with(deg, DmsStyle::Reference)
}

/// Format decimal degrees as `D° M' S"` in the given style.
pub fn format_dms_with(deg: f64, style: DmsStyle) -> String {
    deg_to_dms(deg, style).unwrap_or(Dms::ZERO).to_string()
}
