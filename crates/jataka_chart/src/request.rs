//! Birth request validation.
//!
//! A [`BirthRequest`] is what arrives at the service boundary: every field
//! optional, nothing checked. [`BirthDetails`] is the validated form with
//! the civil date-time and the UTC instant of birth resolved.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Largest timezone offset accepted, in hours.
pub const MAX_TIMEZONE_HOURS: f64 = 14.0;

/// Unvalidated birth request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    /// Degrees, north positive.
    pub latitude: Option<f64>,
    /// Degrees, east positive.
    pub longitude: Option<f64>,
    /// Offset from UTC in hours, e.g. 5.5 for IST.
    pub timezone: Option<f64>,
}

/// Validated birth details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
    #[serde(skip)]
    local: NaiveDateTime,
    #[serde(skip)]
    instant: DateTime<Utc>,
}

impl BirthDetails {
    /// Civil date-time at the birth place.
    pub fn local_datetime(&self) -> NaiveDateTime {
        self.local
    }

    /// Civil date at the birth place (used for the weekday).
    pub fn civil_date(&self) -> NaiveDate {
        self.local.date()
    }

    /// Absolute instant of birth.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

fn invalid(msg: impl Into<String>) -> ChartError {
    ChartError::Validation(msg.into())
}

impl TryFrom<&BirthRequest> for BirthDetails {
    type Error = ChartError;

    fn try_from(req: &BirthRequest) -> Result<Self, Self::Error> {
        let missing: Vec<&str> = [
            ("year", req.year.is_none()),
            ("month", req.month.is_none()),
            ("day", req.day.is_none()),
            ("hour", req.hour.is_none()),
            ("minute", req.minute.is_none()),
            ("latitude", req.latitude.is_none()),
            ("longitude", req.longitude.is_none()),
            ("timezone", req.timezone.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (
            Some(year),
            Some(month),
            Some(day),
            Some(hour),
            Some(minute),
            Some(latitude),
            Some(longitude),
            Some(timezone),
        ) = (
            req.year,
            req.month,
            req.day,
            req.hour,
            req.minute,
            req.latitude,
            req.longitude,
            req.timezone,
        )
        else {
            return Err(invalid(format!(
                "all birth details are required, missing: {}",
                missing.join(", ")
            )));
        };

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be between -180 and 180"));
        }
        if !(-MAX_TIMEZONE_HOURS..=MAX_TIMEZONE_HOURS).contains(&timezone) {
            return Err(invalid("timezone must be between -14 and 14 hours"));
        }

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| invalid(format!("{year}-{month:02}-{day:02} is not a calendar date")))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| invalid(format!("{hour:02}:{minute:02} is not a time of day")))?;
        let local = NaiveDateTime::new(date, time);

        let offset = FixedOffset::east_opt((timezone * 3600.0).round() as i32)
            .ok_or_else(|| invalid("timezone offset out of range"))?;
        let instant = offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| invalid("birth time cannot be resolved in the given timezone"))?
            .with_timezone(&Utc);

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            latitude,
            longitude,
            timezone,
            local,
            instant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chennai() -> BirthRequest {
        BirthRequest {
            year: Some(2025),
            month: Some(12),
            day: Some(13),
            hour: Some(22),
            minute: Some(8),
            latitude: Some(13.0827),
            longitude: Some(80.2707),
            timezone: Some(5.5),
        }
    }

    #[test]
    fn resolves_utc_instant() {
        let d = BirthDetails::try_from(&chennai()).unwrap();
        assert_eq!(d.instant().to_rfc3339(), "2025-12-13T16:38:00+00:00");
        assert_eq!(d.civil_date(), NaiveDate::from_ymd_opt(2025, 12, 13).unwrap());
    }

    #[test]
    fn zero_timezone_is_accepted() {
        let req = BirthRequest {
            timezone: Some(0.0),
            ..chennai()
        };
        let d = BirthDetails::try_from(&req).unwrap();
        assert_eq!(d.instant().to_rfc3339(), "2025-12-13T22:08:00+00:00");
    }

    #[test]
    fn missing_fields_are_listed() {
        let req = BirthRequest {
            hour: None,
            timezone: None,
            ..chennai()
        };
        let err = BirthDetails::try_from(&req).unwrap_err();
        assert_eq!(
            err,
            ChartError::Validation("all birth details are required, missing: hour, timezone".into())
        );
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn coordinates_out_of_range() {
        let req = BirthRequest {
            latitude: Some(91.0),
            ..chennai()
        };
        assert!(BirthDetails::try_from(&req).unwrap_err().to_string().contains("latitude"));
        let req = BirthRequest {
            longitude: Some(-180.5),
            ..chennai()
        };
        assert!(BirthDetails::try_from(&req).unwrap_err().to_string().contains("longitude"));
    }

    #[test]
    fn nan_coordinate_rejected() {
        let req = BirthRequest {
            latitude: Some(f64::NAN),
            ..chennai()
        };
        assert!(BirthDetails::try_from(&req).is_err());
    }

    #[test]
    fn impossible_date_rejected() {
        let req = BirthRequest {
            month: Some(2),
            day: Some(30),
            ..chennai()
        };
        assert!(BirthDetails::try_from(&req).unwrap_err().to_string().contains("calendar date"));
        let req = BirthRequest {
            minute: Some(60),
            ..chennai()
        };
        assert!(BirthDetails::try_from(&req).is_err());
    }
}
