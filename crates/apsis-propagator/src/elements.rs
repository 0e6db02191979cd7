//! Decoded two-line element sets.

use std::fmt;

use chrono::{Datelike, Timelike};

use apsis_core::ElementsError;

/// An immutable decoded element set.
///
/// Wraps the decoder's record together with the two input lines exactly
/// as supplied, so handle introspection can return them byte-for-byte.
/// Two values compare equal only when they were decoded from byte-identical
/// lines; the decoded fields are never compared directly.
pub struct OrbitalElements {
    raw: sgp4::Elements,
    line1: String,
    line2: String,
}

impl OrbitalElements {
    /// Decode a two-line element set.
    ///
    /// Length validation happens upstream; this surfaces the decoder's
    /// own parse failures as [`ElementsError::Unparsable`].
    pub fn decode(line1: &str, line2: &str) -> Result<Self, ElementsError> {
        let raw = sgp4::Elements::from_tle(None, line1.as_bytes(), line2.as_bytes()).map_err(
            |err| ElementsError::Unparsable {
                detail: err.to_string(),
            },
        )?;
        Ok(Self {
            raw,
            line1: line1.to_owned(),
            line2: line2.to_owned(),
        })
    }

    /// The decoder's element record.
    pub(crate) fn raw(&self) -> &sgp4::Elements {
        &self.raw
    }

    /// First input line, byte-for-byte as supplied.
    pub fn line1(&self) -> &str {
        &self.line1
    }

    /// Second input line, byte-for-byte as supplied.
    pub fn line2(&self) -> &str {
        &self.line2
    }

    /// Satellite catalog number.
    pub fn catalog_number(&self) -> u64 {
        self.raw.norad_id
    }

    /// Copy snapshot of the decoded fields.
    pub fn summary(&self) -> ElementsSummary {
        let epoch = self.raw.datetime;
        let second_of_day =
            f64::from(epoch.num_seconds_from_midnight()) + f64::from(epoch.nanosecond()) * 1e-9;
        ElementsSummary {
            catalog_number: self.raw.norad_id,
            epoch_year: epoch.year(),
            epoch_day: f64::from(epoch.ordinal()) + second_of_day / 86_400.0,
            eccentricity: self.raw.eccentricity,
            inclination_deg: self.raw.inclination,
            right_ascension_deg: self.raw.right_ascension,
            argument_of_perigee_deg: self.raw.argument_of_perigee,
            mean_anomaly_deg: self.raw.mean_anomaly,
            mean_motion_rev_day: self.raw.mean_motion,
        }
    }
}

impl PartialEq for OrbitalElements {
    fn eq(&self, other: &Self) -> bool {
        self.line1 == other.line1 && self.line2 == other.line2
    }
}

impl Eq for OrbitalElements {}

impl fmt::Debug for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitalElements")
            .field("catalog_number", &self.raw.norad_id)
            .field("line1", &self.line1)
            .field("line2", &self.line2)
            .finish()
    }
}

/// Copy snapshot of the fields decoded from a two-line element set.
///
/// Angles are degrees and mean motion is revolutions per day, exactly as
/// encoded in the record. The epoch is split into calendar year and
/// fractional (1-based) day of year, matching the record's own encoding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementsSummary {
    /// Satellite catalog number.
    pub catalog_number: u64,
    /// Epoch year (four digits).
    pub epoch_year: i32,
    /// Fractional day of year of the epoch, 1-based.
    pub epoch_day: f64,
    /// Orbital eccentricity (dimensionless).
    pub eccentricity: f64,
    /// Inclination, degrees.
    pub inclination_deg: f64,
    /// Right ascension of the ascending node, degrees.
    pub right_ascension_deg: f64,
    /// Argument of perigee, degrees.
    pub argument_of_perigee_deg: f64,
    /// Mean anomaly at epoch, degrees.
    pub mean_anomaly_deg: f64,
    /// Mean motion, revolutions per day.
    pub mean_motion_rev_day: f64,
}
