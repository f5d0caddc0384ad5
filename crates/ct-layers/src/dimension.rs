//! Grouping dimensions and their values.
//!
//! A layer set declares an ordered list of [`Dimension`]s.  Every tagged trip
//! point yields one [`DimValue`] per dimension; the tuple of those values,
//! in declared order, is the point's grouping key.

use std::fmt;

use ct_core::{BuildingKind, DayOfWeek, HourInterval, Purpose, TimeOfDay};
use ct_trajectory::{TripPoint, TripSegment};

use crate::{LayerError, LayerResult};

/// A categorical axis layers can be grouped and filtered by.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Dimension {
    /// Weekday of the sample.
    Day,
    /// Travel purpose of the trip.
    Purpose,
    /// Day/Night bucket of the sample.
    TimeOfDay,
    /// Hour interval of the sample, with the given width in hours.
    Interval(u8),
    /// Category of a building footprint.  Not a property of trip points.
    BuildingType,
}

impl Dimension {
    /// This dimension's value for one point of `segment`.
    ///
    /// # Errors
    ///
    /// [`LayerError::NotATripDimension`] for [`Dimension::BuildingType`].
    pub fn extract(&self, segment: &TripSegment, point: &TripPoint) -> LayerResult<DimValue> {
        Ok(match self {
            Dimension::Day          => DimValue::Day(point.day),
            Dimension::Purpose      => DimValue::Purpose(segment.purpose.clone()),
            Dimension::TimeOfDay    => DimValue::TimeOfDay(point.time_of_day),
            Dimension::Interval(w)  => DimValue::Interval(HourInterval::of_timestamp(point.timestamp, *w)?),
            Dimension::BuildingType => return Err(LayerError::NotATripDimension(*self)),
        })
    }

    /// `true` if [`extract`](Self::extract) can read this dimension off a
    /// trip point.
    pub fn is_trip_dimension(&self) -> bool {
        !matches!(self, Dimension::BuildingType)
    }

    /// Label of the menu entry selecting every value.  `n` is how many values
    /// the menu lists.
    pub fn all_label(&self, n: usize) -> String {
        match self {
            Dimension::Day if n == 2 => "Both Days".to_owned(),
            Dimension::Day           => "All Days".to_owned(),
            Dimension::Purpose       => "All Purposes".to_owned(),
            Dimension::TimeOfDay     => "Both".to_owned(),
            Dimension::Interval(_)   => "All Hours".to_owned(),
            Dimension::BuildingType  => "All Types".to_owned(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Day          => f.write_str("day"),
            Dimension::Purpose      => f.write_str("purpose"),
            Dimension::TimeOfDay    => f.write_str("time of day"),
            Dimension::Interval(w)  => write!(f, "{w}h interval"),
            Dimension::BuildingType => f.write_str("building type"),
        }
    }
}

/// One value of a [`Dimension`].
///
/// Ordering within a dimension: weekdays Monday-first, purposes by name,
/// `Day` before `Night`, intervals by start hour.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum DimValue {
    Day(DayOfWeek),
    Purpose(Purpose),
    TimeOfDay(TimeOfDay),
    Interval(HourInterval),
    BuildingType(BuildingKind),
}

impl DimValue {
    /// `true` if this value belongs to `dim`.
    pub fn is_of(&self, dim: &Dimension) -> bool {
        matches!(
            (self, dim),
            (DimValue::Day(_), Dimension::Day)
                | (DimValue::Purpose(_), Dimension::Purpose)
                | (DimValue::TimeOfDay(_), Dimension::TimeOfDay)
                | (DimValue::Interval(_), Dimension::Interval(_))
                | (DimValue::BuildingType(_), Dimension::BuildingType)
        )
    }
}

impl fmt::Display for DimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimValue::Day(d)          => write!(f, "{d}"),
            DimValue::Purpose(p)      => write!(f, "{p}"),
            DimValue::TimeOfDay(t)    => write!(f, "{t}"),
            DimValue::Interval(i)     => write!(f, "{i}"),
            DimValue::BuildingType(k) => write!(f, "{k}"),
        }
    }
}

impl From<DayOfWeek> for DimValue {
    fn from(d: DayOfWeek) -> Self {
        DimValue::Day(d)
    }
}

impl From<Purpose> for DimValue {
    fn from(p: Purpose) -> Self {
        DimValue::Purpose(p)
    }
}

impl From<TimeOfDay> for DimValue {
    fn from(t: TimeOfDay) -> Self {
        DimValue::TimeOfDay(t)
    }
}

impl From<HourInterval> for DimValue {
    fn from(i: HourInterval) -> Self {
        DimValue::Interval(i)
    }
}

impl From<BuildingKind> for DimValue {
    fn from(k: BuildingKind) -> Self {
        DimValue::BuildingType(k)
    }
}

/// Reject empty or repeated dimension lists.
pub(crate) fn check_dimensions(dims: &[Dimension]) -> LayerResult<()> {
    if dims.is_empty() {
        return Err(crate::LayerError::NoDimensions);
    }
    for (i, d) in dims.iter().enumerate() {
        if dims[..i].iter().any(|e| std::mem::discriminant(e) == std::mem::discriminant(d)) {
            return Err(crate::LayerError::DuplicateDimension(*d));
        }
        if let Dimension::Interval(w) = d {
            ct_core::time::check_bucket_width(*w)?;
        }
    }
    Ok(())
}
