use crate::{utils, CronError, Result};
use std::fmt::Display;

/// Numeric type of the fixed field value.
pub type FieldValueType = u16;

const WILD_CHAR: &str = "*";

/// Kind of the schedule field, defines valid range of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldType {
    /// Minute past the hour, 0-59.
    Minutes,
    /// Hour of the day, 0-23.
    Hours,
}

impl FieldType {
    /// Returns inclusive range of valid values.
    pub fn min_max(&self) -> (FieldValueType, FieldValueType) {
        match self {
            Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
        }
    }

    fn error(&self, input: impl Into<String>) -> CronError {
        match self {
            Self::Minutes => CronError::InvalidMinuteValue(input.into()),
            Self::Hours => CronError::InvalidHourValue(input.into()),
        }
    }

    /// Returns fixed value of the `field` (`None` if it's wild),
    /// or an error if the field belongs to another type.
    pub(crate) fn value_of(&self, field: ScheduleField) -> Result<Option<FieldValueType>> {
        if field.type_ == *self {
            Ok(field.value)
        } else {
            Err(self.error(format!("{field} is a field of {:?}", field.type_)))
        }
    }
}

/// Minute or hour component of the schedule entry: either wild (`*`) or a single fixed value.
///
/// Fixed value is always within the range of the field's type,
/// since every constructor validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FieldRepr", into = "FieldRepr"))]
pub struct ScheduleField {
    type_: FieldType,
    value: Option<FieldValueType>,
}

impl ScheduleField {
    /// Constructs wild field, fires at every valid value of the unit.
    #[inline]
    pub fn wild(type_: FieldType) -> Self {
        Self { type_, value: None }
    }

    /// Constructs field fixed to the single `value`.
    ///
    /// Returns [`CronError::InvalidMinuteValue`] or [`CronError::InvalidHourValue`]
    /// if the value is out of the type's range.
    pub fn fixed(type_: FieldType, value: FieldValueType) -> Result<Self> {
        let (min, max) = type_.min_max();
        if value < min || value > max {
            Err(type_.error(value.to_string()))
        } else {
            Ok(Self {
                type_,
                value: Some(value),
            })
        }
    }

    /// Parses and validates field of the specified type.
    ///
    /// `*` means wild field, otherwise decimal value within the type's range is expected.
    pub fn parse(type_: FieldType, input: &str) -> Result<Self> {
        if input == WILD_CHAR {
            return Ok(Self::wild(type_));
        }

        let (min, max) = type_.min_max();
        let value = utils::parse_digital_value(input, min, max).ok_or_else(|| type_.error(input))?;
        Self::fixed(type_, value)
    }

    /// Type of the field.
    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.type_
    }

    /// Returns `true` for `*` field.
    #[inline]
    pub fn is_wild(&self) -> bool {
        self.value.is_none()
    }

    /// Returns fixed value, if any.
    #[inline]
    pub fn value(&self) -> Option<FieldValueType> {
        self.value
    }
}

impl Display for ScheduleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            None => write!(f, "{WILD_CHAR}"),
            Some(value) => write!(f, "{value:02}"),
        }
    }
}

/// Serialized form of [`ScheduleField`]: type with the field string, `{"type": "hours", "value": "12"}`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FieldRepr {
    #[serde(rename = "type")]
    type_: FieldType,
    value: String,
}

#[cfg(feature = "serde")]
impl From<ScheduleField> for FieldRepr {
    fn from(field: ScheduleField) -> Self {
        Self {
            type_: field.type_,
            value: field.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<FieldRepr> for ScheduleField {
    type Error = CronError;

    fn try_from(repr: FieldRepr) -> Result<Self> {
        Self::parse(repr.type_, &repr.value)
    }
}
