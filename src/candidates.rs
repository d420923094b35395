use crate::{
    field::{FieldType, ScheduleField},
    series::SeriesWithStep,
    Result,
};
use chrono::{NaiveDateTime, TimeDelta};

/// Generates ascending run times of the entry for the whole reference day,
/// followed by just enough of the next day to have a successor for any time of the reference day.
///
/// | minute | hour | candidates |
/// |--------|------|------------|
/// | `*`    | `*`  | every minute from `midnight` to the next midnight, inclusive |
/// | `M`    | `*`  | `HH:M` for every hour of the day plus `00:M` of the next day |
/// | `*`    | `H`  | every minute of `H:MM` plus `H:00` of the next day |
/// | `M`    | `H`  | `H:M` of the day and of the next day |
///
/// Returns an error if `minute` or `hour` is a field of another type.
pub(crate) fn generate(
    minute: ScheduleField,
    hour: ScheduleField,
    midnight: NaiveDateTime,
) -> Result<Vec<NaiveDateTime>> {
    let minute = FieldType::Minutes.value_of(minute)?;
    let hour = FieldType::Hours.value_of(hour)?;
    let day = TimeDelta::days(1);

    let candidates = match (minute, hour) {
        (None, None) => {
            SeriesWithStep::new(midnight, midnight + day, TimeDelta::minutes(1)).collect()
        }
        (Some(m), None) => {
            let start = midnight + TimeDelta::minutes(m.into());
            SeriesWithStep::new(start, start + TimeDelta::hours(24), TimeDelta::hours(1)).collect()
        }
        (None, Some(h)) => {
            let start = midnight + TimeDelta::hours(h.into());
            SeriesWithStep::new(start, start + TimeDelta::minutes(59), TimeDelta::minutes(1))
                .chain(std::iter::once(start + day))
                .collect()
        }
        (Some(m), Some(h)) => {
            let start = midnight + TimeDelta::hours(h.into()) + TimeDelta::minutes(m.into());
            vec![start, start + day]
        }
    };

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CronError;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn midnight() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn parse(input: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M").unwrap()
    }

    fn minute(input: &str) -> ScheduleField {
        ScheduleField::parse(FieldType::Minutes, input).unwrap()
    }

    fn hour(input: &str) -> ScheduleField {
        ScheduleField::parse(FieldType::Hours, input).unwrap()
    }

    /// Wild field followed by every fixed value of the type.
    fn all_fields(type_: FieldType) -> Vec<ScheduleField> {
        let (min, max) = type_.min_max();
        std::iter::once(ScheduleField::wild(type_))
            .chain((min..=max).map(|value| ScheduleField::fixed(type_, value).unwrap()))
            .collect()
    }

    #[rstest]
    #[case("*", "*", 1441, "2016-01-01 00:00", "2016-01-02 00:00")]
    #[case("30", "*", 25, "2016-01-01 00:30", "2016-01-02 00:30")]
    #[case("00", "*", 25, "2016-01-01 00:00", "2016-01-02 00:00")]
    #[case("59", "*", 25, "2016-01-01 00:59", "2016-01-02 00:59")]
    #[case("*", "12", 61, "2016-01-01 12:00", "2016-01-02 12:00")]
    #[case("*", "23", 61, "2016-01-01 23:00", "2016-01-02 23:00")]
    #[case("30", "12", 2, "2016-01-01 12:30", "2016-01-02 12:30")]
    #[case("00", "00", 2, "2016-01-01 00:00", "2016-01-02 00:00")]
    fn test_generate_bounds(
        #[case] minute_str: &str,
        #[case] hour_str: &str,
        #[case] count: usize,
        #[case] first: &str,
        #[case] last: &str,
    ) {
        let candidates = generate(minute(minute_str), hour(hour_str), midnight()).unwrap();

        assert_eq!(candidates.len(), count, "minute = {minute_str}, hour = {hour_str}");
        assert_eq!(candidates.first(), Some(&parse(first)));
        assert_eq!(candidates.last(), Some(&parse(last)));
    }

    #[test]
    fn test_generate_all_patterns() {
        let next_midnight = midnight() + TimeDelta::days(1);
        let mut patterns = 0;

        for m in all_fields(FieldType::Minutes) {
            for h in all_fields(FieldType::Hours) {
                let candidates = generate(m, h, midnight()).unwrap();
                patterns += 1;

                assert!(
                    candidates.windows(2).all(|w| w[0] < w[1]),
                    "candidates should be strictly ascending: minute = {m}, hour = {h}"
                );
                assert!(candidates[0] >= midnight(), "minute = {m}, hour = {h}");
                assert!(
                    *candidates.last().unwrap() >= next_midnight,
                    "the last candidate should fall on the next day: minute = {m}, hour = {h}"
                );
            }
        }

        assert_eq!(patterns, 61 * 25);
    }

    #[test]
    fn test_generate_minute_wild_hour_fixed_tail() {
        let candidates = generate(minute("*"), hour("12"), midnight()).unwrap();

        assert_eq!(candidates[59], parse("2016-01-01 12:59"));
        assert_eq!(candidates[60], parse("2016-01-02 12:00"));
    }

    #[test]
    fn test_generate_minute_fixed_hour_wild_hours() {
        let candidates = generate(minute("15"), hour("*"), midnight()).unwrap();

        for (k, candidate) in candidates.iter().enumerate() {
            assert_eq!(*candidate, midnight() + TimeDelta::hours(k as i64) + TimeDelta::minutes(15));
        }
    }

    #[rstest]
    #[case(hour("12"), hour("*"), CronError::InvalidMinuteValue("12 is a field of Hours".to_owned()))]
    #[case(minute("*"), minute("*"), CronError::InvalidHourValue("* is a field of Minutes".to_owned()))]
    #[case(hour("1"), minute("30"), CronError::InvalidMinuteValue("01 is a field of Hours".to_owned()))]
    fn test_generate_mismatched_fields(
        #[case] minute_field: ScheduleField,
        #[case] hour_field: ScheduleField,
        #[case] expected: CronError,
    ) {
        assert_eq!(generate(minute_field, hour_field, midnight()), Err(expected));
    }
}
