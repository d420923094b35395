/// Generator of stepped series, inclusive of both ends.
use std::ops::Add;

/// Generator (iterator) state.
///
/// Value type `T` and step type `S` may differ, so the same generator produces
/// both plain numbers and timestamps stepped by a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep<T: Copy, S: Copy> {
    max: T,
    step: S,
    next: Option<T>,
}

impl<T, S> SeriesWithStep<T, S>
where
    T: Copy + Add<S, Output = T> + PartialOrd,
    S: Copy,
{
    /// Caller is responsible to ensure that
    /// maximum serial value (max+step) isn't greater than type's maximum.
    ///
    /// Panics if `max` is less than `min` or step doesn't move the series forward.
    #[inline]
    pub(crate) fn new(min: T, max: T, step: S) -> Self {
        if max < min {
            panic!("max value is less than min value");
        }

        if min + step <= min {
            panic!("step value isn't positive");
        }

        Self {
            max,
            step,
            next: Some(min),
        }
    }
}

impl<T, S> Iterator for SeriesWithStep<T, S>
where
    T: Copy + Add<S, Output = T> + PartialOrd,
    S: Copy,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current > self.max {
            None
        } else {
            self.next = Some(current + self.step);
            Some(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use rstest::rstest;
    use rstest_reuse::{apply, template};

    #[template]
    #[rstest]
    #[case(0, 5, 1, vec![0, 1, 2, 3, 4, 5])]
    #[case(0, 5, 2, vec![0, 2, 4])]
    #[case(0, 5, 5, vec![0, 5])]
    #[case(0, 5, 6, vec![0])]
    #[case(0, 15, 5, vec![0, 5, 10, 15])]
    #[case(5, 5, 1, vec![5])]
    #[case(10, 39, 20, vec![10, 30])]
    fn series_with_step<T>(#[case] min: T, #[case] max: T, #[case] step: T, #[case] expected: Vec<T>) {}

    #[apply(series_with_step)]
    fn series_with_step_u16(min: u16, max: u16, step: u16, expected: Vec<u16>) {
        assert_eq!(SeriesWithStep::new(min, max, step).collect::<Vec<u16>>(), expected);
    }

    #[apply(series_with_step)]
    fn series_with_step_u32(min: u32, max: u32, step: u32, expected: Vec<u32>) {
        assert_eq!(SeriesWithStep::new(min, max, step).collect::<Vec<u32>>(), expected);
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 1, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[rstest]
    #[case(at(0, 0), at(0, 3), TimeDelta::minutes(1), vec![at(0, 0), at(0, 1), at(0, 2), at(0, 3)])]
    #[case(at(0, 30), at(3, 30), TimeDelta::hours(1), vec![at(0, 30), at(1, 30), at(2, 30), at(3, 30)])]
    #[case(at(12, 0), at(12, 59), TimeDelta::minutes(30), vec![at(12, 0), at(12, 30)])]
    #[case(at(23, 59), at(23, 59), TimeDelta::minutes(1), vec![at(23, 59)])]
    fn series_with_step_timestamps(
        #[case] min: NaiveDateTime,
        #[case] max: NaiveDateTime,
        #[case] step: TimeDelta,
        #[case] expected: Vec<NaiveDateTime>,
    ) {
        assert_eq!(SeriesWithStep::new(min, max, step).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn series_should_end_at_whole_day() {
        let series = SeriesWithStep::new(at(0, 0), at(0, 0) + TimeDelta::days(1), TimeDelta::minutes(1));
        assert_eq!(series.count(), 24 * 60 + 1);
    }

    #[template]
    #[rstest]
    #[case(10, 5, 1)]
    #[case(0, 5, 0)]
    #[case(10, 5, 0)]
    fn series_should_panic<T>(#[case] min: T, #[case] max: T, #[case] step: T) {}

    #[apply(series_should_panic)]
    #[should_panic]
    fn series_should_panic_u16(min: u16, max: u16, step: u16) {
        SeriesWithStep::new(min, max, step);
    }

    #[apply(series_should_panic)]
    #[should_panic]
    fn series_should_panic_u32(min: u32, max: u32, step: u32) {
        SeriesWithStep::new(min, max, step);
    }

    #[test]
    #[should_panic]
    fn series_should_panic_by_negative_step() {
        SeriesWithStep::new(at(0, 0), at(1, 0), TimeDelta::minutes(-1));
    }
}
