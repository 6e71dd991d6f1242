use tpchgen_api::Date;

use crate::error::GenerationError;

/// Element-wise date arithmetic: each output row is the input date shifted
/// by its pre-drawn day offset.
pub fn date_add(dates: &[Date], day_offsets: &[i32]) -> Result<Vec<Date>, GenerationError> {
    debug_assert_eq!(dates.len(), day_offsets.len());
    dates
        .iter()
        .zip(day_offsets)
        .map(|(date, &days)| {
            date.checked_add_days(days)
                .ok_or(GenerationError::DateOverflow)
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_shift_dates_by_offsets() {
        let dates = [Date::new(1995, 6, 17), Date::new(1992, 2, 28)];
        let shifted = date_add(&dates, &[30, 2]).unwrap();
        assert_eq!(shifted, vec![Date::new(1995, 7, 17), Date::new(1992, 3, 1)]);
    }

    #[test]
    fn test_should_propagate_overflow() {
        let result = date_add(&[Date::new(1998, 1, 1)], &[i32::MAX]);
        assert!(matches!(result, Err(GenerationError::DateOverflow)));
    }

    #[test]
    fn test_should_handle_empty_columns() {
        assert!(date_add(&[], &[]).unwrap().is_empty());
    }
}
