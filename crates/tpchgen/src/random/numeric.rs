use rand::{Rng, RngExt};
use rust_decimal::Decimal;
use tpchgen_api::Date;

use crate::context::GenContext;
use crate::error::GenerationError;

/// A numeric representation [`random_numeric`] can draw uniformly.
pub trait RandomValue: PartialOrd + Sized + std::fmt::Display {
    /// Draws one value uniformly distributed over `[lower, upper]`.
    fn sample<R: Rng>(rng: &mut R, lower: &Self, upper: &Self) -> Self;
}

impl RandomValue for i32 {
    fn sample<R: Rng>(rng: &mut R, lower: &Self, upper: &Self) -> Self {
        rng.random_range(*lower..=*upper)
    }
}

impl RandomValue for i64 {
    fn sample<R: Rng>(rng: &mut R, lower: &Self, upper: &Self) -> Self {
        rng.random_range(*lower..=*upper)
    }
}

impl RandomValue for Decimal {
    /// Draws a scaled mantissa uniformly, so every representable value at
    /// the wider of the two bound scales is equally likely.
    fn sample<R: Rng>(rng: &mut R, lower: &Self, upper: &Self) -> Self {
        let scale = lower.scale().max(upper.scale());
        let mut lo = *lower;
        lo.rescale(scale);
        let mut hi = *upper;
        hi.rescale(scale);
        let mantissa = rng.random_range(lo.mantissa()..=hi.mantissa());
        Decimal::from_i128_with_scale(mantissa, scale)
    }
}

/// Produces `length` independent values uniformly distributed over
/// `[lower, upper]` inclusive, in the requested numeric type.
pub fn random_numeric<T: RandomValue>(
    ctx: &mut GenContext,
    lower: T,
    upper: T,
    length: usize,
) -> Result<Vec<T>, GenerationError> {
    if lower > upper {
        return Err(GenerationError::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok((0..length)
        .map(|_| T::sample(ctx.rng(), &lower, &upper))
        .collect())
}

/// Produces `length` dates uniformly distributed over `[lower, upper]`,
/// drawn through the day-number representation.
pub fn random_date(
    ctx: &mut GenContext,
    lower: Date,
    upper: Date,
    length: usize,
) -> Result<Vec<Date>, GenerationError> {
    if lower > upper {
        return Err(GenerationError::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    let lo = lower.to_day_number();
    let hi = upper.to_day_number();
    Ok((0..length)
        .map(|_| Date::from_day_number(ctx.rng().random_range(lo..=hi)))
        .collect())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_draw_integers_within_bounds() {
        let mut ctx = GenContext::seeded(1);
        let values = random_numeric::<i64>(&mut ctx, 1, 50, 10_000).unwrap();
        assert_eq!(values.len(), 10_000);
        assert!(values.iter().all(|v| (1..=50).contains(v)));
        // both halves of the range appear over a draw this large
        assert!(values.iter().any(|&v| v <= 25));
        assert!(values.iter().any(|&v| v > 25));
    }

    #[test]
    fn test_should_draw_single_point_range() {
        let mut ctx = GenContext::seeded(1);
        let values = random_numeric::<i32>(&mut ctx, 7, 7, 100).unwrap();
        assert!(values.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_should_return_empty_column_for_zero_length() {
        let mut ctx = GenContext::seeded(1);
        assert!(random_numeric::<i64>(&mut ctx, 0, 10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_should_reject_inverted_bounds() {
        let mut ctx = GenContext::seeded(1);
        let result = random_numeric::<i64>(&mut ctx, 10, 0, 5);
        assert!(matches!(result, Err(GenerationError::InvalidRange { .. })));
    }

    #[test]
    fn test_should_draw_decimals_at_bound_scale() {
        let mut ctx = GenContext::seeded(99);
        let lower = Decimal::new(0, 2); // 0.00
        let upper = Decimal::new(10, 2); // 0.10
        let values = random_numeric(&mut ctx, lower, upper, 5_000).unwrap();
        assert!(values.iter().all(|v| *v >= lower && *v <= upper));
        assert!(values.iter().all(|v| v.scale() == 2));
        // all 11 representable values show up across a draw this large
        for cents in 0..=10 {
            let expected = Decimal::new(cents, 2);
            assert!(
                values.contains(&expected),
                "missing decimal value {expected}"
            );
        }
    }

    #[test]
    fn test_should_draw_negative_decimal_bounds() {
        let mut ctx = GenContext::seeded(3);
        let lower = Decimal::new(-99_999, 2); // -999.99
        let upper = Decimal::new(999_999, 2); // 9999.99
        let values = random_numeric(&mut ctx, lower, upper, 2_000).unwrap();
        assert!(values.iter().all(|v| *v >= lower && *v <= upper));
        assert!(values.iter().any(|v| v.is_sign_negative()));
    }

    #[test]
    fn test_should_draw_integral_decimals_for_scale_zero_bounds() {
        let mut ctx = GenContext::seeded(5);
        let values =
            random_numeric(&mut ctx, Decimal::from(1), Decimal::from(50), 1_000).unwrap();
        assert!(values.iter().all(|v| v.fract().is_zero()));
    }

    #[test]
    fn test_should_draw_dates_within_bounds() {
        let mut ctx = GenContext::seeded(11);
        let lower = Date::new(1992, 1, 1);
        let upper = Date::new(1998, 8, 2);
        let dates = random_date(&mut ctx, lower, upper, 2_000).unwrap();
        assert!(dates.iter().all(|d| *d >= lower && *d <= upper));
        // draws cover more than one year over a range this wide
        let years: std::collections::HashSet<i32> = dates.iter().map(|d| d.year).collect();
        assert!(years.len() > 1);
    }

    #[test]
    fn test_should_reject_inverted_date_bounds() {
        let mut ctx = GenContext::seeded(11);
        let result = random_date(&mut ctx, Date::new(1998, 1, 1), Date::new(1992, 1, 1), 5);
        assert!(matches!(result, Err(GenerationError::InvalidRange { .. })));
    }
}
