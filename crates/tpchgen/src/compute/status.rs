use tpchgen_api::Date;

/// Line status per line: `"O"` (open) when the ship date lies after the
/// reference date, `"F"` (fulfilled) otherwise. Never randomly assigned.
pub fn line_status(ship_dates: &[Date], current_date: Date) -> Vec<String> {
    ship_dates
        .iter()
        .map(|ship| {
            if *ship > current_date {
                "O".to_string()
            } else {
                "F".to_string()
            }
        })
        .collect()
}

/// Return flag per line: lines received on or before the reference date keep
/// their pre-drawn `"R"`/`"A"` outcome, undelivered lines read `"N"`.
///
/// The randomness lives entirely in the `returned` input column, so the
/// computation itself stays referentially transparent.
pub fn return_flag(
    receipt_dates: &[Date],
    returned: &[String],
    current_date: Date,
) -> Vec<String> {
    debug_assert_eq!(receipt_dates.len(), returned.len());
    receipt_dates
        .iter()
        .zip(returned)
        .map(|(receipt, outcome)| {
            if *receipt <= current_date {
                outcome.clone()
            } else {
                "N".to_string()
            }
        })
        .collect()
}

/// Order status from the per-order segment of line statuses: `"F"` when
/// every line is fulfilled, `"O"` when every line is open, `"P"` (partial)
/// otherwise.
pub fn order_status(line_statuses: &[String], line_counts: &[i32]) -> Vec<String> {
    let mut statuses = Vec::with_capacity(line_counts.len());
    let mut offset = 0usize;
    for &count in line_counts {
        let lines = count.max(0) as usize;
        let segment = &line_statuses[offset..offset + lines];
        let fulfilled = segment.iter().filter(|status| *status == "F").count();
        let status = if fulfilled == segment.len() {
            "F"
        } else if fulfilled == 0 {
            "O"
        } else {
            "P"
        };
        statuses.push(status.to_string());
        offset += lines;
    }
    debug_assert_eq!(offset, line_statuses.len());
    statuses
}

#[cfg(test)]
mod tests {

    use super::*;

    const CURRENT: Date = Date::new(1995, 6, 17);

    fn texts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_should_mark_future_shipments_open() {
        let statuses = line_status(
            &[
                Date::new(1995, 6, 18),
                Date::new(1995, 6, 17),
                Date::new(1993, 1, 1),
            ],
            CURRENT,
        );
        assert_eq!(statuses, texts(&["O", "F", "F"]));
    }

    #[test]
    fn test_should_flag_only_delivered_lines() {
        let flags = return_flag(
            &[Date::new(1995, 1, 1), Date::new(1997, 1, 1)],
            &texts(&["R", "A"]),
            CURRENT,
        );
        assert_eq!(flags, texts(&["R", "N"]));
    }

    #[test]
    fn test_should_derive_order_status_per_segment() {
        let lines = texts(&["F", "F", "O", "O", "F", "O"]);
        let statuses = order_status(&lines, &[2, 2, 2]);
        assert_eq!(statuses, texts(&["F", "O", "P"]));
    }

    #[test]
    fn test_should_mark_empty_segment_fulfilled() {
        // an order with no lines cannot be waiting on any of them
        let statuses = order_status(&[], &[0]);
        assert_eq!(statuses, texts(&["F"]));
    }

    #[test]
    fn test_should_be_deterministic_for_equal_inputs() {
        let dates = [Date::new(1994, 3, 1), Date::new(1996, 3, 1)];
        assert_eq!(line_status(&dates, CURRENT), line_status(&dates, CURRENT));
    }
}
