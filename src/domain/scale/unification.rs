//! Unification of heterogeneous scale judgments onto the common cardinal range.

use std::collections::BTreeMap;

use super::{Scale, ScaleError};

/// Lower edge of the cardinal interval grid.
const CARDINAL_LOWER: f64 = 1.5;
/// Upper edge of the cardinal interval grid.
const CARDINAL_UPPER: f64 = 9.5;

/// Hartley informativeness of a scale with `gradations` grades, in bits.
///
/// # Errors
/// `InvalidGradationCount` when fewer than two grades are given.
pub fn informativeness(gradations: usize) -> Result<f64, ScaleError> {
    if gradations < 2 {
        return Err(ScaleError::InvalidGradationCount(gradations));
    }
    Ok((gradations as f64).log2())
}

/// Maps a 1-based grade index of an n-grade scale to an integer in [1, 9]
/// through the centre of its interval.
///
/// The result depends only on `gradations` and `grade_index`, never on the
/// shape of the scale the grade came from.
///
/// # Errors
/// `IndexOutOfRange` when `grade_index` is outside [1, gradations].
pub fn unify_to_cardinal(gradations: usize, grade_index: usize) -> Result<u8, ScaleError> {
    if grade_index < 1 || grade_index > gradations {
        return Err(ScaleError::IndexOutOfRange {
            index: grade_index,
            gradations,
        });
    }
    let offset = (grade_index as f64 - 0.5) * (CARDINAL_UPPER - CARDINAL_LOWER);
    let centre = CARDINAL_LOWER + offset / gradations as f64;
    Ok(centre.clamp(1.0, 9.0).round_ties_even() as u8)
}

/// Unifies a raw judgment given on `scale` with `gradations` grades.
///
/// The nearest grade (first one on ties) is located and its position mapped
/// with [`unify_to_cardinal`]. When `is_reciprocal` is set the raw value is
/// inverted first; a zero value is left as is.
pub fn unify_judgment(
    scale: Scale,
    gradations: usize,
    value: f64,
    is_reciprocal: bool,
) -> Result<u8, ScaleError> {
    let target = if is_reciprocal && value != 0.0 {
        1.0 / value
    } else {
        value
    };

    let values = scale.values(gradations)?;
    let mut closest = 0;
    let mut best = f64::INFINITY;
    for (index, grade) in values.iter().enumerate() {
        let distance = (grade - target).abs();
        if distance < best {
            best = distance;
            closest = index;
        }
    }

    unify_to_cardinal(gradations, closest + 1)
}

/// Grade values of every scale that supports `gradations` grades.
pub fn correspondence_table(gradations: usize) -> BTreeMap<Scale, Vec<f64>> {
    Scale::ALL
        .iter()
        .filter_map(|scale| scale.values(gradations).ok().map(|values| (*scale, values)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn informativeness_of_two_grades_is_one_bit() {
        assert_eq!(informativeness(2).unwrap(), 1.0);
    }

    #[test]
    fn informativeness_of_nine_grades() {
        assert!((informativeness(9).unwrap() - 3.169925).abs() < 1e-6);
    }

    #[test]
    fn informativeness_rejects_fewer_than_two_grades() {
        assert_eq!(informativeness(1), Err(ScaleError::InvalidGradationCount(1)));
        assert_eq!(informativeness(0), Err(ScaleError::InvalidGradationCount(0)));
    }

    #[test]
    fn unify_to_cardinal_nine_grades() {
        let mapped: Vec<u8> = (1..=9).map(|g| unify_to_cardinal(9, g).unwrap()).collect();
        assert_eq!(mapped, vec![2, 3, 4, 5, 6, 6, 7, 8, 9]);
    }

    #[test]
    fn unify_to_cardinal_rounds_ties_to_even() {
        // centres for four grades fall exactly on 2.5, 4.5, 6.5, 8.5
        let mapped: Vec<u8> = (1..=4).map(|g| unify_to_cardinal(4, g).unwrap()).collect();
        assert_eq!(mapped, vec![2, 4, 6, 8]);
    }

    #[test]
    fn unify_to_cardinal_ordinal_grades() {
        assert_eq!(unify_to_cardinal(2, 1).unwrap(), 4);
        assert_eq!(unify_to_cardinal(2, 2).unwrap(), 8);
    }

    #[test]
    fn unify_to_cardinal_rejects_index_outside_scale() {
        assert_eq!(
            unify_to_cardinal(5, 0),
            Err(ScaleError::IndexOutOfRange { index: 0, gradations: 5 })
        );
        assert!(unify_to_cardinal(5, 6).is_err());
        assert!(unify_to_cardinal(0, 1).is_err());
    }

    #[test]
    fn unify_to_cardinal_is_monotonic() {
        for n in 2..=9 {
            let mapped: Vec<u8> = (1..=n).map(|g| unify_to_cardinal(n, g).unwrap()).collect();
            assert!(mapped.windows(2).all(|w| w[0] <= w[1]), "n = {}", n);
            assert!(mapped.iter().all(|v| (1..=9).contains(v)));
        }
    }

    #[test]
    fn unify_judgment_picks_nearest_grade() {
        // 3.0 is the third Saaty-9 grade
        assert_eq!(unify_judgment(Scale::Saaty9, 9, 3.0, false).unwrap(), 4);
        // 5.0 on the five-grade Saaty scale [1,3,5,7,9] is the third grade
        assert_eq!(unify_judgment(Scale::Saaty9, 5, 5.0, false).unwrap(), 6);
    }

    #[test]
    fn unify_judgment_resolves_ties_to_first_grade() {
        // 2.0 is equidistant from 1 and 3 on [1,3,5,7,9]
        assert_eq!(unify_judgment(Scale::Saaty9, 5, 2.0, false).unwrap(), 2);
    }

    #[test]
    fn unify_judgment_inverts_reciprocal_values() {
        let direct = unify_judgment(Scale::Saaty9, 9, 7.0, false).unwrap();
        let inverted = unify_judgment(Scale::Saaty9, 9, 1.0 / 7.0, true).unwrap();
        assert_eq!(direct, inverted);
    }

    #[test]
    fn unify_judgment_tolerates_zero_reciprocal() {
        assert_eq!(unify_judgment(Scale::Power, 3, 0.0, true).unwrap(), 3);
    }

    #[test]
    fn unify_judgment_propagates_range_errors() {
        assert!(matches!(
            unify_judgment(Scale::Ordinal, 5, 9.0, false),
            Err(ScaleError::GradationOutOfRange { .. })
        ));
    }

    #[test]
    fn correspondence_table_for_two_grades_has_only_ordinal() {
        let table = correspondence_table(2);
        assert_eq!(table.len(), 1);
        assert_eq!(table[&Scale::Ordinal], vec![1.0, 9.0]);
    }

    #[test]
    fn correspondence_table_for_five_grades_omits_ordinal() {
        let table = correspondence_table(5);
        assert_eq!(table.len(), 5);
        assert!(!table.contains_key(&Scale::Ordinal));
        assert!(table.values().all(|values| values.len() == 5));
    }

    #[test]
    fn correspondence_table_outside_all_ranges_is_empty() {
        assert!(correspondence_table(12).is_empty());
    }
}
