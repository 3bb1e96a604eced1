use proptest::prelude::*;

use shroud_eval::similarity::{match_score, sequence_ratio, CONTAINMENT_SCORE};

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(a in "[A-Za-z0-9 .-]{0,24}", b in "[A-Za-z0-9 .-]{0,24}") {
        let s = match_score(&a, &b, 6);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn value_matches_itself(a in "[A-Za-z][A-Za-z0-9 ]{0,20}") {
        prop_assert_eq!(match_score(&a, &a, 6), 1.0);
    }

    #[test]
    fn folding_ignores_case_and_punctuation(a in "[a-z0-9]{1,16}") {
        let shouted = format!(" {}. ", a.to_uppercase());
        prop_assert_eq!(match_score(&a, &shouted, 6), 1.0);
    }

    #[test]
    fn long_substrings_get_containment_credit(core in "[a-z]{6,12}", pad in "[0-9]{1,6}") {
        let longer = format!("{pad}{core}{pad}");
        prop_assert_eq!(match_score(&core, &longer, 6), CONTAINMENT_SCORE);
    }

    #[test]
    fn ratio_never_exceeds_one(a in "[ab]{0,12}", b in "[ab]{0,12}") {
        let r = sequence_ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r));
    }
}
