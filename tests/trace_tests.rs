use leaptrace::program::{point_index, PointId, PROGRAM};
use leaptrace::trace::{verdict_line, Facts, TracePath};

#[test]
fn test_year_2000_takes_the_deepest_true_branch() {
    let facts = Facts::evaluate(2000);
    let path = TracePath::build(&facts);

    assert_eq!(path.indices(), &[0, 1, 2, 3, 4, 5, 14]);
    assert_eq!(path.leaf_id(), PointId::Res1);
    assert_eq!(verdict_line(&facts), "2000 is a Leap Year");
}

#[test]
fn test_year_1900_fails_the_mod400_test() {
    let facts = Facts::evaluate(1900);
    let path = TracePath::build(&facts);

    assert_eq!(path.indices(), &[0, 1, 2, 3, 4, 6, 7, 14]);
    assert_eq!(path.leaf_id(), PointId::Res2);
    assert_eq!(verdict_line(&facts), "1900 is NOT a Leap Year");
}

#[test]
fn test_year_2024_skips_the_mod400_test_entirely() {
    let facts = Facts::evaluate(2024);
    let path = TracePath::build(&facts);

    assert_eq!(path.indices(), &[0, 1, 2, 3, 9, 10, 14]);
    assert_eq!(path.leaf_id(), PointId::Res3);
    assert!(!path.contains(point_index(PointId::Mod400)));
    assert_eq!(verdict_line(&facts), "2024 is a Leap Year");
}

#[test]
fn test_year_2023_fails_at_the_first_test() {
    let facts = Facts::evaluate(2023);
    let path = TracePath::build(&facts);

    assert_eq!(path.indices(), &[0, 1, 2, 12, 13, 14]);
    assert_eq!(path.leaf_id(), PointId::Res4);
    assert_eq!(verdict_line(&facts), "2023 is NOT a Leap Year");
}

#[test]
fn test_year_zero_behaves_like_2000() {
    let facts = Facts::evaluate(0);
    let path = TracePath::build(&facts);

    assert_eq!(path.indices(), TracePath::build(&Facts::evaluate(2000)).indices());
    assert_eq!(verdict_line(&facts), "0 is a Leap Year");
}

#[test]
fn test_every_path_runs_from_entry_to_closing_brace() {
    for year in -2400..=2400 {
        let path = TracePath::build(&Facts::evaluate(year));
        let indices = path.indices();

        assert_eq!(indices.first(), Some(&0), "year {}", year);
        assert_eq!(indices.last(), Some(&(PROGRAM.len() - 1)), "year {}", year);
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "path for {} is not strictly increasing: {:?}",
            year,
            indices
        );
    }
}

#[test]
fn test_path_lengths_cover_exactly_three_shapes() {
    for year in -2400..=2400 {
        let facts = Facts::evaluate(year);
        let expected = if !facts.mod4 {
            6
        } else if !facts.mod100 {
            7
        } else if facts.mod400 {
            7
        } else {
            8
        };
        assert_eq!(TracePath::build(&facts).len(), expected, "year {}", year);
    }
}

#[test]
fn test_leaf_always_agrees_with_the_closed_form_rule() {
    for year in -2400..=2400 {
        let facts = Facts::evaluate(year);
        let path = TracePath::build(&facts);
        assert_eq!(
            path.leaf_id().verdict(),
            Some(facts.is_leap()),
            "year {}",
            year
        );
    }
}

#[test]
fn test_negative_years() {
    assert_eq!(verdict_line(&Facts::evaluate(-400)), "-400 is a Leap Year");
    assert_eq!(verdict_line(&Facts::evaluate(-100)), "-100 is NOT a Leap Year");
    assert_eq!(verdict_line(&Facts::evaluate(-4)), "-4 is a Leap Year");
    assert_eq!(verdict_line(&Facts::evaluate(-3)), "-3 is NOT a Leap Year");

    // Same branch shapes as their positive counterparts
    assert_eq!(
        TracePath::build(&Facts::evaluate(-400)).indices(),
        TracePath::build(&Facts::evaluate(400)).indices()
    );
    assert_eq!(
        TracePath::build(&Facts::evaluate(-100)).indices(),
        TracePath::build(&Facts::evaluate(100)).indices()
    );
}
