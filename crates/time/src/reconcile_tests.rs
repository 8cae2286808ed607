use super::*;

fn candidates(entries: &[(TimeLabel, f64)]) -> TimestampCandidates {
    entries.iter().copied().collect()
}

#[test]
fn picks_minimum_value() {
    let c = candidates(&[(TimeLabel::Mtime, 100.0), (TimeLabel::ProcessTime, 200.0)]);
    assert_eq!(select_canonical(&c), Ok((TimeLabel::Mtime, 100.0)));
}

#[test]
fn empty_set_is_an_error() {
    let c = TimestampCandidates::new();
    assert_eq!(select_canonical(&c), Err(ReconcileError::EmptyCandidateSet));
    assert_eq!(
        ReconcileError::EmptyCandidateSet.to_string(),
        "no timestamp candidates to reconcile"
    );
}

#[test]
fn ties_go_to_first_inserted_label() {
    let cases: &[(&[(TimeLabel, f64)], (TimeLabel, f64))] = &[
        (
            &[
                (TimeLabel::Atime, 50.0),
                (TimeLabel::Ctime, 50.0),
                (TimeLabel::Mtime, 50.0),
            ],
            (TimeLabel::Atime, 50.0),
        ),
        (
            &[
                (TimeLabel::Atime, 90.0),
                (TimeLabel::Ctime, 10.0),
                (TimeLabel::Mtime, 10.0),
                (TimeLabel::NameTime, 10.0),
            ],
            (TimeLabel::Ctime, 10.0),
        ),
        (
            &[(TimeLabel::NameTime, 7.0), (TimeLabel::Atime, 7.0)],
            (TimeLabel::NameTime, 7.0),
        ),
    ];

    for (entries, expected) in cases {
        assert_eq!(
            select_canonical(&candidates(entries)),
            Ok(*expected),
            "entries {:?}",
            entries
        );
    }
}

#[test]
fn name_time_wins_when_oldest() {
    let c = candidates(&[
        (TimeLabel::Atime, 1_700_000_000.0),
        (TimeLabel::Ctime, 1_700_000_100.0),
        (TimeLabel::Mtime, 1_690_000_000.0),
        (TimeLabel::NameTime, 1_579_098_622.0),
        (TimeLabel::ProcessTime, 1_760_000_000.0),
    ]);

    assert_eq!(
        select_canonical(&c),
        Ok((TimeLabel::NameTime, 1_579_098_622.0))
    );
}

#[test]
fn nan_never_wins() {
    let c = candidates(&[(TimeLabel::Atime, f64::NAN), (TimeLabel::ProcessTime, 5.0)]);
    assert_eq!(select_canonical(&c), Ok((TimeLabel::ProcessTime, 5.0)));

    let c = candidates(&[(TimeLabel::Atime, 5.0), (TimeLabel::Mtime, f64::NAN)]);
    assert_eq!(select_canonical(&c), Ok((TimeLabel::Atime, 5.0)));
}

#[test]
fn single_candidate_is_selected() {
    let c = candidates(&[(TimeLabel::ProcessTime, 1.0)]);
    assert_eq!(select_canonical(&c), Ok((TimeLabel::ProcessTime, 1.0)));
}
