use eyre::Result;

use globalign_alignment_rs::pairwise::{alignment, global, scoring};
use globalign_alignment_rs::{align, score, AlignmentError, Band, ScoreModel, ScoredAlignment};

pub fn invrle(rle: &str) -> String {
    let gapfirst = alignment::Op::symbol(&alignment::Op::GapFirst);
    let gapsecond = alignment::Op::symbol(&alignment::Op::GapSecond);
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    model: ScoreModel<i32>,
    expected: &'a str,
}

// Checks the workload in both orientations: swapping the inputs swaps the aligned rows
// and the gap operations. Ties between optimal alignments are broken with a fixed state
// priority, so only inputs whose ties resolve the same way in both orientations qualify.
fn ensure(w: Workload<'_>, band: Band) -> Result<()> {
    let expected: ScoredAlignment = w.expected.parse()?;
    let swapped = format!(
        "{},{},{},{}",
        expected.score(),
        expected.aligned2(),
        expected.aligned1(),
        invrle(&expected.rle())
    );

    let orientations = [
        (w.seq1, w.seq2, w.expected),
        (w.seq2, w.seq1, swapped.as_str()),
    ];
    for (seq1, seq2, expected) in orientations {
        let result = align(seq1, seq2, w.model, band)?;
        assert_eq!(result.to_string(), expected);
        assert_eq!(score(seq1, seq2, w.model, band)?, *result.score());
    }
    Ok(())
}

fn symmetric() -> Vec<Workload<'static>> {
    vec![
        Workload {
            seq1: b"GATTACA",
            seq2: b"GCATGCU",
            model: ScoreModel::new(1, -1, -2, -1),
            expected: "-1,GATTACA,GCATGCU,1=2X1=1X1=1X",
        },
        Workload {
            seq1: b"ACGTTGCAACGGT",
            seq2: b"ACGTGCAACGT",
            model: ScoreModel::default(),
            expected: "23,ACGTTGCAACGGT,ACG-TGCAAC-GT,3=1I6=1I2=",
        },
        Workload {
            seq1: b"AAAAAAAAAAAAAAAATTTTTTTTTAAAAAAAAAAAAAAAA",
            seq2: b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
            model: ScoreModel::new(1, -2, -5, -1),
            expected: "19,AAAAAAAAAAAAAAAATTTTTTTTTAAAAAAAAAAAAAAAA,\
                       AAAAAAAAAAAAAAAA---------AAAAAAAAAAAAAAAA,16=9I16=",
        },
        Workload {
            seq1: b"ACGTACGT",
            seq2: b"ACGTACGT",
            model: ScoreModel::new(2, -1, -3, -1),
            expected: "16,ACGTACGT,ACGTACGT,8=",
        },
        Workload {
            seq1: b"AC",
            seq2: b"C",
            model: ScoreModel::new(1, -1, -2, -1),
            expected: "-1,AC,-C,1I1=",
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"",
            model: ScoreModel::new(1, -1, -2, -1),
            expected: "-5,ACGT,----,4I",
        },
        Workload {
            seq1: b"",
            seq2: b"",
            model: ScoreModel::default(),
            expected: "0,,,",
        },
    ]
}

#[test]
fn test_unbanded() -> Result<()> {
    for w in symmetric() {
        ensure(w, Band::Full)?;
    }
    Ok(())
}

#[test]
fn test_wide_band_matches_unbanded() -> Result<()> {
    for w in symmetric() {
        ensure(w, Band::diagonal(globalign_alignment_rs::DEFAULT_BAND_SIZE)?)?;
    }

    let model = ScoreModel::default();
    let (seq1, seq2) = (b"ACGTTGCAACGGT", b"ACGTGCAACGT");
    let unbanded = align(seq1, seq2, model, Band::Full)?;
    for half_width in [2, 3, 5, 100] {
        assert_eq!(align(seq1, seq2, model, Band::diagonal(half_width)?)?, unbanded);
    }
    Ok(())
}

#[test]
fn test_no_adjacent_opposite_gaps() -> Result<()> {
    // Gap states never follow each other directly, so two opposite gaps (-4) lose to a mismatch
    ensure(
        Workload {
            seq1: b"A",
            seq2: b"C",
            model: ScoreModel::new(1, -10, -2, -1),
            expected: "-10,A,C,1X",
        },
        Band::Full,
    )
}

#[test]
fn test_positive_gap_scores() -> Result<()> {
    let result = align(b"AC", b"C", ScoreModel::new(-1, 1, 2, 1), Band::Full)?;
    assert_eq!(result.to_string(), "3,AC,C-,1X1I");
    Ok(())
}

#[test]
fn test_self_alignment() -> Result<()> {
    let model = ScoreModel::default();
    for seq in [
        b"A".as_slice(),
        b"ACGTTGCA",
        b"NNNNACGTNNNN",
        b"GATTACAGATTACAGATTACA",
    ] {
        let result = align(seq, seq, model, Band::diagonal(1)?)?;
        assert_eq!(*result.score(), 3 * seq.len() as i64);
        assert_eq!(result.rle(), format!("{}=", seq.len()));
        assert_eq!(result.aligned1().as_bytes(), seq);
        assert_eq!(result.aligned2().as_bytes(), seq);
    }
    Ok(())
}

#[test]
fn test_empty_vs_nonempty() -> Result<()> {
    let model = ScoreModel::default();
    for k in 1..=6 {
        let seq = b"ACGTAC"[..k].to_vec();
        let expected = -5 - 2 * (k as i64 - 1);

        let result = align(b"", &seq, model, Band::Full)?;
        assert_eq!(*result.score(), expected);
        assert_eq!(result.aligned1(), &"-".repeat(k));
        assert_eq!(result.rle(), format!("{k}D"));

        let result = align(&seq, b"", model, Band::diagonal(k)?)?;
        assert_eq!(*result.score(), expected);
        assert_eq!(result.aligned2(), &"-".repeat(k));
        assert_eq!(result.rle(), format!("{k}I"));
    }
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let model = ScoreModel::new(2, -3, -4, -1);
    let (seq1, seq2) = (b"TTGACCGGATACGATT", b"TGACCGTATTACGAATT");
    for band in [Band::Full, Band::diagonal(3)?] {
        let first = align(seq1, seq2, model, band)?;
        let second = align(seq1, seq2, model, band)?;
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
    Ok(())
}

#[test]
fn test_band_failure() -> Result<()> {
    let err = align(b"A", b"ACGTA", ScoreModel::new(1, -1, -2, -1), Band::diagonal(1)?)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<AlignmentError>(),
        Some(&AlignmentError::Unreachable {
            seq1_len: 1,
            seq2_len: 5,
            band: Band::Diagonal { half_width: 1 }
        })
    );

    // Disabling the band resolves the failure
    let result = align(b"A", b"ACGTA", ScoreModel::new(1, -1, -2, -1), Band::Full)?;
    assert_eq!(result.to_string(), "-4,----A,ACGTA,4D1=");
    Ok(())
}

#[test]
fn test_band_failure_off_diagonal() -> Result<()> {
    let model = ScoreModel::new(1, -1, -2, -1);
    for (seq1, seq2) in [
        (b"ACGTACGTAC".as_slice(), b"ACGTACG".as_slice()),
        (b"ACGTAC".as_slice(), b"AC".as_slice()),
    ] {
        let err = align(seq1, seq2, model, Band::diagonal(1)?).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AlignmentError>(),
            Some(&AlignmentError::Unreachable {
                seq1_len: seq1.len(),
                seq2_len: seq2.len(),
                band: Band::Diagonal { half_width: 1 }
            })
        );
        assert!(align(seq1, seq2, model, Band::Full).is_ok());
    }
    Ok(())
}

#[test]
fn test_invalid_input() {
    let model = ScoreModel::default();
    for (seq1, seq2, sequence, position) in [
        (b"AC-GT".as_slice(), b"ACGT".as_slice(), 1, 2),
        (b"ACGT".as_slice(), b"ACG,T".as_slice(), 2, 3),
        (b"ACGT".as_slice(), b"ACG\n".as_slice(), 2, 3),
        (b" ".as_slice(), b"".as_slice(), 1, 0),
    ] {
        let err = align(seq1, seq2, model, Band::Full).unwrap_err();
        match err.downcast_ref::<AlignmentError>() {
            Some(AlignmentError::InvalidSymbol {
                sequence: s,
                position: p,
                ..
            }) => assert_eq!((*s, *p), (sequence, position)),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    let err = global::Band::diagonal(0).unwrap_err();
    assert_eq!(err.downcast_ref::<AlignmentError>(), Some(&AlignmentError::InvalidBand));
}

#[test]
fn test_generic_engine() -> Result<()> {
    // Any symbol type with equality can be aligned through the engine directly
    let seq1: Vec<u32> = vec![1, 2, 3, 4, 5];
    let seq2: Vec<u32> = vec![1, 2, 4, 5];

    let engine = global::Engine::new(
        scoring::compose(
            scoring::symbols::Equality::new(2i64, -3),
            scoring::gaps::Affine::new(-4, -1),
        ),
        Band::Full,
    );
    let result = engine.align(&seq1, &seq2)?;
    assert_eq!(*result.score(), 4);
    assert_eq!(result.rle(), "2=1I2=");
    assert_eq!(result.inverted().rle(), invrle(&result.rle()));
    Ok(())
}
