mod common;
use common::{fixture_path, load_fixture};
use num_bigint::BigInt;
use shamir_recovery::{
    shamir::{
        self, InterpolationError, Point, RawShare, RecoveryError, Verification,
        polynomial::Polynomial,
    },
    shares::load_share_document,
};

#[test]
fn test_sample_fixture() {
    let document = load_fixture("sample.json").unwrap();
    assert_eq!(document.threshold(), 3);
    for verification in [Verification::SelectedOnly, Verification::AllPoints] {
        let secret = document.recover_secret(verification).unwrap();
        assert_eq!(secret, BigInt::from(3));
    }
}

#[test]
fn test_submission_fixture() {
    let document = load_fixture("submission.json").unwrap();
    assert_eq!(document.threshold(), 7);
    let secret = document.recover_secret(Verification::SelectedOnly).unwrap();
    assert_eq!(secret, "-6290016743746469796".parse::<BigInt>().unwrap());
}

#[test]
fn test_submission_fixture_is_not_consistent() {
    let document = load_fixture("submission.json").unwrap();
    let err = document
        .recover_secret(Verification::AllPoints)
        .unwrap_err();
    match err.downcast_ref::<RecoveryError>() {
        Some(RecoveryError::Interpolation(InterpolationError::InconsistentShare { x })) => {
            assert_eq!(x, &BigInt::from(8));
        }
        other => panic!("expected an inconsistent share, got {other:?}"),
    }
}

#[test]
fn test_submission_other_subset_gives_other_secret() {
    // Last seven shares instead of the first seven
    let document = load_fixture("submission.json").unwrap();
    let points = document
        .raw_shares()
        .unwrap()
        .iter()
        .skip(3)
        .map(RawShare::decode)
        .collect::<Result<Vec<Point>, _>>()
        .unwrap();
    let secret = shamir::reconstruct_secret(&points, 7).unwrap();
    assert_eq!(secret, BigInt::from(79_836_264_059_301_i64));
}

#[test]
fn test_missing_fixture() {
    let err = load_share_document(&fixture_path("missing.json")).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_large_shares_encoded_in_various_bases() {
    let poly = Polynomial::new(
        [
            "123456789012345678901234567890",
            "-98765432109876543210",
            "5555555555555555",
            "7",
        ]
        .into_iter()
        .map(|c| c.parse::<BigInt>().unwrap())
        .collect(),
    );
    let raw_shares = (1..=6_u32)
        .map(|x| {
            let base = 2 + x * 5;
            let y = poly.evaluate(&BigInt::from(x)).to_biguint().unwrap();
            RawShare::new(x, base, y.to_str_radix(base))
        })
        .collect::<Vec<RawShare>>();
    let secret = shamir::recover_secret(&raw_shares, 4, Verification::AllPoints).unwrap();
    assert_eq!(secret, poly.evaluate_at_zero());
}
