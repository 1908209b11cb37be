#![cfg(feature = "dev")]

use std::rc::Rc;

use approx::assert_relative_eq;
use xcorr_rs::internals::correlation::ncc::CorrelationMode;
use xcorr_rs::internals::field::dense::DenseField;
use xcorr_rs::internals::field::scalar::ScalarField;
use xcorr_rs::internals::matrix::builder::{
    CorrelationMatrixBuilder, DEFAULT_CAPACITY_LIMIT, SLICE_AXIS,
};
use xcorr_rs::internals::matrix::pairwise::PairField;
use xcorr_rs::internals::primitives::domain::Domain;
use xcorr_rs::internals::primitives::errors::XcorrError;

/// A 4x4x3 stack (spatial axes 0 and 1, slice axis 2) of deterministic
/// non-degenerate values.
fn stack() -> DenseField<f64> {
    let domain = Domain::new(&[4, 4, 3]).unwrap();
    let data: Vec<f64> = (0..48).map(|i| (i as f64 * 0.37).sin()).collect();
    DenseField::from_vec(domain, data).unwrap()
}

#[test]
fn test_build_reports_shape_and_configuration() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(2)
        .build(&stack)
        .unwrap();

    assert_eq!(matrix.slices(), 3);
    assert_eq!(matrix.pair_domain().dims(), &[3, 3]);
    assert_eq!(matrix.slice_domain().dims(), &[4, 4]);
    assert_eq!(matrix.radius(), &[1, 1]);
    assert_eq!(matrix.range(), 2);
    assert_eq!(SLICE_AXIS, 2);
    assert_eq!(DEFAULT_CAPACITY_LIMIT, 1 << 26);
}

#[test]
fn test_diagonal_entries_are_the_shared_constant_one() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .build(&stack)
        .unwrap();

    for z in 0..3 {
        let entry = matrix.entry(z, z).unwrap();
        assert!(entry.is_constant());
        assert_eq!(matrix.get(z, z, &[2, 2]).unwrap(), 1.0);
    }

    // One constant instance serves the whole diagonal.
    assert!(Rc::ptr_eq(
        matrix.entry(0, 0).unwrap(),
        matrix.entry(2, 2).unwrap()
    ));
}

#[test]
fn test_out_of_range_pairs_share_the_constant_nan() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .build(&stack)
        .unwrap();

    // |0 - 2| > range, so both orders read NaN from the same instance.
    assert!(matrix.entry(0, 2).unwrap().is_constant());
    assert!(matrix.get(0, 2, &[1, 1]).unwrap().is_nan());
    assert!(matrix.get(2, 0, &[1, 1]).unwrap().is_nan());
    assert!(Rc::ptr_eq(
        matrix.entry(0, 2).unwrap(),
        matrix.entry(2, 0).unwrap()
    ));
}

#[test]
fn test_symmetric_pairs_alias_one_lazy_engine() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .build(&stack)
        .unwrap();

    let upper = matrix.entry(0, 1).unwrap();
    let lower = matrix.entry(1, 0).unwrap();
    assert!(!upper.is_constant());
    assert!(Rc::ptr_eq(upper, lower));

    // Reading through one order warms the cache the other order sees.
    let v = matrix.get(0, 1, &[2, 2]).unwrap();
    if let PairField::Correlation(cc) = &**matrix.entry(1, 0).unwrap() {
        assert!(cc.is_computed(&[2, 2]).unwrap());
    } else {
        panic!("in-range off-diagonal entry must be a correlation engine");
    }
    assert_eq!(v.to_bits(), matrix.get(1, 0, &[2, 2]).unwrap().to_bits());
}

#[test]
fn test_computed_entries_match_direct_slice_correlation() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(2)
        .build(&stack)
        .unwrap();

    // Hand-computed NCC of the 3x3 window of slices 0 and 1 at (2,2), and
    // of the clipped corner window of slices 1 and 2 at (0,0).
    assert_relative_eq!(
        matrix.get(0, 1, &[2, 2]).unwrap(),
        0.933108894138561,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        matrix.get(1, 2, &[0, 0]).unwrap(),
        0.977095334335524,
        epsilon = 1e-12
    );
}

#[test]
fn test_signed_squared_matrices_square_the_standard_value() {
    let stack = stack();
    let std_matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .build(&stack)
        .unwrap();
    let sq_matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .mode(CorrelationMode::SignedSquared)
        .build(&stack)
        .unwrap();

    let v = std_matrix.get(0, 1, &[2, 2]).unwrap();
    assert!(v > 0.0);
    assert_relative_eq!(sq_matrix.get(0, 1, &[2, 2]).unwrap(), v * v, epsilon = 1e-12);
}

#[test]
fn test_three_slices_over_5x5_with_adjacent_range() {
    // The reference scenario: 5x5 spatial extent, 3 slices, 3x3 windows,
    // correlations only between adjacent slices.
    let domain = Domain::new(&[5, 5, 3]).unwrap();
    let data: Vec<f64> = (0..75).map(|i| (i as f64 * 0.53).cos()).collect();
    let stack = DenseField::from_vec(domain, data).unwrap();

    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .build(&stack)
        .unwrap();

    assert_eq!(matrix.slices(), 3);
    assert_eq!(matrix.slice_domain().dims(), &[5, 5]);
    for z in 0..3 {
        assert_eq!(matrix.get(z, z, &[0, 4]).unwrap(), 1.0);
    }
    assert!(matrix.get(0, 2, &[2, 2]).unwrap().is_nan());
    assert!(Rc::ptr_eq(
        matrix.entry(1, 2).unwrap(),
        matrix.entry(2, 1).unwrap()
    ));

    // Adjacent pairs hold finite correlations at interior and corner
    // positions alike.
    for (z1, z2) in [(0, 1), (1, 2)] {
        for xy in [[2, 2], [0, 0], [4, 4]] {
            let v = matrix.get(z1, z2, &xy).unwrap();
            assert!(v.is_finite());
            assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&v));
        }
    }
}

#[test]
fn test_capacity_is_checked_before_assembly() {
    let stack = stack();

    // 3 slices need 9 entry headers; a limit of 8 rejects the build.
    assert_eq!(
        CorrelationMatrixBuilder::<f64>::new()
            .radius(&[1, 1])
            .capacity_limit(8)
            .build(&stack)
            .unwrap_err(),
        XcorrError::CapacityExceeded {
            slices: 3,
            limit: 8,
        }
    );

    // 9 is exactly enough.
    assert!(CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .capacity_limit(9)
        .build(&stack)
        .is_ok());
}

#[test]
fn test_build_rejects_bad_ranks() {
    let flat = DenseField::from_vec(
        Domain::new(&[4, 4]).unwrap(),
        vec![0.0f64; 16],
    )
    .unwrap();
    assert_eq!(
        CorrelationMatrixBuilder::<f64>::new().build(&flat).unwrap_err(),
        XcorrError::RankMismatch {
            got: 2,
            expected: 3,
        }
    );

    let stack = stack();
    assert_eq!(
        CorrelationMatrixBuilder::<f64>::new()
            .radius(&[1])
            .build(&stack)
            .unwrap_err(),
        XcorrError::RankMismatch {
            got: 1,
            expected: 2,
        }
    );
}

#[test]
fn test_entry_and_get_validate_indices() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .build(&stack)
        .unwrap();

    assert!(matches!(
        matrix.entry(3, 0),
        Err(XcorrError::OutOfDomain { .. })
    ));
    assert!(matches!(
        matrix.get(0, 1, &[4, 0]),
        Err(XcorrError::OutOfDomain { .. })
    ));
}

#[test]
fn test_entries_read_through_the_field_trait() {
    let stack = stack();
    let matrix = CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(1)
        .build(&stack)
        .unwrap();

    // A matrix entry is itself a scalar field over the slice domain.
    let entry = matrix.entry(0, 1).unwrap();
    let direct = entry.get(&[1, 3]).unwrap();
    assert_eq!(direct.to_bits(), matrix.get(0, 1, &[1, 3]).unwrap().to_bits());
}
