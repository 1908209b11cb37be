#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use xcorr_rs::internals::field::dense::DenseField;
use xcorr_rs::internals::field::scalar::{FieldDomain, ScalarField};
use xcorr_rs::internals::matrix::builder::CorrelationMatrixBuilder;
use xcorr_rs::internals::matrix::pairwise::{CorrelationMatrix, PairField};
use xcorr_rs::internals::primitives::domain::Domain;
use xcorr_rs::internals::primitives::errors::XcorrError;

fn stack() -> DenseField<f64> {
    let domain = Domain::new(&[4, 4, 3]).unwrap();
    let data: Vec<f64> = (0..48).map(|i| (i as f64 * 0.37).sin()).collect();
    DenseField::from_vec(domain, data).unwrap()
}

fn matrix(stack: &DenseField<f64>, range: usize) -> CorrelationMatrix<'_, DenseField<f64>, f64> {
    CorrelationMatrixBuilder::<f64>::new()
        .radius(&[1, 1])
        .range(range)
        .build(stack)
        .unwrap()
}

#[test]
fn test_strip_is_a_zxz_field_at_one_coordinate() {
    let stack = stack();
    let matrix = matrix(&stack, 1);
    let strip = matrix.strip(&[2, 2]).unwrap();

    assert_eq!(strip.domain().dims(), &[3, 3]);
    assert_eq!(strip.xy(), &[2, 2]);

    // Diagonal, out-of-range, and computed entries all come through.
    assert_eq!(strip.get(&[1, 1]).unwrap(), 1.0);
    assert!(strip.get(&[0, 2]).unwrap().is_nan());
    assert_relative_eq!(
        strip.get(&[0, 1]).unwrap(),
        0.933108894138561,
        epsilon = 1e-12
    );
}

#[test]
fn test_strip_shape_is_usable_without_scalar_bounds() {
    // The domain side of a strip is shape-only; a consumer generic over
    // `FieldDomain` alone can read it.
    fn dims_of<F: FieldDomain>(field: &F) -> Vec<usize> {
        field.domain().dims().to_vec()
    }

    let stack = stack();
    let matrix = matrix(&stack, 1);
    let strip = matrix.strip(&[2, 2]).unwrap();
    assert_eq!(dims_of(&strip), vec![3, 3]);
}

#[test]
fn test_strip_is_symmetric_like_the_matrix() {
    let stack = stack();
    let matrix = matrix(&stack, 2);
    let strip = matrix.strip(&[1, 3]).unwrap();

    for z1 in 0..3 {
        for z2 in 0..3 {
            let a = strip.get(&[z1, z2]).unwrap();
            let b = strip.get(&[z2, z1]).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn test_strip_reads_warm_the_matrix_caches() {
    let stack = stack();
    let matrix = matrix(&stack, 1);
    let strip = matrix.strip(&[0, 0]).unwrap();

    let through_strip = strip.get(&[1, 2]).unwrap();

    // The strip delegates to the shared entry; its cache is now warm for
    // direct matrix reads too.
    if let PairField::Correlation(cc) = &**matrix.entry(1, 2).unwrap() {
        assert!(cc.is_computed(&[0, 0]).unwrap());
    } else {
        panic!("in-range off-diagonal entry must be a correlation engine");
    }
    assert_eq!(
        through_strip.to_bits(),
        matrix.get(2, 1, &[0, 0]).unwrap().to_bits()
    );
}

#[test]
fn test_strip_agrees_with_the_matrix_at_every_index() {
    let stack = stack();
    let matrix = matrix(&stack, 1);
    let strip = matrix.strip(&[1, 2]).unwrap();

    for z1 in 0..3 {
        for z2 in 0..3 {
            let direct = matrix.get(z1, z2, &[1, 2]).unwrap();
            let projected = strip.get(&[z1, z2]).unwrap();
            assert_eq!(direct.to_bits(), projected.to_bits());
        }
    }
}

#[test]
fn test_strips_at_different_coordinates_differ() {
    let stack = stack();
    let matrix = matrix(&stack, 1);

    let a = matrix.strip(&[0, 0]).unwrap().get(&[0, 1]).unwrap();
    let b = matrix.strip(&[2, 2]).unwrap().get(&[0, 1]).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_strip_validates_the_fixed_coordinate_up_front() {
    let stack = stack();
    let matrix = matrix(&stack, 1);

    assert!(matches!(
        matrix.strip(&[4, 0]),
        Err(XcorrError::OutOfDomain { .. })
    ));
    assert!(matches!(
        matrix.strip(&[0]),
        Err(XcorrError::OutOfDomain { .. })
    ));

    // Reads range-check the slice pair only.
    let strip = matrix.strip(&[3, 3]).unwrap();
    assert!(matches!(
        strip.get(&[3, 0]),
        Err(XcorrError::OutOfDomain { .. })
    ));
}

#[test]
fn test_strip_clones_share_the_matrix() {
    let stack = stack();
    let matrix = matrix(&stack, 1);
    let strip = matrix.strip(&[1, 1]).unwrap();
    let twin = strip.clone();

    assert_eq!(twin.xy(), strip.xy());
    assert_eq!(
        strip.get(&[0, 1]).unwrap().to_bits(),
        twin.get(&[0, 1]).unwrap().to_bits()
    );
}

#[test]
fn test_strip_supports_cursors() {
    let stack = stack();
    let matrix = matrix(&stack, 1);
    let strip = matrix.strip(&[2, 1]).unwrap();

    let mut cursor = strip.cursor();
    cursor.set_position(&[2, 2]).unwrap();
    assert_eq!(cursor.read().unwrap(), 1.0);
    cursor.set_position(&[2, 0]).unwrap();
    assert!(cursor.read().unwrap().is_nan());
}
