#![cfg(feature = "dev")]

use xcorr_rs::internals::field::constant::ConstantField;
use xcorr_rs::internals::field::dense::DenseField;
use xcorr_rs::internals::field::scalar::{FieldDomain, ScalarField};
use xcorr_rs::internals::field::view::{SliceView, WindowView};
use xcorr_rs::internals::primitives::domain::Domain;
use xcorr_rs::internals::primitives::errors::XcorrError;

fn ramp(dims: &[usize]) -> DenseField<f64> {
    let domain = Domain::new(dims).unwrap();
    let data: Vec<f64> = (0..domain.len()).map(|i| i as f64).collect();
    DenseField::from_vec(domain, data).unwrap()
}

#[test]
fn test_dense_field_rejects_storage_mismatch() {
    let domain = Domain::new(&[4, 4]).unwrap();
    let err = DenseField::from_vec(domain, vec![0.0f64; 12]).unwrap_err();
    assert_eq!(
        err,
        XcorrError::StorageMismatch {
            expected: 16,
            got: 12,
        }
    );
}

#[test]
fn test_dense_field_get_set_roundtrip() {
    let mut field = ramp(&[3, 4]);
    assert_eq!(field.get(&[1, 2]).unwrap(), 6.0);

    field.set(&[1, 2], -1.5).unwrap();
    assert_eq!(field.get(&[1, 2]).unwrap(), -1.5);

    assert!(matches!(
        field.get(&[3, 0]),
        Err(XcorrError::OutOfDomain { .. })
    ));
    assert!(matches!(
        field.set(&[0, 4], 0.0),
        Err(XcorrError::OutOfDomain { .. })
    ));
}

#[test]
fn test_constant_field_reads_same_value_everywhere() {
    let domain = Domain::new(&[3, 3]).unwrap();
    let field = ConstantField::new(domain.clone(), 1.0f64);
    domain.for_each(|pos| assert_eq!(field.value_at(pos), 1.0));

    // NaN is a legal constant; it propagates as a value.
    let missing = ConstantField::new(domain, f64::NAN);
    assert!(missing.get(&[2, 2]).unwrap().is_nan());
}

#[test]
fn test_slice_view_drops_the_fixed_axis() {
    // 2x2x3 stack, last axis fastest: value at (r, c, z) = (r*2 + c)*3 + z.
    let stack = ramp(&[2, 2, 3]);
    let slice = SliceView::new(&stack, 2, 1).unwrap();

    assert_eq!(slice.domain().dims(), &[2, 2]);
    assert_eq!(slice.axis(), 2);
    assert_eq!(slice.index(), 1);
    assert_eq!(slice.get(&[0, 0]).unwrap(), 1.0);
    assert_eq!(slice.get(&[1, 0]).unwrap(), 7.0);
    assert_eq!(slice.get(&[1, 1]).unwrap(), 10.0);
}

#[test]
fn test_slice_view_of_middle_axis() {
    let stack = ramp(&[2, 2, 3]);
    let slice = SliceView::new(&stack, 1, 0).unwrap();

    assert_eq!(slice.domain().dims(), &[2, 3]);
    // (r, z) maps back to stack position (r, 0, z).
    assert_eq!(slice.get(&[1, 2]).unwrap(), 8.0);
}

#[test]
fn test_slice_view_rejects_bad_axis_and_index() {
    let stack = ramp(&[2, 2, 3]);
    assert!(matches!(
        SliceView::new(&stack, 3, 0),
        Err(XcorrError::InvalidAxis { axis: 3, ndim: 3 })
    ));
    assert!(matches!(
        SliceView::new(&stack, 2, 3),
        Err(XcorrError::OutOfDomain { .. })
    ));

    let line = ramp(&[4]);
    assert!(matches!(
        SliceView::new(&line, 0, 0),
        Err(XcorrError::RankMismatch { .. })
    ));
}

#[test]
fn test_window_view_readdresses_from_origin() {
    let field = ramp(&[4, 4]);
    let window = WindowView::new(&field, &[1, 1], &[2, 3]).unwrap();

    assert_eq!(window.domain().dims(), &[2, 3]);
    assert_eq!(window.offset(), &[1, 1]);
    assert_eq!(window.get(&[0, 0]).unwrap(), 5.0);
    assert_eq!(window.get(&[1, 2]).unwrap(), 11.0);

    // Reads past the window are rejected even though the source goes on.
    assert!(matches!(
        window.get(&[2, 0]),
        Err(XcorrError::OutOfDomain { .. })
    ));
}

#[test]
fn test_window_view_rejects_bad_corners() {
    let field = ramp(&[4, 4]);

    // Inverted corners report the full requested extent, with the offending
    // axis collapsed to zero.
    assert_eq!(
        WindowView::new(&field, &[2, 2], &[1, 3]).unwrap_err(),
        XcorrError::EmptyDomain { dims: vec![0, 2] }
    );
    assert!(matches!(
        WindowView::new(&field, &[0, 0], &[4, 3]),
        Err(XcorrError::OutOfDomain { .. })
    ));
    assert!(matches!(
        WindowView::new(&field, &[0], &[1]),
        Err(XcorrError::RankMismatch { .. })
    ));
}

#[test]
fn test_cursor_positions_independently_over_shared_field() {
    let field = ramp(&[3, 4]);
    let mut cursor = field.cursor();
    assert_eq!(cursor.position(), &[0, 0]);
    assert_eq!(cursor.read().unwrap(), 0.0);

    cursor.set_position(&[1, 2]).unwrap();
    assert_eq!(cursor.read().unwrap(), 6.0);

    // Clones carry their own position, not their own data.
    let mut twin = cursor.clone();
    twin.set_position(&[2, 3]).unwrap();
    assert_eq!(twin.read().unwrap(), 11.0);
    assert_eq!(cursor.position(), &[1, 2]);
    assert_eq!(cursor.read().unwrap(), 6.0);
}

#[test]
fn test_cursor_moves_and_saturates() {
    let field = ramp(&[3, 4]);
    let mut cursor = field.cursor();

    cursor.move_axis(1, 2).unwrap();
    assert_eq!(cursor.position(), &[0, 2]);
    cursor.move_axis(1, -5).unwrap();
    assert_eq!(cursor.position(), &[0, 0]);

    assert!(matches!(
        cursor.move_axis(2, 1),
        Err(XcorrError::InvalidAxis { .. })
    ));
    assert!(matches!(
        cursor.set_position(&[1, 2, 3]),
        Err(XcorrError::RankMismatch { .. })
    ));

    // Bounds are enforced at read time, not while positioning.
    cursor.set_position(&[2, 3]).unwrap();
    cursor.move_axis(0, 1).unwrap();
    assert!(matches!(
        cursor.read(),
        Err(XcorrError::OutOfDomain { .. })
    ));
}
