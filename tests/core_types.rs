use poissonfill::{Image, PixelLabel, PoissonError, RegionMask, ScalarField, VectorField};

#[test]
fn scalar_field_rejects_invalid_dimensions() {
    let err = ScalarField::new(vec![0.0; 4], 0, 1).unwrap_err();
    assert_eq!(
        err,
        PoissonError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ScalarField::new(vec![0.0; 4], 1, 0).unwrap_err();
    assert_eq!(
        err,
        PoissonError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn scalar_field_rejects_small_buffer() {
    let err = ScalarField::new(vec![0.0; 3], 2, 2).unwrap_err();
    assert_eq!(err, PoissonError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn scalar_field_access_matches_row_major_layout() {
    let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
    let field = ScalarField::new(data, 4, 3).unwrap();
    assert_eq!(field.width(), 4);
    assert_eq!(field.height(), 3);
    assert_eq!(field.get(0, 0), Some(0.0));
    assert_eq!(field.get(3, 2), Some(11.0));
    assert_eq!(field.get(4, 0), None);
    assert_eq!(field.get(0, 3), None);
    assert_eq!(field.row(1).unwrap(), &[4.0, 5.0, 6.0, 7.0]);
    assert!(field.row(3).is_none());
}

#[test]
fn image_rejects_empty_and_mismatched_planes() {
    let err = Image::from_planes(Vec::new()).unwrap_err();
    assert_eq!(err, PoissonError::EmptyImage);

    let a = ScalarField::zeros(3, 3).unwrap();
    let b = ScalarField::zeros(2, 3).unwrap();
    let err = Image::from_planes(vec![a, b]).unwrap_err();
    assert_eq!(
        err,
        PoissonError::DimensionMismatch {
            expected_width: 3,
            expected_height: 3,
            width: 2,
            height: 3,
        }
    );
}

#[test]
fn vector_field_requires_matching_components() {
    let dx = ScalarField::zeros(4, 4).unwrap();
    let dy = ScalarField::zeros(4, 5).unwrap();
    let err = VectorField::new(dx, dy).unwrap_err();
    assert_eq!(
        err,
        PoissonError::DimensionMismatch {
            expected_width: 4,
            expected_height: 4,
            width: 4,
            height: 5,
        }
    );
}

#[test]
fn mask_rejects_short_label_buffer() {
    let err = RegionMask::from_labels(vec![PixelLabel::Valid; 5], 3, 2).unwrap_err();
    assert_eq!(err, PoissonError::BufferTooSmall { needed: 6, got: 5 });
}

#[test]
fn mask_labels_round_trip_through_from_fn() {
    let mask = RegionMask::from_fn(3, 2, |x, y| {
        if x == y {
            PixelLabel::Hole
        } else {
            PixelLabel::Valid
        }
    })
    .unwrap();
    assert_eq!(mask.label(0, 0), Some(PixelLabel::Hole));
    assert_eq!(mask.label(1, 1), Some(PixelLabel::Hole));
    assert_eq!(mask.label(2, 0), Some(PixelLabel::Valid));
    assert_eq!(mask.hole_count(), 2);
}
