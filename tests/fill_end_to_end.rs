use poissonfill::{
    fill_masked_region, fill_masked_region_with_guidance, Image, PixelLabel, PoissonError,
    RegionMask, ScalarField, SolveParams, VectorField,
};

fn gradient_plane(width: usize, height: usize, scale: f32) -> ScalarField {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(scale * (x as f32 + 2.0 * y as f32) + 5.0);
        }
    }
    ScalarField::new(data, width, height).unwrap()
}

fn zero_laplacian(width: usize, height: usize) -> Image {
    Image::from_plane(ScalarField::zeros(width, height).unwrap())
}

fn block_hole_mask(width: usize, height: usize) -> RegionMask {
    RegionMask::from_fn(width, height, |x, y| {
        if (2..width - 2).contains(&x) && (2..height - 2).contains(&y) {
            PixelLabel::Hole
        } else {
            PixelLabel::Valid
        }
    })
    .unwrap()
}

#[test]
fn identity_fill_returns_target_exactly() {
    let target = Image::from_plane(gradient_plane(8, 6, 1.5));
    let mask = RegionMask::all_valid(8, 6).unwrap();
    let output = fill_masked_region(&target, &mask, &zero_laplacian(8, 6)).unwrap();
    assert_eq!(output, target);
}

#[test]
fn valid_pixels_are_preserved_bit_for_bit() {
    let target = Image::from_plane(gradient_plane(9, 9, 3.0));
    let mask = block_hole_mask(9, 9);
    let output = fill_masked_region(&target, &mask, &zero_laplacian(9, 9)).unwrap();

    for y in 0..9 {
        for x in 0..9 {
            if mask.is_valid(x, y) {
                assert_eq!(output.plane(0).get(x, y), target.plane(0).get(x, y));
            }
        }
    }
}

#[test]
fn single_pixel_hole_resolves_to_neighbor_mean() {
    // Neighbors {10, 20, 30, 40} of the center must average to 25.
    let target = ScalarField::new(
        vec![
            0.0, 30.0, 0.0, //
            10.0, 999.0, 20.0, //
            0.0, 40.0, 0.0,
        ],
        3,
        3,
    )
    .unwrap();
    let mask = RegionMask::from_fn(3, 3, |x, y| {
        if (x, y) == (1, 1) {
            PixelLabel::Hole
        } else {
            PixelLabel::Valid
        }
    })
    .unwrap();

    let output =
        fill_masked_region(&Image::from_plane(target), &mask, &zero_laplacian(3, 3)).unwrap();
    let center = output.plane(0).get(1, 1).unwrap();
    assert!((center - 25.0).abs() < 1e-4, "center = {center}");
}

#[test]
fn all_hole_mask_is_rejected_as_degenerate() {
    let target = Image::from_plane(gradient_plane(5, 5, 1.0));
    let mask = RegionMask::from_fn(5, 5, |_, _| PixelLabel::Hole).unwrap();
    let err = fill_masked_region(&target, &mask, &zero_laplacian(5, 5)).unwrap_err();
    assert_eq!(err, PoissonError::DegenerateRegion { x: 0, y: 0 });
}

#[test]
fn hole_region_spanning_the_border_is_fine_if_anchored() {
    // A Hole strip that touches the grid border still solves as long as the
    // component has at least one Valid neighbor; removing the anchor column
    // must flip the result to DegenerateRegion.
    let anchored = RegionMask::from_fn(4, 4, |x, _| {
        if x < 3 {
            PixelLabel::Hole
        } else {
            PixelLabel::Valid
        }
    })
    .unwrap();
    let target = Image::from_plane(gradient_plane(4, 4, 1.0));
    assert!(fill_masked_region(&target, &anchored, &zero_laplacian(4, 4)).is_ok());

    let unanchored = RegionMask::from_fn(4, 4, |_, _| PixelLabel::Hole).unwrap();
    let err = fill_masked_region(&target, &unanchored, &zero_laplacian(4, 4)).unwrap_err();
    assert!(matches!(err, PoissonError::DegenerateRegion { .. }));
}

#[test]
fn multi_channel_fill_matches_independent_single_channel_fills() {
    let width = 8;
    let height = 8;
    let plane0 = gradient_plane(width, height, 2.0);
    let plane1 = gradient_plane(width, height, -1.0);
    let g1 = ScalarField::filled(0.5, width, height).unwrap();
    let g2 = ScalarField::filled(-2.0, width, height).unwrap();
    let mask = block_hole_mask(width, height);

    let combined = fill_masked_region(
        &Image::from_planes(vec![plane0.clone(), plane1.clone()]).unwrap(),
        &mask,
        &Image::from_planes(vec![g1.clone(), g2.clone()]).unwrap(),
    )
    .unwrap();

    let solo0 = fill_masked_region(
        &Image::from_plane(plane0),
        &mask,
        &Image::from_plane(g1),
    )
    .unwrap();
    let solo1 = fill_masked_region(
        &Image::from_plane(plane1),
        &mask,
        &Image::from_plane(g2),
    )
    .unwrap();

    assert_eq!(combined.plane(0), solo0.plane(0));
    assert_eq!(combined.plane(1), solo1.plane(0));
}

#[test]
fn single_guidance_plane_broadcasts_across_channels() {
    let width = 7;
    let height = 7;
    let plane0 = gradient_plane(width, height, 1.0);
    let plane1 = gradient_plane(width, height, 1.0);
    let mask = block_hole_mask(width, height);
    let guidance = Image::from_plane(ScalarField::filled(1.0, width, height).unwrap());

    let output = fill_masked_region(
        &Image::from_planes(vec![plane0, plane1]).unwrap(),
        &mask,
        &guidance,
    )
    .unwrap();
    // Identical targets with the same broadcast guidance fill identically.
    assert_eq!(output.plane(0), output.plane(1));
}

#[test]
fn constant_guidance_field_matches_zero_laplacian_fill() {
    // A constant derivative field has zero divergence, so filling through
    // the vector-field entry point must agree with an explicit zero
    // Laplacian.
    let width = 8;
    let height = 8;
    let target = Image::from_plane(gradient_plane(width, height, 2.5));
    let mask = block_hole_mask(width, height);
    let field = VectorField::new(
        ScalarField::filled(1.0, width, height).unwrap(),
        ScalarField::filled(-0.5, width, height).unwrap(),
    )
    .unwrap();

    let via_guidance =
        fill_masked_region_with_guidance(&target, &mask, &[field], SolveParams::default())
            .unwrap();
    let via_laplacian =
        fill_masked_region(&target, &mask, &zero_laplacian(width, height)).unwrap();
    assert_eq!(via_guidance, via_laplacian);
}

#[test]
fn mismatched_mask_dimensions_are_rejected() {
    let target = Image::from_plane(gradient_plane(6, 6, 1.0));
    let mask = RegionMask::all_valid(5, 6).unwrap();
    let err = fill_masked_region(&target, &mask, &zero_laplacian(6, 6)).unwrap_err();
    assert_eq!(
        err,
        PoissonError::DimensionMismatch {
            expected_width: 6,
            expected_height: 6,
            width: 5,
            height: 6,
        }
    );
}

#[test]
fn mismatched_guidance_channel_count_is_rejected() {
    let width = 6;
    let height = 6;
    let planes = vec![
        gradient_plane(width, height, 1.0),
        gradient_plane(width, height, 2.0),
        gradient_plane(width, height, 3.0),
    ];
    let target = Image::from_planes(planes).unwrap();
    let mask = block_hole_mask(width, height);
    let guidance = Image::from_planes(vec![
        ScalarField::zeros(width, height).unwrap(),
        ScalarField::zeros(width, height).unwrap(),
    ])
    .unwrap();

    let err = fill_masked_region(&target, &mask, &guidance).unwrap_err();
    assert_eq!(
        err,
        PoissonError::ChannelCountMismatch {
            image: 3,
            guidance: 2,
        }
    );
}
