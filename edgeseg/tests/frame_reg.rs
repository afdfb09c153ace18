//! Frame pipeline regression test
//!
//! Runs the full label, describe and annotate pipeline on synthetic edge
//! frames and compares the annotated output against expected rasters.

use edgeseg::region::{
    AnnotateOptions, CentroidMethod, Connectivity, DescribeOptions, LabelOptions, RandomLabels,
    SequentialLabels,
};
use edgeseg::{Coord, FrameOptions, FrameProcessor, Grid};
use edgeseg_test::{EDGE, RegParams, grid_from_art};

#[test]
fn frame_reg() {
    let mut rp = RegParams::new("frame");

    // --- Test 1: two cells, only the mid-sized one is annotated ---
    eprintln!("=== two cells ===");
    let mut frame = grid_from_art(&[
        "##############", //
        "#....#.......#", //
        "#....#.......#", //
        "#....#.......#", //
        "#....#.......#", //
        "##############", //
    ])
    .expect("frame");
    let options = FrameOptions::new()
        .with_describe(DescribeOptions::new().with_size_range(10, 20))
        .with_annotate(AnnotateOptions::new().with_outline(None).with_marker(Some(1), 0));
    let mut processor = FrameProcessor::new(options, SequentialLabels::new());
    let report = processor.process(&mut frame).expect("process");
    rp.compare_values(2.0, report.region_count as f64, 0.0);
    rp.compare_values(44.0, report.labeled_pixels as f64, 0.0);
    rp.compare_values(1.0, report.descriptors.len() as f64, 0.0);
    rp.compare_values(16.0, report.descriptors[0].size() as f64, 0.0);
    rp.compare_values(1.0, frame.count_value(1) as f64, 0.0);
    rp.display_grid("two cells", &frame);

    // --- Test 2: annotated output matches a hand-built raster ---
    eprintln!("=== outline raster ===");
    let mut frame = Grid::filled(7, 7, EDGE).expect("frame");
    frame.fill_rect(1, 1, 6, 6, 0);
    let options = FrameOptions::new().with_annotate(AnnotateOptions::new().with_outline(Some(9)));
    let report = FrameProcessor::new(options, SequentialLabels::new())
        .process(&mut frame)
        .expect("process outline");
    rp.compare_values(1.0, report.descriptors.len() as f64, 0.0);
    let mut expected = Grid::filled(7, 7, EDGE).expect("expected");
    expected.fill_rect(1, 1, 6, 6, 9);
    expected.fill_rect(2, 2, 5, 5, 160);
    rp.compare_grids(&expected, &frame);

    // --- Test 3: polygon centroid and 4-way growth ---
    eprintln!("=== polygon centroid ===");
    let mut frame = Grid::filled(16, 16, EDGE).expect("frame");
    frame.fill_rect(3, 4, 9, 10, 0);
    let options = FrameOptions::new()
        .with_label(LabelOptions::new().with_connectivity(Connectivity::FourWay))
        .with_describe(DescribeOptions::new().with_centroid(CentroidMethod::Polygon))
        .with_annotate(AnnotateOptions::new().with_outline(None));
    let report = FrameProcessor::new(options, RandomLabels::seeded(11))
        .process(&mut frame)
        .expect("process polygon");
    let d = &report.descriptors[0];
    rp.compare_values(36.0, d.size() as f64, 0.0);
    rp.compare_true(d.centroid == Coord::new(6, 7), "centroid at block center");
    rp.compare_values(3.0, f64::from(d.radius), 0.0);

    assert!(rp.cleanup(), "frame regression test failed");
}
