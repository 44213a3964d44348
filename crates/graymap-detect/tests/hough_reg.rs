//! Hough line detection regression test
//!
//! Synthetic horizontal, diagonal and vertical lines, plus the ramp
//! fixture (which has no straight edges strong enough to vote).

use graymap_core::{Raster, RasterMut};
use graymap_detect::{HoughOptions, draw_lines, hough_lines, hough_transform};
use graymap_test::{RegParams, load_test_image};

fn synthetic(size: u32, on_line: impl Fn(u32, u32) -> bool) -> Raster {
    let mut rm = RasterMut::new(size, size, 255).unwrap();
    for y in 0..size {
        for x in 0..size {
            if on_line(x, y) {
                rm.set_pixel(x, y, 255).unwrap();
            }
        }
    }
    rm.into()
}

fn is_superset(overlay: &Raster, src: &Raster) -> bool {
    overlay
        .data()
        .iter()
        .zip(src.data())
        .all(|(&o, &s)| s == 0 || o >= s)
}

#[test]
fn hough_reg() {
    let mut rp = RegParams::new("hough");
    let options = HoughOptions::default();

    // --- Test 1: horizontal line at row 60 ---
    eprintln!("=== Test 1: horizontal line ===");
    let src = synthetic(150, |_, y| y == 60);
    let result = hough_transform(&src, &options).expect("hough_transform");
    // Prewitt marks rows 58 and 60, 148 columns each
    rp.compare_values(148.0, result.votes.get_pixel(0, 60).unwrap() as f64, 0.0);
    rp.compare_values(148.0, result.votes.get_pixel(0, 58).unwrap() as f64, 0.0);
    rp.compare_values(2.0, result.lines.len() as f64, 0.0);
    let row60 = result.overlay.row_data(60).iter().all(|&v| v == 255);
    rp.compare_values(1.0, if row60 { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if is_superset(&result.overlay, &src) { 1.0 } else { 0.0 }, 0.0);
    rp.write_raster_and_check(&result.overlay).expect("write horizontal overlay");

    // --- Test 7: the one-call form matches the pipeline ---
    let overlay = hough_lines(&src, 100).expect("hough_lines");
    rp.compare_raster(&result.overlay, &overlay);

    // --- Test 8: main diagonal ---
    eprintln!("=== Test 8: diagonal line ===");
    let src = synthetic(150, |x, y| x == y);
    let result = hough_transform(&src, &options).expect("hough_transform diagonal");
    for line in &result.lines {
        eprintln!("  rho={} theta={} votes={}", line.rho, line.theta_deg, line.votes);
    }
    // more than 255 edge samples share (rho 1, theta 135)
    rp.compare_values(255.0, result.votes.get_pixel(135, 1).unwrap() as f64, 0.0);
    let near_135 = !result.lines.is_empty()
        && result.lines.iter().all(|l| (133..=137).contains(&l.theta_deg));
    rp.compare_values(1.0, if near_135 { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if is_superset(&result.overlay, &src) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 11: vertical line is detected but never drawn ---
    eprintln!("=== Test 11: vertical line ===");
    let src = synthetic(150, |x, _| x == 40);
    let result = hough_transform(&src, &options).expect("hough_transform vertical");
    let all_vertical = !result.lines.is_empty() && result.lines.iter().all(|l| l.theta_deg == 90);
    rp.compare_values(1.0, if all_vertical { 1.0 } else { 0.0 }, 0.0);
    let drawn = draw_lines(&result.lines, 150, 150, 255).expect("draw_lines");
    rp.compare_values(0.0, drawn.count_pixels() as f64, 0.0);
    rp.compare_raster(&src, &result.overlay);

    // --- Test 14: smooth ramp yields no lines ---
    let pixs = load_test_image("ramp64.pgm").expect("load ramp64.pgm");
    let result = hough_transform(&pixs, &options).expect("hough_transform ramp");
    rp.compare_values(0.0, result.lines.len() as f64, 0.0);
    rp.compare_raster(&pixs, &result.overlay);

    assert!(rp.cleanup(), "hough regression test failed");
}
