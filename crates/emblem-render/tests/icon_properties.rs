//! Integration tests: motif → composed emblem → pixels.
//!
//! Checks the rendered icons by inspecting pixels rather than geometry.

use emblem_core::{Color, ICON_SIZES, Motif, Scale};
use emblem_render::inspect::{column_run, row_run, sample};
use emblem_render::{encode_png, render};
use pretty_assertions::assert_eq;

/// `measured` is within one pixel of `reference_len` scaled to `size`.
fn assert_scales(measured: u32, reference_len: f64, size: u32, what: &str) {
    let expected = reference_len * Scale::new(size).factor();
    assert!(
        (measured as f64 - expected).abs() <= 1.0,
        "{what} @ {size}px: measured {measured}, expected ~{expected:.2}"
    );
}

// ─── Canvas ──────────────────────────────────────────────────────────────

#[test]
fn every_standard_size_has_exact_dimensions() {
    for motif in Motif::ALL {
        for size in ICON_SIZES {
            let pixmap = render(motif, size).unwrap();
            assert_eq!((pixmap.width(), pixmap.height()), (size, size), "{motif}");
        }
    }
}

#[test]
fn outer_corners_are_transparent() {
    for motif in Motif::ALL {
        for size in ICON_SIZES {
            let pixmap = render(motif, size).unwrap();
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(
                    sample(&pixmap, x, y).map(|c| c.a),
                    Some(0),
                    "{motif} @ {size}px: corner ({x}, {y}) should be clear"
                );
            }
        }
    }
}

#[test]
fn everything_outside_the_corner_arcs_is_clear() {
    for motif in Motif::ALL {
        for size in ICON_SIZES {
            let pixmap = render(motif, size).unwrap();
            let r = Scale::new(size).corner_radius();
            let ri = r as u32;
            for y in 0..ri {
                for x in 0..ri {
                    // Nearest point of pixel (x, y) to the top-left arc centre.
                    let dx = r - (x + 1) as f64;
                    let dy = r - (y + 1) as f64;
                    if dx.hypot(dy) <= r + 0.5 {
                        continue;
                    }
                    let last = size - 1;
                    for (px, py) in [(x, y), (last - x, y), (x, last - y), (last - x, last - y)] {
                        assert_eq!(
                            sample(&pixmap, px, py).map(|c| c.a),
                            Some(0),
                            "{motif} @ {size}px: ({px}, {py}) lies outside the corner arc"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn background_fills_inside_corner_arcs() {
    for motif in Motif::ALL {
        let background = motif.palette().background;
        for size in ICON_SIZES {
            let pixmap = render(motif, size).unwrap();
            let r = Scale::new(size).corner_radius() as u32;
            for (x, y) in [(r, r), (size - 1 - r, r)] {
                assert_eq!(
                    sample(&pixmap, x, y),
                    Some(background),
                    "{motif} @ {size}px: ({x}, {y})"
                );
            }
        }
    }
}

// ─── Scale invariance ────────────────────────────────────────────────────

#[test]
fn anchor_bars_scale_with_size() {
    for size in ICON_SIZES {
        let s = Scale::new(size);
        let pixmap = render(Motif::Anchor, size).unwrap();

        // Row through the shank, between the ring and the arms.
        let shank = row_run(&pixmap, s.px(250.0) as u32, Color::WHITE);
        assert_scales(shank, 24.0, size, "shank width");

        // Row through the stock, above the ring.
        let stock = row_run(&pixmap, s.px(90.0) as u32, Color::WHITE);
        assert_scales(stock, 160.0, size, "stock width");

        // Down the centre line: stock top to shank bottom.
        let height = column_run(&pixmap, s.cx() as u32, Color::WHITE);
        assert_scales(height, 300.0, size, "anchor height");
    }
}

/// Width of the span on row `y` covered by at least half-strength white
/// over the anchor's teal background.
fn white_extent(pixmap: &tiny_skia::Pixmap, y: u32) -> u32 {
    let inked: Vec<u32> = (0..pixmap.width())
        .filter(|&x| sample(pixmap, x, y).is_some_and(|c| c.r > 140))
        .collect();
    match (inked.first(), inked.last()) {
        (Some(first), Some(last)) => last - first + 1,
        _ => 0,
    }
}

#[test]
fn anchor_ring_radius_scales_with_size() {
    for size in ICON_SIZES {
        let s = Scale::new(size);
        let pixmap = render(Motif::Anchor, size).unwrap();
        // The row through the ring centre crosses only the ring and shank.
        let diameter = white_extent(&pixmap, s.px(140.0) as u32);
        let radius = diameter as f64 / 2.0;
        let expected = 40.0 * s.factor();
        assert!(
            (radius - expected).abs() <= 1.0,
            "ring radius @ {size}px: measured {radius}, expected ~{expected:.2}"
        );
    }
}

#[test]
fn boat_mast_scales_with_size() {
    for size in ICON_SIZES {
        let s = Scale::new(size);
        let pixmap = render(Motif::Boat, size).unwrap();
        // Above both sails only the mast crosses this row.
        let mast = row_run(&pixmap, s.px(115.0) as u32, Color::WHITE);
        assert_scales(mast, 16.0, size, "mast width");
    }
}

#[test]
fn feature_ratio_tracks_size_ratio() {
    let small = render(Motif::Anchor, 192).unwrap();
    let large = render(Motif::Anchor, 384).unwrap();
    let stock_small = row_run(&small, Scale::new(192).px(90.0) as u32, Color::WHITE);
    let stock_large = row_run(&large, Scale::new(384).px(90.0) as u32, Color::WHITE);
    assert!(
        (stock_large as i64 - 2 * stock_small as i64).abs() <= 1,
        "stock {stock_small} @ 192 vs {stock_large} @ 384"
    );
}

#[test]
fn boat_sun_uses_accent() {
    let pixmap = render(Motif::Boat, 512).unwrap();
    assert_eq!(sample(&pixmap, 380, 130), Some(Motif::Boat.palette().accent));
}

// ─── Determinism & boundaries ────────────────────────────────────────────

#[test]
fn rendering_is_deterministic() {
    for motif in Motif::ALL {
        let a = render(motif, 152).unwrap();
        let b = render(motif, 152).unwrap();
        assert!(a.data() == b.data(), "{motif}: pixel data differs");
        assert!(
            encode_png(&a).unwrap() == encode_png(&b).unwrap(),
            "{motif}: PNG bytes differ"
        );
    }
}

#[test]
fn smallest_size_renders() {
    for motif in Motif::ALL {
        let pixmap = render(motif, 1).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (1, 1));
        assert!(encode_png(&pixmap).is_ok());
    }
}

#[test]
fn png_decodes_with_alpha() {
    let bytes = encode_png(&render(Motif::Anchor, 96).unwrap()).unwrap();
    let decoded = emblem_render::tiny_skia::Pixmap::decode_png(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (96, 96));
    assert_eq!(sample(&decoded, 0, 0), Some(Color::TRANSPARENT));
}
