//! Headless rendering integration tests.
//!
//! These tests verify that figures render to pixel buffers and PNG files
//! without any display. Everything runs on the CPU, so no adapter or
//! window system is needed.

use triplot::*;

/// Helper: check that a pixel buffer is not all-black and not all-background.
fn has_nontrivial_content(pixels: &[u8], width: u32, height: u32) -> bool {
    let total = (width * height) as usize;
    assert_eq!(pixels.len(), total * 4, "pixel buffer size mismatch");

    // Check not all-black
    let all_black = pixels
        .chunks(4)
        .all(|px| px[0] == 0 && px[1] == 0 && px[2] == 0);

    // Check not uniform (all same color)
    let first = &pixels[0..4];
    let all_uniform = pixels.chunks(4).all(|px| px == first);

    !all_black && !all_uniform
}

/// Builds the masked ring triangulation used throughout these tests.
fn ring_mesh() -> Triangulation {
    let points = ring_lattice(36, 8, 0.25, 0.95);
    let mut triangulation = Triangulation::delaunay(points).expect("triangulation failed");
    triangulation.mask_inside_radius(0.25);
    triangulation
}

/// All headless render tests are combined into a single test function
/// because the figure registry is one global shared by every test thread
/// in the process.
#[test]
fn headless_render_tests() {
    let _ = init();

    // --- Test 1: Empty figure is uniform background ---
    {
        remove_all_figures();
        let mut opts = options().expect("options failed");
        opts.draw_axes = false;
        set_options(opts).expect("set_options failed");

        let fig = figure("empty").expect("figure failed");
        let pixels = render_to_image(fig.id(), 200, 150).expect("empty render failed");
        assert_eq!(pixels.len(), 200 * 150 * 4);
        let first = &pixels[0..4];
        let all_same = pixels.chunks(4).all(|px| px == first);
        assert!(all_same, "empty figure should be uniform background color");
        assert_eq!(first, &[255, 255, 255, 255], "default background is white");

        set_options(Options::default()).expect("set_options failed");
    }

    // --- Test 2: Ring mesh produces non-trivial output ---
    {
        remove_all_figures();
        let fig = figure("triplot of Delaunay triangulation").expect("figure failed");
        fig.set_aspect(Aspect::Equal);
        fig.triplot(ring_mesh(), PlotStyle::default())
            .expect("triplot failed");

        let pixels = render_to_image(fig.id(), 400, 300).expect("ring render failed");
        assert_eq!(pixels.len(), 400 * 300 * 4);
        assert!(
            has_nontrivial_content(&pixels, 400, 300),
            "ring mesh render should produce non-trivial output"
        );
    }

    // --- Test 3: Rendering is deterministic ---
    {
        remove_all_figures();
        let fig = figure("determinism").expect("figure failed");
        fig.triplot(ring_mesh(), PlotStyle::default())
            .expect("triplot failed");

        let first = render_to_image(fig.id(), 320, 240).expect("render failed");
        let second = render_to_image(fig.id(), 320, 240).expect("render failed");
        assert_eq!(first, second, "same figure must rasterize identically");
    }

    // --- Test 4: Fixture mesh in a custom style ---
    {
        remove_all_figures();
        let estuary = Triangulation::with_triangles(
            fixtures::estuary_points_degrees(),
            fixtures::estuary_triangles(),
        )
        .expect("estuary mesh failed");

        let fig = figure("triplot of user-specified triangulation").expect("figure failed");
        fig.set_aspect(Aspect::Equal)
            .set_x_label("Longitude (degrees)")
            .set_y_label("Latitude (degrees)");
        let style = PlotStyle {
            line_color: colors::GREEN,
            line_width: 2.0,
            ..PlotStyle::default()
        };
        fig.triplot(estuary, style).expect("triplot failed");

        let pixels = render_to_image(fig.id(), 400, 300).expect("estuary render failed");
        assert!(
            has_nontrivial_content(&pixels, 400, 300),
            "estuary render should produce non-trivial output"
        );

        // Green edges dominate: some pixel must have green above red and blue.
        let green = pixels
            .chunks(4)
            .any(|px| px[1] > 100 && px[0] < 64 && px[2] < 64);
        assert!(green, "expected green mesh edges in the output");
    }

    // --- Test 5: render_to_file writes a tagged PNG ---
    {
        remove_all_figures();
        let fig = figure("triplot of user-specified triangulation").expect("figure failed");
        fig.set_x_label("x-coordinate").set_y_label("y-coordinate");
        let plate =
            Triangulation::with_triangles(fixtures::plate_points(), fixtures::plate_triangles())
                .expect("plate mesh failed");
        fig.triplot(plate, PlotStyle::with_color(colors::BLACK))
            .expect("triplot failed");

        let tmp_path = std::env::temp_dir().join("triplot_headless_test.png");
        render_to_file(fig.id(), &tmp_path).expect("render_to_file failed");

        // Verify file exists and is a valid PNG
        let metadata = std::fs::metadata(&tmp_path).expect("figure file should exist");
        assert!(metadata.len() > 100, "PNG file should have non-trivial size");

        let data = std::fs::read(&tmp_path).expect("should be able to read figure file");
        assert_eq!(&data[0..4], &[0x89, b'P', b'N', b'G'], "should be valid PNG");

        // Verify the figure text travelled along as tEXt chunks
        let chunks = read_text_chunks(&tmp_path).expect("text chunks unreadable");
        let lookup = |keyword: &str| {
            chunks
                .iter()
                .find(|(k, _)| k == keyword)
                .map(|(_, text)| text.as_str())
        };
        assert_eq!(
            lookup(TITLE_KEYWORD),
            Some("triplot of user-specified triangulation")
        );
        assert_eq!(lookup(X_LABEL_KEYWORD), Some("x-coordinate"));
        assert_eq!(lookup(Y_LABEL_KEYWORD), Some("y-coordinate"));
        assert_eq!(lookup(SOFTWARE_KEYWORD), Some("triplot-rs"));

        let _ = std::fs::remove_file(&tmp_path);
    }

    // --- Test 6: show() writes one file per figure in id order ---
    {
        remove_all_figures();
        let out_dir = std::env::temp_dir().join("triplot_show_test");
        std::fs::create_dir_all(&out_dir).expect("temp dir creation failed");

        let mut opts = options().expect("options failed");
        opts.output_dir = out_dir.to_string_lossy().into_owned();
        set_options(opts).expect("set_options failed");

        let fig_a = figure("triplot of Delaunay triangulation").expect("figure failed");
        fig_a.set_aspect(Aspect::Equal);
        fig_a
            .triplot(ring_mesh(), PlotStyle::default())
            .expect("triplot failed");
        let fig_b = figure("second figure").expect("figure failed");
        fig_b
            .triplot(ring_mesh(), PlotStyle::with_color(colors::BLACK))
            .expect("triplot failed");

        show().expect("show failed");

        for handle in [fig_a, fig_b] {
            let path = out_dir.join(format!("figure_{}.png", handle.id()));
            let data = std::fs::read(&path).expect("figure file missing after show()");
            assert_eq!(&data[0..4], &[0x89, b'P', b'N', b'G']);
            let _ = std::fs::remove_file(&path);
        }
        assert!(
            read_text_chunks(out_dir.join("nonexistent.png")).is_err(),
            "missing files must error, not panic"
        );

        set_options(Options::default()).expect("set_options failed");
        let _ = std::fs::remove_dir(&out_dir);
    }

    // --- Test 7: Different resolutions ---
    {
        remove_all_figures();
        let fig = figure("resolutions").expect("figure failed");
        fig.triplot(ring_mesh(), PlotStyle::default())
            .expect("triplot failed");

        // Small
        let pixels = render_to_image(fig.id(), 64, 64).expect("small render failed");
        assert_eq!(pixels.len(), 64 * 64 * 4);

        // Large
        let pixels = render_to_image(fig.id(), 1024, 768).expect("large render failed");
        assert_eq!(pixels.len(), 1024 * 768 * 4);
    }

    // --- Test 8: Unknown figure id is an error ---
    {
        let result = render_to_image(FigureId(4096), 64, 64);
        assert!(matches!(result, Err(TriplotError::FigureNotFound(4096))));
    }

    // Clean up
    remove_all_figures();
}
