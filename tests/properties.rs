use pixmatrix::matrix_pipeline::{
    Channels, Matrix, WindowSelector, brightness, derive_grayscale, extract_window, invert, invert_blended, threshold,
};
use proptest::prelude::*;

fn gray_strategy() -> impl Strategy<Value = Matrix> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(h, w)| {
        prop::collection::vec(any::<u8>(), h * w)
            .prop_map(move |data| Matrix::from_raw(h, w, Channels::Gray, data).unwrap())
    })
}

fn rgb_strategy() -> impl Strategy<Value = Matrix> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(h, w)| {
        prop::collection::vec(any::<u8>(), h * w * 3)
            .prop_map(move |data| Matrix::from_raw(h, w, Channels::Rgb, data).unwrap())
    })
}

/// Gray matrix of at least 5×5 with a valid window offset.
fn windowed_strategy() -> impl Strategy<Value = (Matrix, usize, usize)> {
    (5usize..=14, 5usize..=14)
        .prop_flat_map(|(h, w)| {
            (
                prop::collection::vec(any::<u8>(), h * w)
                    .prop_map(move |data| Matrix::from_raw(h, w, Channels::Gray, data).unwrap()),
                0..=h - 5,
                0..=w - 5,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn brightness_zero_is_identity(m in gray_strategy()) {
        prop_assert_eq!(brightness(&m, 0), m);
    }

    #[test]
    fn brightness_matches_saturating_add(m in gray_strategy(), k in any::<i32>()) {
        let out = brightness(&m, k);
        for (&before, &after) in m.data().iter().zip(out.data()) {
            prop_assert_eq!(after as i64, (before as i64 + k as i64).clamp(0, 255));
        }
    }

    #[test]
    fn double_inversion_is_identity(m in gray_strategy()) {
        let once = invert(&m);
        for (&before, &after) in m.data().iter().zip(once.data()) {
            prop_assert_eq!(after, 255 - before);
        }
        prop_assert_eq!(invert(&once), m);
    }

    #[test]
    fn blended_inversion_endpoints(m in gray_strategy()) {
        prop_assert_eq!(invert_blended(&m, 0.0), m.clone());
        prop_assert_eq!(invert_blended(&m, 1.0), invert(&m));
    }

    #[test]
    fn threshold_is_binary_and_strict(m in gray_strategy(), level in any::<u8>()) {
        let out = threshold(&m, level);
        for (&before, &after) in m.data().iter().zip(out.data()) {
            prop_assert!(after == 0 || after == 255);
            prop_assert_eq!(after == 255, before > level);
        }
    }

    #[test]
    fn threshold_at_max_is_black(m in gray_strategy()) {
        prop_assert!(threshold(&m, 255).data().iter().all(|&v| v == 0));
    }

    #[test]
    fn threshold_at_zero_marks_nonzero(m in gray_strategy()) {
        let out = threshold(&m, 0);
        for (&before, &after) in m.data().iter().zip(out.data()) {
            prop_assert_eq!(after == 255, before > 0);
        }
    }

    #[test]
    fn grayscale_is_channel_mean(rgb in rgb_strategy()) {
        let gray = derive_grayscale(&rgb);
        prop_assert_eq!((gray.height(), gray.width()), (rgb.height(), rgb.width()));
        for row in 0..rgb.height() {
            for col in 0..rgb.width() {
                let px = rgb.pixel(row, col);
                let mean = (px[0] as f64 + px[1] as f64 + px[2] as f64) / 3.0;
                prop_assert!((gray.get(row, col, 0) as f64 - mean).abs() < 1.0);
            }
        }
    }

    #[test]
    fn window_matches_block((m, r, c) in windowed_strategy()) {
        let w = extract_window(&m, WindowSelector::new(r, c)).unwrap();
        for i in 0..5 {
            for j in 0..5 {
                prop_assert_eq!(w.get(i, j, 0), m.get(r + i, c + j, 0));
            }
        }
    }

    #[test]
    fn window_past_last_row_fails((m, _r, c) in windowed_strategy(), extra in 1usize..4) {
        let row = m.height() - 5 + extra;
        prop_assert!(extract_window(&m, WindowSelector::new(row, c)).is_err());
    }
}
