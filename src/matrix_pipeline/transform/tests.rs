#[cfg(test)]
mod tests {
    use crate::matrix_pipeline::common::error::MatrixError;
    use crate::matrix_pipeline::matrix::{Channels, Matrix};
    use crate::matrix_pipeline::transform::engine::{apply_operation, brightness, edit_merge, invert, invert_blended, threshold};
    use crate::matrix_pipeline::transform::types::{BrightnessRange, Controls, InversionMode, Operation, TransformConfig};
    use crate::matrix_pipeline::window::{EditedWindow, WindowSelector};

    fn gray(values: &[u8]) -> Matrix {
        Matrix::from_raw(1, values.len(), Channels::Gray, values.to_vec()).unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = TransformConfig::builder()
            .brightness_range(BrightnessRange::Positive)
            .inversion(InversionMode::Fixed)
            .build();

        assert_eq!(config.brightness_range, BrightnessRange::Positive);
        assert_eq!(config.inversion, InversionMode::Fixed);
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = TransformConfig::builder().build();
        assert_eq!(config.brightness_range, BrightnessRange::Signed);
        assert_eq!(config.inversion, InversionMode::Blended);
    }

    #[test]
    fn test_controls_clamped_signed() {
        let controls = Controls {
            brightness: -250,
            inversion_strength: 140,
            threshold: 300,
            ..Controls::default()
        };
        let clamped = controls.clamped(&TransformConfig::default());
        assert_eq!(clamped.brightness, -100);
        assert_eq!(clamped.inversion_strength, 100);
        assert_eq!(clamped.threshold, 255);
    }

    #[test]
    fn test_controls_clamped_positive_range() {
        let config = TransformConfig::builder()
            .brightness_range(BrightnessRange::Positive)
            .build();
        let controls = Controls { brightness: -40, threshold: -3, ..Controls::default() };
        let clamped = controls.clamped(&config);
        assert_eq!(clamped.brightness, 0);
        assert_eq!(clamped.threshold, 0);
    }

    #[test]
    fn test_brightness_saturates_high() {
        assert_eq!(brightness(&gray(&[250]), 20).data(), &[255]);
    }

    #[test]
    fn test_brightness_extreme_offsets_saturate() {
        let m = Matrix::filled(5, 5, Channels::Gray, 200);
        assert!(brightness(&m, i32::MAX).data().iter().all(|&v| v == 255));
        assert!(brightness(&m, i32::MIN).data().iter().all(|&v| v == 0));
        assert_eq!(brightness(&gray(&[0, 255]), i32::MAX - 100).data(), &[255, 255]);
    }

    #[test]
    fn test_edit_merge_extreme_offset() {
        let base = Matrix::filled(5, 5, Channels::Gray, 10);
        let merged = edit_merge(&base, WindowSelector::default(), &EditedWindow::uniform(i32::MAX), i32::MIN).unwrap();
        assert!(merged.data().iter().all(|&v| v == 0));

        let rgb = Matrix::from_raw(1, 1, Channels::Rgb, vec![1, 2, 3]).unwrap();
        assert_eq!(apply_operation(&rgb, Operation::Brightness, i32::MAX, 0.0).data(), &[255, 255, 255]);
    }

    #[test]
    fn test_brightness_saturates_low() {
        assert_eq!(brightness(&gray(&[30, 200]), -100).data(), &[0, 100]);
    }

    #[test]
    fn test_brightness_zero_is_identity() {
        let m = gray(&[0, 17, 255]);
        assert_eq!(brightness(&m, 0), m);
    }

    #[test]
    fn test_invert_fixed() {
        assert_eq!(invert(&gray(&[0, 100, 255])).data(), &[255, 155, 0]);
    }

    #[test]
    fn test_invert_blended_endpoints() {
        let m = gray(&[0, 64, 200, 255]);
        assert_eq!(invert_blended(&m, 0.0), m);
        assert_eq!(invert_blended(&m, 1.0), invert(&m));
    }

    #[test]
    fn test_invert_blended_half_is_mid_gray() {
        // 0.5 * v + 0.5 * (255 - v) = 127.5 for every v
        let m = invert_blended(&gray(&[0, 10, 255]), 0.5);
        assert!(m.data().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(threshold(&gray(&[5, 128, 129, 255]), 128).data(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_threshold_max_level_is_all_black() {
        assert!(threshold(&gray(&[0, 254, 255]), 255).data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!("Brightness".parse::<Operation>().unwrap(), Operation::Brightness);
        assert_eq!(" invert ".parse::<Operation>().unwrap(), Operation::Inversion);
        assert_eq!("GRAYSCALE".parse::<Operation>().unwrap(), Operation::Grayscale);
        assert!(matches!("blur".parse::<Operation>(), Err(MatrixError::UnknownOperation(_))));
    }

    #[test]
    fn test_apply_operation_on_rgb() {
        let rgb = Matrix::from_raw(1, 1, Channels::Rgb, vec![10, 20, 60]).unwrap();

        let bright = apply_operation(&rgb, Operation::Brightness, 200, 1.0);
        assert_eq!(bright.data(), &[210, 220, 255]);

        let inverted = apply_operation(&rgb, Operation::Inversion, 0, 1.0);
        assert_eq!(inverted.data(), &[245, 235, 195]);

        let grayscale = apply_operation(&rgb, Operation::Grayscale, 0, 0.0);
        assert_eq!(grayscale.channels(), Channels::Gray);
        assert_eq!(grayscale.data(), &[30]);
    }

    #[test]
    fn test_edit_merge_then_offset() {
        let base = Matrix::filled(10, 10, Channels::Gray, 100);
        let merged = edit_merge(&base, WindowSelector::new(2, 2), &EditedWindow::uniform(200), 10).unwrap();

        for row in 0..10 {
            for col in 0..10 {
                let inside = (2..7).contains(&row) && (2..7).contains(&col);
                let expected = if inside { 210 } else { 110 };
                assert_eq!(merged.get(row, col, 0), expected, "at ({row}, {col})");
            }
        }
        // base untouched
        assert!(base.data().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_edit_merge_clamps_each_stage() {
        let base = Matrix::filled(5, 5, Channels::Gray, 50);
        let mut edits = EditedWindow::uniform(0);
        edits.set(0, 0, 400).unwrap();
        edits.set(0, 1, -20).unwrap();

        // 400 -> 255 before the offset, so -10 gives 245 rather than 255
        let merged = edit_merge(&base, WindowSelector::default(), &edits, -10).unwrap();
        assert_eq!(merged.get(0, 0, 0), 245);
        assert_eq!(merged.get(0, 1, 0), 0);
    }

    #[test]
    fn test_edit_merge_out_of_bounds() {
        let base = Matrix::filled(6, 6, Channels::Gray, 0);
        let result = edit_merge(&base, WindowSelector::new(0, 2), &EditedWindow::uniform(1), 0);
        assert!(matches!(result, Err(MatrixError::WindowOutOfBounds { col: 2, max_col: 1, .. })));
    }
}
