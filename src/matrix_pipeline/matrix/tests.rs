#[cfg(test)]
mod tests {
    use crate::matrix_pipeline::common::error::MatrixError;
    use crate::matrix_pipeline::matrix::{Channels, Matrix, derive_grayscale, difference};

    fn rgb(height: usize, width: usize, px: [u8; 3]) -> Matrix {
        let data = px.iter().copied().cycle().take(height * width * 3).collect();
        Matrix::from_raw(height, width, Channels::Rgb, data).unwrap()
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let result = Matrix::from_raw(2, 2, Channels::Rgb, vec![0u8; 11]);
        assert!(matches!(result, Err(MatrixError::InvalidDimensions { len: 11, .. })));
    }

    #[test]
    fn test_from_raw_rejects_zero_dimension() {
        let result = Matrix::from_raw(0, 4, Channels::Gray, Vec::new());
        assert!(matches!(result, Err(MatrixError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_shape_descriptor() {
        let m = rgb(480, 640, [0, 0, 0]);
        assert_eq!(m.shape().to_string(), "(480, 640, 3)");
        assert_eq!(derive_grayscale(&m).shape().to_string(), "(480, 640)");
    }

    #[test]
    fn test_grayscale_truncates_mean() {
        // (10 + 20 + 31) / 3 = 20.33
        let gray = derive_grayscale(&rgb(2, 3, [10, 20, 31]));
        assert_eq!(gray.channels(), Channels::Gray);
        assert_eq!((gray.height(), gray.width()), (2, 3));
        assert!(gray.data().iter().all(|&v| v == 20));
    }

    #[test]
    fn test_grayscale_of_white_stays_in_range() {
        let gray = derive_grayscale(&rgb(1, 1, [255, 255, 255]));
        assert_eq!(gray.get(0, 0, 0), 255);
    }

    #[test]
    fn test_grayscale_is_identity_on_gray() {
        let m = Matrix::from_raw(1, 3, Channels::Gray, vec![1, 2, 3]).unwrap();
        assert_eq!(derive_grayscale(&m), m);
    }

    #[test]
    fn test_difference_keeps_sign() {
        let original = Matrix::from_raw(1, 3, Channels::Gray, vec![100, 100, 0]).unwrap();
        let modified = Matrix::from_raw(1, 3, Channels::Gray, vec![0, 150, 255]).unwrap();
        let diff = difference(&modified, &original).unwrap();
        assert_eq!(diff.data(), &[-100, 50, 255]);
    }

    #[test]
    fn test_difference_shape_mismatch() {
        let a = Matrix::filled(2, 2, Channels::Gray, 0);
        let b = Matrix::filled(2, 3, Channels::Gray, 0);
        assert!(matches!(difference(&a, &b), Err(MatrixError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_pixel_accessors() {
        let mut m = rgb(2, 2, [1, 2, 3]);
        m.pixel_mut(1, 0).copy_from_slice(&[7, 8, 9]);
        assert_eq!(m.pixel(1, 0), &[7, 8, 9]);
        assert_eq!(m.get(1, 0, 2), 9);
        assert_eq!(m.row(1), &[7, 8, 9, 1, 2, 3]);
    }
}
