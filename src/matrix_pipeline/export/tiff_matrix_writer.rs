use std::io::{Cursor, Write};
use tracing::debug;
use tiff::encoder::{Compression, TiffEncoder, colortype, compression::DeflateLevel};
use crate::matrix_pipeline::common::error::{MatrixError, Result};
use crate::matrix_pipeline::export::types::{ExportConfig, TiffCompression};
use crate::matrix_pipeline::export::writer::MatrixWriter;
use crate::matrix_pipeline::matrix::{Channels, DiffMatrix, Matrix};

/// Gray8 or RGB8 for unsigned matrices, signed GrayI16 for differences.
pub struct TiffMatrixWriter;

fn encoder_for<'a>(buffer: &'a mut Vec<u8>, config: &ExportConfig) -> Result<TiffEncoder<Cursor<&'a mut Vec<u8>>>> {
    let compression = match config.compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
    };

    Ok(TiffEncoder::new(Cursor::new(buffer))
        .map_err(|e| MatrixError::EncodeError(e.to_string()))?
        .with_compression(compression))
}

impl MatrixWriter for TiffMatrixWriter {
    fn write_matrix(&self, matrix: &Matrix, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        debug!("Encoding TIFF matrix: {}x{} {:?}", matrix.width(), matrix.height(), matrix.channels());

        let mut buffer = Vec::new();
        let mut encoder = encoder_for(&mut buffer, config)?;
        let (width, height) = (matrix.width() as u32, matrix.height() as u32);

        let written = match matrix.channels() {
            Channels::Gray => encoder.write_image::<colortype::Gray8>(width, height, matrix.data()),
            Channels::Rgb => encoder.write_image::<colortype::RGB8>(width, height, matrix.data()),
        };
        written.map_err(|e| MatrixError::EncodeError(e.to_string()))?;
        drop(encoder);

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete");
        Ok(())
    }

    fn write_diff(&self, matrix: &DiffMatrix, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        debug!("Encoding signed TIFF matrix: {}x{}", matrix.width(), matrix.height());

        if matrix.channels() != Channels::Gray {
            return Err(MatrixError::EncodeError(
                "signed export supports single-channel matrices only".to_string(),
            ));
        }

        let mut buffer = Vec::new();
        let mut encoder = encoder_for(&mut buffer, config)?;
        encoder
            .write_image::<colortype::GrayI16>(matrix.width() as u32, matrix.height() as u32, matrix.data())
            .map_err(|e| MatrixError::EncodeError(e.to_string()))?;
        drop(encoder);

        output.write_all(&buffer)?;

        debug!("Signed TIFF encoding complete");
        Ok(())
    }
}
