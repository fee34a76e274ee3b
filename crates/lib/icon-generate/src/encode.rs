//! PNG encoding.

/// Error returned while encoding a PNG.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The pixel buffer does not match the image dimensions.
    #[error("pixel buffer of {len} bytes does not fit a {size}x{size} RGBA image")]
    BufferSize {
        /// Buffer length.
        len: usize,

        /// Image edge length.
        size: u32,
    },

    /// The PNG encoder failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Encode square RGBA pixels as PNG bytes.
pub fn encode_png(pixels: Box<[u8]>, size: u32) -> Result<Vec<u8>, EncodeError> {
    let len = pixels.len();
    let img = image::RgbaImage::from_raw(size, size, pixels.into_vec())
        .ok_or(EncodeError::BufferSize { len, size })?;

    let mut png = std::io::Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png)?;

    Ok(png.into_inner())
}
