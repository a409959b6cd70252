use image::{ImageBuffer, Luma, Rgba};

/// Converts an uploaded RGBA screenshot to grayscale for recognition.
///
/// Uses the standard luma weights. Tesseract handles untouched screenshots
/// reasonably well; collapsing to a single channel just avoids feeding it
/// alpha data.
pub fn to_grayscale(img: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut output = ImageBuffer::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let r = pixel[0] as f32;
        let g = pixel[1] as f32;
        let b = pixel[2] as f32;

        let luma = (0.299 * r + 0.587 * g + 0.114 * b).round().min(255.0) as u8;
        output.put_pixel(x, y, Luma([luma]));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(120, 80);
        let gray = to_grayscale(&img);
        assert_eq!(gray.dimensions(), (120, 80));
    }

    #[test]
    fn test_grayscale_values() {
        let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(3, 1);

        // Pure white stays white
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        // Pure black stays black
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        // Pure green maps to its luma weight
        img.put_pixel(2, 0, Rgba([0, 255, 0, 255]));

        let gray = to_grayscale(&img);
        assert_eq!(gray.get_pixel(0, 0)[0], 255);
        assert_eq!(gray.get_pixel(1, 0)[0], 0);
        assert_eq!(gray.get_pixel(2, 0)[0], 150); // 0.587 * 255 rounded
    }
}
