use image::{GrayImage, Luma, RgbaImage, imageops};

/// Calculate grayscale intensity from an RGBA image
///
/// Formula: L = (299*R + 587*G + 114*B) / 1000, rounded to nearest
/// These are the ITU-R 601-2 luma weights. Alpha is ignored, so fully
/// transparent pixels read as whatever color they carry (black after
/// rasterization).
///
/// # Arguments
/// * `img` - Input RGBA image
///
/// # Returns
/// Grayscale image with one intensity per pixel
pub fn to_grayscale(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let r = pixel[0] as u32;
        let g = pixel[1] as u32;
        let b = pixel[2] as u32;

        let luma = (r * 299 + g * 587 + b * 114 + 500) / 1000;
        output.put_pixel(x, y, Luma([luma as u8]));
    }

    output
}

/// Resize a grayscale image to an exact grid size
///
/// Uses bicubic (Catmull-Rom) filtering. Aspect ratio is not preserved; the
/// grid is always exactly `width` x `height`.
pub fn downsample(img: &GrayImage, width: u32, height: u32) -> GrayImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, imageops::FilterType::CatmullRom)
}
