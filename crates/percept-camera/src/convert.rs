/// Converts packed RGB565 pixel data to interleaved 8-bit RGB.
///
/// RGB565 packs one pixel into a little-endian u16: 5 bits red (high),
/// 6 bits green, 5 bits blue (low). Each channel is widened to 8 bits by
/// replicating its top bits into the vacated low bits, so 0x1F maps to
/// 0xFF and 0x00 stays 0x00.
///
/// Returns RGB data as `[R, G, B, R, G, B, ...]` with 3 bytes per pixel.
///
/// # Errors
///
/// Returns `None` if the input data length is less than `width * height * 2`
/// bytes (the expected size for RGB565 at the given dimensions).
pub fn rgb565_to_rgb(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let pixel_count = (width as usize) * (height as usize);
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return None;
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);

    for chunk in data[..expected_len].chunks_exact(2) {
        let packed = u16::from_le_bytes([chunk[0], chunk[1]]);

        let r5 = ((packed >> 11) & 0x1F) as u8;
        let g6 = ((packed >> 5) & 0x3F) as u8;
        let b5 = (packed & 0x1F) as u8;

        let r = (r5 << 3) | (r5 >> 2);
        let g = (g6 << 2) | (g6 >> 4);
        let b = (b5 << 3) | (b5 >> 2);

        rgb.extend_from_slice(&[r, g, b]);
    }

    Some(rgb)
}
