//! Pixel format conversion helpers for presentation adapters.

/// Copies 32-bit blue-green-red-pad pixels to packed RGB, dropping the pad
/// byte.
///
/// # Panics
/// Panics if `src` is not a multiple of 4 bytes or `dst` is not exactly
/// three quarters of its length.
pub fn copy_bgrx_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    let expected_dst_len = (src.len() / 4) * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        dst_pixel[0] = src_pixel[2];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[0];
    }
}
