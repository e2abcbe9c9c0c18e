use prism_common::AppSize;

/// Scale factor between the primary display and the initial window frame.
/// The window takes two-thirds of the display in each dimension.
const DISPLAY_TO_FRAME: f64 = 1.5;

/// Initial window frame for a desktop display: display/1.5 per dimension.
pub fn initial_frame(display: AppSize) -> AppSize {
    AppSize::new(
        (display.width as f64 / DISPLAY_TO_FRAME) as u32,
        (display.height as f64 / DISPLAY_TO_FRAME) as u32,
    )
}

/// Top-left origin that centers `frame` on `display`.
pub fn centered_origin(display: AppSize, frame: AppSize) -> (i32, i32) {
    (
        (display.width as i32 - frame.width as i32) / 2,
        (display.height as i32 - frame.height as i32) / 2,
    )
}
