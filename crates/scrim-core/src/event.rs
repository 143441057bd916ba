#![forbid(unsafe_code)]

//! Environment events a host forwards to a presented dialog.

use crate::geometry::Size;

/// A notification from the host UI environment.
///
/// Each of these invalidates only the height-clamp portion of a computed
/// layout; none of them requires re-measuring text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The soft keyboard is about to appear with the given height.
    KeyboardWillShow { height: f32 },
    /// The soft keyboard is about to disappear.
    KeyboardWillHide,
    /// The device rotated; `size` is the new screen size.
    OrientationChanged { size: Size },
}
