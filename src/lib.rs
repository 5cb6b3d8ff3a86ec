//! Hand-maintained Rust projection of the `Windows.UI.ViewManagement` WinRT
//! namespace.
//!
//! The raw interface declarations live in [`interfaces`], transcribed vtable
//! by vtable. On top of them sit plain functions that activate the runtime
//! classes, cache them per thread and translate the HRESULT-and-out-param
//! calling convention into `Result`s:
//!
//! * [`get_color_value`], [`get_text_scale_factor`] and friends read
//!   `UISettings` and `AccessibilitySettings`,
//! * [`get_current_view`], [`switch_to_view`], [`try_show_input_pane`] and
//!   the rest of the view functions drive `ApplicationView`, `InputPane`,
//!   `UIViewSettings` and `ProjectionManager`,
//! * with the `crossbeam-channel` feature, [`listen_settings_events`] runs a
//!   background thread that forwards settings change events through a
//!   channel.
//!
//! Everything except the [`catalog`] table is Windows only.

#[cfg(target_os = "windows")]
pub mod interfaces;

#[cfg(target_os = "windows")]
mod comobjects;

#[cfg(target_os = "windows")]
mod settings;

#[cfg(target_os = "windows")]
mod views;

#[cfg(all(target_os = "windows", feature = "crossbeam-channel"))]
mod changelistener;

pub mod catalog;

#[cfg(target_os = "windows")]
pub use comobjects::{with_com_objects, ComObjects, Error, Result};

#[cfg(target_os = "windows")]
pub use interfaces::{
    ApplicationViewBoundsMode, ApplicationViewMode, ApplicationViewOrientation,
    ApplicationViewState, ApplicationViewWindowingMode, AsyncStatus, Color,
    EventRegistrationToken, FullScreenSystemOverlayMode, HandPreference, Rect, Size, UIColorType,
    UIElementType, UserInteractionMode, ViewSizePreference,
};

#[cfg(target_os = "windows")]
pub use settings::*;

#[cfg(target_os = "windows")]
pub use views::*;

#[cfg(all(target_os = "windows", feature = "crossbeam-channel"))]
pub use changelistener::{listen_settings_events, SettingsEvent, SettingsEventListener};
