//! Safe accessors for `UISettings` and `AccessibilitySettings`.
//!
//! Each function activates (or reuses) the thread local settings object and
//! turns the raw HRESULT-and-out-param call into a plain `Result`. Versioned
//! members (`IUISettings2` and up) query the additional interface from the
//! same object.

use windows::core::Interface;

use crate::comobjects::{with_com_objects, HRESULTHelpers, Result};
use crate::interfaces::*;

pub fn get_hand_preference() -> Result<HandPreference> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = HandPreference::default();
        unsafe { settings.get_hand_preference(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_cursor_size() -> Result<Size> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = Size::default();
        unsafe { settings.get_cursor_size(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_scroll_bar_size() -> Result<Size> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = Size::default();
        unsafe { settings.get_scroll_bar_size(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_scroll_bar_arrow_size() -> Result<Size> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = Size::default();
        unsafe { settings.get_scroll_bar_arrow_size(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_scroll_bar_thumb_box_size() -> Result<Size> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = Size::default();
        unsafe { settings.get_scroll_bar_thumb_box_size(&mut value).as_result()? };
        Ok(value)
    })
}

/// Message duration in seconds.
pub fn get_message_duration() -> Result<u32> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = 0u32;
        unsafe { settings.get_message_duration(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_animations_enabled() -> Result<bool> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = false;
        unsafe { settings.get_animations_enabled(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_caret_browsing_enabled() -> Result<bool> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = false;
        unsafe { settings.get_caret_browsing_enabled(&mut value).as_result()? };
        Ok(value)
    })
}

/// Caret blink rate in milliseconds.
pub fn get_caret_blink_rate() -> Result<u32> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = 0u32;
        unsafe { settings.get_caret_blink_rate(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_caret_width() -> Result<u32> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = 0u32;
        unsafe { settings.get_caret_width(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_double_click_time() -> Result<u32> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = 0u32;
        unsafe { settings.get_double_click_time(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_mouse_hover_time() -> Result<u32> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let mut value = 0u32;
        unsafe { settings.get_mouse_hover_time(&mut value).as_result()? };
        Ok(value)
    })
}

/// Color of a classic UI element (window background, button face, ...).
pub fn get_ui_element_color(element: UIElementType) -> Result<Color> {
    with_com_objects(move |com| {
        let settings = com.ui_settings()?;
        let mut value = Color::default();
        unsafe { settings.ui_element_color(element, &mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_text_scale_factor() -> Result<f64> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let settings2 = settings.cast::<IUISettings2>()?;
        let mut value = 0f64;
        unsafe { settings2.get_text_scale_factor(&mut value).as_result()? };
        Ok(value)
    })
}

/// Current system color for the given slot, accent and theme colors included.
pub fn get_color_value(color_type: UIColorType) -> Result<Color> {
    with_com_objects(move |com| {
        let settings = com.ui_settings()?;
        let settings3 = settings.cast::<IUISettings3>()?;
        let mut value = Color::default();
        unsafe { settings3.get_color_value(color_type, &mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_advanced_effects_enabled() -> Result<bool> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let settings4 = settings.cast::<IUISettings4>()?;
        let mut value = false;
        unsafe { settings4.get_advanced_effects_enabled(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_auto_hide_scroll_bars() -> Result<bool> {
    with_com_objects(|com| {
        let settings = com.ui_settings()?;
        let settings5 = settings.cast::<IUISettings5>()?;
        let mut value = false;
        unsafe { settings5.get_auto_hide_scroll_bars(&mut value).as_result()? };
        Ok(value)
    })
}

pub fn get_high_contrast() -> Result<bool> {
    with_com_objects(|com| {
        let accessibility = com.accessibility_settings()?;
        let mut value = false;
        unsafe { accessibility.get_high_contrast(&mut value).as_result()? };
        Ok(value)
    })
}

/// Name of the active high contrast scheme, empty when high contrast is off.
pub fn get_high_contrast_scheme() -> Result<String> {
    with_com_objects(|com| {
        let accessibility = com.accessibility_settings()?;
        let mut value = windows::core::HSTRING::default();
        unsafe { accessibility.get_high_contrast_scheme(&mut value).as_result()? };
        Ok(value.to_string_lossy())
    })
}

/// True when the system theme is dark, going by the background color the way
/// apps are told to detect it.
pub fn is_dark_theme() -> Result<bool> {
    let background = get_color_value(UIColorType::Background)?;
    let luminance =
        (5 * background.g as u32) + (2 * background.r as u32) + (background.b as u32);
    Ok(luminance <= 8 * 128)
}

#[cfg(all(test, feature = "integration-tests"))]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    // Settings reads race with the change listener tests, keep them serial.
    static SERIAL: Lazy<Mutex<()>> = Lazy::new(Default::default);

    #[test]
    fn reads_basic_metrics() {
        let _guard = SERIAL.lock().unwrap();
        let duration = get_message_duration().unwrap();
        assert!(duration > 0);
        let blink = get_caret_blink_rate().unwrap();
        assert!(blink > 0);
        let cursor = get_cursor_size().unwrap();
        assert!(cursor.width > 0.0 && cursor.height > 0.0);
    }

    #[test]
    fn reads_colors() {
        let _guard = SERIAL.lock().unwrap();
        let bg = get_color_value(UIColorType::Background).unwrap();
        let fg = get_color_value(UIColorType::Foreground).unwrap();
        assert_ne!(bg, fg);
        // Classic element colors come back fully opaque.
        let window = get_ui_element_color(UIElementType::Window).unwrap();
        assert_eq!(window.a, 255);
    }

    #[test]
    fn reads_versioned_members() {
        let _guard = SERIAL.lock().unwrap();
        let factor = get_text_scale_factor().unwrap();
        assert!(factor >= 1.0);
        // These can be true or false, they just must not error out.
        get_advanced_effects_enabled().unwrap();
        get_auto_hide_scroll_bars().unwrap();
        get_animations_enabled().unwrap();
    }

    #[test]
    fn reads_accessibility_settings() {
        let _guard = SERIAL.lock().unwrap();
        let high_contrast = get_high_contrast().unwrap();
        let scheme = get_high_contrast_scheme().unwrap();
        if high_contrast {
            assert!(!scheme.is_empty());
        }
    }
}
