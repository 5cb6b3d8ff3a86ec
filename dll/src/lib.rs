//! Flat C ABI over the winvm crate for AutoHotkey, C# and other non-Rust
//! callers.
//!
//! Every function returns `-1` on failure. Functions reporting a boolean
//! return `0` or `1`. Callers that want settings change notifications create
//! a listener thread with [`CreateSettingsChangeThread`] and receive window
//! messages at the offset they chose.
#![cfg(target_os = "windows")]
#![allow(non_snake_case)]

use std::sync::Mutex;
use std::thread::JoinHandle;

use once_cell::sync::Lazy;
use windows::Win32::{
    Foundation::{HWND, LPARAM, WPARAM},
    UI::WindowsAndMessaging::PostMessageW,
};
use winvm::{
    listen_settings_events, SettingsEvent, SettingsEventListener, UIColorType,
    UserInteractionMode,
};

#[no_mangle]
pub extern "C" fn GetAnimationsEnabled() -> i32 {
    match winvm::get_animations_enabled() {
        Ok(enabled) => enabled as i32,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn GetHighContrast() -> i32 {
    match winvm::get_high_contrast() {
        Ok(enabled) => enabled as i32,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn GetAutoHideScrollBars() -> i32 {
    match winvm::get_auto_hide_scroll_bars() {
        Ok(auto_hide) => auto_hide as i32,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn IsDarkTheme() -> i32 {
    match winvm::is_dark_theme() {
        Ok(dark) => dark as i32,
        Err(_) => -1,
    }
}

/// Text scale factor multiplied by 100, so 100 means no scaling.
#[no_mangle]
pub extern "C" fn GetTextScaleFactorTimes100() -> i32 {
    match winvm::get_text_scale_factor() {
        Ok(factor) => (factor * 100.0).round() as i32,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn GetMessageDurationSeconds() -> i32 {
    match winvm::get_message_duration() {
        Ok(duration) => duration as i32,
        Err(_) => -1,
    }
}

/// Writes the color slot as 0xAARRGGBB into `out_color`. `color_type` takes
/// the `UIColorType` values (0 background .. 8 accent dark 3).
#[no_mangle]
pub extern "C" fn GetUIColorValue(color_type: i32, out_color: *mut u32) -> i32 {
    if out_color.is_null() {
        return -1;
    }
    match winvm::get_color_value(UIColorType(color_type)) {
        Ok(color) => {
            let packed = (color.a as u32) << 24
                | (color.r as u32) << 16
                | (color.g as u32) << 8
                | color.b as u32;
            unsafe { *out_color = packed };
            0
        }
        Err(_) => -1,
    }
}

/// 0 for mouse, 1 for touch.
#[no_mangle]
pub extern "C" fn GetUserInteractionMode() -> i32 {
    match winvm::get_user_interaction_mode() {
        Ok(UserInteractionMode(mode)) => mode,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn GetApplicationViewIdForWindow(hwnd: HWND) -> i32 {
    match winvm::get_application_view_id_for_window(hwnd) {
        Ok(id) => id,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn TryShowInputPane() -> i32 {
    match winvm::try_show_input_pane() {
        Ok(shown) => shown as i32,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn TryHideInputPane() -> i32 {
    match winvm::try_hide_input_pane() {
        Ok(hidden) => hidden as i32,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn IsProjectionDisplayAvailable() -> i32 {
    match winvm::is_projection_display_available() {
        Ok(available) => available as i32,
        Err(_) => -1,
    }
}

struct ChangeThread {
    listener: SettingsEventListener,
    forwarder: JoinHandle<()>,
}

static CHANGE_THREAD: Lazy<Mutex<Option<ChangeThread>>> = Lazy::new(|| Mutex::new(None));

/// wparam codes posted by the settings change thread.
const EVENT_COLOR_VALUES: usize = 0;
const EVENT_TEXT_SCALE: usize = 1;
const EVENT_ADVANCED_EFFECTS: usize = 2;
const EVENT_ANIMATIONS: usize = 3;
const EVENT_AUTO_HIDE_SCROLL_BARS: usize = 4;
const EVENT_MESSAGE_DURATION: usize = 5;
const EVENT_HIGH_CONTRAST: usize = 6;

fn event_message(event: &SettingsEvent) -> (usize, isize) {
    match event {
        SettingsEvent::ColorValuesChanged => (EVENT_COLOR_VALUES, 0),
        SettingsEvent::TextScaleFactorChanged(factor) => {
            (EVENT_TEXT_SCALE, (factor * 100.0).round() as isize)
        }
        SettingsEvent::AdvancedEffectsEnabledChanged(enabled) => {
            (EVENT_ADVANCED_EFFECTS, *enabled as isize)
        }
        SettingsEvent::AnimationsEnabledChanged(enabled) => (EVENT_ANIMATIONS, *enabled as isize),
        SettingsEvent::AutoHideScrollBarsChanged(auto_hide) => {
            (EVENT_AUTO_HIDE_SCROLL_BARS, *auto_hide as isize)
        }
        SettingsEvent::MessageDurationChanged(duration) => {
            (EVENT_MESSAGE_DURATION, *duration as isize)
        }
        SettingsEvent::HighContrastChanged { enabled, .. } => {
            (EVENT_HIGH_CONTRAST, *enabled as isize)
        }
    }
}

/// Starts a settings change listener that posts `message` to `hwnd` for every
/// change, with the event code in wparam and the new value in lparam. Only
/// one listener at a time, a second call replaces the first.
#[no_mangle]
pub extern "C" fn CreateSettingsChangeThread(hwnd: HWND, message: u32) -> i32 {
    let (tx, rx) = crossbeam_channel::unbounded();
    let listener = match listen_settings_events(tx) {
        Ok(listener) => listener,
        Err(_) => return -1,
    };
    // HWND is not Send, carry the raw value across the thread boundary.
    let hwnd_value = hwnd.0;
    let forwarder = std::thread::spawn(move || {
        for event in rx {
            let (code, value) = event_message(&event);
            unsafe {
                let _ = PostMessageW(HWND(hwnd_value), message, WPARAM(code), LPARAM(value));
            }
        }
    });
    let mut slot = match CHANGE_THREAD.lock() {
        Ok(slot) => slot,
        Err(_) => return -1,
    };
    *slot = Some(ChangeThread {
        listener,
        forwarder,
    });
    0
}

/// Stops the settings change thread started by [`CreateSettingsChangeThread`].
#[no_mangle]
pub extern "C" fn StopSettingsChangeThread() -> i32 {
    let taken = match CHANGE_THREAD.lock() {
        Ok(mut slot) => slot.take(),
        Err(_) => return -1,
    };
    match taken {
        Some(thread) => {
            // Dropping the listener unregisters the handlers, which drops the
            // channel senders and ends the forwarder loop.
            drop(thread.listener);
            let _ = thread.forwarder.join();
            0
        }
        None => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_codes_are_stable_and_distinct() {
        let events = [
            SettingsEvent::ColorValuesChanged,
            SettingsEvent::TextScaleFactorChanged(1.25),
            SettingsEvent::AdvancedEffectsEnabledChanged(true),
            SettingsEvent::AnimationsEnabledChanged(false),
            SettingsEvent::AutoHideScrollBarsChanged(true),
            SettingsEvent::MessageDurationChanged(5),
            SettingsEvent::HighContrastChanged {
                enabled: true,
                scheme: "High Contrast Black".into(),
            },
        ];
        let codes: Vec<usize> = events.iter().map(|e| event_message(e).0).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), events.len());
        assert_eq!(codes[0], EVENT_COLOR_VALUES);
    }

    #[test]
    fn event_values_round_to_integers() {
        assert_eq!(
            event_message(&SettingsEvent::TextScaleFactorChanged(1.25)),
            (EVENT_TEXT_SCALE, 125)
        );
        assert_eq!(
            event_message(&SettingsEvent::MessageDurationChanged(30)),
            (EVENT_MESSAGE_DURATION, 30)
        );
        assert_eq!(
            event_message(&SettingsEvent::AnimationsEnabledChanged(true)),
            (EVENT_ANIMATIONS, 1)
        );
    }

    #[test]
    fn stop_without_a_thread_reports_failure() {
        assert_eq!(StopSettingsChangeThread(), -1);
    }
}
