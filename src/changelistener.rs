//! Background listener for `UISettings` and `AccessibilitySettings` change
//! events.
//!
//! The WinRT events fire on threadpool threads with no affinity to the
//! subscriber. The listener owns a dedicated thread that activates its own
//! settings objects, registers every change event and pumps a message loop so
//! the registrations stay alive. Events are forwarded through a crossbeam
//! channel, handlers read the new value off the sender object before
//! forwarding so receivers never have to touch COM themselves.

use std::sync::mpsc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use windows::core::{IInspectable, Interface, HRESULT, HSTRING};
use windows::Win32::{
    Foundation::{HWND, LPARAM, WPARAM},
    System::Threading::GetCurrentThreadId,
    UI::WindowsAndMessaging::{
        DispatchMessageW, GetMessageW, PeekMessageW, PostThreadMessageW, TranslateMessage, MSG,
        PM_NOREMOVE, WM_QUIT, WM_USER,
    },
};

use crate::comobjects::{ComObjects, Error, HRESULTHelpers, Result};
use crate::interfaces::*;

/// Posted to the listener thread to make it drop and re-create its event
/// registrations.
const WM_RESET_REGISTRATIONS: u32 = WM_USER + 1;

/// A system wide settings change, with the new value where the event carries
/// one.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// A system color changed (accent, theme, any color slot). Read the slots
    /// of interest with [`crate::get_color_value`].
    ColorValuesChanged,
    TextScaleFactorChanged(f64),
    AdvancedEffectsEnabledChanged(bool),
    AnimationsEnabledChanged(bool),
    AutoHideScrollBarsChanged(bool),
    /// New message duration in seconds.
    MessageDurationChanged(u32),
    HighContrastChanged {
        enabled: bool,
        scheme: String,
    },
}

#[windows::core::implement(UISettingsChangedHandler)]
struct ColorValuesChanged {
    sender: Sender<SettingsEvent>,
}

impl UISettingsChangedHandler_Impl for ColorValuesChanged {
    unsafe fn invoke(&self, _sender: ComIn<IUISettings>, _args: ComIn<IInspectable>) -> HRESULT {
        let _ = self.sender.try_send(SettingsEvent::ColorValuesChanged);
        HRESULT(0)
    }
}

#[windows::core::implement(UISettingsChangedHandler)]
struct TextScaleFactorChanged {
    sender: Sender<SettingsEvent>,
}

impl UISettingsChangedHandler_Impl for TextScaleFactorChanged {
    unsafe fn invoke(&self, sender: ComIn<IUISettings>, _args: ComIn<IInspectable>) -> HRESULT {
        if let Ok(settings2) = sender.cast::<IUISettings2>() {
            let mut factor = 0f64;
            if settings2.get_text_scale_factor(&mut factor).is_ok() {
                let _ = self
                    .sender
                    .try_send(SettingsEvent::TextScaleFactorChanged(factor));
            }
        }
        HRESULT(0)
    }
}

#[windows::core::implement(UISettingsChangedHandler)]
struct AdvancedEffectsEnabledChanged {
    sender: Sender<SettingsEvent>,
}

impl UISettingsChangedHandler_Impl for AdvancedEffectsEnabledChanged {
    unsafe fn invoke(&self, sender: ComIn<IUISettings>, _args: ComIn<IInspectable>) -> HRESULT {
        if let Ok(settings4) = sender.cast::<IUISettings4>() {
            let mut enabled = false;
            if settings4.get_advanced_effects_enabled(&mut enabled).is_ok() {
                let _ = self
                    .sender
                    .try_send(SettingsEvent::AdvancedEffectsEnabledChanged(enabled));
            }
        }
        HRESULT(0)
    }
}

#[windows::core::implement(UISettingsAutoHideScrollBarsChangedHandler)]
struct AutoHideScrollBarsChanged {
    sender: Sender<SettingsEvent>,
}

impl UISettingsAutoHideScrollBarsChangedHandler_Impl for AutoHideScrollBarsChanged {
    unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        _args: ComIn<IUISettingsAutoHideScrollBarsChangedEventArgs>,
    ) -> HRESULT {
        if let Ok(settings5) = sender.cast::<IUISettings5>() {
            let mut auto_hide = false;
            if settings5.get_auto_hide_scroll_bars(&mut auto_hide).is_ok() {
                let _ = self
                    .sender
                    .try_send(SettingsEvent::AutoHideScrollBarsChanged(auto_hide));
            }
        }
        HRESULT(0)
    }
}

#[windows::core::implement(UISettingsAnimationsEnabledChangedHandler)]
struct AnimationsEnabledChanged {
    sender: Sender<SettingsEvent>,
}

impl UISettingsAnimationsEnabledChangedHandler_Impl for AnimationsEnabledChanged {
    unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        _args: ComIn<IUISettingsAnimationsEnabledChangedEventArgs>,
    ) -> HRESULT {
        let mut enabled = false;
        if sender.get_animations_enabled(&mut enabled).is_ok() {
            let _ = self
                .sender
                .try_send(SettingsEvent::AnimationsEnabledChanged(enabled));
        }
        HRESULT(0)
    }
}

#[windows::core::implement(UISettingsMessageDurationChangedHandler)]
struct MessageDurationChanged {
    sender: Sender<SettingsEvent>,
}

impl UISettingsMessageDurationChangedHandler_Impl for MessageDurationChanged {
    unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        _args: ComIn<IUISettingsMessageDurationChangedEventArgs>,
    ) -> HRESULT {
        let mut duration = 0u32;
        if sender.get_message_duration(&mut duration).is_ok() {
            let _ = self
                .sender
                .try_send(SettingsEvent::MessageDurationChanged(duration));
        }
        HRESULT(0)
    }
}

#[windows::core::implement(AccessibilitySettingsChangedHandler)]
struct HighContrastChanged {
    sender: Sender<SettingsEvent>,
}

impl AccessibilitySettingsChangedHandler_Impl for HighContrastChanged {
    unsafe fn invoke(
        &self,
        sender: ComIn<IAccessibilitySettings>,
        _args: ComIn<IInspectable>,
    ) -> HRESULT {
        let mut enabled = false;
        let mut scheme = HSTRING::default();
        if sender.get_high_contrast(&mut enabled).is_ok()
            && sender.get_high_contrast_scheme(&mut scheme).is_ok()
        {
            let _ = self.sender.try_send(SettingsEvent::HighContrastChanged {
                enabled,
                scheme: scheme.to_string_lossy(),
            });
        }
        HRESULT(0)
    }
}

/// Event registrations held for the lifetime of the listener thread. Dropping
/// the struct unregisters everything it holds, including a partially filled
/// value when registration fails half way through.
///
/// `IUISettings5` and `IUISettings6` are missing on older builds, their
/// registrations are skipped when the cast fails.
#[derive(Default)]
struct Registrations {
    color_values: Option<(IUISettings3, EventRegistrationToken)>,
    text_scale: Option<(IUISettings2, EventRegistrationToken)>,
    advanced_effects: Option<(IUISettings4, EventRegistrationToken)>,
    auto_hide_scroll_bars: Option<(IUISettings5, EventRegistrationToken)>,
    animations_enabled: Option<(IUISettings6, EventRegistrationToken)>,
    message_duration: Option<(IUISettings6, EventRegistrationToken)>,
    high_contrast: Option<(IAccessibilitySettings, EventRegistrationToken)>,
}

impl Registrations {
    fn new(com: &ComObjects, sender: &Sender<SettingsEvent>) -> Result<Self> {
        // Filled slot by slot, so an error leaves a droppable value whose
        // Drop removes whatever already registered.
        let mut regs = Self::default();
        let settings = com.ui_settings()?;
        let accessibility = com.accessibility_settings()?;

        let settings3 = settings.cast::<IUISettings3>()?;
        let handler: UISettingsChangedHandler = ColorValuesChanged {
            sender: sender.clone(),
        }
        .into();
        let mut token = EventRegistrationToken::default();
        unsafe {
            settings3
                .add_color_values_changed(ComIn::new(&handler), &mut token)
                .as_result()?
        };
        regs.color_values = Some((settings3, token));

        let settings2 = settings.cast::<IUISettings2>()?;
        let handler: UISettingsChangedHandler = TextScaleFactorChanged {
            sender: sender.clone(),
        }
        .into();
        let mut token = EventRegistrationToken::default();
        unsafe {
            settings2
                .add_text_scale_factor_changed(ComIn::new(&handler), &mut token)
                .as_result()?
        };
        regs.text_scale = Some((settings2, token));

        if let Ok(settings4) = settings.cast::<IUISettings4>() {
            let handler: UISettingsChangedHandler = AdvancedEffectsEnabledChanged {
                sender: sender.clone(),
            }
            .into();
            let mut token = EventRegistrationToken::default();
            unsafe {
                settings4
                    .add_advanced_effects_enabled_changed(ComIn::new(&handler), &mut token)
                    .as_result()?
            };
            regs.advanced_effects = Some((settings4, token));
        }

        if let Ok(settings5) = settings.cast::<IUISettings5>() {
            let handler: UISettingsAutoHideScrollBarsChangedHandler = AutoHideScrollBarsChanged {
                sender: sender.clone(),
            }
            .into();
            let mut token = EventRegistrationToken::default();
            unsafe {
                settings5
                    .add_auto_hide_scroll_bars_changed(ComIn::new(&handler), &mut token)
                    .as_result()?
            };
            regs.auto_hide_scroll_bars = Some((settings5, token));
        }

        if let Ok(settings6) = settings.cast::<IUISettings6>() {
            let handler: UISettingsAnimationsEnabledChangedHandler = AnimationsEnabledChanged {
                sender: sender.clone(),
            }
            .into();
            let mut token = EventRegistrationToken::default();
            unsafe {
                settings6
                    .add_animations_enabled_changed(ComIn::new(&handler), &mut token)
                    .as_result()?
            };
            regs.animations_enabled = Some((settings6.clone(), token));

            let handler: UISettingsMessageDurationChangedHandler = MessageDurationChanged {
                sender: sender.clone(),
            }
            .into();
            let mut token = EventRegistrationToken::default();
            unsafe {
                settings6
                    .add_message_duration_changed(ComIn::new(&handler), &mut token)
                    .as_result()?
            };
            regs.message_duration = Some((settings6, token));
        }

        let handler: AccessibilitySettingsChangedHandler = HighContrastChanged {
            sender: sender.clone(),
        }
        .into();
        let mut token = EventRegistrationToken::default();
        unsafe {
            accessibility
                .add_high_contrast_changed(ComIn::new(&handler), &mut token)
                .as_result()?
        };
        regs.high_contrast = Some((accessibility.as_ref().clone(), token));

        Ok(regs)
    }
}

impl Drop for Registrations {
    fn drop(&mut self) {
        unsafe {
            if let Some((settings3, token)) = &self.color_values {
                let _ = settings3.remove_color_values_changed(*token);
            }
            if let Some((settings2, token)) = &self.text_scale {
                let _ = settings2.remove_text_scale_factor_changed(*token);
            }
            if let Some((settings4, token)) = &self.advanced_effects {
                let _ = settings4.remove_advanced_effects_enabled_changed(*token);
            }
            if let Some((settings5, token)) = &self.auto_hide_scroll_bars {
                let _ = settings5.remove_auto_hide_scroll_bars_changed(*token);
            }
            if let Some((settings6, token)) = &self.animations_enabled {
                let _ = settings6.remove_animations_enabled_changed(*token);
            }
            if let Some((settings6, token)) = &self.message_duration {
                let _ = settings6.remove_message_duration_changed(*token);
            }
            if let Some((accessibility, token)) = &self.high_contrast {
                let _ = accessibility.remove_high_contrast_changed(*token);
            }
        }
    }
}

/// Owns the listener thread. Dropping it posts `WM_QUIT` to the thread and
/// joins it, which unregisters all event handlers.
pub struct SettingsEventListener {
    thread: Option<JoinHandle<()>>,
    thread_id: u32,
}

impl SettingsEventListener {
    /// Spawns the listener thread and registers for all settings change
    /// events. Events arrive on `sender` until the listener is dropped.
    ///
    /// Fails with the registration error when the thread cannot set its
    /// handlers up, instead of handing out a listener with a dead thread.
    pub fn new(sender: Sender<SettingsEvent>) -> Result<Self> {
        let (ready_tx, ready_rx) = mpsc::channel::<Result<u32>>();
        let thread = std::thread::spawn(move || {
            let com = ComObjects::new();
            let mut msg = MSG::default();
            // Force the message queue into existence so control messages
            // posted right after the handshake cannot be lost.
            unsafe {
                let _ = PeekMessageW(&mut msg, HWND::default(), WM_USER, WM_USER, PM_NOREMOVE);
            }
            let mut registrations = match Registrations::new(&com, &sender) {
                Ok(registrations) => {
                    let thread_id = unsafe { GetCurrentThreadId() };
                    if ready_tx.send(Ok(thread_id)).is_err() {
                        return;
                    }
                    registrations
                }
                Err(err) => {
                    let _ = ready_tx.send(Err(err));
                    return;
                }
            };

            loop {
                let res = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };
                if res.0 == 0 || res.0 == -1 {
                    break;
                }
                if msg.message == WM_RESET_REGISTRATIONS {
                    drop(registrations);
                    com.drop_services();
                    registrations = match Registrations::new(&com, &sender) {
                        Ok(registrations) => registrations,
                        Err(_) => break,
                    };
                    continue;
                }
                unsafe {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        });
        let ready = ready_rx
            .recv()
            .map_err(|_| Error::ListenerThreadIdNotCreated);
        match ready {
            Ok(Ok(thread_id)) => Ok(Self {
                thread: Some(thread),
                thread_id,
            }),
            Ok(Err(err)) | Err(err) => {
                let _ = thread.join();
                Err(err)
            }
        }
    }

    /// Makes the listener thread drop its settings objects and register its
    /// handlers again, for example after the WinRT server was restarted.
    pub fn reset_registrations(&self) -> Result<()> {
        self.post(WM_RESET_REGISTRATIONS)
    }

    fn post(&self, message: u32) -> Result<()> {
        if self.thread.as_ref().map(|t| t.is_finished()).unwrap_or(true) {
            return Err(Error::ListenerThreadNotAlive);
        }
        unsafe {
            PostThreadMessageW(self.thread_id, message, WPARAM(0), LPARAM(0))
                .map_err(Error::from)
        }
    }
}

impl Drop for SettingsEventListener {
    fn drop(&mut self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Convenience constructor matching the channel based call style of the rest
/// of the crate.
pub fn listen_settings_events(sender: Sender<SettingsEvent>) -> Result<SettingsEventListener> {
    SettingsEventListener::new(sender)
}

#[cfg(test)]
mod handler_tests {
    //! Handler and registration checks against local implementations, no live
    //! OS services involved.

    use super::*;
    use std::mem::ManuallyDrop;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use windows::core::GUID;

    #[windows::core::implement(IUISettings3)]
    struct RecordingSettings3 {
        removed: Arc<AtomicUsize>,
    }

    impl IUISettings3_Impl for RecordingSettings3 {
        unsafe fn get_iids(
            &self,
            out_iid_count: *mut u32,
            out_opt_iid_array_ptr: *mut *mut GUID,
        ) -> HRESULT {
            if !out_iid_count.is_null() {
                *out_iid_count = 0;
            }
            if !out_opt_iid_array_ptr.is_null() {
                *out_opt_iid_array_ptr = std::ptr::null_mut();
            }
            HRESULT(0)
        }

        unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT {
            if !out_opt_class_name.is_null() {
                *out_opt_class_name = HSTRING::new();
            }
            HRESULT(0)
        }

        unsafe fn get_trust_level(&self, out_trust_level: *mut i32) -> HRESULT {
            if !out_trust_level.is_null() {
                *out_trust_level = 0;
            }
            HRESULT(0)
        }

        unsafe fn get_color_value(
            &self,
            _desired_color: UIColorType,
            out_color: *mut Color,
        ) -> HRESULT {
            if !out_color.is_null() {
                *out_color = Color::default();
            }
            HRESULT(0)
        }

        unsafe fn add_color_values_changed(
            &self,
            _handler: ComIn<UISettingsChangedHandler>,
            out_token: *mut EventRegistrationToken,
        ) -> HRESULT {
            *out_token = EventRegistrationToken { value: 7 };
            HRESULT(0)
        }

        unsafe fn remove_color_values_changed(&self, token: EventRegistrationToken) -> HRESULT {
            if token.value == 7 {
                self.removed.fetch_add(1, Ordering::SeqCst);
            }
            HRESULT(0)
        }
    }

    #[test]
    fn color_values_handler_forwards_the_event() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let handler: UISettingsChangedHandler = ColorValuesChanged { sender: tx }.into();

        // The handler ignores both parameters, any inspectable stands in.
        let settings3: IUISettings3 = RecordingSettings3 {
            removed: Arc::new(AtomicUsize::new(0)),
        }
        .into();
        let sender = ManuallyDrop::new(unsafe { IUISettings::from_raw(settings3.as_raw()) });
        let args = ManuallyDrop::new(unsafe { IInspectable::from_raw(settings3.as_raw()) });

        let hr = unsafe { handler.invoke(ComIn::new(&sender), ComIn::new(&args)) };
        assert_eq!(hr, HRESULT(0));
        assert_eq!(rx.try_recv(), Ok(SettingsEvent::ColorValuesChanged));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropping_partial_registrations_unregisters_them() {
        let removed = Arc::new(AtomicUsize::new(0));
        let settings3: IUISettings3 = RecordingSettings3 {
            removed: removed.clone(),
        }
        .into();

        let (tx, _rx) = crossbeam_channel::unbounded();
        let handler: UISettingsChangedHandler = ColorValuesChanged { sender: tx }.into();
        let mut token = EventRegistrationToken::default();
        let hr = unsafe { settings3.add_color_values_changed(ComIn::new(&handler), &mut token) };
        assert_eq!(hr, HRESULT(0));
        assert_eq!(token.value, 7);

        // A half-built registration set, as left behind by a failure after
        // the first add.
        let regs = Registrations {
            color_values: Some((settings3, token)),
            ..Default::default()
        };
        drop(regs);
        assert_eq!(removed.load(Ordering::SeqCst), 1);
    }
}

#[cfg(all(test, feature = "integration-tests"))]
mod tests {
    use super::*;

    #[test]
    fn listener_starts_and_stops() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let listener = SettingsEventListener::new(tx).unwrap();
        // No events expected without a settings change, the channel just must
        // stay open while the listener lives.
        assert!(rx.try_recv().is_err());
        drop(listener);
        // After the drop the sender side is gone.
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reset_registrations_succeeds_while_alive() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let listener = SettingsEventListener::new(tx).unwrap();
        listener.reset_registrations().unwrap();
    }
}
