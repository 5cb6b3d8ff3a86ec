//! Safe functions over the view side of the namespace: `ApplicationView`,
//! `ApplicationViewSwitcher`, `InputPane`, `UIViewSettings`,
//! `ProjectionManager` and `ViewModePreferences`.
//!
//! The `*Async` statics return WinRT async handles; the helpers here block on
//! completion with a completed-handler adaptor and a channel, there is no
//! async runtime involved.

use std::mem::ManuallyDrop;
use std::sync::mpsc;

use windows::core::{Interface, HRESULT, HSTRING};
use windows::Win32::Foundation::HWND;

use crate::comobjects::{with_com_objects, Error, HRESULTHelpers, Result};
use crate::interfaces::*;

// Async completion adaptors. WinRT invokes these from a threadpool thread,
// the channel hands the status back to the blocked caller.

#[windows::core::implement(AsyncActionCompletedHandler)]
struct ActionCompletedAdaptor {
    sender: mpsc::Sender<AsyncStatus>,
}

impl AsyncActionCompletedHandler_Impl for ActionCompletedAdaptor {
    unsafe fn invoke(&self, _action: ComIn<IAsyncAction>, status: AsyncStatus) -> HRESULT {
        let _ = self.sender.send(status);
        HRESULT(0)
    }
}

#[windows::core::implement(AsyncOperationBooleanCompletedHandler)]
struct OperationBooleanCompletedAdaptor {
    sender: mpsc::Sender<AsyncStatus>,
}

impl AsyncOperationBooleanCompletedHandler_Impl for OperationBooleanCompletedAdaptor {
    unsafe fn invoke(
        &self,
        _operation: ComIn<IAsyncOperationBoolean>,
        status: AsyncStatus,
    ) -> HRESULT {
        let _ = self.sender.send(status);
        HRESULT(0)
    }
}

fn async_error(info: &IAsyncInfo, status: AsyncStatus) -> Error {
    let mut code = HRESULT(0);
    let res = unsafe { info.get_error_code(&mut code).as_result() };
    match res {
        Ok(()) if code.is_err() => Error::ComError(code),
        _ => Error::AsyncOperationFailed(status),
    }
}

/// Blocks until the action completes. Closes the action afterwards.
pub(crate) fn wait_for_async_action(action: IAsyncAction) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let handler: AsyncActionCompletedHandler = ActionCompletedAdaptor { sender: tx }.into();
    unsafe { action.set_completed(ComIn::new(&handler)).as_result()? };
    let status = rx.recv().map_err(|_| Error::SenderError)?;
    let info = action.cast::<IAsyncInfo>()?;
    let result = match status {
        AsyncStatus::Completed => unsafe { action.get_results().as_result() },
        other => Err(async_error(&info, other)),
    };
    unsafe {
        let _ = info.close();
    }
    result
}

/// Blocks until the operation completes and returns its boolean result.
pub(crate) fn wait_for_async_operation_bool(operation: IAsyncOperationBoolean) -> Result<bool> {
    let (tx, rx) = mpsc::channel();
    let handler: AsyncOperationBooleanCompletedHandler =
        OperationBooleanCompletedAdaptor { sender: tx }.into();
    unsafe { operation.set_completed(ComIn::new(&handler)).as_result()? };
    let status = rx.recv().map_err(|_| Error::SenderError)?;
    let info = operation.cast::<IAsyncInfo>()?;
    let result = match status {
        AsyncStatus::Completed => {
            let mut value = false;
            unsafe { operation.get_results(&mut value).as_result()? };
            Ok(value)
        }
        other => Err(async_error(&info, other)),
    };
    unsafe {
        let _ = info.close();
    }
    result
}

/// Boxed `Color` for the nullable title bar properties.
#[windows::core::implement(IReferenceColor)]
struct ColorReference {
    value: Color,
}

impl IReferenceColor_Impl for ColorReference {
    unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut windows::core::GUID,
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
            *out_opt_class_name = HSTRING::from("Windows.Foundation.IReference`1<Windows.UI.Color>");
        }
        HRESULT(0)
    }

    unsafe fn get_trust_level(&self, out_trust_level: *mut i32) -> HRESULT {
        if !out_trust_level.is_null() {
            *out_trust_level = 0; // BaseTrust
        }
        HRESULT(0)
    }

    unsafe fn get_value(&self, out_value: *mut Color) -> HRESULT {
        if out_value.is_null() {
            return HRESULT(0x80004003_u32 as i32); // E_POINTER
        }
        *out_value = self.value;
        HRESULT(0)
    }
}

pub(crate) fn boxed_color(value: Color) -> IReferenceColor {
    ColorReference { value }.into()
}

/// Borrowed in-parameter view of an optional boxed color. The caller keeps
/// its reference alive across the call, the callee only sees the pointer and
/// takes its own reference if it wants to hold on.
fn color_param(boxed: &Option<IReferenceColor>) -> Option<ManuallyDrop<IReferenceColor>> {
    boxed
        .as_ref()
        .map(|b| ManuallyDrop::new(unsafe { IReferenceColor::from_raw(b.as_raw()) }))
}

// ApplicationView interop and statics

/// View id of a top level window, the id the switcher and projection statics
/// take.
pub fn get_application_view_id_for_window(window: HWND) -> Result<i32> {
    with_com_objects(move |com| {
        let interop = com.view_interop_statics()?;
        let mut id = 0i32;
        unsafe {
            interop
                .get_application_view_id_for_window(window, &mut id)
                .as_result()?
        };
        Ok(id)
    })
}

/// Snap state of the current view (Windows 8 vocabulary, still served).
pub fn get_application_view_state() -> Result<ApplicationViewState> {
    with_com_objects(|com| {
        let statics = com.view_statics()?;
        let mut state = ApplicationViewState::default();
        unsafe { statics.get_value(&mut state).as_result()? };
        Ok(state)
    })
}

pub fn try_unsnap() -> Result<bool> {
    with_com_objects(|com| {
        let statics = com.view_statics()?;
        let mut success = false;
        unsafe { statics.try_unsnap(&mut success).as_result()? };
        Ok(success)
    })
}

pub fn try_unsnap_to_fullscreen() -> Result<bool> {
    with_com_objects(|com| {
        let statics = com.view_fullscreen_statics()?;
        let mut success = false;
        unsafe { statics.try_unsnap_to_fullscreen(&mut success).as_result()? };
        Ok(success)
    })
}

/// The `ApplicationView` of the calling thread's view. Fails outside a view
/// thread.
pub fn get_current_view() -> Result<IApplicationView> {
    with_com_objects(|com| {
        let statics = com.view_statics2()?;
        let mut view: Option<IApplicationView> = None;
        unsafe { statics.get_for_current_view(&mut view).as_result()? };
        view.ok_or(Error::ComAllocatedNullPtr)
    })
}

pub fn get_current_view_id() -> Result<i32> {
    let view = get_current_view()?;
    let mut id = 0i32;
    unsafe { view.get_id(&mut id).as_result()? };
    Ok(id)
}

pub fn get_view_title() -> Result<String> {
    let view = get_current_view()?;
    let mut title = HSTRING::default();
    unsafe { view.get_title(&mut title).as_result()? };
    Ok(title.to_string_lossy())
}

pub fn set_view_title(title: &str) -> Result<()> {
    let view = get_current_view()?;
    unsafe { view.set_title(HSTRING::from(title)).as_result() }
}

pub fn get_visible_bounds() -> Result<Rect> {
    let view = get_current_view()?.cast::<IApplicationView2>()?;
    let mut bounds = Rect::default();
    unsafe { view.get_visible_bounds(&mut bounds).as_result()? };
    Ok(bounds)
}

pub fn is_full_screen_mode() -> Result<bool> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    let mut value = false;
    unsafe { view.get_is_full_screen_mode(&mut value).as_result()? };
    Ok(value)
}

pub fn try_enter_full_screen_mode() -> Result<bool> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    let mut success = false;
    unsafe { view.try_enter_full_screen_mode(&mut success).as_result()? };
    Ok(success)
}

pub fn exit_full_screen_mode() -> Result<()> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    unsafe { view.exit_full_screen_mode().as_result() }
}

pub fn try_resize_view(size: Size) -> Result<bool> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    let mut success = false;
    unsafe { view.try_resize_view(size, &mut success).as_result()? };
    Ok(success)
}

pub fn set_preferred_min_size(size: Size) -> Result<()> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    unsafe { view.set_preferred_min_size(size).as_result() }
}

pub fn get_view_mode() -> Result<ApplicationViewMode> {
    let view = get_current_view()?.cast::<IApplicationView4>()?;
    let mut mode = ApplicationViewMode::default();
    unsafe { view.get_view_mode(&mut mode).as_result()? };
    Ok(mode)
}

pub fn is_view_mode_supported(mode: ApplicationViewMode) -> Result<bool> {
    let view = get_current_view()?.cast::<IApplicationView4>()?;
    let mut supported = false;
    unsafe { view.is_view_mode_supported(mode, &mut supported).as_result()? };
    Ok(supported)
}

/// Switches the current view into the given mode, blocking on completion.
pub fn try_enter_view_mode(mode: ApplicationViewMode) -> Result<bool> {
    let view = get_current_view()?.cast::<IApplicationView4>()?;
    let mut operation: Option<IAsyncOperationBoolean> = None;
    unsafe { view.try_enter_view_mode_async(mode, &mut operation).as_result()? };
    wait_for_async_operation_bool(operation.ok_or(Error::ComAllocatedNullPtr)?)
}

/// Like [`try_enter_view_mode`] but with explicit size preferences.
pub fn try_enter_view_mode_with_preferences(
    mode: ApplicationViewMode,
    size_preference: ViewSizePreference,
    custom_size: Option<Size>,
) -> Result<bool> {
    let preferences = create_view_mode_preferences(mode, size_preference, custom_size)?;
    let view = get_current_view()?.cast::<IApplicationView4>()?;
    let mut operation: Option<IAsyncOperationBoolean> = None;
    unsafe {
        view.try_enter_view_mode_with_preferences_async(
            mode,
            ComIn::new(&preferences),
            &mut operation,
        )
        .as_result()?
    };
    wait_for_async_operation_bool(operation.ok_or(Error::ComAllocatedNullPtr)?)
}

/// Asks the shell to consolidate (close) the current view.
pub fn try_consolidate() -> Result<bool> {
    let view = get_current_view()?.cast::<IApplicationView4>()?;
    let mut operation: Option<IAsyncOperationBoolean> = None;
    unsafe { view.try_consolidate_async(&mut operation).as_result()? };
    wait_for_async_operation_bool(operation.ok_or(Error::ComAllocatedNullPtr)?)
}

pub fn get_persisted_state_id() -> Result<String> {
    let view = get_current_view()?.cast::<IApplicationView7>()?;
    let mut id = HSTRING::default();
    unsafe { view.get_persisted_state_id(&mut id).as_result()? };
    Ok(id.to_string_lossy())
}

pub fn set_persisted_state_id(id: &str) -> Result<()> {
    let view = get_current_view()?.cast::<IApplicationView7>()?;
    unsafe { view.set_persisted_state_id(HSTRING::from(id)).as_result() }
}

pub fn get_terminate_app_on_final_view_close() -> Result<bool> {
    with_com_objects(|com| {
        let statics = com.view_statics2()?;
        let mut value = false;
        unsafe {
            statics
                .get_terminate_app_on_final_view_close(&mut value)
                .as_result()?
        };
        Ok(value)
    })
}

pub fn set_terminate_app_on_final_view_close(value: bool) -> Result<()> {
    with_com_objects(move |com| {
        let statics = com.view_statics2()?;
        unsafe { statics.set_terminate_app_on_final_view_close(value).as_result() }
    })
}

pub fn get_preferred_launch_windowing_mode() -> Result<ApplicationViewWindowingMode> {
    with_com_objects(|com| {
        let statics = com.view_statics3()?;
        let mut mode = ApplicationViewWindowingMode::default();
        unsafe { statics.get_preferred_launch_windowing_mode(&mut mode).as_result()? };
        Ok(mode)
    })
}

pub fn set_preferred_launch_windowing_mode(mode: ApplicationViewWindowingMode) -> Result<()> {
    with_com_objects(move |com| {
        let statics = com.view_statics3()?;
        unsafe { statics.set_preferred_launch_windowing_mode(mode).as_result() }
    })
}

pub fn get_preferred_launch_view_size() -> Result<Size> {
    with_com_objects(|com| {
        let statics = com.view_statics3()?;
        let mut size = Size::default();
        unsafe { statics.get_preferred_launch_view_size(&mut size).as_result()? };
        Ok(size)
    })
}

pub fn set_preferred_launch_view_size(size: Size) -> Result<()> {
    with_com_objects(move |com| {
        let statics = com.view_statics3()?;
        unsafe { statics.set_preferred_launch_view_size(size).as_result() }
    })
}

pub fn clear_all_persisted_state() -> Result<()> {
    with_com_objects(|com| {
        let statics = com.view_statics4()?;
        unsafe { statics.clear_all_persisted_state().as_result() }
    })
}

pub fn clear_persisted_state(key: &str) -> Result<()> {
    with_com_objects(move |com| {
        let statics = com.view_statics4()?;
        unsafe { statics.clear_persisted_state(HSTRING::from(key)).as_result() }
    })
}

// Title bar

/// Sets or clears the title bar background color of the current view.
pub fn set_title_bar_background_color(color: Option<Color>) -> Result<()> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    let mut title_bar: Option<IApplicationViewTitleBar> = None;
    unsafe { view.get_title_bar(&mut title_bar).as_result()? };
    let title_bar = title_bar.ok_or(Error::ComAllocatedNullPtr)?;
    let boxed = color.map(boxed_color);
    unsafe {
        title_bar
            .set_background_color(color_param(&boxed))
            .as_result()
    }
}

/// Sets or clears the title bar foreground color of the current view.
pub fn set_title_bar_foreground_color(color: Option<Color>) -> Result<()> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    let mut title_bar: Option<IApplicationViewTitleBar> = None;
    unsafe { view.get_title_bar(&mut title_bar).as_result()? };
    let title_bar = title_bar.ok_or(Error::ComAllocatedNullPtr)?;
    let boxed = color.map(boxed_color);
    unsafe {
        title_bar
            .set_foreground_color(color_param(&boxed))
            .as_result()
    }
}

/// Reads the title bar background color of the current view, `None` when
/// unset.
pub fn get_title_bar_background_color() -> Result<Option<Color>> {
    let view = get_current_view()?.cast::<IApplicationView3>()?;
    let mut title_bar: Option<IApplicationViewTitleBar> = None;
    unsafe { view.get_title_bar(&mut title_bar).as_result()? };
    let title_bar = title_bar.ok_or(Error::ComAllocatedNullPtr)?;
    let mut reference: Option<IReferenceColor> = None;
    unsafe { title_bar.get_background_color(&mut reference).as_result()? };
    match reference {
        None => Ok(None),
        Some(reference) => {
            let mut color = Color::default();
            unsafe { reference.get_value(&mut color).as_result()? };
            Ok(Some(color))
        }
    }
}

// ApplicationViewSwitcher statics

pub fn disable_showing_main_view_on_activation() -> Result<()> {
    with_com_objects(|com| {
        let statics = com.switcher_statics()?;
        unsafe { statics.disable_showing_main_view_on_activation().as_result() }
    })
}

pub fn disable_system_view_activation_policy() -> Result<()> {
    with_com_objects(|com| {
        let statics = com.switcher_statics2()?;
        unsafe { statics.disable_system_view_activation_policy().as_result() }
    })
}

/// Switches to the given view, blocking until the switch completes.
pub fn switch_to_view(view_id: i32) -> Result<()> {
    let action = with_com_objects(move |com| {
        let statics = com.switcher_statics()?;
        let mut action: Option<IAsyncAction> = None;
        unsafe { statics.switch_async(view_id, &mut action).as_result()? };
        action.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_action(action)
}

/// Switches from one view to another, blocking until the switch completes.
pub fn switch_between_views(to_view_id: i32, from_view_id: i32) -> Result<()> {
    let action = with_com_objects(move |com| {
        let statics = com.switcher_statics()?;
        let mut action: Option<IAsyncAction> = None;
        unsafe {
            statics
                .switch_from_view_async(to_view_id, from_view_id, &mut action)
                .as_result()?
        };
        action.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_action(action)
}

/// Shows a view side by side with the caller's, blocking on completion.
pub fn try_show_as_standalone(view_id: i32) -> Result<bool> {
    let operation = with_com_objects(move |com| {
        let statics = com.switcher_statics()?;
        let mut operation: Option<IAsyncOperationBoolean> = None;
        unsafe {
            statics
                .try_show_as_standalone_async(view_id, &mut operation)
                .as_result()?
        };
        operation.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_operation_bool(operation)
}

pub fn try_show_as_standalone_with_size_preference(
    view_id: i32,
    size_preference: ViewSizePreference,
) -> Result<bool> {
    let operation = with_com_objects(move |com| {
        let statics = com.switcher_statics()?;
        let mut operation: Option<IAsyncOperationBoolean> = None;
        unsafe {
            statics
                .try_show_as_standalone_with_size_preference_async(
                    view_id,
                    size_preference,
                    &mut operation,
                )
                .as_result()?
        };
        operation.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_operation_bool(operation)
}

/// Shows a view in the given mode (for example compact overlay), blocking on
/// completion.
pub fn try_show_as_view_mode(view_id: i32, mode: ApplicationViewMode) -> Result<bool> {
    let operation = with_com_objects(move |com| {
        let statics = com.switcher_statics3()?;
        let mut operation: Option<IAsyncOperationBoolean> = None;
        unsafe {
            statics
                .try_show_as_view_mode_async(view_id, mode, &mut operation)
                .as_result()?
        };
        operation.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_operation_bool(operation)
}

// ApplicationViewScaling statics

pub fn get_disable_layout_scaling() -> Result<bool> {
    with_com_objects(|com| {
        let statics = com.scaling_statics()?;
        let mut disabled = false;
        unsafe { statics.get_disable_layout_scaling(&mut disabled).as_result()? };
        Ok(disabled)
    })
}

pub fn try_set_disable_layout_scaling(disable: bool) -> Result<bool> {
    with_com_objects(move |com| {
        let statics = com.scaling_statics()?;
        let mut success = false;
        unsafe {
            statics
                .try_set_disable_layout_scaling(disable, &mut success)
                .as_result()?
        };
        Ok(success)
    })
}

// InputPane

/// The `InputPane` of the calling thread's view.
pub fn get_input_pane() -> Result<IInputPane> {
    with_com_objects(|com| {
        let statics = com.input_pane_statics()?;
        let mut pane: Option<IInputPane> = None;
        unsafe { statics.get_for_current_view(&mut pane).as_result()? };
        pane.ok_or(Error::ComAllocatedNullPtr)
    })
}

pub fn try_show_input_pane() -> Result<bool> {
    let pane = get_input_pane()?.cast::<IInputPane2>()?;
    let mut success = false;
    unsafe { pane.try_show(&mut success).as_result()? };
    Ok(success)
}

pub fn try_hide_input_pane() -> Result<bool> {
    let pane = get_input_pane()?.cast::<IInputPane2>()?;
    let mut success = false;
    unsafe { pane.try_hide(&mut success).as_result()? };
    Ok(success)
}

/// Screen area currently covered by the input pane; a zero rect when hidden.
pub fn get_input_pane_occluded_rect() -> Result<Rect> {
    let pane = get_input_pane()?;
    let mut rect = Rect::default();
    unsafe { pane.get_occluded_rect(&mut rect).as_result()? };
    Ok(rect)
}

// UIViewSettings

pub fn get_user_interaction_mode() -> Result<UserInteractionMode> {
    with_com_objects(|com| {
        let statics = com.ui_view_settings_statics()?;
        let mut settings: Option<IUIViewSettings> = None;
        unsafe { statics.get_for_current_view(&mut settings).as_result()? };
        let settings = settings.ok_or(Error::ComAllocatedNullPtr)?;
        let mut mode = UserInteractionMode::default();
        unsafe { settings.get_user_interaction_mode(&mut mode).as_result()? };
        Ok(mode)
    })
}

// ProjectionManager statics

pub fn is_projection_display_available() -> Result<bool> {
    with_com_objects(|com| {
        let statics = com.projection_statics()?;
        let mut available = false;
        unsafe {
            statics
                .get_projection_display_available(&mut available)
                .as_result()?
        };
        Ok(available)
    })
}

/// Starts projecting a view on the secondary display, blocking on completion.
pub fn start_projecting(projection_view_id: i32, anchor_view_id: i32) -> Result<()> {
    let action = with_com_objects(move |com| {
        let statics = com.projection_statics()?;
        let mut action: Option<IAsyncAction> = None;
        unsafe {
            statics
                .start_projecting_async(projection_view_id, anchor_view_id, &mut action)
                .as_result()?
        };
        action.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_action(action)
}

pub fn stop_projecting(projection_view_id: i32, anchor_view_id: i32) -> Result<()> {
    let action = with_com_objects(move |com| {
        let statics = com.projection_statics()?;
        let mut action: Option<IAsyncAction> = None;
        unsafe {
            statics
                .stop_projecting_async(projection_view_id, anchor_view_id, &mut action)
                .as_result()?
        };
        action.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_action(action)
}

pub fn swap_projected_displays(projection_view_id: i32, anchor_view_id: i32) -> Result<()> {
    let action = with_com_objects(move |com| {
        let statics = com.projection_statics()?;
        let mut action: Option<IAsyncAction> = None;
        unsafe {
            statics
                .swap_displays_for_views_async(projection_view_id, anchor_view_id, &mut action)
                .as_result()?
        };
        action.ok_or(Error::ComAllocatedNullPtr)
    })?;
    wait_for_async_action(action)
}

/// AQS selector for second screen devices, for device enumeration.
pub fn get_projection_device_selector() -> Result<String> {
    with_com_objects(|com| {
        let statics = com.projection_statics2()?;
        let mut selector = HSTRING::default();
        unsafe { statics.get_device_selector(&mut selector).as_result()? };
        Ok(selector.to_string_lossy())
    })
}

// ApplicationViewTransferContext statics

/// DataPackage format id used to hand a view over between apps.
pub fn get_view_transfer_data_package_format_id() -> Result<String> {
    with_com_objects(|com| {
        let statics = com.transfer_context_statics()?;
        let mut format_id = HSTRING::default();
        unsafe { statics.get_data_package_format_id(&mut format_id).as_result()? };
        Ok(format_id.to_string_lossy())
    })
}

// ViewModePreferences

/// Builds a `ViewModePreferences` starting from the platform defaults for the
/// given mode.
pub fn create_view_mode_preferences(
    mode: ApplicationViewMode,
    size_preference: ViewSizePreference,
    custom_size: Option<Size>,
) -> Result<IViewModePreferences> {
    with_com_objects(move |com| {
        let statics = com.view_mode_preferences_statics()?;
        let mut preferences: Option<IViewModePreferences> = None;
        unsafe { statics.create_default(mode, &mut preferences).as_result()? };
        let preferences = preferences.ok_or(Error::ComAllocatedNullPtr)?;
        unsafe {
            preferences.set_view_size_preference(size_preference).as_result()?;
            if let Some(size) = custom_size {
                preferences.set_custom_size(size).as_result()?;
            }
        }
        Ok(preferences)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_color_round_trips() {
        let color = Color {
            a: 255,
            r: 12,
            g: 34,
            b: 56,
        };
        let reference = boxed_color(color);
        let mut read_back = Color::default();
        let hr = unsafe { reference.get_value(&mut read_back) };
        assert!(hr.is_ok());
        assert_eq!(read_back, color);
    }

    #[test]
    fn boxed_color_rejects_null_out_param() {
        let reference = boxed_color(Color::default());
        let hr = unsafe { reference.get_value(std::ptr::null_mut()) };
        assert!(hr.is_err());
    }

    #[test]
    fn boxed_color_reports_class_name() {
        let reference = boxed_color(Color::default());
        let mut name = HSTRING::default();
        let hr = unsafe { reference.get_runtime_class_name(&mut name) };
        assert!(hr.is_ok());
        assert!(name.to_string_lossy().contains("Windows.UI.Color"));
    }

    #[windows::core::implement(IReferenceColor)]
    struct DropFlagColor {
        alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
    }

    impl Drop for DropFlagColor {
        fn drop(&mut self) {
            self.alive.store(false, std::sync::atomic::Ordering::SeqCst);
        }
    }

    impl IReferenceColor_Impl for DropFlagColor {
        unsafe fn get_iids(
            &self,
            out_iid_count: *mut u32,
            out_opt_iid_array_ptr: *mut *mut windows::core::GUID,
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

        unsafe fn get_value(&self, out_value: *mut Color) -> HRESULT {
            if out_value.is_null() {
                return HRESULT(0x80070057u32 as i32);
            }
            *out_value = Color::default();
            HRESULT(0)
        }
    }

    #[test]
    fn title_bar_color_params_do_not_leak_the_boxed_color() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let alive = Arc::new(AtomicBool::new(true));
        let boxed: Option<IReferenceColor> = Some(
            DropFlagColor {
                alive: alive.clone(),
            }
            .into(),
        );

        let param = color_param(&boxed);
        assert!(param.is_some());
        // The borrowed view going away must not release the owner's
        // reference.
        drop(param);
        assert!(alive.load(Ordering::SeqCst));

        // The owner's drop is the one and only release.
        drop(boxed);
        assert!(!alive.load(Ordering::SeqCst));
    }

    #[test]
    fn color_param_passes_none_through() {
        assert!(color_param(&None).is_none());
    }

    #[cfg(feature = "integration-tests")]
    mod live {
        use super::*;
        use once_cell::sync::Lazy;
        use std::sync::Mutex;

        static SERIAL: Lazy<Mutex<()>> = Lazy::new(Default::default);

        #[test]
        fn transfer_context_format_id_is_stable() {
            let _guard = SERIAL.lock().unwrap();
            let id = get_view_transfer_data_package_format_id().unwrap();
            assert!(!id.is_empty());
        }

        #[test]
        fn projection_display_availability_reads() {
            let _guard = SERIAL.lock().unwrap();
            // Value depends on hardware, the call itself must succeed.
            is_projection_display_available().unwrap();
        }

        #[test]
        fn view_statics_work_without_a_view() {
            let _guard = SERIAL.lock().unwrap();
            // These statics don't need a CoreWindow on the calling thread.
            get_preferred_launch_windowing_mode().unwrap();
            let selector = get_projection_device_selector().unwrap();
            assert!(!selector.is_empty());
        }
    }
}
