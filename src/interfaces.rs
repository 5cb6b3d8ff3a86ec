//! Interface definitions for the `Windows.UI.ViewManagement` WinRT namespace
//!
//! These are hand-transcribed from the platform metadata. Methods are listed
//! in vtable order; getting the order wrong silently calls the wrong slot, so
//! don't reorder anything here.
//!
//! Parameter conventions used throughout:
//! 1. InOpt = `Option<ManuallyDrop<IMyObject>>`
//! 2. In = `ComIn<IMyObject>`
//! 3. Out = `*mut Option<IMyObject>`
//! 4. OutOpt = `*mut Option<IMyObject>`
//!
//! Last two are same intentionally.
//!
//! ## The summary of COM object lifetime rules:
//!
//! > 1. When a COM object is passed from caller to callee as an input parameter
//! >    to a method, the caller is expected to keep a reference on the object
//! >    for the duration of the method call. The callee shouldn't need to call
//! >    `AddRef` or `Release` for the synchronous duration of that method call.
//! >
//! > 2. When a COM object is passed from callee to caller as an out parameter
//! >    from a method the object is provided to the caller with a reference
//! >    already taken and the caller owns the reference. Which is to say, it is
//! >    the caller's responsibility to call `Release` when they're done with
//! >    the object.
//! >
//! > 3. When making a copy of a COM object pointer you need to call `AddRef`
//! >    and `Release`. The `AddRef` must be called before you call `Release` on
//! >    the original COM object pointer.
//!
//! Rules as [written by David
//! Risney](https://github.com/MicrosoftEdge/WebView2Feedback/issues/2133).
//!
//! If you read the rules carefully, ComIn is most common usecase in Rust API
//! definitions as most parameters are `In` parameters.
//!
//! Unlike plain COM, every interface below derives from `IInspectable`, so the
//! three inspectable methods occupy the first vtable slots after `IUnknown`.
//! Types from neighbouring namespaces (`WindowingEnvironment`, `UIContext`,
//! collection views) are projected as plain `IInspectable` handles.
#![allow(non_upper_case_globals, clippy::upper_case_acronyms)]

use std::ffi::c_void;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use windows::{
    core::{IInspectable, IUnknown, IUnknown_Vtbl, Interface, GUID, HRESULT, HSTRING},
    Win32::Foundation::HWND,
};

/// ComIn is a wrapper for COM objects that are passed as input parameters. It
/// allows to keep the life of the COM object for the duration of the function
/// call.
///
/// Imagine following situation:
///
/// First you call an API function that gives COM object as out parameter. And
/// you want to pass it to another function that takes the COM object as an
/// input parameter. If you were to use ManuallyDrop then you'd have to call the
/// drop manually after the second function call.
///
/// E.g.
///
/// ```ignore
/// fn get_completed(&self, out_handler: *mut Option<AsyncActionCompletedHandler>) -> HRESULT;
/// fn set_completed(&self, handler: ComIn<AsyncActionCompletedHandler>) -> HRESULT;
///
/// let mut handler: Option<AsyncActionCompletedHandler> = None;
/// get_completed(&mut handler);
/// if let Some(handler) = handler {
///     set_completed(ComIn::new(&handler));
/// }
/// ```
///
/// ComIn copies the raw pointer without touching the reference count, which is
/// exactly what rule 1 of the lifetime rules asks for.
#[repr(transparent)]
pub struct ComIn<'a, T: Interface> {
    data: *mut c_void,
    _phantom: std::marker::PhantomData<&'a T>,
}

impl<'a, T: Interface> ComIn<'a, T> {
    pub fn new(t: &'a T) -> Self {
        Self {
            // Copies the raw Interface pointer
            data: t.as_raw(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<'a, T: Interface> Deref for ComIn<'a, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        // Safety: An Interface type `T` is just a transparent type over a raw pointer
        unsafe { &*(&self.data as *const *mut c_void as *const T) }
    }
}

// Activatable runtime class names of the namespace. Instances come from
// RoActivateInstance, statics from RoGetActivationFactory.

pub const RuntimeClass_UISettings: &str = "Windows.UI.ViewManagement.UISettings";
pub const RuntimeClass_AccessibilitySettings: &str =
    "Windows.UI.ViewManagement.AccessibilitySettings";
pub const RuntimeClass_ApplicationView: &str = "Windows.UI.ViewManagement.ApplicationView";
pub const RuntimeClass_ApplicationViewScaling: &str =
    "Windows.UI.ViewManagement.ApplicationViewScaling";
pub const RuntimeClass_ApplicationViewSwitcher: &str =
    "Windows.UI.ViewManagement.ApplicationViewSwitcher";
pub const RuntimeClass_ApplicationViewTransferContext: &str =
    "Windows.UI.ViewManagement.ApplicationViewTransferContext";
pub const RuntimeClass_InputPane: &str = "Windows.UI.ViewManagement.InputPane";
pub const RuntimeClass_ProjectionManager: &str = "Windows.UI.ViewManagement.ProjectionManager";
pub const RuntimeClass_UIViewSettings: &str = "Windows.UI.ViewManagement.UIViewSettings";
pub const RuntimeClass_ViewModePreferences: &str =
    "Windows.UI.ViewManagement.ViewModePreferences";

type TrustLevel = i32;

// Blittable value types carried by the ABI, field for field the
// Windows.Foundation / Windows.UI layouts.

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventRegistrationToken {
    pub value: i64,
}

// Namespace enums, transcribed as transparent i32 newtypes so unknown values
// coming over the ABI stay representable.

macro_rules! abi_enum {
    ($(#[$attr:meta])* $name:ident { $($variant:ident = $value:expr,)+ }) => {
        $(#[$attr])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name(pub i32);
        #[allow(non_upper_case_globals)]
        impl $name {
            $(pub const $variant: Self = Self($value);)+
        }
    };
}

abi_enum!(ApplicationViewState {
    FullScreenLandscape = 0,
    Filled = 1,
    Snapped = 2,
    FullScreenPortrait = 3,
});

abi_enum!(ApplicationViewOrientation {
    Landscape = 0,
    Portrait = 1,
});

abi_enum!(ApplicationViewBoundsMode {
    UseVisible = 0,
    UseCoreWindow = 1,
});

abi_enum!(ApplicationViewMode {
    Default = 0,
    CompactOverlay = 1,
});

abi_enum!(ApplicationViewWindowingMode {
    Auto = 0,
    PreferredLaunchViewSize = 1,
    FullScreen = 2,
    CompactOverlay = 3,
    Maximized = 4,
});

abi_enum!(FullScreenSystemOverlayMode {
    Standard = 0,
    Minimal = 1,
});

abi_enum!(HandPreference {
    LeftHanded = 0,
    RightHanded = 1,
});

abi_enum!(UIColorType {
    Background = 0,
    Foreground = 1,
    AccentDark3 = 2,
    AccentDark2 = 3,
    AccentDark1 = 4,
    Accent = 5,
    AccentLight1 = 6,
    AccentLight2 = 7,
    AccentLight3 = 8,
    Complement = 9,
});

abi_enum!(UIElementType {
    ActiveCaption = 0,
    Background = 1,
    ButtonFace = 2,
    ButtonText = 3,
    CaptionText = 4,
    GrayText = 5,
    Highlight = 6,
    HighlightText = 7,
    Hotlight = 8,
    InactiveCaption = 9,
    InactiveCaptionText = 10,
    Window = 11,
    WindowText = 12,
    AccentColor = 1000,
    TextHigh = 1001,
    TextMedium = 1002,
    TextLow = 1003,
    TextContrastWithHigh = 1004,
    NonTextHigh = 1005,
    NonTextMediumHigh = 1006,
    NonTextMedium = 1007,
    NonTextMediumLow = 1008,
    NonTextLow = 1009,
    PageBackground = 1010,
    PopupBackground = 1011,
    OverlayOutsidePopup = 1012,
});

abi_enum!(UserInteractionMode {
    Mouse = 0,
    Touch = 1,
});

abi_enum!(ViewSizePreference {
    Default = 0,
    UseLess = 1,
    UseHalf = 2,
    UseMore = 3,
    UseMinimum = 4,
    UseNone = 5,
    Custom = 6,
});

abi_enum!(AsyncStatus {
    Started = 0,
    Completed = 1,
    Canceled = 2,
    Error = 3,
});

// Foundation plumbing: the activation factory entry point, the async
// vocabulary the statics interfaces hand out, and boxed Color references for
// the title bar properties.

#[windows_interface::interface("00000035-0000-0000-C000-000000000046")]
pub unsafe trait IActivationFactory: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn activate_instance(&self, out_instance: *mut Option<IInspectable>) -> HRESULT;
}

#[windows_interface::interface("00000036-0000-0000-C000-000000000046")]
pub unsafe trait IAsyncInfo: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_id(&self, out_id: *mut u32) -> HRESULT;
    pub unsafe fn get_status(&self, out_status: *mut AsyncStatus) -> HRESULT;
    pub unsafe fn get_error_code(&self, out_error_code: *mut HRESULT) -> HRESULT;
    pub unsafe fn cancel(&self) -> HRESULT;
    pub unsafe fn close(&self) -> HRESULT;
}

#[windows_interface::interface("5A648006-843A-4DA9-865B-9D26E5DFAD7B")]
pub unsafe trait IAsyncAction: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn set_completed(&self, handler: ComIn<AsyncActionCompletedHandler>) -> HRESULT;
    pub unsafe fn get_completed(
        &self,
        out_handler: *mut Option<AsyncActionCompletedHandler>,
    ) -> HRESULT;
    pub unsafe fn get_results(&self) -> HRESULT;
}

#[windows_interface::interface("A4ED5C81-76C9-40BD-8BE6-B1D90FB20AE7")]
pub unsafe trait AsyncActionCompletedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        async_action: ComIn<IAsyncAction>,
        status: AsyncStatus,
    ) -> HRESULT;
}

/// `IAsyncOperation<Boolean>`, the only parameterized async operation this
/// namespace hands out.
#[windows_interface::interface("CDB5EFB3-5788-509D-9BE1-71CCB8A3362A")]
pub unsafe trait IAsyncOperationBoolean: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn set_completed(
        &self,
        handler: ComIn<AsyncOperationBooleanCompletedHandler>,
    ) -> HRESULT;
    pub unsafe fn get_completed(
        &self,
        out_handler: *mut Option<AsyncOperationBooleanCompletedHandler>,
    ) -> HRESULT;
    pub unsafe fn get_results(&self, out_result: *mut bool) -> HRESULT;
}

#[windows_interface::interface("C1D3D1A2-AE17-5A5F-B5A2-BDCC8844889A")]
pub unsafe trait AsyncOperationBooleanCompletedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        async_operation: ComIn<IAsyncOperationBoolean>,
        status: AsyncStatus,
    ) -> HRESULT;
}

/// `IReference<Color>`: the nullable boxed Color the title bar properties
/// traffic in. Reading a property gives `None` when the color is unset.
#[windows_interface::interface("AB8E5D11-B0C1-5A21-95AE-F16BF3A37624")]
pub unsafe trait IReferenceColor: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_value(&self, out_value: *mut Color) -> HRESULT;
}

// Per-event delegate interfaces. Each `TypedEventHandler<TSender, TResult>`
// instantiation is its own interface identity. Parameterized IIDs are not
// assigned in metadata, they are the RFC 4122 v5 hash of the WinRT signature
// string under the pinterface namespace GUID; `catalog::GENERIC_INSTANCES`
// records the signatures and the tests re-derive every IID from them.

/// `TypedEventHandler<UISettings, Object>`: ColorValuesChanged,
/// TextScaleFactorChanged and AdvancedEffectsEnabledChanged all use this.
#[windows_interface::interface("2DBDBA9D-20DA-519D-9078-09F835BC5BC7")]
pub unsafe trait UISettingsChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        args: ComIn<IInspectable>,
    ) -> HRESULT;
}

/// `TypedEventHandler<UISettings, UISettingsAutoHideScrollBarsChangedEventArgs>`
#[windows_interface::interface("808AEF30-2660-51B0-9C11-F75DD42006B4")]
pub unsafe trait UISettingsAutoHideScrollBarsChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        args: ComIn<IUISettingsAutoHideScrollBarsChangedEventArgs>,
    ) -> HRESULT;
}

/// `TypedEventHandler<UISettings, UISettingsAnimationsEnabledChangedEventArgs>`
#[windows_interface::interface("BD646E74-E441-54FB-88A2-CBDA24BF09F4")]
pub unsafe trait UISettingsAnimationsEnabledChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        args: ComIn<IUISettingsAnimationsEnabledChangedEventArgs>,
    ) -> HRESULT;
}

/// `TypedEventHandler<UISettings, UISettingsMessageDurationChangedEventArgs>`
#[windows_interface::interface("7B96752B-1B0F-5279-AA0A-20C4A39BD7B7")]
pub unsafe trait UISettingsMessageDurationChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IUISettings>,
        args: ComIn<IUISettingsMessageDurationChangedEventArgs>,
    ) -> HRESULT;
}

/// `TypedEventHandler<AccessibilitySettings, Object>`: HighContrastChanged.
#[windows_interface::interface("F5917E6F-5ABF-5E65-B5B4-1B9C8D94E788")]
pub unsafe trait AccessibilitySettingsChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IAccessibilitySettings>,
        args: ComIn<IInspectable>,
    ) -> HRESULT;
}

/// `TypedEventHandler<ApplicationView, ApplicationViewConsolidatedEventArgs>`
#[windows_interface::interface("463C606A-8C82-5A29-A2BD-040781F25348")]
pub unsafe trait ViewConsolidatedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IApplicationView>,
        args: ComIn<IApplicationViewConsolidatedEventArgs>,
    ) -> HRESULT;
}

/// `TypedEventHandler<ApplicationView, Object>`: VisibleBoundsChanged.
#[windows_interface::interface("00C1F983-C836-565C-8BBF-7053055BDB4C")]
pub unsafe trait ViewVisibleBoundsChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IApplicationView>,
        args: ComIn<IInspectable>,
    ) -> HRESULT;
}

/// `TypedEventHandler<InputPane, InputPaneVisibilityEventArgs>`: Showing and
/// Hiding.
#[windows_interface::interface("B813D684-D953-5A8A-9B30-78B79FB9147B")]
pub unsafe trait InputPaneVisibilityHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IInputPane>,
        args: ComIn<IInputPaneVisibilityEventArgs>,
    ) -> HRESULT;
}

/// `EventHandler<Object>`: ProjectionDisplayAvailableChanged.
#[windows_interface::interface("C50898F6-C536-5F47-8583-8B2C2438A13B")]
pub unsafe trait ProjectionDisplayAvailableChangedHandler: IUnknown {
    pub unsafe fn invoke(
        &self,
        sender: ComIn<IInspectable>,
        args: ComIn<IInspectable>,
    ) -> HRESULT;
}

// The interface catalog itself, one declaration per metadata interface.

#[windows_interface::interface("FE0E8147-C4C0-4562-B962-1327B52AD5B9")]
pub unsafe trait IAccessibilitySettings: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_high_contrast(&self, out_enabled: *mut bool) -> HRESULT;
    pub unsafe fn get_high_contrast_scheme(&self, out_scheme: *mut HSTRING) -> HRESULT;
    pub unsafe fn add_high_contrast_changed(
        &self,
        handler: ComIn<AccessibilitySettingsChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_high_contrast_changed(&self, token: EventRegistrationToken) -> HRESULT;
}

#[windows_interface::interface("77324A27-BC68-4C47-90DA-E11D5C6F2C89")]
pub unsafe trait IActivationViewSwitcher: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn show_as_standalone_async(
        &self,
        view_id: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn show_as_standalone_with_size_preference_async(
        &self,
        view_id: i32,
        size_preference: ViewSizePreference,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn get_is_view_presented_on_activation_virtual_desktop(
        &self,
        out_value: *mut bool,
    ) -> HRESULT;
}

#[windows_interface::interface("D222D519-4361-451E-96C4-60F4F9742DB0")]
pub unsafe trait IApplicationView: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_orientation(
        &self,
        out_orientation: *mut ApplicationViewOrientation,
    ) -> HRESULT;
    pub unsafe fn get_adjacent_to_left_display_edge(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn get_adjacent_to_right_display_edge(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn get_is_full_screen(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn get_is_on_lock_screen(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn get_is_screen_capture_enabled(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn set_is_screen_capture_enabled(&self, value: bool) -> HRESULT;
    pub unsafe fn set_title(&self, value: HSTRING) -> HRESULT;
    pub unsafe fn get_title(&self, out_value: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_id(&self, out_id: *mut i32) -> HRESULT;
    pub unsafe fn add_consolidated(
        &self,
        handler: ComIn<ViewConsolidatedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_consolidated(&self, token: EventRegistrationToken) -> HRESULT;
}

#[windows_interface::interface("E876B196-A545-40DC-B594-450CBA68CC00")]
pub unsafe trait IApplicationView2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_suppress_system_overlays(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn set_suppress_system_overlays(&self, value: bool) -> HRESULT;
    pub unsafe fn get_visible_bounds(&self, out_bounds: *mut Rect) -> HRESULT;
    pub unsafe fn add_visible_bounds_changed(
        &self,
        handler: ComIn<ViewVisibleBoundsChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_visible_bounds_changed(&self, token: EventRegistrationToken) -> HRESULT;
    pub unsafe fn set_desired_bounds_mode(
        &self,
        bounds_mode: ApplicationViewBoundsMode,
        out_success: *mut bool,
    ) -> HRESULT;
    pub unsafe fn get_desired_bounds_mode(
        &self,
        out_bounds_mode: *mut ApplicationViewBoundsMode,
    ) -> HRESULT;
}

#[windows_interface::interface("903C9CE5-793A-4FDF-A2B2-AF1AC21E3108")]
pub unsafe trait IApplicationView3: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_title_bar(
        &self,
        out_title_bar: *mut Option<IApplicationViewTitleBar>,
    ) -> HRESULT;
    pub unsafe fn get_full_screen_system_overlay_mode(
        &self,
        out_mode: *mut FullScreenSystemOverlayMode,
    ) -> HRESULT;
    pub unsafe fn set_full_screen_system_overlay_mode(
        &self,
        mode: FullScreenSystemOverlayMode,
    ) -> HRESULT;
    pub unsafe fn get_is_full_screen_mode(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn try_enter_full_screen_mode(&self, out_success: *mut bool) -> HRESULT;
    pub unsafe fn exit_full_screen_mode(&self) -> HRESULT;
    pub unsafe fn show_standard_system_overlays(&self) -> HRESULT;
    pub unsafe fn try_resize_view(&self, value: Size, out_success: *mut bool) -> HRESULT;
    pub unsafe fn set_preferred_min_size(&self, min_size: Size) -> HRESULT;
}

#[windows_interface::interface("15E5CBEE-134C-4BE0-8361-36A1F3A7F99F")]
pub unsafe trait IApplicationView4: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_view_mode(&self, out_mode: *mut ApplicationViewMode) -> HRESULT;
    pub unsafe fn is_view_mode_supported(
        &self,
        view_mode: ApplicationViewMode,
        out_supported: *mut bool,
    ) -> HRESULT;
    pub unsafe fn try_enter_view_mode_async(
        &self,
        view_mode: ApplicationViewMode,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn try_enter_view_mode_with_preferences_async(
        &self,
        view_mode: ApplicationViewMode,
        view_mode_preferences: ComIn<IViewModePreferences>,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn try_consolidate_async(
        &self,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
}

#[windows_interface::interface("4066F1E6-6B4C-5D44-8E13-26F2B93F16A2")]
pub unsafe trait IApplicationView7: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_persisted_state_id(&self, out_value: *mut HSTRING) -> HRESULT;
    pub unsafe fn set_persisted_state_id(&self, value: HSTRING) -> HRESULT;
}

#[windows_interface::interface("9B441EA2-F1E5-5E52-8D70-7C57A3F0C0C6")]
pub unsafe trait IApplicationView9: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // WindowingEnvironment and DisplayRegion live in
    // Windows.UI.WindowManagement, outside this projection.
    pub unsafe fn get_windowing_environment(
        &self,
        out_environment: *mut Option<IInspectable>,
    ) -> HRESULT;
    pub unsafe fn get_display_regions(&self, out_regions: *mut Option<IInspectable>) -> HRESULT;
}

#[windows_interface::interface("514449EC-7EA2-4DE7-A6A6-7DFBAAEBB6FB")]
pub unsafe trait IApplicationViewConsolidatedEventArgs: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_is_user_initiated(&self, out_value: *mut bool) -> HRESULT;
}

#[windows_interface::interface("1F42F916-6A26-4B23-931F-9CBE3FC80E95")]
pub unsafe trait IApplicationViewConsolidatedEventArgs2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_is_app_initiated(&self, out_value: *mut bool) -> HRESULT;
}

#[windows_interface::interface("BF6F23CB-39D7-42E1-9D3E-262B71E80FE1")]
pub unsafe trait IApplicationViewFullscreenStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn try_unsnap_to_fullscreen(&self, out_success: *mut bool) -> HRESULT;
}

#[windows_interface::interface("C446FB5D-4793-4896-979E-A7CB9BBD8EB7")]
pub unsafe trait IApplicationViewInteropStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_application_view_id_for_window(
        &self,
        window: HWND,
        out_id: *mut i32,
    ) -> HRESULT;
}

#[windows_interface::interface("1BCE4D71-7B5A-4436-9AC0-F362DF9D9AA5")]
pub unsafe trait IApplicationViewScaling: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // Marker interface, no members past IInspectable.
}

#[windows_interface::interface("706AB30F-1CBF-4BD1-8BBC-2DDF4A6E3D32")]
pub unsafe trait IApplicationViewScalingStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_disable_layout_scaling(&self, out_disabled: *mut bool) -> HRESULT;
    pub unsafe fn try_set_disable_layout_scaling(
        &self,
        disable_layout_scaling: bool,
        out_success: *mut bool,
    ) -> HRESULT;
}

#[windows_interface::interface("016C0286-0B84-4110-A30E-C1D696442365")]
pub unsafe trait IApplicationViewStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_value(&self, out_state: *mut ApplicationViewState) -> HRESULT;
    pub unsafe fn try_unsnap(&self, out_success: *mut bool) -> HRESULT;
}

#[windows_interface::interface("AF338ECF-9C26-4CC8-A14E-4F2AD9E61B28")]
pub unsafe trait IApplicationViewStatics2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_for_current_view(&self, out_view: *mut Option<IApplicationView>)
        -> HRESULT;
    pub unsafe fn get_terminate_app_on_final_view_close(&self, out_value: *mut bool) -> HRESULT;
    pub unsafe fn set_terminate_app_on_final_view_close(&self, value: bool) -> HRESULT;
}

#[windows_interface::interface("F5F0E1F3-5E77-487C-AFF1-BE54F47BFFA9")]
pub unsafe trait IApplicationViewStatics3: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_preferred_launch_windowing_mode(
        &self,
        out_mode: *mut ApplicationViewWindowingMode,
    ) -> HRESULT;
    pub unsafe fn set_preferred_launch_windowing_mode(
        &self,
        mode: ApplicationViewWindowingMode,
    ) -> HRESULT;
    pub unsafe fn get_preferred_launch_view_size(&self, out_size: *mut Size) -> HRESULT;
    pub unsafe fn set_preferred_launch_view_size(&self, size: Size) -> HRESULT;
}

#[windows_interface::interface("08D12E10-1F15-4E38-8E7F-E4D23BBA2FEA")]
pub unsafe trait IApplicationViewStatics4: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn clear_all_persisted_state(&self) -> HRESULT;
    pub unsafe fn clear_persisted_state(&self, key: HSTRING) -> HRESULT;
}

#[windows_interface::interface("15CAF6C9-D16E-4A96-B1E5-E393BCD0D828")]
pub unsafe trait IApplicationViewSwitcherStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn disable_showing_main_view_on_activation(&self) -> HRESULT;
    pub unsafe fn try_show_as_standalone_async(
        &self,
        view_id: i32,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn try_show_as_standalone_with_size_preference_async(
        &self,
        view_id: i32,
        size_preference: ViewSizePreference,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn try_show_as_standalone_with_anchor_view_and_size_preference_async(
        &self,
        view_id: i32,
        size_preference: ViewSizePreference,
        anchor_view_id: i32,
        anchor_size_preference: ViewSizePreference,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn switch_async(
        &self,
        view_id: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn switch_from_view_async(
        &self,
        to_view_id: i32,
        from_view_id: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn switch_async_with_options(
        &self,
        to_view_id: i32,
        from_view_id: i32,
        options: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn prepare_for_custom_animated_switch_async(
        &self,
        to_view_id: i32,
        from_view_id: i32,
        options: i32,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
}

#[windows_interface::interface("60E4EBED-D439-4354-8914-34BFD4A5AB9A")]
pub unsafe trait IApplicationViewSwitcherStatics2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn disable_system_view_activation_policy(&self) -> HRESULT;
}

#[windows_interface::interface("2EE314D2-B7C1-4A27-97E0-9A2E412A61C5")]
pub unsafe trait IApplicationViewSwitcherStatics3: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn try_show_as_view_mode_async(
        &self,
        view_id: i32,
        view_mode: ApplicationViewMode,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn try_show_as_view_mode_with_preferences_async(
        &self,
        view_id: i32,
        view_mode: ApplicationViewMode,
        view_mode_preferences: ComIn<IViewModePreferences>,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
}

#[windows_interface::interface("00924AC0-932B-4A6B-9C4B-DC38C82478CE")]
pub unsafe trait IApplicationViewTitleBar: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // All colors are IReference<Color>, null when unset. Setting null reverts
    // to the system color.
    pub unsafe fn set_foreground_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_foreground_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_background_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_background_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_foreground_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_foreground_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_background_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_background_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_hover_foreground_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_hover_foreground_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_hover_background_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_hover_background_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_pressed_foreground_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_pressed_foreground_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_pressed_background_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_pressed_background_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_inactive_foreground_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_inactive_foreground_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_inactive_background_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_inactive_background_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_inactive_foreground_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_inactive_foreground_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
    pub unsafe fn set_button_inactive_background_color(
        &self,
        value: Option<ManuallyDrop<IReferenceColor>>,
    ) -> HRESULT;
    pub unsafe fn get_button_inactive_background_color(
        &self,
        out_value: *mut Option<IReferenceColor>,
    ) -> HRESULT;
}

#[windows_interface::interface("8574BC63-3C17-408E-9408-8A1A9EA81BFA")]
pub unsafe trait IApplicationViewTransferContext: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_view_id(&self, out_id: *mut i32) -> HRESULT;
    pub unsafe fn set_view_id(&self, id: i32) -> HRESULT;
}

#[windows_interface::interface("C58F1364-8AF0-4CB6-A7D5-1EBE2EEDAC4D")]
pub unsafe trait IApplicationViewTransferContextStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_data_package_format_id(&self, out_format_id: *mut HSTRING) -> HRESULT;
}

#[windows_interface::interface("A5DD0F03-4B4A-5D74-B2A8-6B41E42F7D19")]
pub unsafe trait IApplicationViewWithContext: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // UIContext lives in Windows.UI, outside this projection.
    pub unsafe fn get_ui_context(&self, out_context: *mut Option<IInspectable>) -> HRESULT;
}

#[windows_interface::interface("640ADA70-06F3-4C87-A678-9829C9127C28")]
pub unsafe trait IInputPane: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn add_showing(
        &self,
        handler: ComIn<InputPaneVisibilityHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_showing(&self, token: EventRegistrationToken) -> HRESULT;
    pub unsafe fn add_hiding(
        &self,
        handler: ComIn<InputPaneVisibilityHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_hiding(&self, token: EventRegistrationToken) -> HRESULT;
    pub unsafe fn get_occluded_rect(&self, out_rect: *mut Rect) -> HRESULT;
}

#[windows_interface::interface("8A6B3F26-7090-4793-944C-C3F2CDE26276")]
pub unsafe trait IInputPane2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn try_show(&self, out_success: *mut bool) -> HRESULT;
    pub unsafe fn try_hide(&self, out_success: *mut bool) -> HRESULT;
}

#[windows_interface::interface("088BB24F-962F-489D-AA6E-C6BE1A0A6E52")]
pub unsafe trait IInputPaneControl: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_visible(&self, out_visible: *mut bool) -> HRESULT;
    pub unsafe fn set_visible(&self, visible: bool) -> HRESULT;
}

#[windows_interface::interface("95F4AF3A-EF47-424A-9741-FD2815EBA2BD")]
pub unsafe trait IInputPaneStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_for_current_view(&self, out_pane: *mut Option<IInputPane>) -> HRESULT;
}

#[windows_interface::interface("1A0C72B3-244A-41D6-9BAD-F6F6A76BE018")]
pub unsafe trait IInputPaneStatics2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_for_ui_context(
        &self,
        context: ComIn<IInspectable>,
        out_pane: *mut Option<IInputPane>,
    ) -> HRESULT;
}

#[windows_interface::interface("D243E016-D907-4FCC-BB8D-F77BAA5028F1")]
pub unsafe trait IInputPaneVisibilityEventArgs: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_occluded_rect(&self, out_rect: *mut Rect) -> HRESULT;
    pub unsafe fn set_ensured_focused_element_in_view(&self, value: bool) -> HRESULT;
    pub unsafe fn get_ensured_focused_element_in_view(&self, out_value: *mut bool) -> HRESULT;
}

#[windows_interface::interface("B65F913D-E2F0-4FFD-BA56-BA196E2D7A1A")]
pub unsafe trait IProjectionManagerStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn start_projecting_async(
        &self,
        projection_view_id: i32,
        anchor_view_id: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn swap_displays_for_views_async(
        &self,
        projection_view_id: i32,
        anchor_view_id: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn stop_projecting_async(
        &self,
        projection_view_id: i32,
        anchor_view_id: i32,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn get_projection_display_available(&self, out_available: *mut bool) -> HRESULT;
    pub unsafe fn add_projection_display_available_changed(
        &self,
        handler: ComIn<ProjectionDisplayAvailableChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_projection_display_available_changed(
        &self,
        token: EventRegistrationToken,
    ) -> HRESULT;
}

#[windows_interface::interface("2A75F830-A769-4E47-A825-E0D36AA47DD5")]
pub unsafe trait IProjectionManagerStatics2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // device_info is a Windows.Devices.Enumeration.DeviceInformation.
    pub unsafe fn start_projecting_with_device_info_async(
        &self,
        projection_view_id: i32,
        anchor_view_id: i32,
        device_info: ComIn<IInspectable>,
        out_action: *mut Option<IAsyncAction>,
    ) -> HRESULT;
    pub unsafe fn request_start_projecting_async(
        &self,
        projection_view_id: i32,
        anchor_view_id: i32,
        selection: Rect,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn request_start_projecting_with_placement_async(
        &self,
        projection_view_id: i32,
        anchor_view_id: i32,
        selection: Rect,
        preferred_placement: i32,
        out_operation: *mut Option<IAsyncOperationBoolean>,
    ) -> HRESULT;
    pub unsafe fn get_device_selector(&self, out_selector: *mut HSTRING) -> HRESULT;
}

#[windows_interface::interface("85361600-1C63-4627-BCB1-3A89E0BC9C55")]
pub unsafe trait IUISettings: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_hand_preference(&self, out_preference: *mut HandPreference) -> HRESULT;
    pub unsafe fn get_cursor_size(&self, out_size: *mut Size) -> HRESULT;
    pub unsafe fn get_scroll_bar_size(&self, out_size: *mut Size) -> HRESULT;
    pub unsafe fn get_scroll_bar_arrow_size(&self, out_size: *mut Size) -> HRESULT;
    pub unsafe fn get_scroll_bar_thumb_box_size(&self, out_size: *mut Size) -> HRESULT;
    pub unsafe fn get_message_duration(&self, out_duration: *mut u32) -> HRESULT;
    pub unsafe fn get_animations_enabled(&self, out_enabled: *mut bool) -> HRESULT;
    pub unsafe fn get_caret_browsing_enabled(&self, out_enabled: *mut bool) -> HRESULT;
    pub unsafe fn get_caret_blink_rate(&self, out_rate: *mut u32) -> HRESULT;
    pub unsafe fn get_caret_width(&self, out_width: *mut u32) -> HRESULT;
    pub unsafe fn get_double_click_time(&self, out_time: *mut u32) -> HRESULT;
    pub unsafe fn get_mouse_hover_time(&self, out_time: *mut u32) -> HRESULT;
    pub unsafe fn ui_element_color(
        &self,
        desired_element: UIElementType,
        out_color: *mut Color,
    ) -> HRESULT;
}

#[windows_interface::interface("BAD82401-2721-44F9-BB91-2BB228BE442F")]
pub unsafe trait IUISettings2: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_text_scale_factor(&self, out_factor: *mut f64) -> HRESULT;
    pub unsafe fn add_text_scale_factor_changed(
        &self,
        handler: ComIn<UISettingsChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_text_scale_factor_changed(
        &self,
        token: EventRegistrationToken,
    ) -> HRESULT;
}

#[windows_interface::interface("03021BE4-5254-4781-8194-5168F7D06D7B")]
pub unsafe trait IUISettings3: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_color_value(
        &self,
        desired_color: UIColorType,
        out_color: *mut Color,
    ) -> HRESULT;
    pub unsafe fn add_color_values_changed(
        &self,
        handler: ComIn<UISettingsChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_color_values_changed(&self, token: EventRegistrationToken) -> HRESULT;
}

#[windows_interface::interface("52BB3002-919B-4D6B-9B78-8DD66FF4B93B")]
pub unsafe trait IUISettings4: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_advanced_effects_enabled(&self, out_enabled: *mut bool) -> HRESULT;
    pub unsafe fn add_advanced_effects_enabled_changed(
        &self,
        handler: ComIn<UISettingsChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_advanced_effects_enabled_changed(
        &self,
        token: EventRegistrationToken,
    ) -> HRESULT;
}

#[windows_interface::interface("5349D588-0CB5-5F05-BD34-706B3231F0BD")]
pub unsafe trait IUISettings5: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_auto_hide_scroll_bars(&self, out_enabled: *mut bool) -> HRESULT;
    pub unsafe fn add_auto_hide_scroll_bars_changed(
        &self,
        handler: ComIn<UISettingsAutoHideScrollBarsChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_auto_hide_scroll_bars_changed(
        &self,
        token: EventRegistrationToken,
    ) -> HRESULT;
}

#[windows_interface::interface("AEF19BD7-FE31-5A04-ADA4-469AAEC6DFA9")]
pub unsafe trait IUISettings6: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn add_animations_enabled_changed(
        &self,
        handler: ComIn<UISettingsAnimationsEnabledChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_animations_enabled_changed(
        &self,
        token: EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn add_message_duration_changed(
        &self,
        handler: ComIn<UISettingsMessageDurationChangedHandler>,
        out_token: *mut EventRegistrationToken,
    ) -> HRESULT;
    pub unsafe fn remove_message_duration_changed(
        &self,
        token: EventRegistrationToken,
    ) -> HRESULT;
}

#[windows_interface::interface("0C7B4B3D-2B85-5E04-B1D9-46ED72EA2FE2")]
pub unsafe trait IUISettingsAnimationsEnabledChangedEventArgs: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // No members; the new value is read back from UISettings.
}

#[windows_interface::interface("87AFD4B2-9146-5F02-8F6B-06D454174C0F")]
pub unsafe trait IUISettingsAutoHideScrollBarsChangedEventArgs: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // No members; the new value is read back from UISettings.
}

#[windows_interface::interface("338AAD52-4BBD-5D2B-9B8D-2B7237E2C506")]
pub unsafe trait IUISettingsMessageDurationChangedEventArgs: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    // No members; the new value is read back from UISettings.
}

#[windows_interface::interface("C63657F6-8850-470D-88F8-455E16EA2C26")]
pub unsafe trait IUIViewSettings: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_user_interaction_mode(
        &self,
        out_mode: *mut UserInteractionMode,
    ) -> HRESULT;
}

#[windows_interface::interface("907E3AB1-DF8E-4EDD-921A-01E52A2C5E10")]
pub unsafe trait IUIViewSettingsPreferredInteractionMode: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_preferred_interaction_mode(
        &self,
        out_mode: *mut UserInteractionMode,
    ) -> HRESULT;
    pub unsafe fn set_preferred_interaction_mode(&self, mode: UserInteractionMode) -> HRESULT;
}

#[windows_interface::interface("595C97A5-F8F6-41CF-B0FB-AACDB81FD5F6")]
pub unsafe trait IUIViewSettingsStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_for_current_view(
        &self,
        out_settings: *mut Option<IUIViewSettings>,
    ) -> HRESULT;
}

#[windows_interface::interface("878FCD3A-0B99-42C9-84D0-D3F1D403554B")]
pub unsafe trait IViewModePreferences: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn get_view_size_preference(
        &self,
        out_preference: *mut ViewSizePreference,
    ) -> HRESULT;
    pub unsafe fn set_view_size_preference(&self, preference: ViewSizePreference) -> HRESULT;
    pub unsafe fn get_custom_size(&self, out_size: *mut Size) -> HRESULT;
    pub unsafe fn set_custom_size(&self, size: Size) -> HRESULT;
}

#[windows_interface::interface("9E3C0B25-4C33-4EEC-A25E-2FB77AC71E61")]
pub unsafe trait IViewModePreferencesStatics: IUnknown {
    /* IInspectable */
    pub unsafe fn get_iids(
        &self,
        out_iid_count: *mut u32,
        out_opt_iid_array_ptr: *mut *mut GUID,
    ) -> HRESULT;
    pub unsafe fn get_runtime_class_name(&self, out_opt_class_name: *mut HSTRING) -> HRESULT;
    pub unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT;

    pub unsafe fn create_default(
        &self,
        mode: ApplicationViewMode,
        out_preferences: *mut Option<IViewModePreferences>,
    ) -> HRESULT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn com_in_is_pointer_sized() {
        // ComIn must be pointer sized and carry the exact raw pointer value,
        // anything else breaks the ABI of every `In` parameter above.
        assert_eq!(
            std::mem::size_of::<ComIn<IUISettings>>(),
            std::mem::size_of::<*mut c_void>()
        );
    }

    #[test]
    fn value_types_are_abi_sized() {
        assert_eq!(std::mem::size_of::<Rect>(), 16);
        assert_eq!(std::mem::size_of::<Size>(), 8);
        assert_eq!(std::mem::size_of::<Color>(), 4);
        assert_eq!(std::mem::size_of::<EventRegistrationToken>(), 8);
        assert_eq!(std::mem::size_of::<UIColorType>(), 4);
    }

    #[test]
    fn null_handle_round_trips_to_none() {
        let pane: Option<IInputPane> = None;
        assert!(pane.is_none());
        // An absent interface out-param is all zero bits, same as a null ABI
        // pointer.
        assert_eq!(
            std::mem::size_of::<Option<IInputPane>>(),
            std::mem::size_of::<*mut c_void>()
        );
    }

    #[test]
    fn interface_identities_are_distinct() {
        assert_ne!(IUISettings::IID, IUISettings2::IID);
        assert_ne!(IInputPane::IID, IInputPane2::IID);
        assert_ne!(
            UISettingsChangedHandler::IID,
            AccessibilitySettingsChangedHandler::IID
        );
    }

    mod handle_semantics {
        //! Handle lifetime checks against a local implementation, no live OS
        //! services involved.

        use super::*;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        #[windows::core::implement(IReferenceColor)]
        struct TrackedColor {
            value: Color,
            alive: Arc<AtomicBool>,
        }

        impl Drop for TrackedColor {
            fn drop(&mut self) {
                self.alive.store(false, Ordering::SeqCst);
            }
        }

        impl IReferenceColor_Impl for TrackedColor {
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

            unsafe fn get_runtime_class_name(
                &self,
                out_opt_class_name: *mut HSTRING,
            ) -> HRESULT {
                if !out_opt_class_name.is_null() {
                    *out_opt_class_name = HSTRING::new();
                }
                HRESULT(0)
            }

            unsafe fn get_trust_level(&self, out_trust_level: *mut TrustLevel) -> HRESULT {
                if !out_trust_level.is_null() {
                    *out_trust_level = 0;
                }
                HRESULT(0)
            }

            unsafe fn get_value(&self, out_value: *mut Color) -> HRESULT {
                *out_value = self.value;
                HRESULT(0)
            }
        }

        fn tracked(value: Color) -> (IReferenceColor, Arc<AtomicBool>) {
            let alive = Arc::new(AtomicBool::new(true));
            let reference: IReferenceColor = TrackedColor {
                value,
                alive: alive.clone(),
            }
            .into();
            (reference, alive)
        }

        #[test]
        fn clone_and_drop_track_the_reference_count() {
            let (reference, alive) = tracked(Color::default());
            let clone = reference.clone();
            drop(reference);
            assert!(alive.load(Ordering::SeqCst));
            drop(clone);
            assert!(!alive.load(Ordering::SeqCst));
        }

        #[test]
        fn from_raw_takes_over_the_reference() {
            let color = Color {
                a: 1,
                r: 2,
                g: 3,
                b: 4,
            };
            let (reference, alive) = tracked(color);
            let raw = reference.into_raw();
            let taken = unsafe { IReferenceColor::from_raw(raw) };
            let mut read_back = Color::default();
            assert!(unsafe { taken.get_value(&mut read_back) }.is_ok());
            assert_eq!(read_back, color);
            drop(taken);
            assert!(!alive.load(Ordering::SeqCst));
        }

        #[test]
        fn com_in_borrows_without_touching_the_count() {
            let (reference, alive) = tracked(Color::default());
            {
                let borrowed = ComIn::new(&reference);
                let mut read_back = Color::default();
                assert!(unsafe { borrowed.get_value(&mut read_back) }.is_ok());
            }
            assert!(alive.load(Ordering::SeqCst));
            drop(reference);
            assert!(!alive.load(Ordering::SeqCst));
        }

        #[test]
        fn cast_honors_interface_identity() {
            let (reference, alive) = tracked(Color::default());
            assert!(reference.cast::<IUnknown>().is_ok());
            assert!(reference.cast::<IUISettings>().is_err());
            // A refused cast must not leak or release anything.
            assert!(alive.load(Ordering::SeqCst));
        }
    }
}
