//! Activation and lifetime management for the ViewManagement runtime classes.
//!
//! All access to the WinRT objects goes through a thread local [`ComObjects`]
//! instance. It activates instances and activation factories lazily, caches
//! them for the lifetime of the thread, and drops the whole cache when a call
//! fails with an error that a fresh activation can recover from (server gone
//! away, disconnected proxy).

use std::cell::RefCell;
use std::rc::Rc;

use windows::{
    core::{Interface, HRESULT, HSTRING},
    Win32::{
        Foundation::{CO_E_NOTINITIALIZED, REGDB_E_CLASSNOTREG, RPC_E_DISCONNECTED},
        System::WinRT::{
            RoActivateInstance, RoGetActivationFactory, RoInitialize, RO_INIT_MULTITHREADED,
        },
    },
};

use crate::interfaces::*;

/// HRESULT of the Win32 error RPC_S_SERVER_UNAVAILABLE.
const RPC_S_SERVER_UNAVAILABLE_HRESULT: HRESULT = HRESULT(0x800706BA_u32 as i32);

/// RoInitialize returns this when the thread apartment was already set up in
/// another mode, which is fine for us.
const RPC_E_CHANGED_MODE_HRESULT: HRESULT = HRESULT(0x80010106_u32 as i32);

pub(crate) trait HRESULTHelpers {
    fn as_result(&self) -> Result<()>;
}

impl HRESULTHelpers for HRESULT {
    fn as_result(&self) -> Result<()> {
        if *self == REGDB_E_CLASSNOTREG {
            return Err(Error::ClassNotRegistered);
        }
        if self.is_ok() {
            return Ok(());
        }
        Err(Error::ComError(*self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The ViewManagement runtime classes are not registered on this system.
    ClassNotRegistered,
    /// A raw COM or WinRT call failed.
    ComError(HRESULT),
    /// A call succeeded but gave back a null interface pointer.
    ComAllocatedNullPtr,
    /// An async operation completed with Canceled or Error status.
    AsyncOperationFailed(AsyncStatus),
    /// Listener thread could not report its thread id back.
    ListenerThreadIdNotCreated,
    /// Listener thread is not running anymore.
    ListenerThreadNotAlive,
    /// Event receiver hung up.
    SenderError,
}

impl From<windows::core::Error> for Error {
    fn from(e: windows::core::Error) -> Self {
        e.code().as_result().err().unwrap_or(Error::ComError(e.code()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures that are caused by a stale cached object rather than
    /// by the call itself. Dropping the cache and re-activating gives these a
    /// second chance.
    pub(crate) fn is_recyclable(&self) -> bool {
        matches!(
            self,
            Error::ComError(hr)
                if *hr == RPC_S_SERVER_UNAVAILABLE_HRESULT
                    || *hr == RPC_E_DISCONNECTED
                    || *hr == CO_E_NOTINITIALIZED
        )
    }
}

type Cache<T> = RefCell<Option<Rc<T>>>;

fn get_instance<T: Interface>(cache: &Cache<T>, class_name: &str) -> Result<Rc<T>> {
    let mut slot = cache.borrow_mut();
    match slot.as_ref() {
        Some(rc) => Ok(rc.clone()),
        None => {
            let inspectable = unsafe { RoActivateInstance(&HSTRING::from(class_name)) }?;
            let instance = inspectable.cast::<T>()?;
            let rc = Rc::new(instance);
            *slot = Some(rc.clone());
            Ok(rc)
        }
    }
}

fn get_factory<T: Interface>(cache: &Cache<T>, class_name: &str) -> Result<Rc<T>> {
    let mut slot = cache.borrow_mut();
    match slot.as_ref() {
        Some(rc) => Ok(rc.clone()),
        None => {
            let factory: T = unsafe { RoGetActivationFactory(&HSTRING::from(class_name)) }?;
            let rc = Rc::new(factory);
            *slot = Some(rc.clone());
            Ok(rc)
        }
    }
}

/// Thread local cache of activated instances and statics factories.
///
/// Not `Send`: the objects inside are bound to the apartment of the thread
/// that activated them.
pub struct ComObjects {
    ui_settings: Cache<IUISettings>,
    accessibility_settings: Cache<IAccessibilitySettings>,
    view_interop_statics: Cache<IApplicationViewInteropStatics>,
    view_statics: Cache<IApplicationViewStatics>,
    view_statics2: Cache<IApplicationViewStatics2>,
    view_statics3: Cache<IApplicationViewStatics3>,
    view_statics4: Cache<IApplicationViewStatics4>,
    view_fullscreen_statics: Cache<IApplicationViewFullscreenStatics>,
    switcher_statics: Cache<IApplicationViewSwitcherStatics>,
    switcher_statics2: Cache<IApplicationViewSwitcherStatics2>,
    switcher_statics3: Cache<IApplicationViewSwitcherStatics3>,
    scaling_statics: Cache<IApplicationViewScalingStatics>,
    input_pane_statics: Cache<IInputPaneStatics>,
    input_pane_statics2: Cache<IInputPaneStatics2>,
    ui_view_settings_statics: Cache<IUIViewSettingsStatics>,
    projection_statics: Cache<IProjectionManagerStatics>,
    projection_statics2: Cache<IProjectionManagerStatics2>,
    transfer_context_statics: Cache<IApplicationViewTransferContextStatics>,
    view_mode_preferences_statics: Cache<IViewModePreferencesStatics>,
}

impl ComObjects {
    pub fn new() -> Self {
        // Join (or set up) the multithreaded apartment for this thread. An
        // apartment already initialized in another mode is usable too.
        let res = unsafe { RoInitialize(RO_INIT_MULTITHREADED) };
        if let Err(er) = res {
            debug_assert!(
                er.code() == RPC_E_CHANGED_MODE_HRESULT || er.code().is_ok(),
                "RoInitialize failed: {:?}",
                er
            );
        }
        Self {
            ui_settings: RefCell::new(None),
            accessibility_settings: RefCell::new(None),
            view_interop_statics: RefCell::new(None),
            view_statics: RefCell::new(None),
            view_statics2: RefCell::new(None),
            view_statics3: RefCell::new(None),
            view_statics4: RefCell::new(None),
            view_fullscreen_statics: RefCell::new(None),
            switcher_statics: RefCell::new(None),
            switcher_statics2: RefCell::new(None),
            switcher_statics3: RefCell::new(None),
            scaling_statics: RefCell::new(None),
            input_pane_statics: RefCell::new(None),
            input_pane_statics2: RefCell::new(None),
            ui_view_settings_statics: RefCell::new(None),
            projection_statics: RefCell::new(None),
            projection_statics2: RefCell::new(None),
            transfer_context_statics: RefCell::new(None),
            view_mode_preferences_statics: RefCell::new(None),
        }
    }

    /// Drops all cached objects, forcing re-activation on next access.
    pub fn drop_services(&self) {
        *self.ui_settings.borrow_mut() = None;
        *self.accessibility_settings.borrow_mut() = None;
        *self.view_interop_statics.borrow_mut() = None;
        *self.view_statics.borrow_mut() = None;
        *self.view_statics2.borrow_mut() = None;
        *self.view_statics3.borrow_mut() = None;
        *self.view_statics4.borrow_mut() = None;
        *self.view_fullscreen_statics.borrow_mut() = None;
        *self.switcher_statics.borrow_mut() = None;
        *self.switcher_statics2.borrow_mut() = None;
        *self.switcher_statics3.borrow_mut() = None;
        *self.scaling_statics.borrow_mut() = None;
        *self.input_pane_statics.borrow_mut() = None;
        *self.input_pane_statics2.borrow_mut() = None;
        *self.ui_view_settings_statics.borrow_mut() = None;
        *self.projection_statics.borrow_mut() = None;
        *self.projection_statics2.borrow_mut() = None;
        *self.transfer_context_statics.borrow_mut() = None;
        *self.view_mode_preferences_statics.borrow_mut() = None;
    }

    pub fn ui_settings(&self) -> Result<Rc<IUISettings>> {
        get_instance(&self.ui_settings, RuntimeClass_UISettings)
    }

    pub fn accessibility_settings(&self) -> Result<Rc<IAccessibilitySettings>> {
        get_instance(
            &self.accessibility_settings,
            RuntimeClass_AccessibilitySettings,
        )
    }

    pub fn view_interop_statics(&self) -> Result<Rc<IApplicationViewInteropStatics>> {
        get_factory(&self.view_interop_statics, RuntimeClass_ApplicationView)
    }

    pub fn view_statics(&self) -> Result<Rc<IApplicationViewStatics>> {
        get_factory(&self.view_statics, RuntimeClass_ApplicationView)
    }

    pub fn view_statics2(&self) -> Result<Rc<IApplicationViewStatics2>> {
        get_factory(&self.view_statics2, RuntimeClass_ApplicationView)
    }

    pub fn view_statics3(&self) -> Result<Rc<IApplicationViewStatics3>> {
        get_factory(&self.view_statics3, RuntimeClass_ApplicationView)
    }

    pub fn view_statics4(&self) -> Result<Rc<IApplicationViewStatics4>> {
        get_factory(&self.view_statics4, RuntimeClass_ApplicationView)
    }

    pub fn view_fullscreen_statics(&self) -> Result<Rc<IApplicationViewFullscreenStatics>> {
        get_factory(&self.view_fullscreen_statics, RuntimeClass_ApplicationView)
    }

    pub fn switcher_statics(&self) -> Result<Rc<IApplicationViewSwitcherStatics>> {
        get_factory(
            &self.switcher_statics,
            RuntimeClass_ApplicationViewSwitcher,
        )
    }

    pub fn switcher_statics2(&self) -> Result<Rc<IApplicationViewSwitcherStatics2>> {
        get_factory(
            &self.switcher_statics2,
            RuntimeClass_ApplicationViewSwitcher,
        )
    }

    pub fn switcher_statics3(&self) -> Result<Rc<IApplicationViewSwitcherStatics3>> {
        get_factory(
            &self.switcher_statics3,
            RuntimeClass_ApplicationViewSwitcher,
        )
    }

    pub fn scaling_statics(&self) -> Result<Rc<IApplicationViewScalingStatics>> {
        get_factory(&self.scaling_statics, RuntimeClass_ApplicationViewScaling)
    }

    pub fn input_pane_statics(&self) -> Result<Rc<IInputPaneStatics>> {
        get_factory(&self.input_pane_statics, RuntimeClass_InputPane)
    }

    pub fn input_pane_statics2(&self) -> Result<Rc<IInputPaneStatics2>> {
        get_factory(&self.input_pane_statics2, RuntimeClass_InputPane)
    }

    pub fn ui_view_settings_statics(&self) -> Result<Rc<IUIViewSettingsStatics>> {
        get_factory(&self.ui_view_settings_statics, RuntimeClass_UIViewSettings)
    }

    pub fn projection_statics(&self) -> Result<Rc<IProjectionManagerStatics>> {
        get_factory(&self.projection_statics, RuntimeClass_ProjectionManager)
    }

    pub fn projection_statics2(&self) -> Result<Rc<IProjectionManagerStatics2>> {
        get_factory(&self.projection_statics2, RuntimeClass_ProjectionManager)
    }

    pub fn transfer_context_statics(
        &self,
    ) -> Result<Rc<IApplicationViewTransferContextStatics>> {
        get_factory(
            &self.transfer_context_statics,
            RuntimeClass_ApplicationViewTransferContext,
        )
    }

    pub fn view_mode_preferences_statics(&self) -> Result<Rc<IViewModePreferencesStatics>> {
        get_factory(
            &self.view_mode_preferences_statics,
            RuntimeClass_ViewModePreferences,
        )
    }
}

impl Default for ComObjects {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static COM_OBJECTS: ComObjects = ComObjects::new();
}

/// Runs `f` against the thread local [`ComObjects`].
///
/// If the call fails with a recyclable error the cached objects are dropped
/// and `f` is retried once against freshly activated ones.
pub fn with_com_objects<F, T>(f: F) -> Result<T>
where
    F: Fn(&ComObjects) -> Result<T>,
{
    COM_OBJECTS.with(|com_objects| {
        let first = f(com_objects);
        match first {
            Err(er) if er.is_recyclable() => {
                com_objects.drop_services();
                f(com_objects)
            }
            other => other,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn as_result_maps_failure_codes() {
        assert_eq!(HRESULT(0).as_result(), Ok(()));
        assert_eq!(
            HRESULT(0x80004005_u32 as i32).as_result(),
            Err(Error::ComError(HRESULT(0x80004005_u32 as i32)))
        );
        assert_eq!(
            REGDB_E_CLASSNOTREG.as_result(),
            Err(Error::ClassNotRegistered)
        );
    }

    #[test]
    fn recyclable_errors_are_classified() {
        assert!(Error::ComError(RPC_S_SERVER_UNAVAILABLE_HRESULT).is_recyclable());
        assert!(Error::ComError(RPC_E_DISCONNECTED).is_recyclable());
        assert!(!Error::ComError(HRESULT(0x80004005_u32 as i32)).is_recyclable());
        assert!(!Error::ClassNotRegistered.is_recyclable());
        assert!(!Error::ComAllocatedNullPtr.is_recyclable());
    }

    #[test]
    fn with_com_objects_retries_once_on_recyclable_error() {
        let calls = Cell::new(0);
        let res = with_com_objects(|_| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(Error::ComError(RPC_S_SERVER_UNAVAILABLE_HRESULT))
            } else {
                Ok(42)
            }
        });
        assert_eq!(res, Ok(42));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn with_com_objects_does_not_retry_plain_errors() {
        let calls = Cell::new(0);
        let res: Result<()> = with_com_objects(|_| {
            calls.set(calls.get() + 1);
            Err(Error::ComAllocatedNullPtr)
        });
        assert_eq!(res, Err(Error::ComAllocatedNullPtr));
        assert_eq!(calls.get(), 1);
    }
}
