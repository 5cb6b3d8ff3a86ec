//! Static catalog of the projected `Windows.UI.ViewManagement` interfaces.
//!
//! One entry per hand-transcribed interface, with the interface id, the
//! runtime class it belongs to and the `UniversalApiContract` version that
//! introduced it. Parameterized instantiations get their own table carrying
//! the WinRT signature string their id is hashed from. The tables are plain
//! data and compile on every host, which keeps the transcription checkable
//! off Windows too.

/// One projected interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// Unqualified interface name as it appears in the metadata.
    pub name: &'static str,
    /// Interface id, uppercase hyphenated form without braces.
    pub iid: &'static str,
    /// Fully qualified runtime class the interface is projected from.
    pub class: &'static str,
    /// `Windows.Foundation.UniversalApiContract` version introducing it.
    pub contract: u16,
}

macro_rules! entry {
    ($name:literal, $iid:literal, $class:literal, $contract:literal) => {
        InterfaceEntry {
            name: $name,
            iid: $iid,
            class: concat!("Windows.UI.ViewManagement.", $class),
            contract: $contract,
        }
    };
}

/// Every interface of the namespace, in metadata order.
#[rustfmt::skip]
pub const INTERFACES: &[InterfaceEntry] = &[
    entry!("IAccessibilitySettings", "FE0E8147-C4C0-4562-B962-1327B52AD5B9", "AccessibilitySettings", 1),
    entry!("IActivationViewSwitcher", "77324A27-BC68-4C47-90DA-E11D5C6F2C89", "ActivationViewSwitcher", 2),
    entry!("IApplicationView", "D222D519-4361-451E-96C4-60F4F9742DB0", "ApplicationView", 1),
    entry!("IApplicationView2", "E876B196-A545-40DC-B594-450CBA68CC00", "ApplicationView", 1),
    entry!("IApplicationView3", "903C9CE5-793A-4FDF-A2B2-AF1AC21E3108", "ApplicationView", 2),
    entry!("IApplicationView4", "15E5CBEE-134C-4BE0-8361-36A1F3A7F99F", "ApplicationView", 4),
    entry!("IApplicationView7", "4066F1E6-6B4C-5D44-8E13-26F2B93F16A2", "ApplicationView", 6),
    entry!("IApplicationView9", "9B441EA2-F1E5-5E52-8D70-7C57A3F0C0C6", "ApplicationView", 7),
    entry!("IApplicationViewConsolidatedEventArgs", "514449EC-7EA2-4DE7-A6A6-7DFBAAEBB6FB", "ApplicationViewConsolidatedEventArgs", 1),
    entry!("IApplicationViewConsolidatedEventArgs2", "1F42F916-6A26-4B23-931F-9CBE3FC80E95", "ApplicationViewConsolidatedEventArgs", 4),
    entry!("IApplicationViewFullscreenStatics", "BF6F23CB-39D7-42E1-9D3E-262B71E80FE1", "ApplicationView", 2),
    entry!("IApplicationViewInteropStatics", "C446FB5D-4793-4896-979E-A7CB9BBD8EB7", "ApplicationView", 1),
    entry!("IApplicationViewScaling", "1BCE4D71-7B5A-4436-9AC0-F362DF9D9AA5", "ApplicationViewScaling", 1),
    entry!("IApplicationViewScalingStatics", "706AB30F-1CBF-4BD1-8BBC-2DDF4A6E3D32", "ApplicationViewScaling", 1),
    entry!("IApplicationViewStatics", "016C0286-0B84-4110-A30E-C1D696442365", "ApplicationView", 1),
    entry!("IApplicationViewStatics2", "AF338ECF-9C26-4CC8-A14E-4F2AD9E61B28", "ApplicationView", 1),
    entry!("IApplicationViewStatics3", "F5F0E1F3-5E77-487C-AFF1-BE54F47BFFA9", "ApplicationView", 2),
    entry!("IApplicationViewStatics4", "08D12E10-1F15-4E38-8E7F-E4D23BBA2FEA", "ApplicationView", 4),
    entry!("IApplicationViewSwitcherStatics", "15CAF6C9-D16E-4A96-B1E5-E393BCD0D828", "ApplicationViewSwitcher", 1),
    entry!("IApplicationViewSwitcherStatics2", "60E4EBED-D439-4354-8914-34BFD4A5AB9A", "ApplicationViewSwitcher", 3),
    entry!("IApplicationViewSwitcherStatics3", "2EE314D2-B7C1-4A27-97E0-9A2E412A61C5", "ApplicationViewSwitcher", 4),
    entry!("IApplicationViewTitleBar", "00924AC0-932B-4A6B-9C4B-DC38C82478CE", "ApplicationViewTitleBar", 1),
    entry!("IApplicationViewTransferContext", "8574BC63-3C17-408E-9408-8A1A9EA81BFA", "ApplicationViewTransferContext", 6),
    entry!("IApplicationViewTransferContextStatics", "C58F1364-8AF0-4CB6-A7D5-1EBE2EEDAC4D", "ApplicationViewTransferContext", 6),
    entry!("IApplicationViewWithContext", "A5DD0F03-4B4A-5D74-B2A8-6B41E42F7D19", "ApplicationView", 7),
    entry!("IInputPane", "640ADA70-06F3-4C87-A678-9829C9127C28", "InputPane", 1),
    entry!("IInputPane2", "8A6B3F26-7090-4793-944C-C3F2CDE26276", "InputPane", 1),
    entry!("IInputPaneControl", "088BB24F-962F-489D-AA6E-C6BE1A0A6E52", "InputPane", 1),
    entry!("IInputPaneStatics", "95F4AF3A-EF47-424A-9741-FD2815EBA2BD", "InputPane", 1),
    entry!("IInputPaneStatics2", "1A0C72B3-244A-41D6-9BAD-F6F6A76BE018", "InputPane", 8),
    entry!("IInputPaneVisibilityEventArgs", "D243E016-D907-4FCC-BB8D-F77BAA5028F1", "InputPaneVisibilityEventArgs", 1),
    entry!("IProjectionManagerStatics", "B65F913D-E2F0-4FFD-BA56-BA196E2D7A1A", "ProjectionManager", 1),
    entry!("IProjectionManagerStatics2", "2A75F830-A769-4E47-A825-E0D36AA47DD5", "ProjectionManager", 2),
    entry!("IUISettings", "85361600-1C63-4627-BCB1-3A89E0BC9C55", "UISettings", 1),
    entry!("IUISettings2", "BAD82401-2721-44F9-BB91-2BB228BE442F", "UISettings", 1),
    entry!("IUISettings3", "03021BE4-5254-4781-8194-5168F7D06D7B", "UISettings", 2),
    entry!("IUISettings4", "52BB3002-919B-4D6B-9B78-8DD66FF4B93B", "UISettings", 4),
    entry!("IUISettings5", "5349D588-0CB5-5F05-BD34-706B3231F0BD", "UISettings", 7),
    entry!("IUISettings6", "AEF19BD7-FE31-5A04-ADA4-469AAEC6DFA9", "UISettings", 10),
    entry!("IUISettingsAnimationsEnabledChangedEventArgs", "0C7B4B3D-2B85-5E04-B1D9-46ED72EA2FE2", "UISettingsAnimationsEnabledChangedEventArgs", 10),
    entry!("IUISettingsAutoHideScrollBarsChangedEventArgs", "87AFD4B2-9146-5F02-8F6B-06D454174C0F", "UISettingsAutoHideScrollBarsChangedEventArgs", 7),
    entry!("IUISettingsMessageDurationChangedEventArgs", "338AAD52-4BBD-5D2B-9B8D-2B7237E2C506", "UISettingsMessageDurationChangedEventArgs", 10),
    entry!("IUIViewSettings", "C63657F6-8850-470D-88F8-455E16EA2C26", "UIViewSettings", 1),
    entry!("IUIViewSettingsPreferredInteractionMode", "907E3AB1-DF8E-4EDD-921A-01E52A2C5E10", "UIViewSettings", 4),
    entry!("IUIViewSettingsStatics", "595C97A5-F8F6-41CF-B0FB-AACDB81FD5F6", "UIViewSettings", 1),
    entry!("IViewModePreferences", "878FCD3A-0B99-42C9-84D0-D3F1D403554B", "ViewModePreferences", 4),
    entry!("IViewModePreferencesStatics", "9E3C0B25-4C33-4EEC-A25E-2FB77AC71E61", "ViewModePreferences", 4),
];

/// Looks an interface up by its unqualified name.
pub fn find(name: &str) -> Option<&'static InterfaceEntry> {
    INTERFACES.iter().find(|entry| entry.name == name)
}

/// A parameterized interface instantiation used by the projection.
///
/// These have no IID of their own in the metadata. The platform derives one
/// per instantiation: the RFC 4122 v5 (SHA-1) hash of the WinRT signature
/// string, under the pinterface namespace
/// `11f47ad5-7b73-42c0-abae-878b1e16adee`. Keeping the signature next to the
/// id lets a test re-derive every one of them on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericEntry {
    /// Name of the projected declaration.
    pub name: &'static str,
    /// WinRT signature string of the instantiation.
    pub signature: &'static str,
    /// Derived interface id, uppercase hyphenated form without braces.
    pub iid: &'static str,
}

/// Every parameterized instantiation the projection declares.
#[rustfmt::skip]
pub const GENERIC_INSTANCES: &[GenericEntry] = &[
    GenericEntry {
        name: "IAsyncOperationBoolean",
        signature: "pinterface({9fc2b0bb-e446-44e2-aa61-9cab8f636af2};b1)",
        iid: "CDB5EFB3-5788-509D-9BE1-71CCB8A3362A",
    },
    GenericEntry {
        name: "AsyncOperationBooleanCompletedHandler",
        signature: "pinterface({fcdcf02c-e5d8-4478-915a-4d90b74b83a5};b1)",
        iid: "C1D3D1A2-AE17-5A5F-B5A2-BDCC8844889A",
    },
    GenericEntry {
        name: "IReferenceColor",
        signature: "pinterface({61c17706-2d65-11e0-9ae8-d48564015472};struct(Windows.UI.Color;u1;u1;u1;u1))",
        iid: "AB8E5D11-B0C1-5A21-95AE-F16BF3A37624",
    },
    GenericEntry {
        name: "UISettingsChangedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.UISettings;{85361600-1c63-4627-bcb1-3a89e0bc9c55});cinterface(IInspectable))",
        iid: "2DBDBA9D-20DA-519D-9078-09F835BC5BC7",
    },
    GenericEntry {
        name: "UISettingsAutoHideScrollBarsChangedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.UISettings;{85361600-1c63-4627-bcb1-3a89e0bc9c55});rc(Windows.UI.ViewManagement.UISettingsAutoHideScrollBarsChangedEventArgs;{87afd4b2-9146-5f02-8f6b-06d454174c0f}))",
        iid: "808AEF30-2660-51B0-9C11-F75DD42006B4",
    },
    GenericEntry {
        name: "UISettingsAnimationsEnabledChangedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.UISettings;{85361600-1c63-4627-bcb1-3a89e0bc9c55});rc(Windows.UI.ViewManagement.UISettingsAnimationsEnabledChangedEventArgs;{0c7b4b3d-2b85-5e04-b1d9-46ed72ea2fe2}))",
        iid: "BD646E74-E441-54FB-88A2-CBDA24BF09F4",
    },
    GenericEntry {
        name: "UISettingsMessageDurationChangedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.UISettings;{85361600-1c63-4627-bcb1-3a89e0bc9c55});rc(Windows.UI.ViewManagement.UISettingsMessageDurationChangedEventArgs;{338aad52-4bbd-5d2b-9b8d-2b7237e2c506}))",
        iid: "7B96752B-1B0F-5279-AA0A-20C4A39BD7B7",
    },
    GenericEntry {
        name: "AccessibilitySettingsChangedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.AccessibilitySettings;{fe0e8147-c4c0-4562-b962-1327b52ad5b9});cinterface(IInspectable))",
        iid: "F5917E6F-5ABF-5E65-B5B4-1B9C8D94E788",
    },
    GenericEntry {
        name: "ViewConsolidatedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.ApplicationView;{d222d519-4361-451e-96c4-60f4f9742db0});rc(Windows.UI.ViewManagement.ApplicationViewConsolidatedEventArgs;{514449ec-7ea2-4de7-a6a6-7dfbaaebb6fb}))",
        iid: "463C606A-8C82-5A29-A2BD-040781F25348",
    },
    GenericEntry {
        name: "ViewVisibleBoundsChangedHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.ApplicationView;{d222d519-4361-451e-96c4-60f4f9742db0});cinterface(IInspectable))",
        iid: "00C1F983-C836-565C-8BBF-7053055BDB4C",
    },
    GenericEntry {
        name: "InputPaneVisibilityHandler",
        signature: "pinterface({9de1c534-6ae1-11e0-84e1-18a905bcc53f};rc(Windows.UI.ViewManagement.InputPane;{640ada70-06f3-4c87-a678-9829c9127c28});rc(Windows.UI.ViewManagement.InputPaneVisibilityEventArgs;{d243e016-d907-4fcc-bb8d-f77baa5028f1}))",
        iid: "B813D684-D953-5A8A-9B30-78B79FB9147B",
    },
    GenericEntry {
        name: "ProjectionDisplayAvailableChangedHandler",
        signature: "pinterface({9de1c535-6ae1-11e0-84e1-18a905bcc53f};cinterface(IInspectable))",
        iid: "C50898F6-C536-5F47-8583-8B2C2438A13B",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn covers_the_whole_namespace() {
        assert_eq!(INTERFACES.len(), 47);
    }

    #[test]
    fn iids_parse_and_are_unique() {
        let mut seen = HashSet::new();
        for entry in INTERFACES {
            let parsed = Uuid::parse_str(entry.iid)
                .unwrap_or_else(|e| panic!("{}: bad iid {}: {}", entry.name, entry.iid, e));
            assert_eq!(
                entry.iid,
                parsed.hyphenated().encode_upper(&mut Uuid::encode_buffer()),
                "{}: iid not in uppercase hyphenated form",
                entry.name
            );
            assert!(seen.insert(parsed), "{}: duplicate iid", entry.name);
        }
    }

    #[test]
    fn names_are_unique_and_findable() {
        let mut seen = HashSet::new();
        for entry in INTERFACES {
            assert!(seen.insert(entry.name), "duplicate name {}", entry.name);
            assert_eq!(find(entry.name).map(|e| e.iid), Some(entry.iid));
        }
        assert!(find("IUISettings99").is_none());
    }

    #[test]
    fn classes_live_in_the_namespace() {
        for entry in INTERFACES {
            assert!(
                entry.class.starts_with("Windows.UI.ViewManagement."),
                "{}: class {} outside the namespace",
                entry.name,
                entry.class
            );
        }
    }

    #[test]
    fn versioned_families_have_non_decreasing_contracts() {
        // IFoo2 cannot predate IFoo, and so on up every family.
        for entry in INTERFACES {
            let base_len = entry.name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
            if base_len == entry.name.len() {
                continue;
            }
            let base = &entry.name[..base_len];
            if let Some(parent) = find(base) {
                assert!(
                    entry.contract >= parent.contract,
                    "{} (contract {}) predates {} (contract {})",
                    entry.name,
                    entry.contract,
                    base,
                    parent.contract
                );
            }
        }
    }

    #[test]
    fn generic_iids_derive_from_their_signatures() {
        // The WinRT pinterface namespace guid. Derivation per the type system
        // spec: uuid v5 of the signature string under this namespace.
        let namespace = Uuid::parse_str("11f47ad5-7b73-42c0-abae-878b1e16adee").unwrap();
        for entry in GENERIC_INSTANCES {
            let derived = Uuid::new_v5(&namespace, entry.signature.as_bytes());
            assert_eq!(
                entry.iid,
                derived.hyphenated().encode_upper(&mut Uuid::encode_buffer()),
                "{}: iid does not match its signature hash",
                entry.name
            );
        }
    }

    #[test]
    fn generic_signatures_agree_with_the_interface_table() {
        // Runtime class arguments embed the default interface iid; the
        // embedded guid must be the table's, in lowercase braced form.
        for entry in GENERIC_INSTANCES {
            for class in INTERFACES {
                let marker = format!("rc({};", class.class);
                if entry.signature.contains(&marker) {
                    assert!(
                        entry.signature.contains(&class.iid.to_lowercase()),
                        "{}: signature disagrees with the {} entry",
                        entry.name,
                        class.name
                    );
                }
            }
        }
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn table_matches_projected_iids() {
        use crate::interfaces::{
            IApplicationView, IInputPane, IReferenceColor, IUISettings, IUISettings3,
            UISettingsChangedHandler,
        };
        use windows::core::Interface;

        fn projected(iid: &windows::core::GUID) -> String {
            format!("{:?}", iid)
                .trim_matches(|c| c == '{' || c == '}')
                .to_uppercase()
        }

        let cases: &[(&str, windows::core::GUID)] = &[
            ("IUISettings", IUISettings::IID),
            ("IUISettings3", IUISettings3::IID),
            ("IApplicationView", IApplicationView::IID),
            ("IInputPane", IInputPane::IID),
        ];
        for (name, iid) in cases {
            let entry = find(name).unwrap();
            assert_eq!(
                entry.iid,
                projected(iid),
                "{}: table and projection disagree",
                name
            );
        }

        let generics: &[(&str, windows::core::GUID)] = &[
            ("IReferenceColor", IReferenceColor::IID),
            ("UISettingsChangedHandler", UISettingsChangedHandler::IID),
        ];
        for (name, iid) in generics {
            let entry = GENERIC_INSTANCES
                .iter()
                .find(|e| e.name == *name)
                .unwrap();
            assert_eq!(
                entry.iid,
                projected(iid),
                "{}: instantiation table and projection disagree",
                name
            );
        }
    }
}
