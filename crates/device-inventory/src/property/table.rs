//! Static property table: identifier → (OS key, fetch strategy, scope).

use serde::{Deserialize, Serialize};

use super::keys::{self, PropertyKey};
use super::PropertyKind;

/// Fetch-and-format strategy for one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    String,
    StringList,
    StringOrStringList,
    U32,
    U32Hex,
    I32,
    I64,
    U64,
    U64Hex,
    Boolean,
    TimeStamp,
    Guid,
    NtStatus,
    Binary,
    BusTypeGuid,
    PciInterruptSupport,
    PciLinkSpeed,
    PciLinkWidth,
    PciDeviceType,
    PciSpeedAndMode,
    DevNodeStatus,
    Capabilities,
    PowerData,
}

impl Fetch {
    pub fn kind(self) -> PropertyKind {
        match self {
            Self::String => PropertyKind::String,
            Self::StringList | Self::StringOrStringList => PropertyKind::StringList,
            Self::U32
            | Self::U32Hex
            | Self::PciInterruptSupport
            | Self::PciLinkSpeed
            | Self::PciLinkWidth
            | Self::PciDeviceType
            | Self::PciSpeedAndMode
            | Self::DevNodeStatus
            | Self::Capabilities => PropertyKind::U32,
            Self::I32 => PropertyKind::I32,
            Self::I64 => PropertyKind::I64,
            Self::U64 | Self::U64Hex => PropertyKind::U64,
            Self::Boolean => PropertyKind::Boolean,
            Self::TimeStamp => PropertyKind::TimeStamp,
            Self::Guid | Self::BusTypeGuid => PropertyKind::Guid,
            Self::NtStatus => PropertyKind::Status,
            Self::Binary | Self::PowerData => PropertyKind::Binary,
        }
    }
}

/// Whether a property belongs to the instance or to its whole class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Instance,
    Class,
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyEntry {
    pub id: PropertyId,
    pub key: PropertyKey,
    pub fetch: Fetch,
    pub scope: Scope,
}

macro_rules! property_table {
    ($($id:ident => $key:ident, $fetch:ident, $scope:ident;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum PropertyId {
            $($id,)*
        }

        impl PropertyId {
            pub const ALL: &'static [PropertyId] = &[$(PropertyId::$id,)*];
            pub const COUNT: usize = Self::ALL.len();

            pub fn name(self) -> &'static str {
                match self {
                    $(PropertyId::$id => stringify!($id),)*
                }
            }
        }

        pub static PROPERTY_TABLE: &[PropertyEntry] = &[
            $(PropertyEntry {
                id: PropertyId::$id,
                key: keys::$key,
                fetch: Fetch::$fetch,
                scope: Scope::$scope,
            },)*
        ];
    };
}

impl PropertyId {
    pub fn entry(self) -> &'static PropertyEntry {
        &PROPERTY_TABLE[self as usize]
    }

    pub fn kind(self) -> PropertyKind {
        self.entry().fetch.kind()
    }
}

property_table! {
    Name => DEVPKEY_NAME, String, Instance;
    Manufacturer => DEVPKEY_DEVICE_MANUFACTURER, String, Instance;
    Service => DEVPKEY_DEVICE_SERVICE, String, Instance;
    Class => DEVPKEY_DEVICE_CLASS, String, Instance;
    EnumeratorName => DEVPKEY_DEVICE_ENUMERATOR_NAME, String, Instance;
    InstallDate => DEVPKEY_DEVICE_INSTALL_DATE, TimeStamp, Instance;
    FirstInstallDate => DEVPKEY_DEVICE_FIRST_INSTALL_DATE, TimeStamp, Instance;
    LastArrivalDate => DEVPKEY_DEVICE_LAST_ARRIVAL_DATE, TimeStamp, Instance;
    LastRemovalDate => DEVPKEY_DEVICE_LAST_REMOVAL_DATE, TimeStamp, Instance;
    DeviceDesc => DEVPKEY_DEVICE_DEVICE_DESC, String, Instance;
    FriendlyName => DEVPKEY_DEVICE_FRIENDLY_NAME, String, Instance;
    InstanceId => DEVPKEY_DEVICE_INSTANCE_ID, String, Instance;
    ParentInstanceId => DEVPKEY_DEVICE_PARENT, String, Instance;
    PdoName => DEVPKEY_DEVICE_PDO_NAME, String, Instance;
    LocationInfo => DEVPKEY_DEVICE_LOCATION_INFO, String, Instance;
    ClassGuid => DEVPKEY_DEVICE_CLASS_GUID, Guid, Instance;
    Driver => DEVPKEY_DEVICE_DRIVER, String, Instance;
    DriverVersion => DEVPKEY_DEVICE_DRIVER_VERSION, String, Instance;
    DriverDate => DEVPKEY_DEVICE_DRIVER_DATE, TimeStamp, Instance;
    FirmwareDate => DEVPKEY_DEVICE_FIRMWARE_DATE, TimeStamp, Instance;
    FirmwareVersion => DEVPKEY_DEVICE_FIRMWARE_VERSION, String, Instance;
    FirmwareRevision => DEVPKEY_DEVICE_FIRMWARE_REVISION, String, Instance;
    HasProblem => DEVPKEY_DEVICE_HAS_PROBLEM, Boolean, Instance;
    ProblemCode => DEVPKEY_DEVICE_PROBLEM_CODE, U32, Instance;
    ProblemStatus => DEVPKEY_DEVICE_PROBLEM_STATUS, NtStatus, Instance;
    DevNodeStatus => DEVPKEY_DEVICE_DEV_NODE_STATUS, DevNodeStatus, Instance;
    DevCapabilities => DEVPKEY_DEVICE_CAPABILITIES, Capabilities, Instance;
    UpperFilters => DEVPKEY_DEVICE_UPPER_FILTERS, StringList, Instance;
    LowerFilters => DEVPKEY_DEVICE_LOWER_FILTERS, StringList, Instance;
    HardwareIds => DEVPKEY_DEVICE_HARDWARE_IDS, StringList, Instance;
    CompatibleIds => DEVPKEY_DEVICE_COMPATIBLE_IDS, StringList, Instance;
    ConfigFlags => DEVPKEY_DEVICE_CONFIG_FLAGS, U32Hex, Instance;
    UiNumber => DEVPKEY_DEVICE_UI_NUMBER, U32, Instance;
    BusTypeGuid => DEVPKEY_DEVICE_BUS_TYPE_GUID, BusTypeGuid, Instance;
    LegacyBusType => DEVPKEY_DEVICE_LEGACY_BUS_TYPE, U32, Instance;
    BusNumber => DEVPKEY_DEVICE_BUS_NUMBER, U32, Instance;
    SecuritySds => DEVPKEY_DEVICE_SECURITY_SDS, String, Instance;
    DevType => DEVPKEY_DEVICE_DEV_TYPE, U32, Instance;
    Exclusive => DEVPKEY_DEVICE_EXCLUSIVE, Boolean, Instance;
    Characteristics => DEVPKEY_DEVICE_CHARACTERISTICS, U32Hex, Instance;
    Address => DEVPKEY_DEVICE_ADDRESS, U32Hex, Instance;
    PowerData => DEVPKEY_DEVICE_POWER_DATA, PowerData, Instance;
    RemovalPolicy => DEVPKEY_DEVICE_REMOVAL_POLICY, U32, Instance;
    RemovalPolicyDefault => DEVPKEY_DEVICE_REMOVAL_POLICY_DEFAULT, U32, Instance;
    RemovalPolicyOverride => DEVPKEY_DEVICE_REMOVAL_POLICY_OVERRIDE, U32, Instance;
    InstallState => DEVPKEY_DEVICE_INSTALL_STATE, U32, Instance;
    LocationPaths => DEVPKEY_DEVICE_LOCATION_PATHS, StringList, Instance;
    BaseContainerId => DEVPKEY_DEVICE_BASE_CONTAINER_ID, Guid, Instance;
    EjectionRelations => DEVPKEY_DEVICE_EJECTION_RELATIONS, StringList, Instance;
    RemovalRelations => DEVPKEY_DEVICE_REMOVAL_RELATIONS, StringList, Instance;
    PowerRelations => DEVPKEY_DEVICE_POWER_RELATIONS, StringList, Instance;
    BusRelations => DEVPKEY_DEVICE_BUS_RELATIONS, StringList, Instance;
    Children => DEVPKEY_DEVICE_CHILDREN, StringList, Instance;
    Siblings => DEVPKEY_DEVICE_SIBLINGS, StringList, Instance;
    TransportRelations => DEVPKEY_DEVICE_TRANSPORT_RELATIONS, StringList, Instance;
    Reported => DEVPKEY_DEVICE_REPORTED, Boolean, Instance;
    Legacy => DEVPKEY_DEVICE_LEGACY, Boolean, Instance;
    ContainerId => DEVPKEY_DEVICE_CONTAINER_ID, Guid, Instance;
    InLocalMachineContainer => DEVPKEY_DEVICE_IN_LOCAL_MACHINE_CONTAINER, Boolean, Instance;
    Model => DEVPKEY_DEVICE_MODEL, String, Instance;
    ModelId => DEVPKEY_DEVICE_MODEL_ID, Guid, Instance;
    FriendlyNameAttributes => DEVPKEY_DEVICE_FRIENDLY_NAME_ATTRIBUTES, U32Hex, Instance;
    ManufacturerAttributes => DEVPKEY_DEVICE_MANUFACTURER_ATTRIBUTES, U32Hex, Instance;
    PresenceNotForDevice => DEVPKEY_DEVICE_PRESENCE_NOT_FOR_DEVICE, Boolean, Instance;
    SignalStrength => DEVPKEY_DEVICE_SIGNAL_STRENGTH, I32, Instance;
    IsAssociateableByUserAction => DEVPKEY_DEVICE_IS_ASSOCIATEABLE_BY_USER_ACTION, Boolean, Instance;
    ShowInUninstallUi => DEVPKEY_DEVICE_SHOW_IN_UNINSTALL_UI, Boolean, Instance;
    NumaProximityDomain => DEVPKEY_DEVICE_NUMA_PROXIMITY_DOMAIN, U32, Instance;
    DhpRebalancePolicy => DEVPKEY_DEVICE_DHP_REBALANCE_POLICY, U32, Instance;
    NumaNode => DEVPKEY_DEVICE_NUMA_NODE, U32, Instance;
    BusReportedDeviceDesc => DEVPKEY_DEVICE_BUS_REPORTED_DEVICE_DESC, String, Instance;
    IsPresent => DEVPKEY_DEVICE_IS_PRESENT, Boolean, Instance;
    ConfigurationId => DEVPKEY_DEVICE_CONFIGURATION_ID, String, Instance;
    ReportedDeviceIdsHash => DEVPKEY_DEVICE_REPORTED_DEVICE_IDS_HASH, U32, Instance;
    PhysicalDeviceLocation => DEVPKEY_DEVICE_PHYSICAL_DEVICE_LOCATION, Binary, Instance;
    BiosDeviceName => DEVPKEY_DEVICE_BIOS_DEVICE_NAME, String, Instance;
    DriverProblemDesc => DEVPKEY_DEVICE_DRIVER_PROBLEM_DESC, String, Instance;
    DebuggerSafe => DEVPKEY_DEVICE_DEBUGGER_SAFE, U32, Instance;
    PostInstallInProgress => DEVPKEY_DEVICE_POST_INSTALL_IN_PROGRESS, Boolean, Instance;
    Stack => DEVPKEY_DEVICE_STACK, StringList, Instance;
    ExtendedConfigurationIds => DEVPKEY_DEVICE_EXTENDED_CONFIGURATION_IDS, StringList, Instance;
    IsRebootRequired => DEVPKEY_DEVICE_IS_REBOOT_REQUIRED, Boolean, Instance;
    DependencyProviders => DEVPKEY_DEVICE_DEPENDENCY_PROVIDERS, StringList, Instance;
    DependencyDependents => DEVPKEY_DEVICE_DEPENDENCY_DEPENDENTS, StringList, Instance;
    SoftRestartSupported => DEVPKEY_DEVICE_SOFT_RESTART_SUPPORTED, Boolean, Instance;
    ExtendedAddress => DEVPKEY_DEVICE_EXTENDED_ADDRESS, U64Hex, Instance;
    AssignedToGuest => DEVPKEY_DEVICE_ASSIGNED_TO_GUEST, Boolean, Instance;
    CreatorProcessId => DEVPKEY_DEVICE_CREATOR_PROCESS_ID, U32, Instance;
    FirmwareVendor => DEVPKEY_DEVICE_FIRMWARE_VENDOR, String, Instance;
    SessionId => DEVPKEY_DEVICE_SESSION_ID, U32, Instance;
    DriverDesc => DEVPKEY_DEVICE_DRIVER_DESC, String, Instance;
    DriverInfPath => DEVPKEY_DEVICE_DRIVER_INF_PATH, String, Instance;
    DriverInfSection => DEVPKEY_DEVICE_DRIVER_INF_SECTION, String, Instance;
    DriverInfSectionExt => DEVPKEY_DEVICE_DRIVER_INF_SECTION_EXT, String, Instance;
    MatchingDeviceId => DEVPKEY_DEVICE_MATCHING_DEVICE_ID, String, Instance;
    DriverProvider => DEVPKEY_DEVICE_DRIVER_PROVIDER, String, Instance;
    DriverPropPageProvider => DEVPKEY_DEVICE_DRIVER_PROP_PAGE_PROVIDER, String, Instance;
    DriverCoInstallers => DEVPKEY_DEVICE_DRIVER_CO_INSTALLERS, StringList, Instance;
    ResourcePickerTags => DEVPKEY_DEVICE_RESOURCE_PICKER_TAGS, String, Instance;
    ResourcePickerExceptions => DEVPKEY_DEVICE_RESOURCE_PICKER_EXCEPTIONS, String, Instance;
    DriverRank => DEVPKEY_DEVICE_DRIVER_RANK, U32, Instance;
    DriverLogoLevel => DEVPKEY_DEVICE_DRIVER_LOGO_LEVEL, U32, Instance;
    NoConnectSound => DEVPKEY_DEVICE_NO_CONNECT_SOUND, Boolean, Instance;
    GenericDriverInstalled => DEVPKEY_DEVICE_GENERIC_DRIVER_INSTALLED, Boolean, Instance;
    AdditionalSoftwareRequested => DEVPKEY_DEVICE_ADDITIONAL_SOFTWARE_REQUESTED, Boolean, Instance;
    SafeRemovalRequired => DEVPKEY_DEVICE_SAFE_REMOVAL_REQUIRED, Boolean, Instance;
    SafeRemovalRequiredOverride => DEVPKEY_DEVICE_SAFE_REMOVAL_REQUIRED_OVERRIDE, Boolean, Instance;

    PkgModel => DEVPKEY_DRVPKG_MODEL, String, Instance;
    PkgVendorWebSite => DEVPKEY_DRVPKG_VENDOR_WEB_SITE, String, Instance;
    PkgDetailedDescription => DEVPKEY_DRVPKG_DETAILED_DESCRIPTION, String, Instance;
    PkgDocumentationLink => DEVPKEY_DRVPKG_DOCUMENTATION_LINK, String, Instance;
    PkgIcon => DEVPKEY_DRVPKG_ICON, StringList, Instance;
    PkgBrandingIcon => DEVPKEY_DRVPKG_BRANDING_ICON, StringList, Instance;

    ClassUpperFilters => DEVPKEY_DEVICE_CLASS_UPPER_FILTERS, StringList, Class;
    ClassLowerFilters => DEVPKEY_DEVICE_CLASS_LOWER_FILTERS, StringList, Class;
    ClassSecuritySds => DEVPKEY_DEVICE_CLASS_SECURITY_SDS, String, Class;
    ClassDevType => DEVPKEY_DEVICE_CLASS_DEV_TYPE, U32, Class;
    ClassExclusive => DEVPKEY_DEVICE_CLASS_EXCLUSIVE, Boolean, Class;
    ClassCharacteristics => DEVPKEY_DEVICE_CLASS_CHARACTERISTICS, U32Hex, Class;
    ClassName => DEVPKEY_DEVICE_CLASS_NAME, String, Class;
    ClassClassName => DEVPKEY_DEVICE_CLASS_CLASS_NAME, String, Class;
    ClassIcon => DEVPKEY_DEVICE_CLASS_ICON, String, Class;
    ClassClassInstaller => DEVPKEY_DEVICE_CLASS_CLASS_INSTALLER, String, Class;
    ClassPropPageProvider => DEVPKEY_DEVICE_CLASS_PROP_PAGE_PROVIDER, String, Class;
    ClassNoInstallClass => DEVPKEY_DEVICE_CLASS_NO_INSTALL_CLASS, Boolean, Class;
    ClassNoDisplayClass => DEVPKEY_DEVICE_CLASS_NO_DISPLAY_CLASS, Boolean, Class;
    ClassSilentInstall => DEVPKEY_DEVICE_CLASS_SILENT_INSTALL, Boolean, Class;
    ClassNoUseClass => DEVPKEY_DEVICE_CLASS_NO_USE_CLASS, Boolean, Class;
    ClassDefaultService => DEVPKEY_DEVICE_CLASS_DEFAULT_SERVICE, String, Class;
    ClassIconPath => DEVPKEY_DEVICE_CLASS_ICON_PATH, StringList, Class;
    ClassDhpRebalanceOptOut => DEVPKEY_DEVICE_CLASS_DHP_REBALANCE_OPT_OUT, Boolean, Class;
    ClassClassCoInstallers => DEVPKEY_DEVICE_CLASS_CLASS_CO_INSTALLERS, StringList, Class;

    InterfaceFriendlyName => DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME, String, Instance;
    InterfaceEnabled => DEVPKEY_DEVICE_INTERFACE_ENABLED, Boolean, Instance;
    InterfaceClassGuid => DEVPKEY_DEVICE_INTERFACE_CLASS_GUID, Guid, Instance;
    InterfaceReferenceString => DEVPKEY_DEVICE_INTERFACE_REFERENCE_STRING, String, Instance;
    InterfaceRestricted => DEVPKEY_DEVICE_INTERFACE_RESTRICTED, Boolean, Instance;
    InterfaceUnrestrictedAppCapabilities => DEVPKEY_DEVICE_INTERFACE_UNRESTRICTED_APP_CAPABILITIES, StringList, Instance;
    InterfaceSchematicName => DEVPKEY_DEVICE_INTERFACE_SCHEMATIC_NAME, String, Instance;

    InterfaceClassDefaultInterface => DEVPKEY_DEVICE_INTERFACE_CLASS_DEFAULT_INTERFACE, String, Class;
    InterfaceClassName => DEVPKEY_DEVICE_INTERFACE_CLASS_NAME, String, Class;

    ContainerAddress => DEVPKEY_DEVICE_CONTAINER_ADDRESS, StringOrStringList, Instance;
    ContainerDiscoveryMethod => DEVPKEY_DEVICE_CONTAINER_DISCOVERY_METHOD, StringList, Instance;
    ContainerIsEncrypted => DEVPKEY_DEVICE_CONTAINER_IS_ENCRYPTED, Boolean, Instance;
    ContainerIsAuthenticated => DEVPKEY_DEVICE_CONTAINER_IS_AUTHENTICATED, Boolean, Instance;
    ContainerIsConnected => DEVPKEY_DEVICE_CONTAINER_IS_CONNECTED, Boolean, Instance;
    ContainerIsPaired => DEVPKEY_DEVICE_CONTAINER_IS_PAIRED, Boolean, Instance;
    ContainerIcon => DEVPKEY_DEVICE_CONTAINER_ICON, String, Instance;
    ContainerVersion => DEVPKEY_DEVICE_CONTAINER_VERSION, String, Instance;
    ContainerLastSeen => DEVPKEY_DEVICE_CONTAINER_LAST_SEEN, TimeStamp, Instance;
    ContainerLastConnected => DEVPKEY_DEVICE_CONTAINER_LAST_CONNECTED, TimeStamp, Instance;
    ContainerIsShowInDisconnectedState => DEVPKEY_DEVICE_CONTAINER_IS_SHOW_IN_DISCONNECTED_STATE, Boolean, Instance;
    ContainerIsLocalMachine => DEVPKEY_DEVICE_CONTAINER_IS_LOCAL_MACHINE, Boolean, Instance;
    ContainerMetadataPath => DEVPKEY_DEVICE_CONTAINER_METADATA_PATH, String, Instance;
    ContainerIsMetadataSearchInProgress => DEVPKEY_DEVICE_CONTAINER_IS_METADATA_SEARCH_IN_PROGRESS, Boolean, Instance;
    ContainerMetadataChecksum => DEVPKEY_DEVICE_CONTAINER_METADATA_CHECKSUM, Binary, Instance;
    ContainerIsNotInterestingForDisplay => DEVPKEY_DEVICE_CONTAINER_IS_NOT_INTERESTING_FOR_DISPLAY, Boolean, Instance;
    ContainerLaunchDeviceStageOnDeviceConnect => DEVPKEY_DEVICE_CONTAINER_LAUNCH_DEVICE_STAGE_ON_DEVICE_CONNECT, Boolean, Instance;
    ContainerLaunchDeviceStageFromExplorer => DEVPKEY_DEVICE_CONTAINER_LAUNCH_DEVICE_STAGE_FROM_EXPLORER, Boolean, Instance;
    ContainerBaselineExperienceId => DEVPKEY_DEVICE_CONTAINER_BASELINE_EXPERIENCE_ID, Guid, Instance;
    ContainerIsDeviceUniquelyIdentifiable => DEVPKEY_DEVICE_CONTAINER_IS_DEVICE_UNIQUELY_IDENTIFIABLE, Boolean, Instance;
    ContainerAssociationArray => DEVPKEY_DEVICE_CONTAINER_ASSOCIATION_ARRAY, StringList, Instance;
    ContainerDeviceDescription1 => DEVPKEY_DEVICE_CONTAINER_DEVICE_DESCRIPTION1, String, Instance;
    ContainerDeviceDescription2 => DEVPKEY_DEVICE_CONTAINER_DEVICE_DESCRIPTION2, String, Instance;
    ContainerHasProblem => DEVPKEY_DEVICE_CONTAINER_HAS_PROBLEM, Boolean, Instance;
    ContainerIsSharedDevice => DEVPKEY_DEVICE_CONTAINER_IS_SHARED_DEVICE, Boolean, Instance;
    ContainerIsNetworkDevice => DEVPKEY_DEVICE_CONTAINER_IS_NETWORK_DEVICE, Boolean, Instance;
    ContainerIsDefaultDevice => DEVPKEY_DEVICE_CONTAINER_IS_DEFAULT_DEVICE, Boolean, Instance;
    ContainerMetadataCabinet => DEVPKEY_DEVICE_CONTAINER_METADATA_CABINET, String, Instance;
    ContainerRequiresPairingElevation => DEVPKEY_DEVICE_CONTAINER_REQUIRES_PAIRING_ELEVATION, Boolean, Instance;
    ContainerExperienceId => DEVPKEY_DEVICE_CONTAINER_EXPERIENCE_ID, Guid, Instance;
    ContainerCategory => DEVPKEY_DEVICE_CONTAINER_CATEGORY, StringList, Instance;
    ContainerCategoryDescSingular => DEVPKEY_DEVICE_CONTAINER_CATEGORY_DESC_SINGULAR, StringList, Instance;
    ContainerCategoryDescPlural => DEVPKEY_DEVICE_CONTAINER_CATEGORY_DESC_PLURAL, StringList, Instance;
    ContainerCategoryIcon => DEVPKEY_DEVICE_CONTAINER_CATEGORY_ICON, String, Instance;
    ContainerCategoryGroupDesc => DEVPKEY_DEVICE_CONTAINER_CATEGORY_GROUP_DESC, StringList, Instance;
    ContainerCategoryGroupIcon => DEVPKEY_DEVICE_CONTAINER_CATEGORY_GROUP_ICON, String, Instance;
    ContainerPrimaryCategory => DEVPKEY_DEVICE_CONTAINER_PRIMARY_CATEGORY, String, Instance;
    ContainerUnpairUninstall => DEVPKEY_DEVICE_CONTAINER_UNPAIR_UNINSTALL, Boolean, Instance;
    ContainerRequiresUninstallElevation => DEVPKEY_DEVICE_CONTAINER_REQUIRES_UNINSTALL_ELEVATION, Boolean, Instance;
    ContainerDeviceFunctionSubRank => DEVPKEY_DEVICE_CONTAINER_DEVICE_FUNCTION_SUB_RANK, U32, Instance;
    ContainerAlwaysShowDeviceAsConnected => DEVPKEY_DEVICE_CONTAINER_ALWAYS_SHOW_DEVICE_AS_CONNECTED, Boolean, Instance;
    ContainerConfigFlags => DEVPKEY_DEVICE_CONTAINER_CONFIG_FLAGS, U32Hex, Instance;
    ContainerPrivilegedPackageFamilyNames => DEVPKEY_DEVICE_CONTAINER_PRIVILEGED_PACKAGE_FAMILY_NAMES, StringList, Instance;
    ContainerCustomPrivilegedPackageFamilyNames => DEVPKEY_DEVICE_CONTAINER_CUSTOM_PRIVILEGED_PACKAGE_FAMILY_NAMES, StringList, Instance;
    ContainerIsRebootRequired => DEVPKEY_DEVICE_CONTAINER_IS_REBOOT_REQUIRED, Boolean, Instance;
    ContainerFriendlyName => DEVPKEY_DEVICE_CONTAINER_FRIENDLY_NAME, String, Instance;
    ContainerManufacturer => DEVPKEY_DEVICE_CONTAINER_MANUFACTURER, String, Instance;
    ContainerModelName => DEVPKEY_DEVICE_CONTAINER_MODEL_NAME, String, Instance;
    ContainerModelNumber => DEVPKEY_DEVICE_CONTAINER_MODEL_NUMBER, String, Instance;
    ContainerInstallInProgress => DEVPKEY_DEVICE_CONTAINER_INSTALL_IN_PROGRESS, Boolean, Instance;

    ObjectType => DEVPKEY_DEV_QUERY_OBJECT_TYPE, U32, Instance;

    PciDeviceType => DEVPKEY_PCI_DEVICE_DEVICE_TYPE, PciDeviceType, Instance;
    PciCurrentSpeedAndMode => DEVPKEY_PCI_DEVICE_CURRENT_SPEED_AND_MODE, PciSpeedAndMode, Instance;
    PciBaseClass => DEVPKEY_PCI_DEVICE_BASE_CLASS, U32Hex, Instance;
    PciSubClass => DEVPKEY_PCI_DEVICE_SUB_CLASS, U32Hex, Instance;
    PciProgIf => DEVPKEY_PCI_DEVICE_PROG_IF, U32Hex, Instance;
    PciCurrentPayloadSize => DEVPKEY_PCI_DEVICE_CURRENT_PAYLOAD_SIZE, U32, Instance;
    PciMaxPayloadSize => DEVPKEY_PCI_DEVICE_MAX_PAYLOAD_SIZE, U32, Instance;
    PciMaxReadRequestSize => DEVPKEY_PCI_DEVICE_MAX_READ_REQUEST_SIZE, U32, Instance;
    PciCurrentLinkSpeed => DEVPKEY_PCI_DEVICE_CURRENT_LINK_SPEED, PciLinkSpeed, Instance;
    PciCurrentLinkWidth => DEVPKEY_PCI_DEVICE_CURRENT_LINK_WIDTH, PciLinkWidth, Instance;
    PciMaxLinkSpeed => DEVPKEY_PCI_DEVICE_MAX_LINK_SPEED, PciLinkSpeed, Instance;
    PciMaxLinkWidth => DEVPKEY_PCI_DEVICE_MAX_LINK_WIDTH, PciLinkWidth, Instance;
    PciExpressSpecVersion => DEVPKEY_PCI_DEVICE_EXPRESS_SPEC_VERSION, U32, Instance;
    PciInterruptSupport => DEVPKEY_PCI_DEVICE_INTERRUPT_SUPPORT, PciInterruptSupport, Instance;
    PciInterruptMessageMaximum => DEVPKEY_PCI_DEVICE_INTERRUPT_MESSAGE_MAXIMUM, U32, Instance;
    PciBarTypes => DEVPKEY_PCI_DEVICE_BAR_TYPES, U32Hex, Instance;
    PciAerCapabilityPresent => DEVPKEY_PCI_DEVICE_AER_CAPABILITY_PRESENT, Boolean, Instance;
    PciExpressCapabilityControl => DEVPKEY_PCI_ROOT_BUS_PCI_EXPRESS_CAPABILITY_CONTROL, Boolean, Instance;
    PciNativeExpressControl => DEVPKEY_PCI_ROOT_BUS_NATIVE_PCI_EXPRESS_CONTROL, Boolean, Instance;
    PciSystemMsiSupport => DEVPKEY_PCI_ROOT_BUS_SYSTEM_MSI_SUPPORT, Boolean, Instance;

    StoragePortable => DEVPKEY_STORAGE_PORTABLE, Boolean, Instance;
    StorageRemovableMedia => DEVPKEY_STORAGE_REMOVABLE_MEDIA, Boolean, Instance;
    StorageSystemCritical => DEVPKEY_STORAGE_SYSTEM_CRITICAL, Boolean, Instance;
    StorageDiskNumber => DEVPKEY_STORAGE_DISK_NUMBER, U32, Instance;
    StoragePartitionNumber => DEVPKEY_STORAGE_PARTITION_NUMBER, U32, Instance;
}
