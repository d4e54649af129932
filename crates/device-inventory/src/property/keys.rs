//! OS property keys (`DEVPROPKEY`) for every property in the table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guid::Guid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyKey {
    pub fmtid: Guid,
    pub pid: u32,
}

impl PropertyKey {
    pub const fn new(fmtid: u128, pid: u32) -> Self {
        Self {
            fmtid: Guid::from_u128(fmtid),
            pid,
        }
    }
}

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.fmtid, self.pid)
    }
}

const NAME_FMTID: u128 = 0xb725f130_47ef_101a_a5f1_02608c9eebac;
const DEVICE: u128 = 0xa45c254e_df1c_4efd_8020_67d146a850e0;
const DEVICE_INSTANCE: u128 = 0x78c34fc8_104a_4aca_9ea4_524d52996e57;
const DEVICE_NODE: u128 = 0x4340a6c5_93fa_4706_972c_7b648008a5a7;
const DEVICE_REPORTED: u128 = 0x80497100_8c73_48b9_aad9_ce387e19c56e;
const DEVICE_CONTAINER: u128 = 0x8c7ed206_3f8a_4827_b3ab_ae9e1faefc6c;
const DEVICE_MODEL: u128 = 0x80d81ea6_7473_4b0c_8216_efc11a2c4c8b;
const DEVICE_EXTENDED: u128 = 0x540b947e_8b40_45bc_a8a2_6a0b894cbda2;
const DEVICE_INSTALL: u128 = 0x83da6326_97a6_4088_9453_a1923f573b29;
const DEVICE_DRIVER: u128 = 0xa8b865dd_2e3d_4094_ad97_e593a70c75d6;
const DEVICE_SAFE_REMOVAL: u128 = 0xafd97640_86a3_4210_b67c_289c41aabe55;
const DRIVER_PACKAGE: u128 = 0xcf73bb51_3abf_44a2_85e0_9a3dc7a12132;
const CLASS_FILTERS: u128 = 0x4321918b_f69e_470d_a5de_4d88c75ad24b;
const CLASS: u128 = 0x259abffc_50a7_47ce_af08_68c9a7d73366;
const CLASS_DHP: u128 = 0xd14d3ef3_66cf_4ba2_9d38_0ddb37ab4701;
const CLASS_COINSTALLERS: u128 = 0x713d1703_a2e2_49f5_9214_56472ef3da5c;
const INTERFACE: u128 = 0x026e516e_b814_414b_83cd_856d6fef4822;
const INTERFACE_CLASS: u128 = 0x14c83a99_0b3f_44b7_be4c_a178d3990564;
const CONTAINER_DISPLAY: u128 = 0x656a3bb3_ecc0_43fd_8477_4ae0404a96cd;
const DEV_QUERY: u128 = 0x13673f42_a3d6_49f6_b4da_ae46e0c5237c;
const PCI_DEVICE: u128 = 0x3ab22e31_8264_4b4e_9af5_a8d2d8e33e62;
const PCI_ROOT_BUS: u128 = 0xd817fc28_793e_4b9e_9970_469d8be63073;
const STORAGE: u128 = 0x4d1ebee8_0803_4774_9842_b77db50265e9;

pub const DEVPKEY_NAME: PropertyKey = PropertyKey::new(NAME_FMTID, 10);

pub const DEVPKEY_DEVICE_DEVICE_DESC: PropertyKey = PropertyKey::new(DEVICE, 2);
pub const DEVPKEY_DEVICE_HARDWARE_IDS: PropertyKey = PropertyKey::new(DEVICE, 3);
pub const DEVPKEY_DEVICE_COMPATIBLE_IDS: PropertyKey = PropertyKey::new(DEVICE, 4);
pub const DEVPKEY_DEVICE_SERVICE: PropertyKey = PropertyKey::new(DEVICE, 6);
pub const DEVPKEY_DEVICE_CLASS: PropertyKey = PropertyKey::new(DEVICE, 9);
pub const DEVPKEY_DEVICE_CLASS_GUID: PropertyKey = PropertyKey::new(DEVICE, 10);
pub const DEVPKEY_DEVICE_DRIVER: PropertyKey = PropertyKey::new(DEVICE, 11);
pub const DEVPKEY_DEVICE_CONFIG_FLAGS: PropertyKey = PropertyKey::new(DEVICE, 12);
pub const DEVPKEY_DEVICE_MANUFACTURER: PropertyKey = PropertyKey::new(DEVICE, 13);
pub const DEVPKEY_DEVICE_FRIENDLY_NAME: PropertyKey = PropertyKey::new(DEVICE, 14);
pub const DEVPKEY_DEVICE_LOCATION_INFO: PropertyKey = PropertyKey::new(DEVICE, 15);
pub const DEVPKEY_DEVICE_PDO_NAME: PropertyKey = PropertyKey::new(DEVICE, 16);
pub const DEVPKEY_DEVICE_CAPABILITIES: PropertyKey = PropertyKey::new(DEVICE, 17);
pub const DEVPKEY_DEVICE_UI_NUMBER: PropertyKey = PropertyKey::new(DEVICE, 18);
pub const DEVPKEY_DEVICE_UPPER_FILTERS: PropertyKey = PropertyKey::new(DEVICE, 19);
pub const DEVPKEY_DEVICE_LOWER_FILTERS: PropertyKey = PropertyKey::new(DEVICE, 20);
pub const DEVPKEY_DEVICE_BUS_TYPE_GUID: PropertyKey = PropertyKey::new(DEVICE, 21);
pub const DEVPKEY_DEVICE_LEGACY_BUS_TYPE: PropertyKey = PropertyKey::new(DEVICE, 22);
pub const DEVPKEY_DEVICE_BUS_NUMBER: PropertyKey = PropertyKey::new(DEVICE, 23);
pub const DEVPKEY_DEVICE_ENUMERATOR_NAME: PropertyKey = PropertyKey::new(DEVICE, 24);
pub const DEVPKEY_DEVICE_SECURITY_SDS: PropertyKey = PropertyKey::new(DEVICE, 26);
pub const DEVPKEY_DEVICE_DEV_TYPE: PropertyKey = PropertyKey::new(DEVICE, 27);
pub const DEVPKEY_DEVICE_EXCLUSIVE: PropertyKey = PropertyKey::new(DEVICE, 28);
pub const DEVPKEY_DEVICE_CHARACTERISTICS: PropertyKey = PropertyKey::new(DEVICE, 29);
pub const DEVPKEY_DEVICE_ADDRESS: PropertyKey = PropertyKey::new(DEVICE, 30);
pub const DEVPKEY_DEVICE_POWER_DATA: PropertyKey = PropertyKey::new(DEVICE, 32);
pub const DEVPKEY_DEVICE_REMOVAL_POLICY: PropertyKey = PropertyKey::new(DEVICE, 33);
pub const DEVPKEY_DEVICE_REMOVAL_POLICY_DEFAULT: PropertyKey = PropertyKey::new(DEVICE, 34);
pub const DEVPKEY_DEVICE_REMOVAL_POLICY_OVERRIDE: PropertyKey = PropertyKey::new(DEVICE, 35);
pub const DEVPKEY_DEVICE_INSTALL_STATE: PropertyKey = PropertyKey::new(DEVICE, 36);
pub const DEVPKEY_DEVICE_LOCATION_PATHS: PropertyKey = PropertyKey::new(DEVICE, 37);
pub const DEVPKEY_DEVICE_BASE_CONTAINER_ID: PropertyKey = PropertyKey::new(DEVICE, 38);

pub const DEVPKEY_DEVICE_INSTANCE_ID: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 256);
pub const DEVPKEY_DEVICE_MODEL: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 39);

pub const DEVPKEY_DEVICE_DEV_NODE_STATUS: PropertyKey = PropertyKey::new(DEVICE_NODE, 2);
pub const DEVPKEY_DEVICE_PROBLEM_CODE: PropertyKey = PropertyKey::new(DEVICE_NODE, 3);
pub const DEVPKEY_DEVICE_EJECTION_RELATIONS: PropertyKey = PropertyKey::new(DEVICE_NODE, 4);
pub const DEVPKEY_DEVICE_REMOVAL_RELATIONS: PropertyKey = PropertyKey::new(DEVICE_NODE, 5);
pub const DEVPKEY_DEVICE_POWER_RELATIONS: PropertyKey = PropertyKey::new(DEVICE_NODE, 6);
pub const DEVPKEY_DEVICE_BUS_RELATIONS: PropertyKey = PropertyKey::new(DEVICE_NODE, 7);
pub const DEVPKEY_DEVICE_PARENT: PropertyKey = PropertyKey::new(DEVICE_NODE, 8);
pub const DEVPKEY_DEVICE_CHILDREN: PropertyKey = PropertyKey::new(DEVICE_NODE, 9);
pub const DEVPKEY_DEVICE_SIBLINGS: PropertyKey = PropertyKey::new(DEVICE_NODE, 10);
pub const DEVPKEY_DEVICE_TRANSPORT_RELATIONS: PropertyKey = PropertyKey::new(DEVICE_NODE, 11);
pub const DEVPKEY_DEVICE_PROBLEM_STATUS: PropertyKey = PropertyKey::new(DEVICE_NODE, 12);

pub const DEVPKEY_DEVICE_REPORTED: PropertyKey = PropertyKey::new(DEVICE_REPORTED, 2);
pub const DEVPKEY_DEVICE_LEGACY: PropertyKey = PropertyKey::new(DEVICE_REPORTED, 3);

pub const DEVPKEY_DEVICE_CONTAINER_ID: PropertyKey = PropertyKey::new(DEVICE_CONTAINER, 2);
pub const DEVPKEY_DEVICE_IN_LOCAL_MACHINE_CONTAINER: PropertyKey =
    PropertyKey::new(DEVICE_CONTAINER, 4);

pub const DEVPKEY_DEVICE_MODEL_ID: PropertyKey = PropertyKey::new(DEVICE_MODEL, 2);
pub const DEVPKEY_DEVICE_FRIENDLY_NAME_ATTRIBUTES: PropertyKey = PropertyKey::new(DEVICE_MODEL, 3);
pub const DEVPKEY_DEVICE_MANUFACTURER_ATTRIBUTES: PropertyKey = PropertyKey::new(DEVICE_MODEL, 4);
pub const DEVPKEY_DEVICE_PRESENCE_NOT_FOR_DEVICE: PropertyKey = PropertyKey::new(DEVICE_MODEL, 5);
pub const DEVPKEY_DEVICE_SIGNAL_STRENGTH: PropertyKey = PropertyKey::new(DEVICE_MODEL, 6);
pub const DEVPKEY_DEVICE_IS_ASSOCIATEABLE_BY_USER_ACTION: PropertyKey =
    PropertyKey::new(DEVICE_MODEL, 7);
pub const DEVPKEY_DEVICE_SHOW_IN_UNINSTALL_UI: PropertyKey = PropertyKey::new(DEVICE_MODEL, 8);

pub const DEVPKEY_DEVICE_NUMA_PROXIMITY_DOMAIN: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 1);
pub const DEVPKEY_DEVICE_DHP_REBALANCE_POLICY: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 2);
pub const DEVPKEY_DEVICE_NUMA_NODE: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 3);
pub const DEVPKEY_DEVICE_BUS_REPORTED_DEVICE_DESC: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 4);
pub const DEVPKEY_DEVICE_IS_PRESENT: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 5);
pub const DEVPKEY_DEVICE_HAS_PROBLEM: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 6);
pub const DEVPKEY_DEVICE_CONFIGURATION_ID: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 7);
pub const DEVPKEY_DEVICE_REPORTED_DEVICE_IDS_HASH: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 8);
pub const DEVPKEY_DEVICE_PHYSICAL_DEVICE_LOCATION: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 9);
pub const DEVPKEY_DEVICE_BIOS_DEVICE_NAME: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 10);
pub const DEVPKEY_DEVICE_DRIVER_PROBLEM_DESC: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 11);
pub const DEVPKEY_DEVICE_DEBUGGER_SAFE: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 12);
pub const DEVPKEY_DEVICE_POST_INSTALL_IN_PROGRESS: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 13);
pub const DEVPKEY_DEVICE_STACK: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 14);
pub const DEVPKEY_DEVICE_EXTENDED_CONFIGURATION_IDS: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 15);
pub const DEVPKEY_DEVICE_IS_REBOOT_REQUIRED: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 16);
pub const DEVPKEY_DEVICE_FIRMWARE_DATE: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 17);
pub const DEVPKEY_DEVICE_FIRMWARE_VERSION: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 18);
pub const DEVPKEY_DEVICE_FIRMWARE_REVISION: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 19);
pub const DEVPKEY_DEVICE_DEPENDENCY_PROVIDERS: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 20);
pub const DEVPKEY_DEVICE_DEPENDENCY_DEPENDENTS: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 21);
pub const DEVPKEY_DEVICE_SOFT_RESTART_SUPPORTED: PropertyKey =
    PropertyKey::new(DEVICE_EXTENDED, 22);
pub const DEVPKEY_DEVICE_EXTENDED_ADDRESS: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 23);
pub const DEVPKEY_DEVICE_ASSIGNED_TO_GUEST: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 24);
pub const DEVPKEY_DEVICE_CREATOR_PROCESS_ID: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 25);
pub const DEVPKEY_DEVICE_FIRMWARE_VENDOR: PropertyKey = PropertyKey::new(DEVICE_EXTENDED, 26);

pub const DEVPKEY_DEVICE_SESSION_ID: PropertyKey = PropertyKey::new(DEVICE_INSTALL, 6);
pub const DEVPKEY_DEVICE_INSTALL_DATE: PropertyKey = PropertyKey::new(DEVICE_INSTALL, 100);
pub const DEVPKEY_DEVICE_FIRST_INSTALL_DATE: PropertyKey = PropertyKey::new(DEVICE_INSTALL, 101);
pub const DEVPKEY_DEVICE_LAST_ARRIVAL_DATE: PropertyKey = PropertyKey::new(DEVICE_INSTALL, 102);
pub const DEVPKEY_DEVICE_LAST_REMOVAL_DATE: PropertyKey = PropertyKey::new(DEVICE_INSTALL, 103);

pub const DEVPKEY_DEVICE_DRIVER_DATE: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 2);
pub const DEVPKEY_DEVICE_DRIVER_VERSION: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 3);
pub const DEVPKEY_DEVICE_DRIVER_DESC: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 4);
pub const DEVPKEY_DEVICE_DRIVER_INF_PATH: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 5);
pub const DEVPKEY_DEVICE_DRIVER_INF_SECTION: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 6);
pub const DEVPKEY_DEVICE_DRIVER_INF_SECTION_EXT: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 7);
pub const DEVPKEY_DEVICE_MATCHING_DEVICE_ID: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 8);
pub const DEVPKEY_DEVICE_DRIVER_PROVIDER: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 9);
pub const DEVPKEY_DEVICE_DRIVER_PROP_PAGE_PROVIDER: PropertyKey =
    PropertyKey::new(DEVICE_DRIVER, 10);
pub const DEVPKEY_DEVICE_DRIVER_CO_INSTALLERS: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 11);
pub const DEVPKEY_DEVICE_RESOURCE_PICKER_TAGS: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 12);
pub const DEVPKEY_DEVICE_RESOURCE_PICKER_EXCEPTIONS: PropertyKey =
    PropertyKey::new(DEVICE_DRIVER, 13);
pub const DEVPKEY_DEVICE_DRIVER_RANK: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 14);
pub const DEVPKEY_DEVICE_DRIVER_LOGO_LEVEL: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 15);
pub const DEVPKEY_DEVICE_NO_CONNECT_SOUND: PropertyKey = PropertyKey::new(DEVICE_DRIVER, 17);
pub const DEVPKEY_DEVICE_GENERIC_DRIVER_INSTALLED: PropertyKey =
    PropertyKey::new(DEVICE_DRIVER, 18);
pub const DEVPKEY_DEVICE_ADDITIONAL_SOFTWARE_REQUESTED: PropertyKey =
    PropertyKey::new(DEVICE_DRIVER, 19);

pub const DEVPKEY_DEVICE_SAFE_REMOVAL_REQUIRED: PropertyKey =
    PropertyKey::new(DEVICE_SAFE_REMOVAL, 2);
pub const DEVPKEY_DEVICE_SAFE_REMOVAL_REQUIRED_OVERRIDE: PropertyKey =
    PropertyKey::new(DEVICE_SAFE_REMOVAL, 3);

pub const DEVPKEY_DRVPKG_MODEL: PropertyKey = PropertyKey::new(DRIVER_PACKAGE, 2);
pub const DEVPKEY_DRVPKG_VENDOR_WEB_SITE: PropertyKey = PropertyKey::new(DRIVER_PACKAGE, 3);
pub const DEVPKEY_DRVPKG_DETAILED_DESCRIPTION: PropertyKey = PropertyKey::new(DRIVER_PACKAGE, 4);
pub const DEVPKEY_DRVPKG_DOCUMENTATION_LINK: PropertyKey = PropertyKey::new(DRIVER_PACKAGE, 5);
pub const DEVPKEY_DRVPKG_ICON: PropertyKey = PropertyKey::new(DRIVER_PACKAGE, 6);
pub const DEVPKEY_DRVPKG_BRANDING_ICON: PropertyKey = PropertyKey::new(DRIVER_PACKAGE, 7);

pub const DEVPKEY_DEVICE_CLASS_UPPER_FILTERS: PropertyKey = PropertyKey::new(CLASS_FILTERS, 19);
pub const DEVPKEY_DEVICE_CLASS_LOWER_FILTERS: PropertyKey = PropertyKey::new(CLASS_FILTERS, 20);
pub const DEVPKEY_DEVICE_CLASS_SECURITY_SDS: PropertyKey = PropertyKey::new(CLASS_FILTERS, 26);
pub const DEVPKEY_DEVICE_CLASS_DEV_TYPE: PropertyKey = PropertyKey::new(CLASS_FILTERS, 27);
pub const DEVPKEY_DEVICE_CLASS_EXCLUSIVE: PropertyKey = PropertyKey::new(CLASS_FILTERS, 28);
pub const DEVPKEY_DEVICE_CLASS_CHARACTERISTICS: PropertyKey = PropertyKey::new(CLASS_FILTERS, 29);
pub const DEVPKEY_DEVICE_CLASS_NAME: PropertyKey = PropertyKey::new(CLASS, 2);
pub const DEVPKEY_DEVICE_CLASS_CLASS_NAME: PropertyKey = PropertyKey::new(CLASS, 3);
pub const DEVPKEY_DEVICE_CLASS_ICON: PropertyKey = PropertyKey::new(CLASS, 4);
pub const DEVPKEY_DEVICE_CLASS_CLASS_INSTALLER: PropertyKey = PropertyKey::new(CLASS, 5);
pub const DEVPKEY_DEVICE_CLASS_PROP_PAGE_PROVIDER: PropertyKey = PropertyKey::new(CLASS, 6);
pub const DEVPKEY_DEVICE_CLASS_NO_INSTALL_CLASS: PropertyKey = PropertyKey::new(CLASS, 7);
pub const DEVPKEY_DEVICE_CLASS_NO_DISPLAY_CLASS: PropertyKey = PropertyKey::new(CLASS, 8);
pub const DEVPKEY_DEVICE_CLASS_SILENT_INSTALL: PropertyKey = PropertyKey::new(CLASS, 9);
pub const DEVPKEY_DEVICE_CLASS_NO_USE_CLASS: PropertyKey = PropertyKey::new(CLASS, 10);
pub const DEVPKEY_DEVICE_CLASS_DEFAULT_SERVICE: PropertyKey = PropertyKey::new(CLASS, 11);
pub const DEVPKEY_DEVICE_CLASS_ICON_PATH: PropertyKey = PropertyKey::new(CLASS, 12);
pub const DEVPKEY_DEVICE_CLASS_DHP_REBALANCE_OPT_OUT: PropertyKey = PropertyKey::new(CLASS_DHP, 2);
pub const DEVPKEY_DEVICE_CLASS_CLASS_CO_INSTALLERS: PropertyKey =
    PropertyKey::new(CLASS_COINSTALLERS, 2);

pub const DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME: PropertyKey = PropertyKey::new(INTERFACE, 2);
pub const DEVPKEY_DEVICE_INTERFACE_ENABLED: PropertyKey = PropertyKey::new(INTERFACE, 3);
pub const DEVPKEY_DEVICE_INTERFACE_CLASS_GUID: PropertyKey = PropertyKey::new(INTERFACE, 4);
pub const DEVPKEY_DEVICE_INTERFACE_REFERENCE_STRING: PropertyKey = PropertyKey::new(INTERFACE, 5);
pub const DEVPKEY_DEVICE_INTERFACE_RESTRICTED: PropertyKey = PropertyKey::new(INTERFACE, 6);
pub const DEVPKEY_DEVICE_INTERFACE_UNRESTRICTED_APP_CAPABILITIES: PropertyKey =
    PropertyKey::new(INTERFACE, 8);
pub const DEVPKEY_DEVICE_INTERFACE_SCHEMATIC_NAME: PropertyKey = PropertyKey::new(INTERFACE, 9);

pub const DEVPKEY_DEVICE_INTERFACE_CLASS_DEFAULT_INTERFACE: PropertyKey =
    PropertyKey::new(INTERFACE_CLASS, 2);
pub const DEVPKEY_DEVICE_INTERFACE_CLASS_NAME: PropertyKey = PropertyKey::new(INTERFACE_CLASS, 3);

pub const DEVPKEY_DEVICE_CONTAINER_ADDRESS: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 51);
pub const DEVPKEY_DEVICE_CONTAINER_DISCOVERY_METHOD: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 52);
pub const DEVPKEY_DEVICE_CONTAINER_IS_ENCRYPTED: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 53);
pub const DEVPKEY_DEVICE_CONTAINER_IS_AUTHENTICATED: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 54);
pub const DEVPKEY_DEVICE_CONTAINER_IS_CONNECTED: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 55);
pub const DEVPKEY_DEVICE_CONTAINER_IS_PAIRED: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 56);
pub const DEVPKEY_DEVICE_CONTAINER_ICON: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 57);
pub const DEVPKEY_DEVICE_CONTAINER_VERSION: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 65);
pub const DEVPKEY_DEVICE_CONTAINER_LAST_SEEN: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 66);
pub const DEVPKEY_DEVICE_CONTAINER_LAST_CONNECTED: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 67);
pub const DEVPKEY_DEVICE_CONTAINER_IS_SHOW_IN_DISCONNECTED_STATE: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 68);
pub const DEVPKEY_DEVICE_CONTAINER_IS_LOCAL_MACHINE: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 70);
pub const DEVPKEY_DEVICE_CONTAINER_METADATA_PATH: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 71);
pub const DEVPKEY_DEVICE_CONTAINER_IS_METADATA_SEARCH_IN_PROGRESS: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 72);
pub const DEVPKEY_DEVICE_CONTAINER_METADATA_CHECKSUM: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 73);
pub const DEVPKEY_DEVICE_CONTAINER_IS_NOT_INTERESTING_FOR_DISPLAY: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 74);
pub const DEVPKEY_DEVICE_CONTAINER_LAUNCH_DEVICE_STAGE_ON_DEVICE_CONNECT: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 76);
pub const DEVPKEY_DEVICE_CONTAINER_LAUNCH_DEVICE_STAGE_FROM_EXPLORER: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 77);
pub const DEVPKEY_DEVICE_CONTAINER_BASELINE_EXPERIENCE_ID: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 78);
pub const DEVPKEY_DEVICE_CONTAINER_IS_DEVICE_UNIQUELY_IDENTIFIABLE: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 79);
pub const DEVPKEY_DEVICE_CONTAINER_ASSOCIATION_ARRAY: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 80);
pub const DEVPKEY_DEVICE_CONTAINER_DEVICE_DESCRIPTION1: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 81);
pub const DEVPKEY_DEVICE_CONTAINER_DEVICE_DESCRIPTION2: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 82);
pub const DEVPKEY_DEVICE_CONTAINER_HAS_PROBLEM: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 83);
pub const DEVPKEY_DEVICE_CONTAINER_IS_SHARED_DEVICE: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 84);
pub const DEVPKEY_DEVICE_CONTAINER_IS_NETWORK_DEVICE: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 85);
pub const DEVPKEY_DEVICE_CONTAINER_IS_DEFAULT_DEVICE: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 86);
pub const DEVPKEY_DEVICE_CONTAINER_METADATA_CABINET: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 87);
pub const DEVPKEY_DEVICE_CONTAINER_REQUIRES_PAIRING_ELEVATION: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 88);
pub const DEVPKEY_DEVICE_CONTAINER_EXPERIENCE_ID: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 89);
pub const DEVPKEY_DEVICE_CONTAINER_CATEGORY: PropertyKey = PropertyKey::new(DEVICE_INSTANCE, 90);
pub const DEVPKEY_DEVICE_CONTAINER_CATEGORY_DESC_SINGULAR: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 91);
pub const DEVPKEY_DEVICE_CONTAINER_CATEGORY_DESC_PLURAL: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 92);
pub const DEVPKEY_DEVICE_CONTAINER_CATEGORY_ICON: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 93);
pub const DEVPKEY_DEVICE_CONTAINER_CATEGORY_GROUP_DESC: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 94);
pub const DEVPKEY_DEVICE_CONTAINER_CATEGORY_GROUP_ICON: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 95);
pub const DEVPKEY_DEVICE_CONTAINER_PRIMARY_CATEGORY: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 97);
pub const DEVPKEY_DEVICE_CONTAINER_UNPAIR_UNINSTALL: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 98);
pub const DEVPKEY_DEVICE_CONTAINER_REQUIRES_UNINSTALL_ELEVATION: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 99);
pub const DEVPKEY_DEVICE_CONTAINER_DEVICE_FUNCTION_SUB_RANK: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 100);
pub const DEVPKEY_DEVICE_CONTAINER_ALWAYS_SHOW_DEVICE_AS_CONNECTED: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 101);
pub const DEVPKEY_DEVICE_CONTAINER_CONFIG_FLAGS: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 105);
pub const DEVPKEY_DEVICE_CONTAINER_PRIVILEGED_PACKAGE_FAMILY_NAMES: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 106);
pub const DEVPKEY_DEVICE_CONTAINER_CUSTOM_PRIVILEGED_PACKAGE_FAMILY_NAMES: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 107);
pub const DEVPKEY_DEVICE_CONTAINER_IS_REBOOT_REQUIRED: PropertyKey =
    PropertyKey::new(DEVICE_INSTANCE, 108);
pub const DEVPKEY_DEVICE_CONTAINER_FRIENDLY_NAME: PropertyKey =
    PropertyKey::new(CONTAINER_DISPLAY, 12288);
pub const DEVPKEY_DEVICE_CONTAINER_MANUFACTURER: PropertyKey =
    PropertyKey::new(CONTAINER_DISPLAY, 8192);
pub const DEVPKEY_DEVICE_CONTAINER_MODEL_NAME: PropertyKey =
    PropertyKey::new(CONTAINER_DISPLAY, 8194);
pub const DEVPKEY_DEVICE_CONTAINER_MODEL_NUMBER: PropertyKey =
    PropertyKey::new(CONTAINER_DISPLAY, 8195);
pub const DEVPKEY_DEVICE_CONTAINER_INSTALL_IN_PROGRESS: PropertyKey =
    PropertyKey::new(DEVICE_INSTALL, 9);

pub const DEVPKEY_DEV_QUERY_OBJECT_TYPE: PropertyKey = PropertyKey::new(DEV_QUERY, 2);

pub const DEVPKEY_PCI_DEVICE_DEVICE_TYPE: PropertyKey = PropertyKey::new(PCI_DEVICE, 1);
pub const DEVPKEY_PCI_DEVICE_CURRENT_SPEED_AND_MODE: PropertyKey =
    PropertyKey::new(PCI_DEVICE, 2);
pub const DEVPKEY_PCI_DEVICE_BASE_CLASS: PropertyKey = PropertyKey::new(PCI_DEVICE, 3);
pub const DEVPKEY_PCI_DEVICE_SUB_CLASS: PropertyKey = PropertyKey::new(PCI_DEVICE, 4);
pub const DEVPKEY_PCI_DEVICE_PROG_IF: PropertyKey = PropertyKey::new(PCI_DEVICE, 5);
pub const DEVPKEY_PCI_DEVICE_CURRENT_PAYLOAD_SIZE: PropertyKey = PropertyKey::new(PCI_DEVICE, 6);
pub const DEVPKEY_PCI_DEVICE_MAX_PAYLOAD_SIZE: PropertyKey = PropertyKey::new(PCI_DEVICE, 7);
pub const DEVPKEY_PCI_DEVICE_MAX_READ_REQUEST_SIZE: PropertyKey = PropertyKey::new(PCI_DEVICE, 8);
pub const DEVPKEY_PCI_DEVICE_CURRENT_LINK_SPEED: PropertyKey = PropertyKey::new(PCI_DEVICE, 9);
pub const DEVPKEY_PCI_DEVICE_CURRENT_LINK_WIDTH: PropertyKey = PropertyKey::new(PCI_DEVICE, 10);
pub const DEVPKEY_PCI_DEVICE_MAX_LINK_SPEED: PropertyKey = PropertyKey::new(PCI_DEVICE, 11);
pub const DEVPKEY_PCI_DEVICE_MAX_LINK_WIDTH: PropertyKey = PropertyKey::new(PCI_DEVICE, 12);
pub const DEVPKEY_PCI_DEVICE_EXPRESS_SPEC_VERSION: PropertyKey = PropertyKey::new(PCI_DEVICE, 13);
pub const DEVPKEY_PCI_DEVICE_INTERRUPT_SUPPORT: PropertyKey = PropertyKey::new(PCI_DEVICE, 14);
pub const DEVPKEY_PCI_DEVICE_INTERRUPT_MESSAGE_MAXIMUM: PropertyKey =
    PropertyKey::new(PCI_DEVICE, 15);
pub const DEVPKEY_PCI_DEVICE_BAR_TYPES: PropertyKey = PropertyKey::new(PCI_DEVICE, 16);
pub const DEVPKEY_PCI_DEVICE_AER_CAPABILITY_PRESENT: PropertyKey =
    PropertyKey::new(PCI_DEVICE, 17);

pub const DEVPKEY_PCI_ROOT_BUS_PCI_EXPRESS_CAPABILITY_CONTROL: PropertyKey =
    PropertyKey::new(PCI_ROOT_BUS, 16);
pub const DEVPKEY_PCI_ROOT_BUS_NATIVE_PCI_EXPRESS_CONTROL: PropertyKey =
    PropertyKey::new(PCI_ROOT_BUS, 17);
pub const DEVPKEY_PCI_ROOT_BUS_SYSTEM_MSI_SUPPORT: PropertyKey =
    PropertyKey::new(PCI_ROOT_BUS, 18);

pub const DEVPKEY_STORAGE_PORTABLE: PropertyKey = PropertyKey::new(STORAGE, 2);
pub const DEVPKEY_STORAGE_REMOVABLE_MEDIA: PropertyKey = PropertyKey::new(STORAGE, 3);
pub const DEVPKEY_STORAGE_SYSTEM_CRITICAL: PropertyKey = PropertyKey::new(STORAGE, 4);
pub const DEVPKEY_STORAGE_DISK_NUMBER: PropertyKey = PropertyKey::new(STORAGE, 5);
pub const DEVPKEY_STORAGE_PARTITION_NUMBER: PropertyKey = PropertyKey::new(STORAGE, 6);
