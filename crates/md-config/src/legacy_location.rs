/// On-disk shape of a historical settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatEra {
    /// 0.8.x flat profile keys
    PreRelease,
    /// Same document shape as the current version
    Modern,
}

/// How the identity resolver treats a legacy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRule {
    Read,
    /// Never trust the id stored here
    Skip,
    /// This version and everything older predates the anonymous id
    Stop,
}

/// A settings file written by an earlier release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyLocation {
    pub label: &'static str,
    /// Relative to the home directory, `/`-separated
    pub relative_path: &'static str,
    pub era: FormatEra,
    pub identity_rule: IdentityRule,
}

const fn legacy(
    label: &'static str,
    relative_path: &'static str,
    era: FormatEra,
    identity_rule: IdentityRule,
) -> LegacyLocation {
    LegacyLocation {
        label,
        relative_path,
        era,
        identity_rule,
    }
}

/// Known settings files of earlier releases, newest first.
pub static LEGACY_LOCATIONS: [LegacyLocation; 14] = [
    legacy("1.4.3", ".3T/robo-3t/1.4.3/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.4.2", ".3T/robo-3t/1.4.2/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.4.1", ".3T/robo-3t/1.4.1/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.4.0", ".3T/robo-3t/1.4.0/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.3.1", ".3T/robo-3t/1.3.1/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.3.0", ".3T/robo-3t/1.3.0/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.2.1", ".3T/robo-3t/1.2.1/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.2.0", ".3T/robo-3t/1.2.0/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.1.1", ".3T/robo-3t/1.1.1/robo3t.json", FormatEra::Modern, IdentityRule::Read),
    legacy(
        "1.1.0-Beta",
        ".3T/robomongo/1.1.0-Beta/robomongo.json",
        FormatEra::Modern,
        IdentityRule::Skip,
    ),
    legacy("1.0.0", ".3T/robomongo/1.0.0/robomongo.json", FormatEra::Modern, IdentityRule::Read),
    legacy("1.0-RC1", ".config/robomongo/1.0/robomongo.json", FormatEra::Modern, IdentityRule::Stop),
    legacy("0.9", ".config/robomongo/0.9/robomongo.json", FormatEra::Modern, IdentityRule::Stop),
    legacy("0.8.5", ".config/robomongo/robomongo.json", FormatEra::PreRelease, IdentityRule::Stop),
];

/// A zipped property file of a sibling product that may carry the anonymous id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingArchive {
    pub relative_path: &'static str,
    pub entry_name: &'static str,
}

pub static SIBLING_ARCHIVES: [SiblingArchive; 4] = [
    SiblingArchive {
        relative_path: ".3T/studio-3t/properties.dat",
        entry_name: "Studio3T.properties",
    },
    SiblingArchive {
        relative_path: ".3T/data-man-mongodb/properties.dat",
        entry_name: "3T.data-man-mongodb.properties",
    },
    SiblingArchive {
        relative_path: ".3T/mongochef-pro/properties.dat",
        entry_name: "3T.mongochef-pro.properties",
    },
    SiblingArchive {
        relative_path: ".3T/mongochef-enterprise/properties.dat",
        entry_name: "3T.mongochef-enterprise.properties",
    },
];

/// Directories searched for stray settings files, in order.
pub static IDENTITY_SCAN_ROOTS: [&str; 2] = [".3T/robo-3t", ".3T/robomongo"];
