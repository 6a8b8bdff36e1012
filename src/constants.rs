/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the per-user configuration directory.
pub const APPLICATION: &str = "dirconv";

/// Name of the settings file looked up in the configuration directory
pub const SETTINGS_FILE_NAME: &str = "dirconv.yaml";

/// Punctuation kept by the safe punctuation removal mode
pub const SAFE_PUNCTUATION: &str = ".-_";

/// Characters that may never appear in a separator on this platform
#[cfg(windows)]
pub const ILLEGAL_PATH_CHARACTERS: &str = r#""*/:<>?\|"#;

/// Characters that may never appear in a separator on this platform
#[cfg(not(windows))]
pub const ILLEGAL_PATH_CHARACTERS: &str = "/";

/// Exit status when the settings or the start directory are unusable
pub const EXIT_CONFIGURATION_ERROR: u8 = 2;

/// Exit status for any other error that stops a run
pub const EXIT_RUNTIME_ERROR: u8 = 1;

/// Help text for the start directory argument
pub const START_DIR_HELP: &str = "Starting directory";

/// Help text for the capwords option
pub const CAPWORDS_HELP: &str =
    "Convert names to capwords. Mutually exclusive with -l and -u";

/// Help text for the lowercase option
pub const LOWER_HELP: &str = "Convert names to lowercase. Mutually exclusive with -c and -u";

/// Help text for the uppercase option
pub const UPPER_HELP: &str = "Convert names to uppercase. Mutually exclusive with -c and -l";

/// Help text for the files option
pub const FILES_HELP: &str = "Convert the names of files, not just directories";

/// Help text for the ignore option
pub const IGNORE_HELP: &str = "Punctuation characters that are never removed";

/// Help text for the list option
pub const LIST_HELP: &str =
    "List all directories (and with -f files) below the starting directory without converting";

/// Help text for the safe punctuation removal option
pub const REMOVE_PUNCTUATION_HELP: &str =
    "Remove punctuation from names except \".\", \"-\" and \"_\"";

/// Help text for the full punctuation removal option
pub const REMOVE_ALL_PUNCTUATION_HELP: &str =
    "Remove all punctuation from names. \".\" is kept in file names";

/// Help text for the regex option
pub const REGEX_HELP: &str =
    "Regular expression to remove from names (can be used multiple times, applied in order)";

/// Help text for the separators option
pub const SEPARATORS_HELP: &str = "Replace every FROM in a name with TO, e.g. -s _ ' '";

/// Help text for the convert start directory option
pub const CONVERT_START_HELP: &str = "Convert the starting directory as well";

/// Help text for the quiet option
pub const QUIET_HELP: &str = "Only report errors";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would be converted without renaming anything";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read default settings from a specific YAML file";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log output to this file";
