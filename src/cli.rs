use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgGroup, ArgMatches, Command, command, crate_authors, crate_description,
    crate_name, crate_version,
};

use crate::config::{CaseMode, PunctuationMode, SeparatorPair, Settings, expand_path};
use crate::constants::{
    CAPWORDS_HELP, CONFIG_HELP, CONVERT_START_HELP, DRY_RUN_HELP, FILES_HELP, IGNORE_HELP,
    LIST_HELP, LOG_FILE_HELP, LOWER_HELP, QUIET_HELP, REGEX_HELP, REMOVE_ALL_PUNCTUATION_HELP,
    REMOVE_PUNCTUATION_HELP, SEPARATORS_HELP, START_DIR_HELP, UPPER_HELP, VERBOSE_HELP,
};
use crate::logging::Verbosity;
use crate::workflow::ProcessingOptions;

/// Builds the command-line interface
///
/// Case flags are mutually exclusive, as are the two punctuation flags.
pub fn build_command() -> Command {
    let arg_start_dir = Arg::new("start_dir")
        .value_name("START_DIR")
        .help(START_DIR_HELP)
        .required(true);

    let arg_capwords = Arg::new("capwords")
        .short('c')
        .long("capwords")
        .help(CAPWORDS_HELP)
        .action(ArgAction::SetTrue);

    let arg_lower = Arg::new("lower")
        .short('l')
        .long("lower")
        .help(LOWER_HELP)
        .action(ArgAction::SetTrue);

    let arg_upper = Arg::new("upper")
        .short('u')
        .long("upper")
        .help(UPPER_HELP)
        .action(ArgAction::SetTrue);

    let arg_files = Arg::new("files")
        .short('f')
        .long("files")
        .help(FILES_HELP)
        .action(ArgAction::SetTrue);

    let arg_ignore = Arg::new("ignore")
        .short('i')
        .long("ignore")
        .value_name("CHARS")
        .allow_hyphen_values(true)
        .help(IGNORE_HELP);

    let arg_list = Arg::new("list")
        .short('L')
        .long("list")
        .help(LIST_HELP)
        .action(ArgAction::SetTrue);

    let arg_remove_punctuation = Arg::new("remove_punctuation")
        .short('p')
        .long("remove-punctuation")
        .help(REMOVE_PUNCTUATION_HELP)
        .action(ArgAction::SetTrue);

    let arg_remove_all_punctuation = Arg::new("remove_all_punctuation")
        .long("remove-all-punctuation")
        .help(REMOVE_ALL_PUNCTUATION_HELP)
        .action(ArgAction::SetTrue);

    let arg_regex = Arg::new("regex")
        .short('r')
        .long("regex")
        .value_name("PATTERN")
        .allow_hyphen_values(true)
        .help(REGEX_HELP)
        .action(ArgAction::Append);

    let arg_separators = Arg::new("separators")
        .short('s')
        .long("separators")
        .value_names(["FROM", "TO"])
        .num_args(2)
        .allow_hyphen_values(true)
        .help(SEPARATORS_HELP);

    let arg_convert_start = Arg::new("convert_start")
        .long("convert-start-dir")
        .help(CONVERT_START_HELP)
        .action(ArgAction::SetTrue);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_config = Arg::new("config")
        .long("config")
        .value_name("PATH")
        .help(CONFIG_HELP);

    let arg_log_file = Arg::new("log_file")
        .long("log-file")
        .value_name("PATH")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_start_dir)
        .arg(arg_capwords)
        .arg(arg_lower)
        .arg(arg_upper)
        .arg(arg_files)
        .arg(arg_ignore)
        .arg(arg_list)
        .arg(arg_remove_punctuation)
        .arg(arg_remove_all_punctuation)
        .arg(arg_regex)
        .arg(arg_separators)
        .arg(arg_convert_start)
        .arg(arg_quiet)
        .arg(arg_verbose)
        .arg(arg_dry)
        .arg(arg_config)
        .arg(arg_log_file)
        .group(ArgGroup::new("case").args(["capwords", "lower", "upper"]))
        .group(
            ArgGroup::new("punctuation").args(["remove_punctuation", "remove_all_punctuation"]),
        )
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the command-line arguments
///
/// `--quiet` limits output to errors no matter how many `-v` were given.
pub fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    Verbosity::from_flags(matches.get_flag("quiet"), matches.get_count("verbose"))
}

/// Gets the log file path, if one was requested
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("log_file")
        .map(|path| PathBuf::from(expand_path(path)))
}

/// Gets the explicit settings file path, if one was given
pub fn get_config_path(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("config").map(String::as_str)
}

/// Overlays the command-line options on top of base settings
///
/// Options that were not given keep the value from `base`.
pub fn merge_settings(base: Settings, matches: &ArgMatches) -> Settings {
    let mut settings = base;

    if matches.get_flag("capwords") {
        settings.case = CaseMode::CapWords;
    } else if matches.get_flag("lower") {
        settings.case = CaseMode::Lower;
    } else if matches.get_flag("upper") {
        settings.case = CaseMode::Upper;
    }

    if let Some(patterns) = matches.get_many::<String>("regex") {
        settings.patterns = patterns.cloned().collect();
    }

    if matches.get_flag("remove_punctuation") {
        settings.remove_punctuation = PunctuationMode::SafeSubset;
    } else if matches.get_flag("remove_all_punctuation") {
        settings.remove_punctuation = PunctuationMode::All;
    }

    if let Some(ignore) = matches.get_one::<String>("ignore") {
        settings.ignore = ignore.clone();
    }

    if let Some(mut values) = matches.get_many::<String>("separators")
        && let (Some(from), Some(to)) = (values.next(), values.next())
    {
        settings.separator = Some(SeparatorPair::new(from.as_str(), to.as_str()));
    }

    if matches.get_flag("files") {
        settings.include_files = true;
    }

    if matches.get_flag("convert_start") {
        settings.convert_start_directory = true;
    }

    settings
}

/// Builds the run options from parsed arguments and base settings
pub fn processing_options(base: Settings, matches: &ArgMatches) -> ProcessingOptions {
    let start_dir = matches
        .get_one::<String>("start_dir")
        .map(|dir| PathBuf::from(expand_path(dir)))
        .unwrap_or_default();

    ProcessingOptions {
        start_dir,
        settings: merge_settings(base, matches),
        list_only: matches.get_flag("list"),
        dry_run: matches.get_flag("dry"),
    }
}
