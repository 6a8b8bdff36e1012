use std::env;

use dirconv::config::expand_path;

fn home() -> String {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .unwrap_or_default()
}

#[test]
fn test_expand_path_with_env_variables() {
    unsafe {
        env::set_var("DIRCONV_TEST_VAR", "music");
    }

    assert_eq!(expand_path("$DIRCONV_TEST_VAR/albums"), "music/albums");
    assert_eq!(
        expand_path("~/$DIRCONV_TEST_VAR/albums"),
        format!("{}/music/albums", home())
    );

    unsafe {
        env::remove_var("DIRCONV_TEST_VAR");
    }
}

#[test]
fn test_expand_path_with_missing_env_variables() {
    unsafe {
        env::remove_var("DIRCONV_MISSING_VAR");
    }

    // Falls back to tilde expansion only
    assert_eq!(
        expand_path("$DIRCONV_MISSING_VAR/albums"),
        "$DIRCONV_MISSING_VAR/albums"
    );
    assert_eq!(
        expand_path("~/$DIRCONV_MISSING_VAR/albums"),
        format!("{}/$DIRCONV_MISSING_VAR/albums", home())
    );
}

#[test]
fn test_expand_path_with_multiple_env_variables() {
    unsafe {
        env::set_var("DIRCONV_TEST_VAR1", "photos");
        env::set_var("DIRCONV_TEST_VAR2", "2021");
    }

    assert_eq!(
        expand_path("$DIRCONV_TEST_VAR1/$DIRCONV_TEST_VAR2"),
        "photos/2021"
    );

    unsafe {
        env::remove_var("DIRCONV_TEST_VAR1");
        env::remove_var("DIRCONV_TEST_VAR2");
    }
}

#[test]
fn test_expand_path_leaves_plain_paths_alone() {
    assert_eq!(expand_path("Some Dir/Other Dir"), "Some Dir/Other Dir");
}
