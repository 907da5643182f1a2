use gitgauge::github::extract_license_from_readme;

#[test]
fn finds_spdx_key_in_prose() {
    let readme = "# pkg\n\nThis project is licensed under the MIT license.\n";
    assert_eq!(
        extract_license_from_readme(readme),
        Some("MIT License".to_string())
    );
}

#[test]
fn key_lookup_is_case_insensitive() {
    let readme = "Released under apache-2.0.";
    assert_eq!(
        extract_license_from_readme(readme),
        Some("Apache License 2.0".to_string())
    );
}

#[test]
fn finds_key_in_license_section() {
    let readme = "## License\n\nGPL-3.0\n";
    assert_eq!(
        extract_license_from_readme(readme),
        Some("GNU General Public License v3.0".to_string())
    );
}

#[test]
fn keys_must_be_word_bounded() {
    // "ISC" inside another word must not match.
    assert_eq!(extract_license_from_readme("miscellaneous notes"), None);
}

#[test]
fn no_known_key_yields_none() {
    assert_eq!(extract_license_from_readme("# pkg\n\nAll rights reserved.\n"), None);
}
