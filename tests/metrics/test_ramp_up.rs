use std::fs;

use gitgauge::calculate_ramp_up;
use tempfile::TempDir;

use super::common::assert_close;

#[test]
fn no_readme_scores_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.js"), "").unwrap();

    assert_eq!(calculate_ramp_up(dir.path()).unwrap(), 0.0);
}

#[test]
fn minimal_readme_earns_the_base_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# pkg\n").unwrap();

    assert_close(calculate_ramp_up(dir.path()).unwrap(), 0.3);
}

#[test]
fn thorough_documentation_scores_full() {
    let dir = TempDir::new().unwrap();
    let readme = format!(
        "# pkg\n\n## Installation\n\nnpm install pkg\n\n## Usage\n\n```js\nrequire('pkg');\n```\n\n{}",
        "filler ".repeat(100)
    );
    fs::write(dir.path().join("README.md"), readme).unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::create_dir(dir.path().join("examples")).unwrap();
    fs::write(dir.path().join("CONTRIBUTING.md"), "please do").unwrap();

    assert_close(calculate_ramp_up(dir.path()).unwrap(), 1.0);
}

#[test]
fn lowercase_readme_variant_is_found() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.md"), "# pkg\n").unwrap();

    assert_close(calculate_ramp_up(dir.path()).unwrap(), 0.3);
}

#[test]
fn sections_add_partial_credit() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("README.md"),
        "# pkg\n\nTo install, run npm install.\n",
    )
    .unwrap();

    // base 0.3 + install section 0.15
    assert_close(calculate_ramp_up(dir.path()).unwrap(), 0.45);
}
