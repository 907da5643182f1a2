//! License resolution with manifest and README fallback.

use std::future::Future;

use lazy_static::lazy_static;
use log::{debug, error};
use regex::Regex;

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;

/// SPDX key to canonical full license name, as reported in the snapshot.
const LICENSE_TABLE: &[(&str, &str)] = &[
    ("AFL-3.0", "Academic Free License v3.0"),
    ("Apache-2.0", "Apache License 2.0"),
    ("Artistic-2.0", "Artistic License 2.0"),
    ("BSL-1.0", "Boost Software License 1.0"),
    ("BSD-2-Clause", "BSD 2-clause 'Simplified' License"),
    ("BSD-3-Clause", "BSD 3-clause 'New' or 'Revised' License"),
    ("BSD-3-Clause-Clear", "BSD 3-clause Clear License"),
    ("BSD-4-Clause", "BSD 4-clause 'Original' or 'Old' License"),
    ("0BSD", "BSD Zero-Clause License"),
    ("CC0-1.0", "Creative Commons Zero v1.0 Universal"),
    ("CC-BY-4.0", "Creative Commons Attribution 4.0"),
    ("CC-BY-SA-4.0", "Creative Commons Attribution ShareAlike 4.0"),
    ("WTFPL", "Do What The F*ck You Want To Public License"),
    ("ECL-2.0", "Educational Community License v2.0"),
    ("EPL-1.0", "Eclipse Public License 1.0"),
    ("EPL-2.0", "Eclipse Public License 2.0"),
    ("EUPL-1.1", "European Union Public License 1.1"),
    ("AGPL-3.0", "GNU Affero General Public License v3.0"),
    ("GPL-2.0", "GNU General Public License v2.0"),
    ("GPL-3.0", "GNU General Public License v3.0"),
    ("LGPL-2.1", "GNU Lesser General Public License v2.1"),
    ("LGPL-3.0", "GNU Lesser General Public License v3.0"),
    ("ISC", "ISC License"),
    ("LPPL-1.3c", "LaTeX Project Public License v1.3c"),
    ("MS-PL", "Microsoft Public License"),
    ("MIT", "MIT License"),
    ("MPL-2.0", "Mozilla Public License 2.0"),
    ("OSL-3.0", "Open Software License 3.0"),
    ("PostgreSQL", "PostgreSQL License"),
    ("OFL-1.1", "SIL Open Font License 1.1"),
    ("NCSA", "University of Illinois/NCSA Open Source License"),
    ("Unlicense", "The Unlicense"),
    ("Zlib", "zLib License"),
];

lazy_static! {
    /// One alternation over every known SPDX key, word-bounded.
    static ref LICENSE_KEY_RE: Result<Regex, regex::Error> = {
        let alternation = LICENSE_TABLE
            .iter()
            .map(|(key, _)| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
    };
}

/// Resolve the repository license with an ordered fallback.
///
/// Order: platform-reported name, unless absent or the literal "Other";
/// then the `license` field of the repository's package.json; then a
/// regex scan of the README against the known-license table. Failures in
/// the fallback chain degrade to "no license" rather than aborting.
pub(crate) async fn resolve_license(
    client: &GitHubClient,
    platform_name: Option<String>,
    owner: &str,
    repo: &str,
) -> GitHubResult<Option<String>> {
    select_license(
        platform_name,
        license_from_package_json(client, owner, repo),
        license_from_readme(client, owner, repo),
    )
    .await
}

/// The fallback chain itself, over lazily-evaluated sources.
///
/// Later stages are only awaited when earlier ones come up empty, so
/// resolution never issues a fetch it does not need.
async fn select_license<M, R>(
    platform_name: Option<String>,
    manifest_license: M,
    readme_license: R,
) -> GitHubResult<Option<String>>
where
    M: Future<Output = Option<String>>,
    R: Future<Output = GitHubResult<Option<String>>>,
{
    if let Some(name) = platform_name {
        if name != "Other" {
            return Ok(Some(name));
        }
    }

    if let Some(from_manifest) = manifest_license.await {
        return Ok(Some(from_manifest));
    }

    readme_license.await
}

/// Scan the repository README for a known license key.
async fn license_from_readme(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
) -> GitHubResult<Option<String>> {
    match client.get_raw(&format!("repos/{owner}/{repo}/readme")).await {
        Ok(readme) => Ok(extract_license_from_readme(&readme)),
        Err(e) if e.is_not_found() => {
            debug!("No README found for {owner}/{repo}; license unresolved");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Read the `license` field out of the repository's package.json, if any.
async fn license_from_package_json(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
) -> Option<String> {
    let raw = match client
        .get_raw(&format!("repos/{owner}/{repo}/contents/package.json"))
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            if !e.is_not_found() {
                error!("Failed to fetch package.json for {owner}/{repo}: {e}");
            }
            return None;
        }
    };

    let manifest: serde_json::Value = serde_json::from_str(&raw).ok()?;
    manifest
        .get("license")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}

/// Scan decoded README text for a known license key.
///
/// Returns the canonical full license name for the first match.
#[must_use]
pub fn extract_license_from_readme(readme: &str) -> Option<String> {
    let re = LICENSE_KEY_RE.as_ref().ok()?;
    let matched = re.find(readme)?.as_str();
    LICENSE_TABLE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(matched))
        .map(|(_, full_name)| (*full_name).to_string())
}
