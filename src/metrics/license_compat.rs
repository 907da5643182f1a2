//! License compatibility scoring against a fixed table.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::github::RepoDetails;
use crate::metrics::MetricError;

struct LicenseRule {
    name: &'static str,
    score: f64,
    patterns: Vec<Regex>,
}

fn rule(name: &'static str, score: f64, patterns: &[&str]) -> LicenseRule {
    LicenseRule {
        name,
        score,
        patterns: patterns.iter().filter_map(|p| Regex::new(p).ok()).collect(),
    }
}

lazy_static! {
    /// Compatible licenses with textual-variant patterns; permissive
    /// licenses score 1.0, copyleft 0.9.
    static ref COMPATIBLE_LICENSES: Vec<LicenseRule> = vec![
        rule("MIT", 1.0, &[r"(?i)\bMIT\b"]),
        rule("Apache-2.0", 1.0, &[
            r"(?i)\bAPACHE(?:[-\s]+LICENSE)?(?:[-\s]+V(?:ERSION)?)?[-\s]*2(?:\.0)?\b",
            r"(?i)\bAPACHE[-\s]2\.0\b",
        ]),
        rule("GPL-3.0", 0.9, &[
            r"(?i)\bGPL[\s-]?(?:V(?:ERSION)?\s*)?3(?:\.0)?\b",
            r"(?i)\bGNU\s+GENERAL\s+PUBLIC\s+LICENSE\s+(?:V(?:ERSION)?\s*)?3(?:\.0)?\b",
        ]),
        rule("GPL-2.0", 0.9, &[
            r"(?i)\bGPL[\s-]?(?:V(?:ERSION)?\s*)?2(?:\.0)?\b",
            r"(?i)\bGNU\s+GENERAL\s+PUBLIC\s+LICENSE\s+(?:V(?:ERSION)?\s*)?2(?:\.0)?\b",
        ]),
        rule("BSD-3-Clause", 1.0, &[r"(?i)\bBSD[\s-]3[\s-]CLAUSE\b"]),
        rule("BSD-2-Clause", 1.0, &[r"(?i)\bBSD[\s-]2[\s-]CLAUSE\b"]),
        rule("LGPL-2.1", 0.9, &[
            r"(?i)\bLGPL[\s-]?(?:V(?:ERSION)?\s*)?2\.1\b",
            r"(?i)\bGNU\s+LESSER\s+GENERAL\s+PUBLIC\s+LICENSE\s+(?:V(?:ERSION)?\s*)?2\.1\b",
        ]),
        rule("Zlib", 1.0, &[r"(?i)\bZLIB\b"]),
    ];

    /// Uppercase SPDX-like token, e.g. "MIT" out of "MIT License".
    static ref SPDX_TOKEN_RE: Result<Regex, regex::Error> =
        Regex::new(r"\b[A-Z0-9.\-]+\b");
}

/// Score the snapshot's resolved license.
///
/// Three stages: exact case-insensitive name match, pattern match against
/// textual variants, then SPDX-token extraction and re-lookup. No license
/// or no match at any stage scores 0.
pub fn calculate_license_compatibility(details: &RepoDetails) -> Result<f64, MetricError> {
    let Some(license) = details.license.as_deref() else {
        debug!("No license found");
        return Ok(0.0);
    };

    if let Some(matched) = COMPATIBLE_LICENSES
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(license))
    {
        debug!("Exact license match: {license}");
        return Ok(matched.score);
    }

    for rule in COMPATIBLE_LICENSES.iter() {
        if rule.patterns.iter().any(|p| p.is_match(license)) {
            debug!("License '{license}' matches pattern for {}", rule.name);
            return Ok(rule.score);
        }
    }

    if let Ok(re) = SPDX_TOKEN_RE.as_ref() {
        if let Some(token) = re.find(license) {
            let token = token.as_str();
            if let Some(matched) = COMPATIBLE_LICENSES
                .iter()
                .find(|r| r.name.eq_ignore_ascii_case(token))
            {
                debug!("SPDX token '{token}' matches {}", matched.name);
                return Ok(matched.score);
            }
        }
    }

    debug!("No compatible license match for '{license}'");
    Ok(0.0)
}
