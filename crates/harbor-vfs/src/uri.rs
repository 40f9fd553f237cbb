//! Location URI helpers.
//!
//! A non-local location is expressed as
//! `<fsType>://[<authority-or-host>][/path][?fs=<id>][&...]`. The `fs` query
//! parameter, when present, is the authoritative instance id and takes
//! precedence over any id implied by the host/authority.

use std::path::PathBuf;

use url::Url;

/// Query parameter naming the file system instance id.
pub const QUERY_PARAM_FS_ID: &str = "fs";

/// Splits `location` at the first `://`, returning `(scheme, rest)`.
///
/// Returns `None` for plain local paths (no scheme separator at all).
pub(crate) fn split_scheme(location: &str) -> Option<(&str, &str)> {
    location.split_once("://")
}

/// Whether `uri` denotes a location already local to this machine.
pub(crate) fn is_local_uri(uri: &Url) -> bool {
    uri.scheme() == "file"
}

/// Concrete local path for a `file://` URI, if it has one.
pub(crate) fn local_path(uri: &Url) -> Option<PathBuf> {
    uri.to_file_path().ok()
}

/// Value of the first query parameter named `name` (case-sensitive),
/// percent-decoded.
///
/// A present-but-empty value (`?fs=`) counts as absent, so id derivation
/// falls through to the host/authority candidate.
pub(crate) fn query_param(uri: &Url, name: &str) -> Option<String> {
    uri.query_pairs()
        .find_map(|(key, value)| (key == name).then(|| value.into_owned()))
        .filter(|value| !value.is_empty())
}

/// Candidate instance id implied by the URI's host, falling back to the raw
/// authority string when the host is empty.
pub(crate) fn host_or_authority(uri: &Url) -> Option<String> {
    match uri.host_str() {
        Some(host) if !host.is_empty() => Some(host.to_string()),
        _ => {
            let authority = uri.authority();
            (!authority.is_empty()).then(|| authority.to_string())
        }
    }
}
