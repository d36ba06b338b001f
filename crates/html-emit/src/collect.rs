//! Asset collection: grouping entry point output files by extension.

use indexmap::IndexMap;

use crate::host::EntryPoint;

/// Output file paths grouped by file extension (without the leading dot).
///
/// Keys appear in first-encounter order; each list preserves the order files
/// appeared within and across entry points. Built fresh on every build pass.
/// Every path in a group ends with `.<key>`, except the `""` group which
/// holds extension-less paths.
pub type AssetGroups = IndexMap<String, Vec<String>>;

/// Group the output files of `entrypoints` by extension.
///
/// When `chunks` names a non-empty subset of entry points, entries outside
/// that subset are skipped entirely; unknown names simply match nothing.
/// `None` or an empty list collects every entry.
///
/// The extension is the text after the final `.` in the path. A path with no
/// dot is grouped under the empty-string key, silently.
pub fn collect_assets(entrypoints: &[EntryPoint], chunks: Option<&[String]>) -> AssetGroups {
    let selected = chunks.filter(|names| !names.is_empty());
    let mut groups = AssetGroups::new();

    for entry in entrypoints {
        if let Some(names) = selected {
            if !names.iter().any(|name| name == entry.name()) {
                continue;
            }
        }

        for file in entry.files() {
            let extension = file
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .unwrap_or_default();

            groups
                .entry(extension.to_string())
                .or_default()
                .push(file.clone());
        }
    }

    tracing::debug!(
        entrypoints = entrypoints.len(),
        groups = groups.len(),
        "collected entry point assets"
    );

    groups
}
