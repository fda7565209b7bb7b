//! Formatting for sizes and loader chains.

use kiln_config::LoaderChain;

/// Format a byte count in human-readable form.
///
/// # Examples
///
/// ```
/// use kiln_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(10_240), "10.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Render a chain in the order its steps run, e.g. `sass-loader → css-loader`.
pub fn format_chain(chain: &LoaderChain) -> String {
    chain
        .execution_order()
        .map(|step| step.loader.name())
        .collect::<Vec<_>>()
        .join(" → ")
}
