/// Text content of one report row, lifted out of the result document.
///
/// Each part is `None` when the corresponding cell was missing from the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFragment {
    /// `id` attribute of the row, e.g. `"MA_12345"`. Diagnostics only.
    pub row_id: String,
    /// Bold text of the first cell's first paragraph.
    pub event_label: Option<String>,
    /// Trimmed text lines of the `base_info` cell.
    pub base_info: Option<Vec<String>>,
    /// Text of the `detail_info` cell, fragments joined with single spaces.
    pub details: Option<String>,
}
