/// Per-line category assigned by the comparator. Serialized as the
/// lowercase strings the renderer keys its styling on.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Normal,
    Added,
    Removed,
    Modified,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DiffLine {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// 1-based position in the sequence the line came from. Filler
    /// entries emitted opposite an added or removed line have none.
    #[serde(rename = "lineNumber", skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    /// Percentage of positions left unchanged, 0-100.
    pub similarity: u8,
}

/// The two panes are positionally paired: index i in each refers to
/// the same rendered row, so both vectors always have equal length.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub left_lines: Vec<DiffLine>,
    pub right_lines: Vec<DiffLine>,
    pub stats: DiffStats,
}
