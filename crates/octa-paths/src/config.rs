/// Search options.
///
/// The default reproduces the reference model: no expansion bound and no
/// trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Stop after this many expansions and report `NotFound`. `None` means
    /// unbounded; a search then ends only when the goal is closed or the
    /// frontier runs dry.
    pub expansion_limit: Option<usize>,
    /// Record the order in which cells are closed.
    pub record_expansions: bool,
}

impl SearchConfig {
    /// Bound the number of expansions.
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Keep the expansion order in the report.
    pub fn with_trace(mut self) -> Self {
        self.record_expansions = true;
        self
    }
}
