use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Application log with an embedded Java stack trace
    Java,
    /// Application log with an embedded Python traceback
    Python,
    /// Banner-delimited configuration sections
    Config,
}

impl SampleKind {
    /// Emission order.
    pub const ALL: [SampleKind; 3] = [SampleKind::Java, SampleKind::Python, SampleKind::Config];

    pub fn header(&self) -> &'static str {
        match self {
            SampleKind::Java => "=== Java Application Logs ===",
            SampleKind::Python => "=== Python Application Logs ===",
            SampleKind::Config => "=== Configuration Sections ===",
        }
    }

    /// Chunking option of the consuming tool that splits this sample into its logical entries.
    pub fn chunk_hint(&self) -> &'static str {
        match self {
            SampleKind::Java => r"--chunk-start '^\d{4}-\d{2}-\d{2}'",
            SampleKind::Python => r"--chunk-start '^\['",
            SampleKind::Config => "--chunk-delim '---'",
        }
    }

    /// Reduces a user selection to emission order without duplicates. Empty selection means all.
    pub fn select(requested: &[SampleKind]) -> Vec<SampleKind> {
        if requested.is_empty() {
            return Self::ALL.to_vec();
        }
        Self::ALL
            .into_iter()
            .filter(|kind| requested.contains(kind))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_selection_means_all() {
        assert_eq!(SampleKind::select(&[]), SampleKind::ALL.to_vec());
    }

    #[test]
    fn selection_keeps_fixed_order_and_drops_duplicates() {
        let requested = [SampleKind::Config, SampleKind::Java, SampleKind::Config];
        assert_eq!(
            SampleKind::select(&requested),
            vec![SampleKind::Java, SampleKind::Config]
        );
    }

    #[test]
    fn parses_from_cli_names() {
        assert_eq!(SampleKind::from_str("python", true), Ok(SampleKind::Python));
        assert!(SampleKind::from_str("sql", true).is_err());
    }
}
