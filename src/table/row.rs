/// First-field fragments marking instruction lines that leaked below the
/// real column header. The source form exports rows of free text between
/// data rows from time to time; these are the known offenders.
const RESIDUAL_FRAGMENTS: &[&str] = &["What's the link", "Please share", "Starting November"];

/// One parsed data row. Field counts vary between rows (the form gained
/// columns over the years), so positional reads past the end yield the
/// empty string instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Positional access; missing positions read as "".
    pub fn get(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Overwrite a field, growing the row with empty fields if needed.
    pub fn set(&mut self, idx: usize, value: String) {
        if idx >= self.fields.len() {
            self.fields.resize(idx + 1, String::new());
        }
        self.fields[idx] = value;
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// True when the row carries nothing: no fields, or a first field that
    /// is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty() || self.fields[0].trim().is_empty()
    }

    /// True when the first field matches a known residual header or
    /// instruction fragment. The header scan catches the column header
    /// itself; this catches stragglers further down the file.
    pub fn is_residual_header(&self) -> bool {
        let first = self.get(0);
        first == "Timestamp" || RESIDUAL_FRAGMENTS.iter().any(|frag| first.contains(frag))
    }

    /// A row worth processing: non-blank and not a leaked instruction line.
    pub fn is_data(&self) -> bool {
        !self.is_blank() && !self.is_residual_header()
    }
}

impl From<Vec<&str>> for Row {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_access_tolerates_short_rows() {
        let row = Row::from(vec!["5/2/2019", "https://x.test/a"]);
        assert_eq!(row.get(0), "5/2/2019");
        assert_eq!(row.get(1), "https://x.test/a");
        assert_eq!(row.get(6), "");
    }

    #[test]
    fn set_grows_the_row() {
        let mut row = Row::from(vec!["ts"]);
        row.set(3, "late".to_string());
        assert_eq!(row.get(3), "late");
        assert_eq!(row.get(2), "");
        assert_eq!(row.fields().len(), 4);
    }

    #[test]
    fn blank_rows() {
        assert!(Row::new(vec![]).is_blank());
        assert!(Row::from(vec!["   ", "x"]).is_blank());
        assert!(!Row::from(vec!["5/2/2019"]).is_blank());
    }

    #[test]
    fn residual_header_fragments() {
        assert!(Row::from(vec!["Timestamp", "x"]).is_residual_header());
        assert!(Row::from(vec!["What's the link to the job posting?"]).is_residual_header());
        assert!(Row::from(vec!["Please share openings here"]).is_residual_header());
        assert!(Row::from(vec!["Starting November 1st we will..."]).is_residual_header());
        assert!(!Row::from(vec!["5/2/2019 17:11:13", "https://x.test"]).is_residual_header());
    }

    #[test]
    fn timestamp_fragment_must_match_exactly() {
        // A data row could legitimately *contain* the word Timestamp.
        assert!(!Row::from(vec!["Timestamped entry"]).is_residual_header());
    }

    #[test]
    fn data_rows() {
        assert!(Row::from(vec!["5/2/2019", "link"]).is_data());
        assert!(!Row::from(vec![""]).is_data());
        assert!(!Row::from(vec!["Timestamp"]).is_data());
    }
}
