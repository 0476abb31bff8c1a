/// Substrings that together identify the real column-header line.
const TIMESTAMP_MARKER: &str = "Timestamp";
const EMPLOYER_MARKER: &str = "Employer name";

/// Scan the raw input lines for the first line that is the genuine column
/// header. The source file carries several lines of free-text instructions
/// above the actual header, so we look for the first line mentioning both
/// the timestamp column and the employer column.
///
/// Returns 0 when no line qualifies, treating the very first line as the
/// header on a best-effort basis.
pub fn locate_header(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| line.contains(TIMESTAMP_MARKER) && line.contains(EMPLOYER_MARKER))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Timestamp,What's the link to the job posting?,Employer name";

    #[test]
    fn header_on_first_line() {
        let lines = vec![HEADER, "5/2/2019 17:11:13,https://x.test/a,Acme"];
        assert_eq!(locate_header(&lines), 0);
    }

    #[test]
    fn header_after_one_preamble_line() {
        let lines = vec!["Welcome! Please read the rules below.", HEADER];
        assert_eq!(locate_header(&lines), 1);
    }

    #[test]
    fn header_after_five_preamble_lines() {
        let lines = vec![
            "Crowdsourced job postings",
            "",
            "Post your openings in the form linked above.",
            "Please be kind to applicants.",
            "Postings older than 90 days are pruned.",
            HEADER,
            "5/2/2019 17:11:13,https://x.test/a,Acme",
        ];
        assert_eq!(locate_header(&lines), 5);
    }

    #[test]
    fn defaults_to_zero_without_markers() {
        let lines = vec!["just,some,csv", "1,2,3"];
        assert_eq!(locate_header(&lines), 0);
    }

    #[test]
    fn both_markers_required_on_the_same_line() {
        let lines = vec!["Timestamp of submission", "Employer name only", HEADER];
        assert_eq!(locate_header(&lines), 2);
    }

    #[test]
    fn empty_input_defaults_to_zero() {
        assert_eq!(locate_header(&[]), 0);
    }
}
