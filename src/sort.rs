use std::cmp::Reverse;

use crate::table::{Row, Table};
use crate::timestamp;

/// Order the table's data rows newest-first by submission timestamp.
///
/// The sort is stable, so rows sharing a timestamp keep their original
/// order. Rows whose timestamp fails to parse are kept (unlike the JSON
/// path) but carry the minimum sort key, which places them after every
/// successfully parsed row.
pub fn sorted_rows(table: &Table) -> Vec<&Row> {
    let mut rows: Vec<&Row> = table.rows.iter().filter(|row| row.is_data()).collect();
    rows.sort_by_cached_key(|row| Reverse(timestamp::sort_key(row.get(0))));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    const HEADER: &str = "Timestamp,Link,Employer name";

    fn parse(rows: &[&str]) -> Table {
        let text = format!("{HEADER}\n{}\n", rows.join("\n"));
        Table::parse(&text).unwrap()
    }

    #[test]
    fn newest_first() {
        let table = parse(&[
            "5/2/2019 17:11:13,a,Acme",
            "5/4/2019 09:00:00,b,Globex",
            "2019-05-03 12:00:00,c,Initech",
        ]);
        let links: Vec<&str> = sorted_rows(&table).iter().map(|r| r.get(1)).collect();
        assert_eq!(links, ["b", "c", "a"]);
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let table = parse(&[
            "when I get around to it,a,Acme",
            "5/2/2019 17:11:13,b,Globex",
            ",c,Initech",
            "5/4/2019,d,Hooli",
        ]);
        let links: Vec<&str> = sorted_rows(&table).iter().map(|r| r.get(1)).collect();
        // The blank-timestamp row is filtered out entirely; the unparseable
        // one survives at the back.
        assert_eq!(links, ["d", "b", "a"]);
    }

    #[test]
    fn equal_timestamps_keep_original_order() {
        let table = parse(&[
            "5/2/2019 17:11:13,first,Acme",
            "5/2/2019 17:11:13,second,Globex",
            "5/2/2019 17:11:13,third,Initech",
        ]);
        let links: Vec<&str> = sorted_rows(&table).iter().map(|r| r.get(1)).collect();
        assert_eq!(links, ["first", "second", "third"]);
    }

    #[test]
    fn residual_instruction_rows_are_dropped() {
        let table = parse(&[
            "Starting November we move to a new form,,",
            "5/2/2019 17:11:13,a,Acme",
        ]);
        let links: Vec<&str> = sorted_rows(&table).iter().map(|r| r.get(1)).collect();
        assert_eq!(links, ["a"]);
    }

    #[test]
    fn date_only_rows_sort_before_earlier_datetimes() {
        let table = parse(&["5/2/2019 17:11:13,a,Acme", "5/3/2019,b,Globex"]);
        let links: Vec<&str> = sorted_rows(&table).iter().map(|r| r.get(1)).collect();
        assert_eq!(links, ["b", "a"]);
    }
}
