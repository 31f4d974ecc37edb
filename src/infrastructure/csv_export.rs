const EXPORT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// CSV export URL for one tab of a spreadsheet.
/// `t` is a cache buster; callers pass the current unix time in seconds.
pub fn csv_export_url(sheet_id: &str, gid: &str, timestamp: i64) -> String {
    format!(
        "{}/{}/export?format=csv&gid={}&t={}",
        EXPORT_BASE_URL,
        urlencoding::encode(sheet_id),
        urlencoding::encode(gid),
        timestamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export_url() {
        let url = csv_export_url("1AbC-xyz_9", "123456", 1_700_000_000);
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/1AbC-xyz_9/export?format=csv&gid=123456&t=1700000000"
        );
    }

    #[test]
    fn test_csv_export_url_encodes_ids() {
        let url = csv_export_url("a b", "1&x=2", 5);
        assert_eq!(
            url,
            "https://docs.google.com/spreadsheets/d/a%20b/export?format=csv&gid=1%26x%3D2&t=5"
        );
    }
}
