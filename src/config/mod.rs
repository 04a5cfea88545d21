#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_SHEET_ID: &str = "19XjzCgUWcaYPsBY0zsP0Jdd1W-vDQO01gwWC0XlsHn0";
pub const DEFAULT_SHEET_GID: &str = "0";
pub const DEFAULT_MAP_STYLE_URL: &str =
    "https://api.maptiler.com/maps/outdoor-v2/style.json?key=get_your_own_OpIi9ZULNHzrESv6T2vL";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// CSV export URL of one sheet (tab) of a spreadsheet.
pub fn sheet_csv_url(sheet_id: &str, sheet_gid: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
        sheet_id, sheet_gid
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_csv_url() {
        assert_eq!(
            sheet_csv_url("abc", "42"),
            "https://docs.google.com/spreadsheets/d/abc/export?format=csv&gid=42"
        );
    }
}
