//! Built-in scraper definitions

use crate::{ColumnDef, ColumnType, ScraperConfig};

/// Wikipedia page listing COVID-19 cases by country and territory
pub const COVID19_WIKI_URL: &str =
    "https://en.wikipedia.org/wiki/2019%E2%80%9320_coronavirus_pandemic_by_country_and_territory";

/// Hyphen, em dash and en dash, all used for "no data"
pub const DASHES: [&str; 3] = ["-", "—", "–"];

/// Per-country cases, deaths and recoveries from the Wikipedia table
pub fn covid19() -> ScraperConfig {
    ScraperConfig {
        url: COVID19_WIKI_URL.to_string(),
        container_selector: "div#covid19-container table.wikitable".to_string(),
        columns: vec![
            ColumnDef::skipped(),
            ColumnDef::new("country", ColumnType::String).truncate_from("["),
            ColumnDef::new("cases", ColumnType::Integer).zero_values(DASHES),
            ColumnDef::new("deaths", ColumnType::Integer).zero_values(DASHES),
            ColumnDef::new("recoveries", ColumnType::Integer).zero_values(DASHES),
            ColumnDef::skipped(),
        ],
        header_row_index: 0,
        header_column_names: ["locations", "cases", "deaths", "recov", "ref"]
            .map(String::from)
            .to_vec(),
        header_row_count: 2,
        footer_row_count: 2,
        continue_on_error: true,
        table_name: "entries".to_string(),
        column_order: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covid19_is_valid() {
        let cfg = covid19();
        assert!(cfg.validate().is_ok());
        assert!(cfg.source_url().is_ok());
        assert_eq!(cfg.columns.iter().filter(|c| !c.skip).count(), 4);
    }
}
