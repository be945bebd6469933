//! Edge case tests for tabscrape-table
//!
//! Config files, presets and output sinks.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tabscrape_table::{
    ColumnType, ConfigError, JsonLinesSink, Scraper, ScraperConfig, SinkError, TableSink, TextSink,
    presets,
};

const HTML: &str = r#"
<div id="stats"><table>
  <tr><th>Country</th><th>Cases</th><th>Rate</th></tr>
  <tr><td>France</td><td>1,234</td><td>2.5</td></tr>
  <tr><td>Chad</td><td>—</td><td>—</td></tr>
</table></div>"#;

const CONFIG_JSON: &str = r#"{
    "url": "https://example.com/stats",
    "container_selector": "div#stats table",
    "columns": [
        {"name": "country", "type": "string"},
        {"name": "cases", "type": "integer", "zero_values": ["—"]},
        {"name": "rate", "type": "float", "zero_values": ["—"]}
    ],
    "header_column_names": ["country", "cases", "rate"],
    "header_row_count": 1,
    "table_name": "entries"
}"#;

fn config() -> ScraperConfig {
    serde_json::from_str(CONFIG_JSON).unwrap()
}

// ============================================================================
// CONFIG FILES
// ============================================================================

#[test]
fn test_config_from_json_defaults() {
    let cfg = config();
    assert_eq!(cfg.columns.len(), 3);
    assert_eq!(cfg.columns[2].ty, ColumnType::Float);
    assert!(!cfg.columns[0].skip);
    assert_eq!(cfg.footer_row_count, 0);
    assert!(!cfg.continue_on_error);
    assert_eq!(cfg.column_order, None);
}

#[test]
fn test_config_unknown_type() {
    let json = r#"{"columns": [{"name": "x", "type": "decimal"}]}"#;
    let err = serde_json::from_str::<ScraperConfig>(json).unwrap_err();
    assert!(err.to_string().contains("unknown column type"), "{err}");
}

#[test]
fn test_config_roundtrips_type_names() {
    let json = serde_json::to_string(&config()).unwrap();
    assert!(json.contains(r#""type":"integer""#));
    let back: ScraperConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config());
}

#[test]
fn test_column_type_parse_error_kind() {
    assert!(matches!("uint".parse::<ColumnType>(), Err(ConfigError::UnknownType(_))));
}

// ============================================================================
// SINKS
// ============================================================================

#[test]
fn test_json_lines_sink() {
    let table = Scraper::new(config()).unwrap().scrape_html(HTML).unwrap();
    let date = Utc.with_ymd_and_hms(2020, 4, 5, 12, 0, 0).unwrap();

    let mut sink = JsonLinesSink::new(Vec::new()).with_date(date);
    assert_eq!(sink.write_table(&table).unwrap(), 2);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let expected = "\
{\"date\":\"2020-04-05T12:00:00Z\",\"country\":\"France\",\"cases\":1234,\"rate\":2.5}
{\"date\":\"2020-04-05T12:00:00Z\",\"country\":\"Chad\",\"cases\":0,\"rate\":0.0}
";
    assert_eq!(out, expected);
}

#[test]
fn test_json_lines_sink_rejects_bad_names() {
    let mut cfg = config();
    cfg.table_name = "my entries".into();
    let table = Scraper::new(cfg).unwrap().scrape_html(HTML).unwrap();
    let mut sink = JsonLinesSink::new(Vec::new());
    assert!(matches!(sink.write_table(&table), Err(SinkError::InvalidIdentifier(_))));

    let mut cfg = config();
    cfg.columns[0].name = "date".into();
    let table = Scraper::new(cfg).unwrap().scrape_html(HTML).unwrap();
    assert!(matches!(sink.write_table(&table), Err(SinkError::ReservedColumn(_))));
}

#[test]
fn test_text_sink() {
    let table = Scraper::new(config()).unwrap().scrape_html(HTML).unwrap();
    let mut sink = TextSink::new(Vec::new());
    sink.write_table(&table).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out, format!("{table}\n"));
    assert!(out.starts_with("country cases rate\n"));
}

// ============================================================================
// PRESETS
// ============================================================================

#[test]
fn test_covid19_preset_on_fixture() {
    let html = r#"
    <div id="covid19-container"><table class="wikitable plainrowheaders">
      <tr><th colspan="2">Locations</th><th>Cases</th><th>Deaths</th><th>Recov.</th><th>Ref.</th></tr>
      <tr><th></th><th>World</th><th>1</th><th>2</th><th>3</th><th></th></tr>
      <tr><th><img alt=""></th><th>United States[b]</th><td>1,000</td><td>50</td><td>–</td><td>[1]</td></tr>
      <tr><th></th><th>Spain</th><td>900</td><td>40</td><td>30</td></tr>
      <tr><th></th><th>Italy</th><td>800</td><td>60</td><td>20</td><td>[2]</td></tr>
      <tr><td colspan="6">As of 5 April</td></tr>
      <tr><td colspan="6">Notes</td></tr>
    </table></div>"#;

    let table = Scraper::new(presets::covid19()).unwrap().scrape_html(html).unwrap();
    assert_eq!(table.name, "entries");
    assert_eq!(table.column_names(), vec!["country", "cases", "deaths", "recoveries"]);
    // Spain's row is short and dropped
    assert_eq!(table.len(), 2);
    let expected = [
        "      country cases deaths recoveries",
        "United States  1000     50          0",
        "        Italy   800     60         20",
    ]
    .join("\n");
    assert_eq!(table.to_string(), expected);
}
