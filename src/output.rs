use crate::map::GeoJsonMap;
use anyhow::Result;
use clap::ValueEnum;
use eventmap_boundary as json;
use eventmap_core::usecases::{draw_map, FilteredEvent, SearchCriteria, SearchOutcome, Vocabulary};
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Geojson,
}

const TITLE_WIDTH: usize = 40;
const LOCATION_WIDTH: usize = 30;

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_owned();
    }
    let mut clipped: String = s.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}

/// Sorts by start and end, keeping the dataset order otherwise.
fn sorted_by_start(results: &[FilteredEvent]) -> Vec<&FilteredEvent> {
    let mut rows: Vec<_> = results.iter().collect();
    rows.sort_by_key(|row| (row.start, row.end));
    rows
}

fn write_table<W: Write>(out: &mut W, outcome: &SearchOutcome) -> Result<()> {
    writeln!(
        out,
        "{:<16}  {:<16}  {:<TITLE_WIDTH$}  {:<LOCATION_WIDTH$}  {:>10}",
        "START", "END", "TITLE", "LOCATION", "DISTANCE"
    )?;
    for row in sorted_by_start(&outcome.results) {
        writeln!(
            out,
            "{:<16}  {:<16}  {:<TITLE_WIDTH$}  {:<LOCATION_WIDTH$}  {:>10}",
            row.start_label,
            row.end_label.as_deref().unwrap_or_default(),
            clip(&row.title, TITLE_WIDTH),
            clip(row.location.as_deref().unwrap_or("-"), LOCATION_WIDTH),
            row.distance.map(|d| d.to_string()).unwrap_or_default(),
        )?;
    }
    writeln!(
        out,
        "{} result(s) of {} event(s) on the map",
        outcome.results.len(),
        outcome.markers.len()
    )?;
    Ok(())
}

pub fn write_search_results<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    criteria: &SearchCriteria,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, outcome)?,
        OutputFormat::Json => {
            let mut response = json::SearchResponse::from(outcome);
            response.results = sorted_by_start(&outcome.results)
                .into_iter()
                .map(json::EventRow::from)
                .collect();
            serde_json::to_writer_pretty(&mut *out, &response)?;
            writeln!(out)?;
        }
        OutputFormat::Geojson => {
            let mut map = GeoJsonMap::default();
            draw_map(&mut map, outcome, criteria);
            serde_json::to_writer_pretty(&mut *out, &map.into_feature_collection())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_vocabulary<W: Write>(out: &mut W, vocabulary: Vocabulary, as_json: bool) -> Result<()> {
    if as_json {
        serde_json::to_writer_pretty(&mut *out, &json::Vocabulary::from(vocabulary))?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "Types:")?;
    for t in &vocabulary.types {
        writeln!(out, "  {t}")?;
    }
    writeln!(out, "Keywords:")?;
    for k in &vocabulary.keywords {
        writeln!(out, "  {k}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventmap_core::{usecases::search_events, util::time::TimeWindow};
    use eventmap_entities::{builders::*, event::Event, geo::MapPoint};
    use serde_json::Value;
    use time::macros::date;

    fn events() -> Vec<Event> {
        vec![
            Event::build()
                .id("late")
                .title("Late")
                .pos(MapPoint::from_lat_lng_deg(50.1, 14.4))
                .on(date!(2024 - 06 - 09))
                .finish(),
            Event::build()
                .id("early")
                .title("Early")
                .online()
                .on(date!(2024 - 06 - 02))
                .finish(),
        ]
    }

    fn criteria() -> SearchCriteria {
        SearchCriteria::new(TimeWindow::new(
            date!(2024 - 06 - 01),
            None,
            Some((date!(2024 - 06 - 30), None)),
        ))
    }

    fn render(format: OutputFormat) -> String {
        let criteria = criteria();
        let outcome = search_events(&events(), &criteria).unwrap();
        let mut out = Vec::new();
        write_search_results(&mut out, &outcome, &criteria, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_is_sorted_by_start() {
        let table = render(OutputFormat::Table);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("START"));
        assert!(lines[1].starts_with("2024-06-02"));
        assert!(lines[1].contains("online"));
        assert!(lines[2].starts_with("2024-06-09"));
        assert_eq!(lines[3], "2 result(s) of 1 event(s) on the map");
    }

    #[test]
    fn json_is_sorted_by_start() {
        let response: Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(response["results"][0]["id"], "early");
        assert_eq!(response["results"][1]["id"], "late");
        assert_eq!(response["markers"][0]["id"], "late");
    }

    #[test]
    fn geojson_contains_markers() {
        let collection: Value = serde_json::from_str(&render(OutputFormat::Geojson)).unwrap();
        assert_eq!(collection["features"].as_array().map(Vec::len), Some(1));
        assert_eq!(collection["features"][0]["properties"]["id"], "late");
        assert!(collection.get("bbox").is_some());
    }

    #[test]
    fn clip_long_titles() {
        assert_eq!(clip("Koncert", 10), "Koncert");
        assert_eq!(clip("Dlouhý název akce", 6), "Dlouh…");
    }

    #[test]
    fn list_vocabulary() {
        let vocabulary = Vocabulary {
            types: vec!["hudba".into()],
            keywords: vec!["jazz".into()],
        };
        let mut out = Vec::new();
        write_vocabulary(&mut out, vocabulary.clone(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Types:\n  hudba\nKeywords:\n  jazz\n"
        );

        let mut out = Vec::new();
        write_vocabulary(&mut out, vocabulary, true).unwrap();
        let json: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["types"][0], "hudba");
    }
}
