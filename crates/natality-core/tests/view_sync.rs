//! Integration tests for the year-change and region-click triggers.
//!
//! The dataset is built from the same JSON row and `GeoJSON` shapes the
//! viewer loads, then driven through [`ViewSync`] with a recording sink.
//! No rendering surface is involved.

#![allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]

use natality_core::selection::SelectionState;
use natality_core::sink::RecordingSink;
use natality_core::sync::ViewSync;
use natality_data::{RecordStore, RegionJoiner, RegionSet, YearIndex};
use natality_types::{DetailUpdate, RegionName, ViewUpdate, Year};
use rust_decimal_macros::dec;

const ROWS: &str = r#"[
    {"region": "Moscow", "Year": "1990", "Born": "100", "Died": "80", "Diff": "20"},
    {"region": "Moscow", "Year": "2000", "Born": "90", "Died": "120", "Diff": "-30"},
    {"region": "Moscow", "Year": "2007", "Born": "130", "Died": "110", "Diff": "20"},
    {"region": "Tver", "Year": "1990", "Born": "40", "Died": "35", "Diff": "5"},
    {"region": "Tula", "Year": "2000", "Born": "0", "Died": "15", "Diff": "-15"}
]"#;

const REGIONS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"name": "Moscow"}, "geometry": null},
        {"type": "Feature", "properties": {"name": "Tver"}, "geometry": null},
        {"type": "Feature", "properties": {"name": "Tula"}, "geometry": null}
    ]
}"#;

const SAMPLE_YEARS: [i32; 11] = [
    1970, 1980, 1990, 1995, 2000, 2005, 2006, 2007, 2008, 2009, 2010,
];

fn make_sync() -> ViewSync {
    let records = natality_data::records_from_json(ROWS).unwrap();
    let regions = RegionSet::new(natality_data::regions_from_geojson(REGIONS).unwrap()).unwrap();
    let years = YearIndex::from_raw(&SAMPLE_YEARS).unwrap();
    ViewSync::new(years, RegionJoiner::new(RecordStore::new(records)), regions)
}

fn detail_of(updates: &[ViewUpdate]) -> Option<&DetailUpdate> {
    updates.iter().find_map(|update| match update {
        ViewUpdate::Detail { detail } => Some(detail),
        _ => None,
    })
}

#[test]
fn every_year_change_updates_all_three_views() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    for raw in [1960, 1985, 1992, 2003, 2099] {
        sync.on_year_change(Year::new(raw), &mut sink);
        let updates = sink.take();
        assert_eq!(updates.len(), 3);
        match updates.first() {
            Some(ViewUpdate::MapUpdate { values, .. }) => assert_eq!(values.len(), 3),
            other => panic!("expected map update first, got {other:?}"),
        }
        assert!(matches!(updates.get(1), Some(ViewUpdate::YearDisplay { .. })));
        assert_eq!(detail_of(&updates), Some(&DetailUpdate::NoSelection));
    }
}

#[test]
fn year_display_shows_snapped_year() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    assert_eq!(sync.on_year_change(Year::new(1992), &mut sink), Year::new(1990));
    assert_eq!(sync.on_year_change(Year::new(1985), &mut sink), Year::new(1980));
    assert_eq!(sync.current_year(), Year::new(1980));

    let displayed: Vec<Year> = sink
        .updates()
        .iter()
        .filter_map(|update| match update {
            ViewUpdate::YearDisplay { year } => Some(*year),
            _ => None,
        })
        .collect();
    assert_eq!(displayed, vec![Year::new(1990), Year::new(1980)]);
}

#[test]
fn map_values_mark_missing_data_as_absent() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();
    sync.on_year_change(Year::new(2000), &mut sink);

    let Some(ViewUpdate::MapUpdate { year, values }) = sink.updates().first() else {
        panic!("expected a map update");
    };
    assert_eq!(*year, Year::new(2000));
    assert_eq!(values["Moscow"].value, Some(dec!(90)));
    assert_eq!(values["Tula"].value, Some(dec!(0)));
    assert_eq!(values["Tver"].value, None);
}

#[test]
fn selection_follows_year_changes() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    sync.on_region_click(RegionName::from("Moscow"), Year::new(1990), &mut sink);
    sink.take();

    sync.on_year_change(Year::new(2001), &mut sink);
    let first = sink.take();
    let record = detail_of(&first).and_then(DetailUpdate::record).unwrap();
    assert_eq!(record.year, Year::new(2000));
    assert_eq!(record.diff, dec!(-30));

    sync.on_year_change(Year::new(2007), &mut sink);
    let second = sink.take();
    let record = detail_of(&second).and_then(DetailUpdate::record).unwrap();
    assert_eq!(record.year, Year::new(2007));
    assert_eq!(record.born, dec!(130));

    assert_eq!(
        sync.selection().selected(),
        Some(&RegionName::from("Moscow"))
    );
}

#[test]
fn click_detail_carries_bar_series() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    sync.on_region_click(RegionName::from("Moscow"), Year::new(2001), &mut sink);
    let Some(DetailUpdate::Record { bars, .. }) = detail_of(sink.updates()) else {
        panic!("expected a record detail");
    };
    let values: Vec<_> = bars.iter().map(|bar| bar.value).collect();
    assert_eq!(values, vec![dec!(90), dec!(120)]);
}

#[test]
fn selected_region_without_data_reports_region_and_year() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    sync.on_region_click(RegionName::from("Tver"), Year::new(1990), &mut sink);
    sink.take();
    sync.on_year_change(Year::new(2005), &mut sink);

    assert_eq!(
        detail_of(sink.updates()),
        Some(&DetailUpdate::NoData {
            region: RegionName::from("Tver"),
            year: Year::new(2005),
        })
    );
    // A year without data does not clear the selection.
    assert_eq!(sync.selection().selected(), Some(&RegionName::from("Tver")));
}

#[test]
fn click_snaps_the_raw_year() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    let detail = sync.on_region_click(RegionName::from("Moscow"), Year::new(1992), &mut sink);
    let record = detail.record().unwrap();
    assert_eq!(record.year, Year::new(1990));
    assert_eq!(record.born, dec!(100));
    assert_eq!(record.died, dec!(80));
}

#[test]
fn reselect_moves_highlight_atomically() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    sync.on_region_click(RegionName::from("Moscow"), Year::new(1990), &mut sink);
    sync.on_region_click(RegionName::from("Tver"), Year::new(1990), &mut sink);

    let highlights: Vec<&ViewUpdate> = sink
        .updates()
        .iter()
        .filter(|update| matches!(update, ViewUpdate::HighlightChange { .. }))
        .collect();
    assert_eq!(
        highlights,
        vec![
            &ViewUpdate::HighlightChange {
                selected: RegionName::from("Moscow"),
                previous: None,
            },
            &ViewUpdate::HighlightChange {
                selected: RegionName::from("Tver"),
                previous: Some(RegionName::from("Moscow")),
            },
        ]
    );
}

#[test]
fn current_detail_matches_emitted_detail() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();
    sync.on_region_click(RegionName::from("Moscow"), Year::new(2000), &mut sink);
    sink.take();

    let year = sync.on_year_change(Year::new(2007), &mut sink);
    let from_state = sync.selection().current_detail(sync.joiner(), year).cloned();
    let emitted = detail_of(sink.updates()).and_then(DetailUpdate::record).cloned();
    assert_eq!(from_state, emitted);
}

#[test]
fn join_is_idempotent_across_triggers() {
    let mut sync = make_sync();
    let mut sink = RecordingSink::new();

    let before = sync.join(Year::new(1990));
    sync.on_region_click(RegionName::from("Tula"), Year::new(2000), &mut sink);
    sync.on_year_change(Year::new(2010), &mut sink);
    let after = sync.join(Year::new(1990));
    assert_eq!(before, after);
    assert_eq!(before.len(), sync.regions().len());
}

#[test]
fn fresh_selection_state_has_no_detail() {
    let sync = make_sync();
    let selection = SelectionState::new();
    assert!(selection.current_detail(sync.joiner(), Year::new(1990)).is_none());
    assert_eq!(sync.joiner().store().max_born(), Some(dec!(130)));
}
