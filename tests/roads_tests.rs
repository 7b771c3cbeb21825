use roadwatch::catalog::SurfaceType;
use roadwatch::classify::{ConditionBand, ConditionInput};
use roadwatch::roads::{load_roads, Road, RoadQuery, RoadUpdate, SortKey};
use std::io::Cursor;

fn road(id: &str, name: Option<&str>, vci: Option<ConditionInput>) -> Road {
    Road {
        id: id.to_string(),
        road_name: name.map(str::to_string),
        location: Some(format!("District {}", id)),
        vci,
        ..Default::default()
    }
}

fn fixture() -> Vec<Road> {
    vec![
        road("r1", Some("Main Street"), Some(85.0.into())),
        road("r2", Some("Harbour Road"), Some("35.5".into())),
        road("r3", Some("airport link"), Some("fair".into())),
        road("r4", None, None),
        road("r5", Some("Bypass"), Some(12.0.into())),
    ]
}

fn ids(page: &roadwatch::roads::Page) -> Vec<String> {
    page.items.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_default_query_sorts_by_name() {
    let roads = fixture();
    let page = RoadQuery::default().apply(&roads);
    // "Unnamed Road" for r4; comparison ignores case
    assert_eq!(ids(&page), vec!["r3", "r5", "r2", "r1", "r4"]);
    assert_eq!(page.total_matches, 5);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_search_matches_id_name_and_location() {
    let roads = fixture();
    let by_name = RoadQuery {
        search: Some("  HARBOUR ".to_string()),
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&by_name), vec!["r2"]);

    let by_location = RoadQuery {
        search: Some("district r5".to_string()),
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&by_location), vec!["r5"]);

    let blank = RoadQuery {
        search: Some("   ".to_string()),
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(blank.total_matches, 5);
}

#[test]
fn test_band_filter_reads_strings_and_numbers() {
    let roads = fixture();
    let poor = RoadQuery {
        band: Some(ConditionBand::Poor),
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&poor), vec!["r2"]);

    let fair = RoadQuery {
        band: Some(ConditionBand::Fair),
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&fair), vec!["r3"]);
}

#[test]
fn test_vci_sort_puts_unreadable_last() {
    let roads = fixture();
    let asc = RoadQuery {
        sort: SortKey::Vci,
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&asc)[..3], ["r5", "r2", "r1"]);

    let desc = RoadQuery {
        sort: SortKey::Vci,
        descending: true,
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&desc)[..3], ["r1", "r2", "r5"]);
    let tail: Vec<String> = ids(&desc)[3..].to_vec();
    assert!(tail.contains(&"r3".to_string()) && tail.contains(&"r4".to_string()));
}

#[test]
fn test_pagination_and_clamp() {
    let roads = fixture();
    let second = RoadQuery {
        page: 2,
        page_size: 2,
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(second.total_pages, 3);
    assert_eq!(ids(&second), vec!["r2", "r1"]);

    let beyond = RoadQuery {
        page: 99,
        page_size: 2,
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(beyond.page, 3);
    assert_eq!(ids(&beyond), vec!["r4"]);

    let zero = RoadQuery {
        page: 0,
        page_size: 2,
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(zero.page, 1);
}

#[test]
fn test_empty_result_has_one_page() {
    let page = RoadQuery::default().apply(&[]);
    assert_eq!(page.total_matches, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
    assert!(page.items.is_empty());
}

#[test]
fn test_cells() {
    let r = road("r2", Some("Harbour Road"), Some("55.5".into()));
    assert_eq!(r.cell("vci"), "55.50");
    assert_eq!(r.cell("status"), "fair");
    assert_eq!(r.cell("start"), "-");
    assert_eq!(r.cell("surface_type"), "-");
    assert_eq!(r.cell("unknown"), "-");
    assert_eq!(r.segment_color(), "#f59e0b");

    let unnamed = road("r4", None, None);
    assert_eq!(unnamed.display_name(), "Unnamed Road");
    assert_eq!(unnamed.segment_color(), "#3b82f6");
}

#[test]
fn test_load_roads_accepts_mixed_vci() {
    let json = r#"[
        {"id": "a", "road_name": "A", "vci": 91.5, "surface_type": "asphalt"},
        {"id": "b", "vci": "poor"},
        {"id": "c", "vci": null},
        {"id": "d"}
    ]"#;
    let roads = load_roads(Cursor::new(json)).unwrap();
    assert_eq!(roads.len(), 4);
    assert_eq!(roads[0].vci, Some(ConditionInput::Numeric(91.5)));
    assert_eq!(roads[0].surface_type, Some(SurfaceType::Asphalt));
    assert_eq!(roads[1].band(), Some(ConditionBand::Poor));
    assert_eq!(roads[2].vci, None);
    assert_eq!(roads[3].band(), None);
}

#[test]
fn test_update_applies_to_road() {
    let mut r = road("r9", Some("Quay"), Some("bad".into()));
    let update = RoadUpdate {
        road_id: "r9".to_string(),
        vci: 78.22,
        surface_type: SurfaceType::Concrete,
    };
    update.apply(&mut r);
    assert_eq!(r.vci, Some(ConditionInput::Numeric(78.22)));
    assert_eq!(r.surface_type, Some(SurfaceType::Concrete));
    assert_eq!(r.band(), Some(ConditionBand::Good));
}

#[test]
fn test_load_roads_accepts_integer_ids() {
    let json = r#"[
        {"id": 1, "road_name": "Main", "vci": 55.0},
        {"id": "r-2", "road_name": "Quay"},
        {"id": 30, "road_name": "Harbour Road", "vci": "good"}
    ]"#;
    let roads = load_roads(Cursor::new(json)).unwrap();
    assert_eq!(roads.len(), 3);
    assert_eq!(roads[0].id, "1");
    assert_eq!(roads[0].band(), Some(ConditionBand::Fair));
    assert_eq!(roads[1].id, "r-2");
    assert_eq!(roads[2].cell("id"), "30");

    let found = RoadQuery {
        search: Some("30".to_string()),
        ..Default::default()
    }
    .apply(&roads);
    assert_eq!(ids(&found), vec!["30"]);
}
