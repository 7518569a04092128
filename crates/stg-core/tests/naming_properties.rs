//! Naming-rule properties over generated names.

use stg_core::naming::{parse_project_dir_name, parse_stage_file_name};

#[test]
fn every_canonical_project_name_yields_id_and_slug() {
    let slugs = ["a", "setup", "intro_to_rust", "web-api", "x1_y2-z3"];
    for id in [0_u64, 1, 7, 42, 1_000_000] {
        for slug in slugs {
            let name = format!("project_{id}_{slug}");
            let parsed = parse_project_dir_name(&name)
                .unwrap_or_else(|| panic!("{name} should be valid"));
            assert_eq!(parsed.id, id);
            assert!(!parsed.slug.is_empty());
        }
    }
}

#[test]
fn names_without_title_segment_are_rejected() {
    for id in [0_u64, 1, 12, 999] {
        let name = format!("project_{id}");
        assert!(parse_project_dir_name(&name).is_none(), "{name}");
    }
}

#[test]
fn stage_names_round_trip_identifiers() {
    for (order, stage_id) in [(1_u64, 1_u64), (3, 501), (10, 256), (0, 0)] {
        let name = format!("{order}_{stage_id}_build_api.html");
        let parsed = parse_stage_file_name(&name).expect("valid stage name");
        assert_eq!(parsed.order, order);
        assert_eq!(parsed.stage_id, stage_id);
        assert_eq!(parsed.title, "build api");
    }
}
