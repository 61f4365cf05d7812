//! Tests for the point-record reader.

use super::*;
use approx::assert_relative_eq;

const FIVE_RECORDS: &str = "\
# x y z nx ny nz material area cover
0.0 0.0 0.0  0.0 0.0 1.0  1 1.00 0
1.0 0.0 0.0  0.0 0.0 1.0  1 0.25 1
2.0 0.0 0.0  0.0 0.0 1.0  2 4.00 0
3.0 0.0 0.0  0.0 0.0 1.0  2 0.50 -1
4.0 0.0 0.0  0.0 0.0 1.0  3 2.00 0
";

#[test]
fn filtering_drops_covered_records_and_keeps_order() {
    let cloud = DsvReader::new()
        .filter_covered(true)
        .read_str(FIVE_RECORDS)
        .unwrap();
    assert_eq!(cloud.len(), 3);
    let xs: Vec<f64> = cloud.positions().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 2.0, 4.0]);
    assert!(cloud.cover_flags().iter().all(|&c| c == 0));
}

#[test]
fn without_filtering_all_records_are_kept() {
    let cloud = DsvReader::new().read_str(FIVE_RECORDS).unwrap();
    assert_eq!(cloud.len(), 5);
    assert_eq!(cloud.cover_flags(), &[0, 1, 0, -1, 0]);
    assert_eq!(cloud.material_ids(), &[1, 1, 2, 2, 3]);
}

#[test]
fn radius_squared_recovers_area() {
    let cloud = DsvReader::new().read_str(FIVE_RECORDS).unwrap();
    for (radius, area) in cloud.radii().iter().zip(cloud.areas()) {
        assert_relative_eq!(radius * radius, *area, max_relative = 1e-12);
    }
    assert_eq!(cloud.radii()[2], 2.0);
}

#[test]
fn fields_land_in_the_right_place() {
    let cloud = DsvReader::new()
        .read_str("1.5 -2 3e-1 0.6 0.8 0 42 0.09 7\n")
        .unwrap();
    let record = cloud.record(0).unwrap();
    assert_eq!(record.position, DVec3::new(1.5, -2.0, 0.3));
    assert_eq!(record.normal, DVec3::new(0.6, 0.8, 0.0));
    assert_eq!(record.material_id, 42);
    assert_eq!(record.area, 0.09);
    assert_eq!(record.cover_flag, 7);
    assert!(record.is_covered());
    assert_relative_eq!(record.radius(), 0.3);
    assert!(cloud.record(1).is_none());
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let text = "\n   # indented comment\n\t\n#\n0 0 0 0 0 1 0 1 0\n   \n";
    let cloud = DsvReader::new().read_str(text).unwrap();
    assert_eq!(cloud.len(), 1);
}

#[test]
fn leading_whitespace_before_a_record_is_fine() {
    let cloud = DsvReader::new().read_str("   0 0 0 0 0 1 0 1 0").unwrap();
    assert_eq!(cloud.len(), 1);
}

#[test]
fn strict_rejects_short_records_with_line_number() {
    let text = "# header\n0 0 0 0 0 1 0 1 0\n1 2 3\n";
    let err = DsvReader::new().read_str(text).unwrap_err();
    match err {
        IoError::MalformedRecord { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("expected 9 fields, found 3"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_rejects_bad_tokens() {
    let cases = [
        ("0 0 zero 0 0 1 0 1 0", "z is not a finite number"),
        ("0 0 0 0 0 1 1.5 1 0", "material id is not an integer"),
        ("0 0 0 0 0 1 0 1 yes", "cover flag is not an integer"),
        ("0 0 0 0 0 nan 0 1 0", "nz is not a finite number"),
        ("0 0 0 0 0 1 0 -1 0", "negative area"),
        ("0 0 0 0 0 1 0 1 0 extra", "expected 9 fields, found 10"),
    ];
    for (text, expected) in cases {
        let err = DsvReader::new().read_str(text).unwrap_err();
        assert!(err.to_string().contains(expected), "{text}: {err}");
    }
}

#[test]
fn skip_policy_drops_malformed_records() {
    let text = "0 0 0 0 0 1 0 1 0\nbroken line\n1 0 0 0 0 1 0 1 0\n";
    let cloud = DsvReader::new()
        .policy(RecordPolicy::Skip)
        .read_str(text)
        .unwrap();
    assert_eq!(cloud.len(), 2);
    assert_eq!(cloud.positions()[1], DVec3::X);
}

#[test]
fn lenient_policy_defaults_missing_fields_to_zero() {
    let text = "1 2 3 0 0 1\n4 5 6 0 0 1 9 bad 0 trailing tokens\n7 8 9 0 0 1 1 -4 0\n";
    let cloud = DsvReader::new()
        .policy(RecordPolicy::Lenient)
        .read_str(text)
        .unwrap();
    assert_eq!(cloud.len(), 3);

    let short = cloud.record(0).unwrap();
    assert_eq!(short.position, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(short.material_id, 0);
    assert_eq!(short.area, 0.0);
    assert_eq!(short.cover_flag, 0);

    let bad_area = cloud.record(1).unwrap();
    assert_eq!(bad_area.material_id, 9);
    assert_eq!(bad_area.area, 0.0);

    assert_eq!(cloud.areas()[2], 0.0);
    assert!(cloud.radii().iter().all(|r| !r.is_nan()));
}

#[test]
fn lenient_filtering_uses_defaulted_cover_flag() {
    let text = "0 0 0 0 0 1 0 1\n1 0 0 0 0 1 0 1 3\n";
    let cloud = DsvReader::new()
        .policy(RecordPolicy::Lenient)
        .filter_covered(true)
        .read_str(text)
        .unwrap();
    assert_eq!(cloud.len(), 1);
    assert_eq!(cloud.positions()[0], DVec3::ZERO);
}

#[test]
fn point_cloud_to_disc_surface() {
    let cloud = DsvReader::new().read_str(FIVE_RECORDS).unwrap();
    let surface = cloud.to_disc_surface().unwrap();
    assert_eq!(surface.len(), 5);
    assert_eq!(surface.positions(), cloud.positions());
    assert_eq!(surface.normals(), cloud.normals());
    assert_eq!(surface.radii(), cloud.radii().as_slice());
}

#[test]
fn empty_input_gives_empty_cloud() {
    let cloud = DsvReader::new().read_str("").unwrap();
    assert!(cloud.is_empty());
    assert!(cloud.to_disc_surface().unwrap().is_empty());
}

#[test]
fn read_path_reports_missing_file() {
    let err = DsvReader::new()
        .read_path("/definitely/not/here.dsv")
        .unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}
