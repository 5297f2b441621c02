use super::*;

#[test]
fn epoch_zero_formats_as_day_month_year() {
    assert_eq!(format_creation("0"), "01-01-1970");
    assert_eq!(format_creation("86400"), "02-01-1970");
    assert_eq!(format_creation("1710460800"), "15-03-2024");
}

#[test]
fn unparseable_creation_is_kept_verbatim() {
    assert_eq!(format_creation("not-a-number"), "not-a-number");
    assert_eq!(format_creation(""), "");
    assert_eq!(format_creation("12.5"), "12.5");
}

#[test]
fn out_of_range_epoch_is_kept_verbatim() {
    let raw = i64::MAX.to_string();
    assert_eq!(format_creation(&raw), raw);
}

#[test]
fn short_and_blank_lines_are_skipped() {
    let out = "tank\tONLINE\n\nbroken\nbackup\tDEGRADED\textra\n";
    let pools = pool_rows(out);
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].name, "tank");
    assert_eq!(pools[1].name, "backup");
    assert_eq!(pools[1].health, "DEGRADED");
}

#[test]
fn dataset_rows_need_four_fields() {
    let out = "tank\t100\t200\t/tank\ntank/a\t1\t2\n";
    let rows = dataset_rows(out);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].mountpoint, "/tank");
}

#[test]
fn snapshot_rows_keep_listing_order() {
    let out = "d@b\t1\t10\nd@a\t2\t20\n";
    let rows = snapshot_rows(out);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["d@b", "d@a"]);
    assert_eq!(rows[1].creation, "20");
}

#[test]
fn empty_output_has_no_rows() {
    assert!(pool_rows("").is_empty());
    assert!(snapshot_rows("\n\n").is_empty());
}
