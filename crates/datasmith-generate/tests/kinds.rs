use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use datasmith_core::{FieldDefinition, FieldKind, SeedInput};
use datasmith_generate::{GenerationEngine, GeneratedValue, Row};

fn generate(fields: Vec<FieldDefinition>, count: u64, seed: &str) -> Vec<Row> {
    GenerationEngine::default()
        .generate_rows(&fields, count, Some(&SeedInput::from(seed)))
        .expect("generation succeeds")
        .rows
}

fn text<'a>(row: &'a Row, name: &str) -> &'a str {
    row.get(name)
        .and_then(GeneratedValue::as_str)
        .unwrap_or_else(|| panic!("{name} is not text"))
}

#[test]
fn number_respects_bounds_over_many_rows() {
    let rows = generate(
        vec![
            FieldDefinition::new("n", "n", "Number")
                .with_option("min", 1)
                .with_option("max", 5),
        ],
        1000,
        "range",
    );
    for row in &rows {
        let value = row.get("n").and_then(GeneratedValue::as_i64).expect("int");
        assert!((1..=5).contains(&value), "{value} out of range");
    }
}

#[test]
fn inverted_and_stringified_bounds_are_tolerated() {
    let rows = generate(
        vec![
            FieldDefinition::new("n", "n", "Number")
                .with_option("min", "50")
                .with_option("max", "10"),
            FieldDefinition::new("d", "d", "Decimal")
                .with_option("min", "0.5")
                .with_option("max", 1)
                .with_option("precision", "1"),
        ],
        200,
        "lenient",
    );
    for row in &rows {
        let n = row.get("n").and_then(GeneratedValue::as_i64).expect("int");
        assert!((10..=50).contains(&n));
        let d = row.get("d").and_then(GeneratedValue::as_f64).expect("float");
        assert!((0.5..=1.0).contains(&d));
        assert!(((d * 10.0).round() - d * 10.0).abs() < 1e-9);
    }
}

#[test]
fn decimal_accepts_bounds_near_the_float_limits() {
    let rows = generate(
        vec![
            FieldDefinition::new("d", "d", "Decimal")
                .with_option("min", -1e308)
                .with_option("max", 1e308),
        ],
        100,
        "wide",
    );
    for row in &rows {
        let d = row.get("d").and_then(GeneratedValue::as_f64).expect("float");
        assert!(d.is_finite());
        assert!((-1e308..=1e308).contains(&d));
    }
}

#[test]
fn sequence_ignores_the_seed() {
    let field = || {
        vec![
            FieldDefinition::new("seq", "code", "Character Sequence")
                .with_option("prefix", "ID-")
                .with_option("startAt", 100)
                .with_option("length", 3)
                .with_option("padZeros", true),
        ]
    };
    for seed in ["one", "two"] {
        let rows = generate(field(), 3, seed);
        let values: Vec<&str> = rows.iter().map(|row| text(row, "code")).collect();
        assert_eq!(values, vec!["ID-100", "ID-101", "ID-102"]);
    }
}

#[test]
fn composite_values_have_expected_shapes() {
    let rows = generate(
        vec![
            FieldDefinition::new("vin", "vin", "VIN"),
            FieldDefinition::new("sku", "sku", "SKU").with_option("prefix", "P-"),
            FieldDefinition::new("bundle", "bundle", "App Bundle ID"),
            FieldDefinition::new("version", "version", "App Version"),
            FieldDefinition::new("zip", "zip", "Zip Code").with_option("plus4", "true"),
            FieldDefinition::new("state", "state", "State").with_option("abbreviation", true),
            FieldDefinition::new("ip", "ip", "IP Address"),
            FieldDefinition::new("uuid", "uuid", "UUID"),
        ],
        100,
        "shapes",
    );

    for row in &rows {
        let vin = text(row, "vin");
        assert_eq!(vin.len(), 17);
        assert!(!vin.contains(['I', 'O', 'Q']));

        let sku = text(row, "sku");
        let (head, number) = sku.rsplit_once('-').expect("sku separator");
        assert!(head.starts_with("P-") && head.len() == 5);
        let number: u32 = number.parse().expect("sku number");
        assert!((1000..=9999).contains(&number));

        let bundle = text(row, "bundle");
        let parts: Vec<&str> = bundle.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "com");

        let version: Vec<u32> = text(row, "version")
            .split('.')
            .map(|part| part.parse().expect("numeric version part"))
            .collect();
        assert_eq!(version.len(), 3);
        assert!(version[0] <= 9 && version[1] <= 20 && version[2] <= 50);

        let zip = text(row, "zip");
        assert_eq!(zip.len(), 10);
        assert_eq!(&zip[5..6], "-");

        let state = text(row, "state");
        assert_eq!(state.len(), 2);
        assert!(state.chars().all(|ch| ch.is_ascii_uppercase()));

        assert_eq!(text(row, "ip").split('.').count(), 4);
        assert!(uuid::Uuid::parse_str(text(row, "uuid")).is_ok());
    }
}

#[test]
fn dates_follow_format_and_window() {
    let rows = generate(
        vec![
            FieldDefinition::new("d", "d", "Date")
                .with_option("min", "2024-01-01")
                .with_option("max", "2024-12-31")
                .with_option("format", "MM/DD/YYYY"),
            FieldDefinition::new("dob", "dob", "Date of Birth")
                .with_option("minAge", 30)
                .with_option("maxAge", 40),
            FieldDefinition::new("future", "future", "Future Date").with_option("days", 30),
            FieldDefinition::new("t", "t", "Time"),
        ],
        100,
        "dates",
    );

    let first_anchor_day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    for row in &rows {
        let d = NaiveDate::parse_from_str(text(row, "d"), "%m/%d/%Y").expect("mm/dd/yyyy");
        assert_eq!(d.format("%Y").to_string(), "2024");

        let dob = NaiveDate::parse_from_str(text(row, "dob"), "%Y-%m-%d").expect("dob");
        let years = first_anchor_day.years_since(dob).unwrap_or(0);
        assert!((29..=41).contains(&years), "age {years}");

        let future = NaiveDate::parse_from_str(text(row, "future"), "%Y-%m-%d").expect("future");
        assert!(future >= first_anchor_day);

        let t = text(row, "t");
        assert_eq!(t.len(), 5);
        assert_eq!(&t[2..3], ":");
    }
}

#[test]
fn iso_dates_and_second_precision_times_end_to_end() {
    let rows = generate(
        vec![
            FieldDefinition::new("d", "d", "Date")
                .with_option("min", "2024-03-01")
                .with_option("max", "2024-03-31")
                .with_option("format", "ISO"),
            FieldDefinition::new("t", "t", "Time").with_option("format", "HH:mm:ss"),
        ],
        50,
        "iso",
    );

    let min = "2024-03-01T00:00:00Z".parse::<DateTime<Utc>>().expect("min");
    let max = "2024-03-31T00:00:00Z".parse::<DateTime<Utc>>().expect("max");
    for row in &rows {
        let d = text(row, "d");
        assert!(d.ends_with('Z'), "{d}");
        let instant = DateTime::parse_from_rfc3339(d)
            .expect("rfc3339")
            .with_timezone(&Utc);
        assert!(instant >= min && instant <= max, "{d}");

        let t = text(row, "t");
        assert_eq!(t.len(), 8, "{t}");
        assert!(NaiveTime::parse_from_str(t, "%H:%M:%S").is_ok(), "{t}");
    }
}

#[test]
fn past_dates_end_at_the_anchor() {
    let rows = generate(
        vec![
            FieldDefinition::new("past", "past", "Past Date")
                .with_option("days", 10)
                .with_option("anchorWindowDays", 0),
        ],
        100,
        "past",
    );

    let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    let earliest = NaiveDate::from_ymd_opt(2023, 12, 22).expect("date");
    for row in &rows {
        let past = NaiveDate::parse_from_str(text(row, "past"), "%Y-%m-%d").expect("past");
        assert!(past >= earliest && past <= anchor, "{past}");
    }
}

#[test]
fn address_can_carry_a_secondary_unit() {
    let rows = generate(
        vec![
            FieldDefinition::new("plain", "plain", "Address"),
            FieldDefinition::new("full", "full", "Address").with_option("includeSecondary", true),
        ],
        50,
        "address",
    );

    for row in &rows {
        assert!(!text(row, "plain").contains(", "));

        let full = text(row, "full");
        let (street, secondary) = full.rsplit_once(", ").expect("secondary part");
        assert!(!street.is_empty());
        let (unit, number) = secondary.split_once(' ').expect("unit and number");
        assert!(matches!(unit, "Apt." | "Suite" | "Unit"), "{full}");
        let number: u32 = number.parse().expect("unit number");
        assert!((100..=999).contains(&number));
    }
}

#[test]
fn relative_dates_share_a_stable_anchor() {
    let fields = || {
        vec![
            FieldDefinition::new("dob", "dob", "Date of Birth")
                .with_option("minAge", 30)
                .with_option("maxAge", 30),
        ]
    };
    let rows = generate(fields(), 10, "anchor");
    let first = text(&rows[0], "dob").to_string();
    assert!(rows.iter().all(|row| text(row, "dob") == first));
    assert_eq!(text(&generate(fields(), 1, "anchor")[0], "dob"), first);
}

#[test]
fn categorical_kinds_draw_from_their_lists() {
    let fields: Vec<FieldDefinition> = [
        FieldKind::CarMake,
        FieldKind::CarModel,
        FieldKind::ProductCategory,
        FieldKind::AppName,
        FieldKind::Department,
        FieldKind::Color,
        FieldKind::Company,
    ]
    .iter()
    .map(|kind| FieldDefinition::new(kind.as_tag(), kind.as_tag(), kind.as_tag()))
    .collect();
    let rows = generate(fields.clone(), 30, "categories");
    for row in &rows {
        for field in &fields {
            assert!(!text(row, &field.name).is_empty());
        }
    }

    let custom = generate(
        vec![FieldDefinition::new("tier", "tier", "Custom List").with_option("values", "gold, silver")],
        50,
        "custom",
    );
    assert!(custom
        .iter()
        .all(|row| matches!(text(row, "tier"), "gold" | "silver")));
}
