//! Typed reads against snapshot data: coercions, nullability, error paths.

use chrono::NaiveDate;
use syscat_core::CatalogError;
use syscat_sqlite::Snapshot;
use syscat_views::databases::ConfigurationRow;
use syscat_views::objects::SchemaRow;
use syscat_views::security::CredentialRow;
use syscat_views::storage::FilegroupRow;
use syscat_views::trace::TraceCategoryRow;
use uuid::Uuid;

#[test]
fn narrows_sqlite_integers_to_declared_widths() {
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<TraceCategoryRow>().unwrap();
    snapshot
        .conn()
        .execute_batch(
            "INSERT INTO sys.trace_categories (category_id, name, type) VALUES (1, 'Cursors', 0);
             INSERT INTO sys.trace_categories (category_id, name, type) VALUES (2, 'Database', 0);",
        )
        .unwrap();

    let rows: Vec<TraceCategoryRow> = snapshot.read_all().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category_id, 1i16);
    assert_eq!(rows[0].r#type, 0u8);
    assert_eq!(rows[1].name, "Database");
}

#[test]
fn datetime_text_parses_into_records() {
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<CredentialRow>().unwrap();
    snapshot
        .conn()
        .execute(
            "INSERT INTO sys.credentials (credential_id, name, credential_identity, \
             create_date, modify_date)
             VALUES (1, 'backup_cred', NULL, '2024-03-01 10:30:00', '2024-03-02 08:00:00')",
            [],
        )
        .unwrap();

    let row: CredentialRow = snapshot.read_first().unwrap().unwrap();
    assert_eq!(
        row.create_date,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(10, 30, 0).unwrap()
    );
    assert_eq!(row.credential_identity, None);
}

#[test]
fn guid_text_parses_into_records() {
    let guid = "6f9619ff-8b86-d011-b42d-00c04fc964ff";
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<FilegroupRow>().unwrap();
    snapshot
        .conn()
        .execute(
            "INSERT INTO sys.filegroups (name, data_space_id, type, type_desc, is_default, \
             filegroup_guid, log_filegroup_id, is_read_only)
             VALUES ('PRIMARY', 1, 'FG', 'ROWS_FILEGROUP', 1, ?1, NULL, 0)",
            [guid],
        )
        .unwrap();

    let row: FilegroupRow = snapshot.read_first().unwrap().unwrap();
    assert_eq!(row.filegroup_guid, Some(Uuid::parse_str(guid).unwrap()));
    assert_eq!(row.log_filegroup_id, None);
}

#[test]
fn variant_cells_keep_their_storage_class() {
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<ConfigurationRow>().unwrap();
    snapshot
        .conn()
        .execute(
            "INSERT INTO sys.configurations (configuration_id, name, value, minimum, maximum, \
             value_in_use, description, is_dynamic, is_advanced)
             VALUES (1543, 'min memory per query (KB)', 1024, 512, 2147483647, 1024, \
             'minimum memory per query (KBytes)', 1, 1)",
            [],
        )
        .unwrap();

    let row: ConfigurationRow = snapshot.read_first().unwrap().unwrap();
    assert_eq!(row.value, Some(syscat_core::SqlValue::BigInt(1024)));
    assert!(row.is_dynamic);
}

#[test]
fn null_in_not_null_column_fails_at_that_column() {
    // A drifted snapshot: the table allows NULL where the shape does not.
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot
        .conn()
        .execute_batch(
            "CREATE TABLE sys.schemas (name TEXT, schema_id INTEGER, principal_id INTEGER);
             INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('dbo', 1, 1);
             INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES (NULL, 2, NULL);",
        )
        .unwrap();

    let err = snapshot.read_all::<SchemaRow>().unwrap_err();
    match err {
        CatalogError::UnexpectedNull { view: "sys.schemas", column: "name", ordinal: 0 } => {}
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn type_mismatch_names_view_and_column() {
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot
        .conn()
        .execute_batch(
            "CREATE TABLE sys.schemas (name, schema_id, principal_id);
             INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('dbo', 'one', 1);",
        )
        .unwrap();

    let err = snapshot.read_all::<SchemaRow>().unwrap_err();
    match err {
        CatalogError::TypeMismatch {
            view: "sys.schemas",
            column: "schema_id",
            ordinal: 1,
            expected: "int",
            found: "nvarchar",
        } => {}
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn driver_errors_pass_through() {
    // No table behind the view: the prepare fails and surfaces unmodified.
    let snapshot = Snapshot::open_in_memory().unwrap();
    let err = snapshot.read_all::<SchemaRow>().unwrap_err();
    assert!(matches!(err, CatalogError::Driver { .. }));
}
