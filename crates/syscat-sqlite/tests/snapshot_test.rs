//! Snapshot lifecycle: install, populate, reopen read-only.

use syscat_sqlite::Snapshot;
use syscat_views::broker::ServiceRow;
use syscat_views::objects::SchemaRow;

#[test]
fn install_and_drain_in_memory() {
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<SchemaRow>().unwrap();
    snapshot
        .conn()
        .execute_batch(
            "INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('dbo', 1, 1);
             INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('guest', 2, NULL);
             INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('sys', 4, 4);",
        )
        .unwrap();

    let rows: Vec<SchemaRow> = snapshot.read_all().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "dbo");
    assert_eq!(rows[1].principal_id, None);
    assert_eq!(rows[2].schema_id, 4);
}

#[test]
fn read_first_returns_first_or_none() {
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<ServiceRow>().unwrap();

    let none: Option<ServiceRow> = snapshot.read_first().unwrap();
    assert!(none.is_none());

    snapshot
        .conn()
        .execute_batch(
            "INSERT INTO sys.services (name, service_id, principal_id, service_queue_id)
             VALUES ('//initiator', 1, NULL, 1001);
             INSERT INTO sys.services (name, service_id, principal_id, service_queue_id)
             VALUES ('//target', 2, NULL, 1002);",
        )
        .unwrap();

    let first: ServiceRow = snapshot.read_first().unwrap().unwrap();
    assert_eq!(first.name, "//initiator");
    assert_eq!(first.service_queue_id, 1001);
}

#[test]
fn file_backed_snapshot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    {
        let snapshot = Snapshot::create(&path).unwrap();
        snapshot.install::<SchemaRow>().unwrap();
        snapshot
            .conn()
            .execute(
                "INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('dbo', 1, 1)",
                [],
            )
            .unwrap();
    }

    let reopened = Snapshot::open(&path).unwrap();
    let rows: Vec<SchemaRow> = reopened.read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "dbo");
}

#[test]
fn reopened_snapshot_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    {
        let snapshot = Snapshot::create(&path).unwrap();
        snapshot.install::<SchemaRow>().unwrap();
    }

    let reopened = Snapshot::open(&path).unwrap();
    let result = reopened.conn().execute(
        "INSERT INTO sys.schemas (name, schema_id, principal_id) VALUES ('dbo', 1, 1)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn install_quotes_every_declared_column() {
    // The widest shapes exercise the DDL generation path.
    let snapshot = Snapshot::open_in_memory().unwrap();
    snapshot.install::<syscat_views::databases::DatabaseRow>().unwrap();
    snapshot.install::<syscat_views::objects::TableRow>().unwrap();
    snapshot.install::<syscat_views::servers::ServerRow>().unwrap();
}
