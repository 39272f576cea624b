use pretty_assertions::assert_eq;
use struct2schema_core::{
    schema::{Field, Table},
    Dialect,
};
use struct2schema_sql::{
    stmt::{ColumnDef, CreateTable, Type},
    Serializer, Statement,
};

fn user() -> Table {
    Table::new("User")
        .with_field(Field::new("ID", "i32"))
        .with_field(Field::new("Name", "String"))
}

fn serialize(table: &Table, dialect: Dialect) -> String {
    Serializer::new().serialize(&Statement::create_table(table, dialect))
}

fn normalize(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn create_table_sqlite() {
    assert_eq!(
        serialize(&user(), Dialect::Sqlite),
        "CREATE TABLE IF NOT EXISTS User (\n    ID INTEGER,\n    Name TEXT\n)"
    );
}

#[test]
fn create_table_mysql() {
    assert_eq!(
        normalize(&serialize(&user(), Dialect::Mysql)),
        "CREATE TABLE IF NOT EXISTS User ( ID INT, Name MEDIUMTEXT )"
    );
}

#[test]
fn no_trailing_comma() {
    for len in 1..=6 {
        let mut table = Table::new("Wide");
        for i in 0..len {
            table.fields.push(Field::new(format!("c{i}"), "i64"));
        }

        let sql = serialize(&table, Dialect::Sqlite);

        assert_eq!(sql.matches(',').count(), len - 1, "sql={sql}");
        assert!(sql.ends_with(&format!("c{} INTEGER\n)", len - 1)), "sql={sql}");
    }
}

#[test]
fn single_column() {
    let table = Table::new("Tag").with_field(Field::new("label", "String"));

    assert_eq!(
        normalize(&serialize(&table, Dialect::Sqlite)),
        "CREATE TABLE IF NOT EXISTS Tag ( label TEXT )"
    );
}

#[test]
fn empty_column_list() {
    assert_eq!(
        serialize(&Table::new("Marker"), Dialect::Sqlite),
        "CREATE TABLE IF NOT EXISTS Marker (\n)"
    );
}

#[test]
fn unmapped_column_renders_name_only() {
    let table = user().with_field(Field::new("active", "bool"));
    let create = CreateTable::from_schema(&table, Dialect::Sqlite);

    let unmapped: Vec<_> = create.unmapped_columns().map(|c| &c.name[..]).collect();
    assert_eq!(unmapped, ["active"]);

    assert_eq!(
        Serializer::new().serialize(&create.into()),
        "CREATE TABLE IF NOT EXISTS User (\n    ID INTEGER,\n    Name TEXT,\n    active\n)"
    );
}

#[test]
fn dialect_only_changes_column_types() {
    let table = user().with_field(Field::new("score", "f32"));

    let sqlite = CreateTable::from_schema(&table, Dialect::Sqlite);
    let mysql = CreateTable::from_schema(&table, Dialect::Mysql);

    let names = |create: &CreateTable| -> Vec<String> {
        create.columns.iter().map(|c| c.name.clone()).collect()
    };
    assert_eq!(names(&sqlite), names(&mysql));
    assert_eq!(sqlite.name, mysql.name);

    assert_eq!(
        sqlite.columns.iter().map(|c| c.ty).collect::<Vec<_>>(),
        [Some(Type::Integer), Some(Type::Text), Some(Type::Real)]
    );
    assert_eq!(
        mysql.columns.iter().map(|c| c.ty).collect::<Vec<_>>(),
        [Some(Type::Int), Some(Type::MediumText), Some(Type::Float)]
    );
}

#[test]
fn hand_built_statement() {
    let create = CreateTable {
        name: "events".to_string(),
        columns: vec![ColumnDef {
            name: "at".to_string(),
            source_ty: "i64".to_string(),
            ty: Some(Type::BigInt),
        }],
        if_not_exists: false,
    };

    assert_eq!(create.last_column_index(), Some(0));
    assert_eq!(
        Serializer::new().serialize(&Statement::from(create)),
        "CREATE TABLE events (\n    at BIGINT\n)"
    );
}

#[test]
fn serialization_is_idempotent() {
    let table = user();
    assert_eq!(
        serialize(&table, Dialect::Mysql),
        serialize(&table, Dialect::Mysql)
    );
}
