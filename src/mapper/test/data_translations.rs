use super::*;

/// Tests that a registered translation stores a typed value.
///
/// Expected: Ok with `age: 30` stored as a number, not a string
#[tokio::test]
async fn stores_translated_value() -> Result<(), MapperError> {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(users_options().data_translation("age", "to_int")),
    );

    mapper
        .create(&table(&[&["Name", "Age"], &["Alice", "30"]]), true)
        .await?;

    assert_eq!(connection.rows("users")[0].get("age"), Some(&json!(30)));

    Ok(())
}

/// Tests that translations are keyed by the translated column name.
///
/// Expected: Ok with the translation on `years` applied to the `Age` label
#[tokio::test]
async fn applies_to_translated_column_names() -> Result<(), MapperError> {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(
            users_options()
                .header_translation("Age", "years")
                .data_translation("years", "to_int"),
        ),
    );

    mapper
        .create(&table(&[&["Name", "Age"], &["Alice", "30"]]), true)
        .await?;

    assert_eq!(connection.rows("users")[0].get("years"), Some(&json!(30)));

    Ok(())
}

/// Tests that `set_data_translations` adds to the existing translations.
///
/// Expected: Ok with translations from both calls applied
#[tokio::test]
async fn setter_merges_translations() -> Result<(), MapperError> {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(&connection, &bus, Some(users_options()));

    mapper.set_data_translations(string_map(&[("age", "to_int")]));
    mapper.set_data_translations(string_map(&[("active", "to_bool")]));
    mapper
        .create(
            &table(&[&["Name", "Age", "Active"], &["Alice", "30", "yes"]]),
            true,
        )
        .await?;

    assert_eq!(mapper.data_translations().len(), 2);
    let rows = connection.rows("users");
    assert_eq!(rows[0].get("age"), Some(&json!(30)));
    assert_eq!(rows[0].get("active"), Some(&json!(true)));

    Ok(())
}

/// Tests that a later translation for the same column overrides the earlier one.
///
/// Expected: Ok with `to_float` applied instead of `to_int`
#[tokio::test]
async fn setter_overrides_same_column() -> Result<(), MapperError> {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(&connection, &bus, Some(users_options()));

    mapper.set_data_translations(string_map(&[("age", "to_int")]));
    mapper.set_data_translations(string_map(&[("age", "to_float")]));
    mapper
        .create(&table(&[&["Name", "Age"], &["Alice", "30.5"]]), true)
        .await?;

    assert_eq!(connection.rows("users")[0].get("age"), Some(&json!(30.5)));

    Ok(())
}

/// Tests that an unregistered translation name fails the row before inserting it.
///
/// Expected: Err(UnknownTranslation) naming the translation, nothing inserted
#[tokio::test]
async fn unknown_translation_is_an_error() {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(users_options().data_translation("age", "to_money")),
    );

    let result = mapper
        .create(&table(&[&["Name", "Age"], &["Alice", "30"]]), true)
        .await;

    assert!(matches!(result, Err(MapperError::UnknownTranslation(name)) if name == "to_money"));
    assert_eq!(connection.insert_count(), 0);
}

/// Tests that translations for columns a row does not have are not resolved.
///
/// Expected: Ok even though the translation name is not registered
#[tokio::test]
async fn ignores_translations_for_absent_columns() -> Result<(), MapperError> {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::new();
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(users_options().data_translation("age", "to_money")),
    );

    mapper.create(&table(&[&["Name"], &["Alice"]]), true).await?;

    assert_eq!(connection.insert_count(), 1);

    Ok(())
}

/// Tests that a translation rejecting a value reports the column.
///
/// Expected: Err(Transform) for column `age`
#[tokio::test]
async fn rejected_value_is_an_error() {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(users_options().data_translation("age", "to_int")),
    );

    let result = mapper
        .create(&table(&[&["Name", "Age"], &["Alice", "thirty"]]), true)
        .await;

    assert!(matches!(
        result,
        Err(MapperError::Transform { column, source: TransformError::InvalidValue { .. } })
            if column == "age"
    ));
    assert_eq!(connection.insert_count(), 0);
}

/// Tests a caller-registered translation, including one that changes the row name.
///
/// Expected: Ok with the transformed first column used as the recorded name
#[tokio::test]
async fn custom_translation_changes_row_name() -> Result<(), MapperError> {
    let connection = MemoryConnection::new();
    let mut bus = TranslationBus::new();
    bus.register("prefixed", |value: Value| match value {
        Value::String(s) => Ok(json!(format!("user-{}", s))),
        other => Err(TransformError::Custom(format!("expected text, got {}", other))),
    });
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(users_options().data_translation("name", "prefixed")),
    );

    mapper.create(&table(&[&["Name"], &["alice"]]), true).await?;

    assert_eq!(mapper.named_item_id("user-alice"), Some(1));
    assert_eq!(mapper.named_item_id("alice"), None);

    Ok(())
}

/// Tests that translations run in row column order.
///
/// Verifies that with two unregistered names the error always names the translation of the
/// first header column, whichever mapper instance runs it.
///
/// Expected: Err(UnknownTranslation("missing_a")) for every attempt
#[tokio::test]
async fn reports_first_failing_column_in_header_order() {
    let bus = TranslationBus::new();

    for _ in 0..16 {
        let connection = MemoryConnection::new();
        let mut mapper = EntityMapper::configure(
            &connection,
            &bus,
            Some(
                users_options()
                    .data_translation("b", "missing_b")
                    .data_translation("a", "missing_a"),
            ),
        );

        let result = mapper.create(&table(&[&["A", "B"], &["1", "2"]]), true).await;

        assert!(
            matches!(&result, Err(MapperError::UnknownTranslation(name)) if name == "missing_a"),
            "unexpected result: {:?}",
            result
        );
        assert_eq!(connection.insert_count(), 0);
    }
}

/// Tests that a rejected value in an earlier column wins over an unknown name later on.
///
/// Expected: Err(Transform) for column `age`
#[tokio::test]
async fn rejected_value_before_unknown_translation() {
    let connection = MemoryConnection::new();
    let bus = TranslationBus::with_builtins();
    let mut mapper = EntityMapper::configure(
        &connection,
        &bus,
        Some(
            users_options()
                .data_translation("age", "to_int")
                .data_translation("status", "to_money"),
        ),
    );

    let result = mapper
        .create(&table(&[&["Age", "Status"], &["thirty", "active"]]), true)
        .await;

    assert!(matches!(result, Err(MapperError::Transform { column, .. }) if column == "age"));
}
