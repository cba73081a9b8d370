// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod common;

use common::{S3EncryptionType, StorageProvider};
use ddlkit::{UnknownVariant, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
#[sql_enum(name = "WarehouseSize")]
enum Size {
    #[sql_enum(name = "XSMALL", alias = "X-SMALL")]
    XSmall,
    Medium,
    #[sql_enum(name = "X4LARGE", alias = "4X-LARGE")]
    X4Large
}

#[test]
fn canonical_spellings() {
    assert_eq!(StorageProvider::Gcs.as_sql(), "GCS");
    assert_eq!(StorageProvider::Azure.as_sql(), "AZURE");
    assert_eq!(S3EncryptionType::SseKms.to_string(), "AWS_SSE_KMS");
    assert_eq!(Size::Medium.to_string(), "MEDIUM");
}

#[test]
fn parsing_ignores_case_and_padding() {
    assert_eq!("gcs".parse::<StorageProvider>(), Ok(StorageProvider::Gcs));
    assert_eq!(" aws_sse_s3 ".parse::<S3EncryptionType>(), Ok(S3EncryptionType::SseS3));
    assert_eq!(Size::from_sql("x-small"), Ok(Size::XSmall));
    assert_eq!(Size::from_sql("4x-large"), Ok(Size::X4Large));
}

#[test]
fn aliases_render_canonically() {
    let parsed: Size = "X-SMALL".parse().unwrap();
    assert_eq!(parsed.as_sql(), "XSMALL");
}

#[test]
fn unknown_value_lists_expectations() {
    let err: UnknownVariant = "HUGE".parse::<Size>().unwrap_err();
    assert_eq!(err.enum_name, "WarehouseSize");
    assert_eq!(err.value, "HUGE");
    assert_eq!(err.expected, vec!["XSMALL", "X-SMALL", "MEDIUM", "X4LARGE", "4X-LARGE"]);
}

#[derive(Debug, Default, ToSql)]
struct AlterWarehouse {
    #[ddl(static = "ALTER WAREHOUSE")]
    alter: (),

    #[ddl(identifier)]
    name: AccountObjectIdentifier,

    #[ddl(parameter(name = "WAREHOUSE_SIZE"))]
    size: Option<Size>
}

#[test]
fn enums_render_as_values() {
    let opts = AlterWarehouse {
        name: AccountObjectIdentifier::new("WH"),
        size: Some(Size::X4Large),
        ..Default::default()
    };
    assert_eq!(
        ddlkit::to_sql(&opts),
        "ALTER WAREHOUSE \"WH\" WAREHOUSE_SIZE = X4LARGE"
    );
}
