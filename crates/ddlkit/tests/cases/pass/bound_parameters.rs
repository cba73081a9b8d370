// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use ddlkit::{Param, prelude::*};

#[derive(Debug, Default, ToSql, Validate)]
#[ddl(name = "AlterTable")]
pub struct AlterTableOptions {
    #[ddl(static = "ALTER TABLE")]
    alter: (),

    #[ddl(identifier)]
    #[validate(identifier)]
    name: SchemaObjectIdentifier,

    #[ddl(static = "SET")]
    set: (),

    #[ddl(parameter)]
    #[validate(range(min = 0, max = 90))]
    data_retention_time_in_days: Option<u32>,

    #[ddl(parameter(single_quotes))]
    comment: Option<String>
}

fn main() {
    let opts = AlterTableOptions {
        name: SchemaObjectIdentifier::new("db", "public", "events"),
        data_retention_time_in_days: Some(7),
        comment: Some("raw".into()),
        ..Default::default()
    };

    let bound = Marshaller::new(Dialect::Postgres)
        .placeholders()
        .build_bound(Some(&opts))
        .unwrap();
    assert_eq!(
        bound.sql,
        "ALTER TABLE \"db\".\"public\".\"events\" SET DATA_RETENTION_TIME_IN_DAYS = $1 COMMENT = $2"
    );
    assert_eq!(bound.params, vec![Param::UInt(7), Param::Text("raw".into())]);

    let too_long = AlterTableOptions {
        data_retention_time_in_days: Some(365),
        ..opts
    };
    assert!(too_long.validate().is_err());
}
