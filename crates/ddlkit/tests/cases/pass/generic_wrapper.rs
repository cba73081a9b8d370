// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use ddlkit::{SqlValue, prelude::*};

#[derive(Debug, Default, ToSql, Validate)]
pub struct TagSet {
    #[ddl(parameter(single_quotes))]
    environment: Option<String>
}

#[derive(Debug, ToSql, Validate)]
pub struct AlterObject<T: ToSql + Validate + SqlValue + Presence> {
    #[ddl(static = "ALTER")]
    alter: (),

    #[ddl(keyword = "SET TAG")]
    #[validate(nested)]
    tags: Box<T>
}

fn main() {
    let opts = AlterObject {
        alter: (),
        tags:  Box::new(TagSet {
            environment: Some("prod".into())
        })
    };
    assert!(opts.validate().is_ok());
    assert_eq!(ddlkit::to_sql(&opts), "ALTER SET TAG ENVIRONMENT = 'prod'");
}
