// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use ddlkit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
pub enum Privilege {
    Usage,
    Monitor,
    #[sql_enum(name = "CREATE SCHEMA")]
    CreateSchema
}

#[derive(Debug, Default, ToSql, Validate)]
#[validate(exactly_one_of(to_role, to_user))]
pub struct GrantOnDatabase {
    #[ddl(static = "GRANT")]
    grant: (),

    #[ddl(list(unnamed, no_parentheses))]
    #[validate(length(min = 1))]
    privileges: Vec<Privilege>,

    #[ddl(identifier(name = "ON DATABASE"))]
    #[validate(identifier)]
    database: AccountObjectIdentifier,

    #[ddl(identifier(name = "TO ROLE"))]
    to_role: Option<AccountObjectIdentifier>,

    #[ddl(identifier(name = "TO USER"))]
    to_user: Option<AccountObjectIdentifier>,

    #[ddl(keyword = "WITH GRANT OPTION")]
    with_grant_option: Option<bool>,

    #[ddl(skip)]
    #[allow(dead_code)]
    request_id: Option<String>
}

fn main() {
    let grant = GrantOnDatabase {
        privileges: vec![Privilege::Usage, Privilege::CreateSchema],
        database: AccountObjectIdentifier::new("DB"),
        to_role: Some(AccountObjectIdentifier::new("ANALYST")),
        with_grant_option: Some(true),
        ..Default::default()
    };

    let sql = ddlkit::build(Some(&grant)).unwrap();
    assert_eq!(
        sql,
        "GRANT USAGE, CREATE SCHEMA ON DATABASE \"DB\" TO ROLE \"ANALYST\" WITH GRANT OPTION"
    );
}
