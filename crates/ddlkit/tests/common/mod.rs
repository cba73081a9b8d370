// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! External volume option structures shared by the integration tests.

#![allow(dead_code)]

use ddlkit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
pub enum StorageProvider {
    #[sql_enum(name = "S3")]
    S3,
    #[sql_enum(name = "GCS")]
    Gcs,
    Azure
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
pub enum S3EncryptionType {
    #[sql_enum(name = "AWS_SSE_S3")]
    SseS3,
    #[sql_enum(name = "AWS_SSE_KMS")]
    SseKms,
    None
}

#[derive(Debug, Clone, ToSql, Validate)]
pub struct S3Encryption {
    #[ddl(parameter(single_quotes))]
    pub r#type: S3EncryptionType,

    #[ddl(parameter(single_quotes))]
    #[validate(length(min = 1, max = 256))]
    pub kms_key_id: Option<String>
}

#[derive(Debug, Clone, ToSql, Validate)]
pub struct S3Location {
    #[ddl(parameter(single_quotes))]
    #[validate(length(min = 1))]
    pub name: String,

    #[ddl(parameter(single_quotes))]
    pub storage_provider: StorageProvider,

    #[ddl(parameter(single_quotes))]
    pub storage_base_url: String,

    #[ddl(parameter(single_quotes))]
    pub storage_aws_role_arn: String,

    #[ddl(parameter(single_quotes))]
    pub storage_aws_external_id: Option<String>,

    #[ddl(parameter(parentheses))]
    #[validate(nested)]
    pub encryption: Option<S3Encryption>
}

#[derive(Debug, Clone, ToSql, Validate)]
pub struct GcsLocation {
    #[ddl(parameter(single_quotes))]
    #[validate(length(min = 1))]
    pub name: String,

    #[ddl(parameter(single_quotes))]
    pub storage_provider: StorageProvider,

    #[ddl(parameter(single_quotes))]
    pub storage_base_url: String
}

#[derive(Debug, Clone, ToSql, Validate)]
pub enum StorageLocation {
    #[ddl(keyword(parentheses))]
    #[validate(nested)]
    S3(S3Location),

    #[ddl(keyword(parentheses))]
    #[validate(nested)]
    Gcs(GcsLocation)
}

#[derive(Debug, Default, ToSql, Validate)]
#[validate(at_most_one_of(or_replace, if_not_exists))]
pub struct CreateExternalVolume {
    #[ddl(static = "CREATE")]
    pub create: (),

    #[ddl(keyword)]
    pub or_replace: Option<bool>,

    #[ddl(static = "EXTERNAL VOLUME")]
    pub kind: (),

    #[ddl(keyword)]
    pub if_not_exists: Option<bool>,

    #[ddl(identifier)]
    #[validate(identifier)]
    pub name: AccountObjectIdentifier,

    #[ddl(list)]
    #[validate(nested, length(min = 1))]
    pub storage_locations: Vec<StorageLocation>,

    #[ddl(parameter)]
    pub allow_writes: Option<bool>,

    #[ddl(parameter(single_quotes))]
    pub comment: Option<String>
}

#[derive(Debug, Default, ToSql, Validate)]
#[validate(at_least_one_of(allow_writes, comment))]
pub struct VolumeSet {
    #[ddl(parameter)]
    pub allow_writes: Option<bool>,

    #[ddl(parameter(single_quotes))]
    pub comment: Option<String>
}

#[derive(Debug, Default, ToSql, Validate)]
#[validate(exactly_one_of(allow_writes, comment))]
pub struct VolumeUnset {
    #[ddl(keyword = "ALLOW_WRITES")]
    pub allow_writes: Option<bool>,

    #[ddl(keyword = "COMMENT")]
    pub comment: Option<bool>
}

#[derive(Debug, Default, ToSql, Validate)]
#[validate(exactly_one_of(set, unset, remove_location))]
pub struct AlterExternalVolume {
    #[ddl(static = "ALTER EXTERNAL VOLUME")]
    pub alter: (),

    #[ddl(keyword)]
    pub if_exists: Option<bool>,

    #[ddl(identifier)]
    #[validate(identifier)]
    pub name: AccountObjectIdentifier,

    #[ddl(keyword = "SET")]
    #[validate(nested)]
    pub set: Option<VolumeSet>,

    #[ddl(keyword = "UNSET")]
    #[validate(nested)]
    pub unset: Option<VolumeUnset>,

    #[ddl(parameter(name = "REMOVE STORAGE_LOCATION", no_equals, single_quotes))]
    pub remove_location: Option<String>
}

pub fn s3_location(name: &str) -> StorageLocation {
    StorageLocation::S3(S3Location {
        name:                    name.to_string(),
        storage_provider:        StorageProvider::S3,
        storage_base_url:        "s3://bucket/".to_string(),
        storage_aws_role_arn:    "arn:aws:iam::1:role/r".to_string(),
        storage_aws_external_id: None,
        encryption:              None
    })
}

pub fn gcs_location(name: &str) -> StorageLocation {
    StorageLocation::Gcs(GcsLocation {
        name:             name.to_string(),
        storage_provider: StorageProvider::Gcs,
        storage_base_url: "gcs://bucket/".to_string()
    })
}

pub fn create_volume() -> CreateExternalVolume {
    CreateExternalVolume {
        or_replace: Some(true),
        name: AccountObjectIdentifier::new("vol"),
        storage_locations: vec![s3_location("a"), gcs_location("b")],
        ..Default::default()
    }
}
