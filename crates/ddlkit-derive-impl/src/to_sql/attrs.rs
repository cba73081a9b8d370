// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level `#[ddl(...)]` parsing with darling.
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `name` | type name | Structure name in logs and diagnostics |
//! | `union` | `false` | Render only the first present non-static field |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Container attributes of a `ToSql` type.
///
/// ```rust,ignore
/// #[derive(ToSql)]
/// #[ddl(name = "CreateExternalVolume")]
/// pub struct CreateVolume { /* ... */ }
///
/// #[derive(ToSql)]
/// #[ddl(union)]
/// pub struct Location { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(ddl), supports(struct_named, enum_newtype, enum_unit))]
pub struct ContainerAttrs {
    /// Type identifier.
    pub ident: Ident,

    /// Type generics.
    pub generics: Generics,

    /// Structure name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Tagged-union struct.
    #[darling(default)]
    pub union: bool
}

impl ContainerAttrs {
    /// Structure name reported at runtime.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.ident.to_string())
    }
}
