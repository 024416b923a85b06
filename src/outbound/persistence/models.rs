//! Diesel row structs for the `users` table.

use diesel::prelude::*;

use super::schema::users;

/// Full row as read from the store.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Insertable row; the store assigns `id`.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Partial update; `None` fields are left untouched by Diesel.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserRowChanges<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
}
