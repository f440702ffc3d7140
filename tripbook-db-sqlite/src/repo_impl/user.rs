use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_or_update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_or_update_user(&self, user: &User) -> Result<()> {
        create_or_update_user(&mut self.conn.borrow_mut(), user)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_or_update_user(&self, user: &User) -> Result<()> {
        create_or_update_user(&mut self.conn.borrow_mut(), user)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
}

fn create_or_update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .on_conflict(dsl::id)
        .do_update()
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_user(conn: &mut SqliteConnection, id: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
