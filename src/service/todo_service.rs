use diesel::prelude::*;
use log::debug;

use super::{page_size, TodoStore};
use crate::api::errors::TodoApiError;
use crate::models::todo_model::{NewTodo, Todo};
use crate::models::Pool;

/// [`TodoStore`] backed by the `todos` table in PostgreSQL
#[derive(Clone)]
pub struct TodoService {
    pool: Pool,
}

impl TodoService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl TodoStore for TodoService {
    /// Insert and re-read in one transaction so the returned timestamps are
    /// the ones the database assigned
    fn create(&self, new_subject: &str, new_description: &str) -> Result<Todo, TodoApiError> {
        use crate::schema::todos::dsl::*;

        let conn = &self.pool.get()?;

        conn.transaction::<_, TodoApiError, _>(|| {
            let new_todo = NewTodo {
                subject: new_subject,
                description: new_description,
            };

            let new_id: i64 = diesel::insert_into(todos)
                .values(&new_todo)
                .returning(id)
                .get_result(conn)?;

            let created = todos.find(new_id).first::<Todo>(conn)?;

            debug!("Created todo {}", created.id);

            Ok(created)
        })
    }

    fn read(&self, prev_id: Option<i64>, size: i64) -> Result<Vec<Todo>, TodoApiError> {
        use crate::schema::todos::dsl::*;

        let conn = &self.pool.get()?;

        let mut query = todos.order(id.desc()).limit(page_size(size)).into_boxed();

        if let Some(prev_id) = prev_id.filter(|prev_id| *prev_id > 0) {
            query = query.filter(id.lt(prev_id));
        }

        let todos_list = query.load::<Todo>(conn)?;

        Ok(todos_list)
    }

    /// `updated_at` is refreshed by the database, `created_at` is left alone
    fn update(
        &self,
        todo_id: i64,
        new_subject: &str,
        new_description: &str,
    ) -> Result<Todo, TodoApiError> {
        use crate::schema::todos::dsl::*;

        let conn = &self.pool.get()?;

        conn.transaction::<_, TodoApiError, _>(|| {
            let update_count = diesel::update(todos.find(todo_id))
                .set((
                    subject.eq(new_subject),
                    description.eq(new_description),
                    updated_at.eq(diesel::dsl::now),
                ))
                .execute(conn)?;

            if update_count == 0 {
                return Err(TodoApiError::not_found(todo_id));
            }

            let updated = todos.find(todo_id).first::<Todo>(conn)?;

            Ok(updated)
        })
    }

    /// One statement per id, all in a single transaction: a failing statement
    /// rolls back the ids deleted before it
    fn delete(&self, ids: &[i64]) -> Result<(), TodoApiError> {
        use crate::schema::todos::dsl::*;

        let conn = &self.pool.get()?;

        conn.transaction::<_, TodoApiError, _>(|| {
            let mut delete_count = 0;

            for todo_id in ids {
                delete_count += diesel::delete(todos.find(*todo_id)).execute(conn)?;
            }

            debug!("Deleted {} of {} requested todos", delete_count, ids.len());

            Ok(())
        })
    }
}
