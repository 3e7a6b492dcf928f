pub mod todo_service;

use crate::api::errors::TodoApiError;
use crate::models::todo_model::Todo;

pub use todo_service::TodoService;

/// Page size used when the caller asks for zero (or fewer) todos
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Storage capability the todo handlers are built on.
///
/// Implementations are shared by every worker, so they must be thread safe.
/// Calls are blocking and are expected to run inside `web::block`.
pub trait TodoStore: Send + Sync + 'static {
    /// Insert a todo, the returned value carries the id and timestamps
    /// assigned by storage
    fn create(&self, subject: &str, description: &str) -> Result<Todo, TodoApiError>;

    /// Todos ordered by id descending, at most `size` of them, all with an id
    /// strictly below `prev_id` when one is given
    fn read(&self, prev_id: Option<i64>, size: i64) -> Result<Vec<Todo>, TodoApiError>;

    /// Fails with [`TodoApiError::NotFound`] when no row has `id`
    fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo, TodoApiError>;

    /// Ids that don't exist are skipped silently
    fn delete(&self, ids: &[i64]) -> Result<(), TodoApiError>;
}

/// Page size actually queried for a requested `size`
pub fn page_size(size: i64) -> i64 {
    if size <= 0 {
        DEFAULT_PAGE_SIZE
    } else {
        size
    }
}

#[cfg(test)]
mod test {
    use super::{page_size, DEFAULT_PAGE_SIZE};

    #[test]
    fn test_page_size_defaults() {
        assert_eq!(page_size(0), DEFAULT_PAGE_SIZE);
        assert_eq!(page_size(-3), DEFAULT_PAGE_SIZE);
        assert_eq!(page_size(12), 12);
    }
}
