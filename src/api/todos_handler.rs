use actix_web::{web, HttpResponse};
use log::{debug, error};

use super::errors::TodoApiError;
use crate::api::dtos::todo::{
    CreateTodoDTO, CreateTodoResponseDTO, DeleteTodoDTO, DeleteTodoResponseDTO, ReadTodoDTO,
    ReadTodoResponseDTO, UpdateTodoDTO, UpdateTodoResponseDTO,
};
use crate::service::TodoStore;

/// Log a failed store call. Server side failures go out at `error`, the
/// client's own mistakes only at `debug`.
fn logged(operation: &'static str) -> impl FnOnce(TodoApiError) -> TodoApiError {
    move |err| {
        if err.is_server_error() {
            error!("Failed to {}: {}", operation, err);
        } else {
            debug!("Could not {}: {}", operation, err);
        }

        err
    }
}

/// Create a new todo
pub async fn create_todo(
    request_data: web::Json<CreateTodoDTO>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, TodoApiError> {
    let request = request_data.into_inner();

    request.validate()?;

    let todo = web::block(move || store.create(&request.subject, &request.description))
        .await?
        .map_err(logged("create todo"))?;

    Ok(HttpResponse::Ok().json(CreateTodoResponseDTO { todo }))
}

/// Page through todos, newest first
pub async fn read_todos(
    query: web::Query<Vec<(String, String)>>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, TodoApiError> {
    let request = ReadTodoDTO::from(query.into_inner());

    let todos = web::block(move || store.read(request.prev_id, request.size))
        .await?
        .map_err(logged("read todos"))?;

    Ok(HttpResponse::Ok().json(ReadTodoResponseDTO { todos }))
}

/// Replace a todo's subject and description
pub async fn update_todo(
    request_data: web::Json<UpdateTodoDTO>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, TodoApiError> {
    let request = request_data.into_inner();

    request.validate()?;

    let todo = web::block(move || {
        store.update(request.id, &request.subject, &request.description)
    })
    .await?
    .map_err(logged("update todo"))?;

    Ok(HttpResponse::Ok().json(UpdateTodoResponseDTO { todo }))
}

/// Api to delete a batch of todos
pub async fn delete_todo(
    request_data: web::Json<DeleteTodoDTO>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, TodoApiError> {
    let request = request_data.into_inner();

    request.validate()?;

    web::block(move || store.delete(&request.ids))
        .await?
        .map_err(logged("delete todos"))?;

    Ok(HttpResponse::Ok().json(DeleteTodoResponseDTO {}))
}
