use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::error::{AppError, AppResult, ProblemDetail};
use crate::extractors::{ApiJson, ApiPath};
use crate::models::{
    first_validation_message, Customer, CustomerDto, CustomerInsertRequest,
    CustomerUpdateRequest, Page,
};
use crate::parser::PageRequest;
use crate::service::customer as customer_service;
use crate::startup::AppState;

pub const NOT_FOUND_MESSAGE: &str = "고객 정보를 찾을 수 없습니다.";

fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request.validate().map_err(|errors| {
        let message = first_validation_message(&errors);
        debug!("Rejected request body: {}", message);
        AppError::Validation(message)
    })
}

async fn find_existing(state: &AppState, id: i64) -> AppResult<Customer> {
    customer_service::get_customer(state.backend.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

pub async fn list_customers(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Page<CustomerDto>>, ProblemDetail> {
    let pagination = &state.config.pagination;
    let request = PageRequest::from_query(&params, pagination.default_size, pagination.max_size);

    customer_service::list_customers(state.backend.as_ref(), &request)
        .await
        .map(Json)
        .map_err(|e| e.to_problem(uri.path()))
}

pub async fn get_customer(
    State(state): State<AppState>,
    uri: Uri,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CustomerDto>, ProblemDetail> {
    find_existing(&state, id)
        .await
        .map(|customer| Json(customer.to_dto()))
        .map_err(|e| e.to_problem(uri.path()))
}

pub async fn create_customer(
    State(state): State<AppState>,
    uri: Uri,
    ApiJson(request): ApiJson<CustomerInsertRequest>,
) -> Result<Json<CustomerDto>, ProblemDetail> {
    insert(&state, request)
        .await
        .map(|customer| Json(customer.to_dto()))
        .map_err(|e| e.to_problem(uri.path()))
}

/// Body rules are checked before the id is looked up.
pub async fn update_customer(
    State(state): State<AppState>,
    uri: Uri,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<CustomerUpdateRequest>,
) -> Result<Json<CustomerDto>, ProblemDetail> {
    update(&state, id, request)
        .await
        .map(|customer| Json(customer.to_dto()))
        .map_err(|e| e.to_problem(uri.path()))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    uri: Uri,
    ApiPath(id): ApiPath<i64>,
) -> Response {
    match remove(&state, id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => e.to_problem(uri.path()).into_response(),
    }
}

async fn insert(state: &AppState, request: CustomerInsertRequest) -> AppResult<Customer> {
    validate_request(&request)?;
    customer_service::create_customer(state.backend.as_ref(), request).await
}

async fn update(state: &AppState, id: i64, request: CustomerUpdateRequest) -> AppResult<Customer> {
    validate_request(&request)?;
    let customer = find_existing(state, id).await?;
    customer_service::update_customer(state.backend.as_ref(), request, customer).await
}

async fn remove(state: &AppState, id: i64) -> AppResult<()> {
    let customer = find_existing(state, id).await?;
    customer_service::delete_customer(state.backend.as_ref(), &customer).await
}
