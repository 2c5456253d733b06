use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct Meta {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub count: Option<usize>,
}

impl Meta {
    pub fn new(offset: usize, limit: usize, count: usize) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            count: Some(count),
        }
    }

    pub fn empty() -> Self {
        Self {
            offset: None,
            limit: None,
            count: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
