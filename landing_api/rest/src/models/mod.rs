use serde::Serialize;

pub mod contact;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiOk {
    pub ok: bool,
}
