use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub const INTERNAL_SERVER_ERROR: &str = "Erro interno do servidor.";

// Contact
pub const MISSING_FIELDS: &str = "Dados obrigatórios ausentes.";
pub const MISSING_MAIL_CONFIGURATION: &str = "Configuração de e-mail ausente no servidor.";
pub const COULD_NOT_SEND_MESSAGE: &str = "Não foi possível enviar a mensagem.";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error })).into_response()
}
