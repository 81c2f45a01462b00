//! 安全的路径参数提取器
//!
//! 提取并校验路径中的 `{id}`，失败时直接返回 400 的 `ApiResponse`。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_record_id;

/// 已校验的问卷发放 ID
#[derive(Debug, Clone)]
pub struct SafeDistributionId(pub String);

impl FromRequest for SafeDistributionId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();

        let result = match validate_record_id(raw) {
            Ok(()) => Ok(SafeDistributionId(raw.to_string())),
            Err(msg) => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidDistributionId,
                    msg,
                ));
                Err(InternalError::from_response(msg, response).into())
            }
        };

        ready(result)
    }
}
