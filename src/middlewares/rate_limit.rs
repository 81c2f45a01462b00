/*!
 * 速率限制中间件
 *
 * 问卷分析接口每次请求都会读取整份发放的全部答卷，
 * 此中间件按客户端 IP 限制请求频率。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::scope("/api/survey-analytics")
 *             .wrap(RateLimit::new(120, 60).with_prefix("analytics"))
 *             .route("/{id}", web::get().to(handler))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 使用客户端 IP 作为限制键，按前缀区分端点
 * - 固定时间窗口，窗口结束后计数清零
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 全局速率限制缓存
/// 键: 前缀:IP，值: (窗口内请求计数, 窗口开始时间)
static RATE_LIMIT_CACHE: Lazy<Cache<String, (u32, Instant)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(3600)) // 长期不活跃的键直接淘汰
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    /// 创建新的速率限制器
    ///
    /// # 参数
    /// - `max_requests`: 时间窗口内允许的最大请求数
    /// - `window_secs`: 时间窗口（秒）
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs: window_secs.max(1),
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 问卷分析端点限制，取自 `rate_limit` 配置
    pub fn analytics() -> Self {
        let config = &AppConfig::get().rate_limit;
        Self::new(config.max_requests, config.window_secs).with_prefix("analytics")
    }
}

/// 从请求中提取客户端 IP
///
/// 安全注意事项：
/// - 如果服务部署在反向代理后面，需要在反向代理中配置正确的 X-Forwarded-For / X-Real-IP 头
/// - 此实现会验证 IP 格式，防止伪造的无效头导致问题
fn extract_client_ip(req: &ServiceRequest) -> String {
    // 尝试从连接信息获取真实 IP（最可信）
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 从 X-Forwarded-For 头获取，只取第一个 IP
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

/// 验证 IP 地址格式是否有效
fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "İstek sınırı aşıldı, lütfen daha sonra tekrar deneyin",
        ))
}

/// 计算本次请求后的窗口状态，返回 None 表示已超限
fn next_window_state(
    current: Option<(u32, Instant)>,
    now: Instant,
    max_requests: u32,
    window: Duration,
) -> Option<(u32, Instant)> {
    let (count, started) = match current {
        Some((count, started)) if now.duration_since(started) < window => (count, started),
        _ => (0, now),
    };

    if count >= max_requests {
        None
    } else {
        Some((count + 1, started))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            let identifier = format!("ip:{}", extract_client_ip(&req));
            let cache_key = if key_prefix.is_empty() {
                identifier
            } else {
                format!("{key_prefix}:{identifier}")
            };

            let current = RATE_LIMIT_CACHE.get(&cache_key).await;
            let state = next_window_state(
                current,
                Instant::now(),
                max_requests,
                Duration::from_secs(window_secs),
            );

            let Some((count, started)) = state else {
                warn!(
                    "Rate limit exceeded for key: {} (limit: {}/{}s)",
                    cache_key, max_requests, window_secs
                );
                return Ok(req
                    .into_response(create_rate_limit_response(window_secs).map_into_right_body()));
            };

            RATE_LIMIT_CACHE
                .insert(cache_key, (count, started))
                .await;

            let remaining = max_requests.saturating_sub(count);
            let mut res = srv.call(req).await?.map_into_left_body();

            // 添加速率限制头
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );

            Ok(res)
        })
    }
}
