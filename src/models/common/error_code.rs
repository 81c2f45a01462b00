// 业务错误码
//
// 0 表示成功；1xxx 为请求错误；4xxx 为问卷相关资源错误；5xxx 为服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    InvalidDistributionId = 1001,
    NotFound = 1004,
    RateLimitExceeded = 1029,

    DistributionNotFound = 4001,
    TemplateNotFound = 4002,

    InternalServerError = 5000,
    ExportFailed = 5001,
}
