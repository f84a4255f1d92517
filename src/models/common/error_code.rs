use serde::Serialize;

/// 业务错误码
///
/// 写入响应信封的 `code` 字段，与 HTTP 状态码相互独立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证 2xxx
    AuthFailed = 2000,
    RegisterFailed = 2001,
    TokenInvalid = 2002,
    PasswordMismatch = 2003,

    // 用户 3xxx
    UserNotFound = 3000,
    UserNameInvalid = 3001,
    UserEmailInvalid = 3002,
    UserPasswordInvalid = 3003,
    UserNameAlreadyExists = 3004,
    UserEmailAlreadyExists = 3005,

    // 班级 / 科目 / 考试 4xxx
    ClassNotFound = 4000,
    ClassAlreadyExists = 4001,
    ClassCreationFailed = 4002,
    ClassPermissionDenied = 4003,
    ClassUserNotFound = 4004,
    ClassAlreadyJoined = 4005,
    SubjectNotFound = 4100,
    SubjectInvalid = 4101,
    ExamNotFound = 4200,
    ExamInvalid = 4201,
    ExamResultNotFound = 4202,
    ExamResultInvalid = 4203,
    ExamStudentNotFound = 4204,

    // 就业 5xxx
    PlacementProfileNotFound = 5000,
    PlacementProfileAlreadyExists = 5001,
    PlacementProfileInvalid = 5002,
    CompanyNotFound = 5100,
    CompanyInvalid = 5101,
    CoordinatorRequired = 5102,
    ApplicationAlreadyExists = 5200,
    ApplicationNotEligible = 5201,
    ApplicationFailed = 5202,

    // 名录 6xxx
    FacultyNotFound = 6000,
    ResearchNotFound = 6001,
    DirectoryEntryInvalid = 6002,
}
