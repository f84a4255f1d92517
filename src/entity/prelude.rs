//! 预导入模块，方便使用

pub use super::class_teachings::{
    ActiveModel as ClassTeachingActiveModel, Entity as ClassTeachings,
    Model as ClassTeachingModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::exam_results::{
    ActiveModel as ExamResultActiveModel, Entity as ExamResults, Model as ExamResultModel,
};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::faculty::{ActiveModel as FacultyActiveModel, Entity as Faculty, Model as FacultyModel};
pub use super::placement_applications::{
    ActiveModel as PlacementApplicationActiveModel, Entity as PlacementApplications,
    Model as PlacementApplicationModel,
};
pub use super::placement_companies::{
    ActiveModel as PlacementCompanyActiveModel, Entity as PlacementCompanies,
    Model as PlacementCompanyModel,
};
pub use super::placement_profiles::{
    ActiveModel as PlacementProfileActiveModel, Entity as PlacementProfiles,
    Model as PlacementProfileModel,
};
pub use super::research_profiles::{
    ActiveModel as ResearchActiveModel, Entity as ResearchProfiles, Model as ResearchModel,
};
pub use super::subjects::{ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel};
pub use super::token_blacklist::{
    ActiveModel as TokenBlacklistActiveModel, Entity as TokenBlacklist,
    Model as TokenBlacklistModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
