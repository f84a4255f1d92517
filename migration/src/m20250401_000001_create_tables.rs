use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::FirstName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::LastName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Classes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::Description).text().null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级成员表（教师 / 学生）
        manager
            .create_table(
                Table::create()
                    .table(ClassTeachings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassTeachings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassTeachings::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassTeachings::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassTeachings::Role).string().not_null())
                    .col(
                        ColumnDef::new(ClassTeachings::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassTeachings::Table, ClassTeachings::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassTeachings::Table, ClassTeachings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::Name).string().not_null())
                    .col(
                        ColumnDef::new(Exams::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试成绩表（每场考试一行，成绩以 JSON 映射保存）
        manager
            .create_table(
                Table::create()
                    .table(ExamResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExamResults::ExamId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ExamResults::Results).text().not_null())
                    .col(
                        ColumnDef::new(ExamResults::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamResults::Table, ExamResults::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建就业档案表
        manager
            .create_table(
                Table::create()
                    .table(PlacementProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlacementProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlacementProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PlacementProfiles::Cgpa).double().not_null())
                    .col(
                        ColumnDef::new(PlacementProfiles::Percentage10th)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementProfiles::Percentage12th)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementProfiles::IsPlacementCoordinator)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PlacementProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PlacementProfiles::Table, PlacementProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建招聘企业表
        manager
            .create_table(
                Table::create()
                    .table(PlacementCompanies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlacementCompanies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlacementCompanies::Name).string().not_null())
                    .col(
                        ColumnDef::new(PlacementCompanies::JobDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementCompanies::MinCgpa)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementCompanies::Min10th)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementCompanies::Min12th)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementCompanies::MaxBacklogs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlacementCompanies::Package)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementCompanies::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建投递记录表
        manager
            .create_table(
                Table::create()
                    .table(PlacementApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlacementApplications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlacementApplications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementApplications::CompanyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementApplications::OtherDetails)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlacementApplications::AppliedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PlacementApplications::Table, PlacementApplications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                PlacementApplications::Table,
                                PlacementApplications::CompanyId,
                            )
                            .to(PlacementCompanies::Table, PlacementCompanies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师名录表
        manager
            .create_table(
                Table::create()
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculty::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculty::Name).string().not_null())
                    .col(ColumnDef::new(Faculty::Profession).string().not_null())
                    .col(ColumnDef::new(Faculty::About).text().not_null().default(""))
                    .col(ColumnDef::new(Faculty::Qualifications).text().not_null())
                    .col(ColumnDef::new(Faculty::Experience).integer().not_null())
                    .col(
                        ColumnDef::new(Faculty::Branch)
                            .string()
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(Faculty::Projects)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Faculty::Image).string().null())
                    .col(ColumnDef::new(Faculty::Path).string().not_null())
                    .col(ColumnDef::new(Faculty::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Faculty::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科研名录表
        manager
            .create_table(
                Table::create()
                    .table(ResearchProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResearchProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResearchProfiles::Name).string().not_null())
                    .col(
                        ColumnDef::new(ResearchProfiles::Profession)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResearchProfiles::ResearchInterests)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResearchProfiles::ResearchScholars)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResearchProfiles::Projects).text().not_null())
                    .col(ColumnDef::new(ResearchProfiles::Image).string().null())
                    .col(
                        ColumnDef::new(ResearchProfiles::Publications)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ResearchProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResearchProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 班级成员唯一约束：同一用户在同一班级只能有一条记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_teachings_class_user")
                    .table(ClassTeachings::Table)
                    .col(ClassTeachings::ClassId)
                    .col(ClassTeachings::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_teachings_user_id")
                    .table(ClassTeachings::Table)
                    .col(ClassTeachings::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_class_id")
                    .table(Subjects::Table)
                    .col(Subjects::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exams_subject_id")
                    .table(Exams::Table)
                    .col(Exams::SubjectId)
                    .to_owned(),
            )
            .await?;

        // 投递唯一约束：同一用户对同一企业只能投递一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_placement_applications_user_company")
                    .table(PlacementApplications::Table)
                    .col(PlacementApplications::UserId)
                    .col(PlacementApplications::CompanyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_placement_applications_company_id")
                    .table(PlacementApplications::Table)
                    .col(PlacementApplications::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(ResearchProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlacementApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlacementCompanies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlacementProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassTeachings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Role,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassTeachings {
    #[sea_orm(iden = "class_teachings")]
    Table,
    Id,
    ClassId,
    UserId,
    Role,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    ClassId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    ClassId,
    SubjectId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExamResults {
    #[sea_orm(iden = "exam_results")]
    Table,
    Id,
    ExamId,
    Results,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PlacementProfiles {
    #[sea_orm(iden = "placement_profiles")]
    Table,
    Id,
    UserId,
    Cgpa,
    #[sea_orm(iden = "percentage_10th")]
    Percentage10th,
    #[sea_orm(iden = "percentage_12th")]
    Percentage12th,
    IsPlacementCoordinator,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PlacementCompanies {
    #[sea_orm(iden = "placement_companies")]
    Table,
    Id,
    Name,
    JobDescription,
    MinCgpa,
    #[sea_orm(iden = "min_10th")]
    Min10th,
    #[sea_orm(iden = "min_12th")]
    Min12th,
    MaxBacklogs,
    Package,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PlacementApplications {
    #[sea_orm(iden = "placement_applications")]
    Table,
    Id,
    UserId,
    CompanyId,
    OtherDetails,
    AppliedAt,
}

#[derive(DeriveIden)]
enum Faculty {
    #[sea_orm(iden = "faculty")]
    Table,
    Id,
    Name,
    Profession,
    About,
    Qualifications,
    Experience,
    Branch,
    Projects,
    Image,
    Path,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResearchProfiles {
    #[sea_orm(iden = "research_profiles")]
    Table,
    Id,
    Name,
    Profession,
    ResearchInterests,
    ResearchScholars,
    Projects,
    Image,
    Publications,
    CreatedAt,
    UpdatedAt,
}
