//! Reference data shared by every role: branches and subjects.

use crate::model::academic::{BranchDto, SubjectDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub branch_code: String,
    pub branch_name: String,
}

impl Branch {
    pub fn from_entity(entity: entity::branch::Model) -> Self {
        Self {
            branch_code: entity.branch_code,
            branch_name: entity.branch_name,
        }
    }

    pub fn into_dto(self) -> BranchDto {
        BranchDto {
            branch_code: self.branch_code,
            branch_name: self.branch_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub subject_code: String,
    pub subject_name: String,
}

impl Subject {
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            subject_code: entity.subject_code,
            subject_name: entity.subject_name,
        }
    }

    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            subject_code: self.subject_code,
            subject_name: self.subject_name,
        }
    }
}
