use crate::server::util::parse::parse_number_or_zero;

/// A subject taught to one branch in one semester by its assigned teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOffering {
    pub offering_id: String,
    pub subject_code: String,
    pub branch_code: String,
    pub semester: String,
    /// Stored as text; see [`SubjectOffering::credits_value`].
    pub credits: String,
    pub assigned_teacher_id: String,
}

impl SubjectOffering {
    pub fn from_entity(entity: entity::subject_offering::Model) -> Self {
        Self {
            offering_id: entity.offering_id,
            subject_code: entity.subject_code,
            branch_code: entity.branch_code,
            semester: entity.semester,
            credits: entity.credits,
            assigned_teacher_id: entity.assigned_teacher_id,
        }
    }

    /// Credits as a number, `0.0` when the stored text is not numeric.
    pub fn credits_value(&self) -> f64 {
        parse_number_or_zero(&self.credits)
    }
}
