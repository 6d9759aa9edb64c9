use crate::server::util::parse::{parse_marks_or_zero, parse_number_or_zero};

/// One student's marks for one offering.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamResult {
    pub roll_no: String,
    pub offering_id: String,
    pub theory_marks: String,
    pub internal_marks: String,
    pub total_marks: String,
    pub grade_point: String,
    pub status: String,
}

impl ExamResult {
    pub fn from_entity(entity: entity::exam_result::Model) -> Self {
        Self {
            roll_no: entity.roll_no,
            offering_id: entity.offering_id,
            theory_marks: entity.theory_marks,
            internal_marks: entity.internal_marks,
            total_marks: entity.total_marks,
            grade_point: entity.grade_point,
            status: entity.status,
        }
    }

    pub fn grade_point_value(&self) -> f64 {
        parse_number_or_zero(&self.grade_point)
    }

    pub fn total_marks_value(&self) -> i64 {
        parse_marks_or_zero(&self.total_marks)
    }
}
