mod admin;
mod branch;
mod exam_result;
mod student;
mod subject;
