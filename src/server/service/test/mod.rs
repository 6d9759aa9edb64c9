mod admin;
mod student;
mod teacher;
