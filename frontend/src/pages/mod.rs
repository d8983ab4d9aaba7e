pub mod grades;
pub mod not_found;
pub mod student_detail;
pub mod students;
pub mod subjects;
