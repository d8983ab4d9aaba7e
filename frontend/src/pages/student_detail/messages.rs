use common::error::ApiError;
use common::model::student_detail::StudentDetail;

pub enum Msg {
    Load,
    Loaded(Result<StudentDetail, ApiError>),
    /// Opens the grade form preselected for this student and, when given, the subject.
    AddGrade(Option<i64>),
}
