use common::error::ApiError;
use common::model::grade::Grade;
use common::model::student::Student;
use common::model::subject::Subject;

pub enum Msg {
    DataLoaded(Result<(Vec<Subject>, Vec<Student>), ApiError>),
    SetSubjectQuery(String),
    SetStudentQuery(String),
    SelectSubject(String),
    SelectStudent(String),
    SetValue(String),
    SetDate(String),
    Submit,
    /// `None` when the backend answered without the created grade.
    Saved(Result<Option<Grade>, ApiError>),
}
