use common::form::GradeDraft;
use common::model::student::Student;
use common::model::subject::Subject;
use common::search;

/// State of the grade creation form.
///
/// `subjects` and `students` are the full lists as fetched; the queries only
/// narrow what the pickers show.
pub struct GradeCreatePage {
    pub subjects: Vec<Subject>,
    pub students: Vec<Student>,
    pub subject_query: String,
    pub student_query: String,
    /// Raw input; the selected ids are kept as the `<option>` values.
    pub draft: GradeDraft,
    /// True until both initial lists have arrived.
    pub loading_data: bool,
    /// True while the create request is in flight.
    pub saving: bool,
    pub error: Option<String>,
}

impl GradeCreatePage {
    pub fn new() -> Self {
        Self {
            subjects: Vec::new(),
            students: Vec::new(),
            subject_query: String::new(),
            student_query: String::new(),
            draft: GradeDraft::default(),
            loading_data: true,
            saving: false,
            error: None,
        }
    }

    pub fn filtered_subjects(&self) -> Vec<&Subject> {
        search::filter(&self.subjects, &self.subject_query)
    }

    pub fn filtered_students(&self) -> Vec<&Student> {
        search::filter(&self.students, &self.student_query)
    }

    pub fn selected_subject(&self) -> Option<&Subject> {
        let id = self.draft.subject_id.parse::<i64>().ok()?;
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn selected_student(&self) -> Option<&Student> {
        let id = self.draft.student_id.parse::<i64>().ok()?;
        self.students.iter().find(|s| s.id == id)
    }
}
