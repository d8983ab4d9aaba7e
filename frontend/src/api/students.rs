use common::envelope::{decode_created, decode_page, decode_record};
use common::error::Result;
use common::model::student::{NewStudent, Student, StudentPatch};
use common::model::student_detail::StudentDetail;

use super::client::{self, log_failure};

const PATH: &str = "/alumnos";

pub async fn list() -> Result<Vec<Student>> {
    let result = client::get(PATH).await.and_then(|body| decode_page(&body));
    log_failure(result, || "Error al listar alumnos".to_string())
}

pub async fn get(id: i64) -> Result<Student> {
    let result = client::get(&format!("{PATH}/{id}"))
        .await
        .and_then(|body| decode_record(&body));
    log_failure(result, || format!("Error al obtener alumno {id}"))
}

/// Same endpoint as [`get`], read with the nested `materias[].notas[]` join.
pub async fn detail(id: i64) -> Result<StudentDetail> {
    let result = client::get(&format!("{PATH}/{id}"))
        .await
        .and_then(|body| decode_record(&body));
    log_failure(result, || format!("Error al obtener notas del alumno {id}"))
}

pub async fn create(student: &NewStudent) -> Result<Option<Student>> {
    let result = client::post(PATH, student)
        .await
        .and_then(|body| decode_created(&body));
    log_failure(result, || "Error al crear alumno".to_string())
}

pub async fn update(id: i64, patch: &StudentPatch) -> Result<Student> {
    let result = client::put(&format!("{PATH}/{id}"), patch)
        .await
        .and_then(|body| decode_record(&body));
    log_failure(result, || format!("Error al actualizar alumno {id}"))
}

pub async fn delete(id: i64) -> Result<()> {
    let result = client::delete(&format!("{PATH}/{id}")).await;
    log_failure(result, || format!("Error al eliminar alumno {id}"))
}
