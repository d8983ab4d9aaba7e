use common::envelope::{decode_created, decode_page, decode_record};
use common::error::Result;
use common::model::subject::{NewSubject, Subject, SubjectPatch};

use super::client::{self, log_failure};

const PATH: &str = "/materias";

pub async fn list() -> Result<Vec<Subject>> {
    let result = client::get(PATH).await.and_then(|body| decode_page(&body));
    log_failure(result, || "Error al listar materias".to_string())
}

pub async fn get(id: i64) -> Result<Subject> {
    let result = client::get(&format!("{PATH}/{id}"))
        .await
        .and_then(|body| decode_record(&body));
    log_failure(result, || format!("Error al obtener materia {id}"))
}

pub async fn create(subject: &NewSubject) -> Result<Option<Subject>> {
    let result = client::post(PATH, subject)
        .await
        .and_then(|body| decode_created(&body));
    log_failure(result, || "Error al crear materia".to_string())
}

pub async fn update(id: i64, patch: &SubjectPatch) -> Result<Subject> {
    let result = client::put(&format!("{PATH}/{id}"), patch)
        .await
        .and_then(|body| decode_record(&body));
    log_failure(result, || format!("Error al actualizar materia {id}"))
}

pub async fn delete(id: i64) -> Result<()> {
    let result = client::delete(&format!("{PATH}/{id}")).await;
    log_failure(result, || format!("Error al eliminar materia {id}"))
}
