use common::envelope::{decode_created, decode_page};
use common::error::Result;
use common::model::grade::{Grade, NewGrade};

use super::client::{self, log_failure};

const PATH: &str = "/notas";

pub async fn list() -> Result<Vec<Grade>> {
    let result = client::get(PATH).await.and_then(|body| decode_page(&body));
    log_failure(result, || "Error al listar notas".to_string())
}

pub async fn create(grade: &NewGrade) -> Result<Option<Grade>> {
    let result = client::post(PATH, grade)
        .await
        .and_then(|body| decode_created(&body));
    log_failure(result, || "Error al crear nota".to_string())
}
