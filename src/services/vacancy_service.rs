use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::repository::VacancyRepository;
use crate::services::file_service::FileService;

#[derive(Clone)]
pub struct VacancyService {
    vacancies: Arc<dyn VacancyRepository>,
    files: FileService,
}

impl VacancyService {
    pub fn new(vacancies: Arc<dyn VacancyRepository>, files: FileService) -> Self {
        Self { vacancies, files }
    }

    pub async fn save_with_attachment(
        &self,
        mut vacancy: Vacancy,
        file: FileDto,
    ) -> Result<Vacancy> {
        let file = self.files.save(file).await?;
        vacancy.file_id = file.id;
        let vacancy = self.vacancies.save(vacancy).await?;
        tracing::info!(
            vacancy_id = vacancy.id,
            file_id = vacancy.file_id,
            "vacancy created"
        );
        Ok(vacancy)
    }

    pub async fn update_with_attachment(&self, mut vacancy: Vacancy, file: FileDto) -> Result<bool> {
        let file = self.files.save(file).await?;
        vacancy.file_id = file.id;
        self.update(vacancy).await
    }

    pub async fn update(&self, vacancy: Vacancy) -> Result<bool> {
        let id = vacancy.id;
        let updated = self.vacancies.update(vacancy).await?;
        tracing::debug!(vacancy_id = id, updated, "vacancy update");
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<bool> {
        self.vacancies.delete_by_id(id).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        self.vacancies.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Vacancy>> {
        self.vacancies.find_all().await
    }
}
