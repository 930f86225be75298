pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::config::{Config, StorageBackend};
use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::{candidate::Candidate, vacancy::Vacancy};
use crate::repository::{
    memory::{
        MemoryCandidateRepository, MemoryCityRepository, MemoryFileRepository,
        MemoryUserRepository, MemoryVacancyRepository,
    },
    postgres::{PgCandidateRepository, PgFileRepository, PgUserRepository, PgVacancyRepository},
    CandidateRepository, CityRepository, FileRepository, UserRepository, VacancyRepository,
};
use crate::services::{
    candidate_service::CandidateService, city_service::CityService, file_service::FileService,
    user_service::UserService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub candidate_service: CandidateService,
    pub vacancy_service: VacancyService,
    pub file_service: FileService,
    pub user_service: UserService,
    pub city_service: CityService,
}

impl AppState {
    pub fn new(
        candidates: Arc<dyn CandidateRepository>,
        vacancies: Arc<dyn VacancyRepository>,
        files: Arc<dyn FileRepository>,
        users: Arc<dyn UserRepository>,
        cities: Arc<dyn CityRepository>,
    ) -> Self {
        let file_service = FileService::new(files);
        Self {
            candidate_service: CandidateService::new(candidates, file_service.clone()),
            vacancy_service: VacancyService::new(vacancies, file_service.clone()),
            file_service,
            user_service: UserService::new(users),
            city_service: CityService::new(cities),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryCandidateRepository::new()),
            Arc::new(MemoryVacancyRepository::new()),
            Arc::new(MemoryFileRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryCityRepository::new()),
        )
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgCandidateRepository::new(pool.clone())),
            Arc::new(PgVacancyRepository::new(pool.clone())),
            Arc::new(PgFileRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            Arc::new(MemoryCityRepository::new()),
        )
    }

    /// Builds the state for the configured backend. For Postgres this opens
    /// the pool and applies pending migrations.
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.storage_backend {
            StorageBackend::Memory => {
                let state = Self::in_memory();
                if config.seed_demo_data {
                    state.seed_demo_data().await?;
                }
                tracing::info!("using in-memory storage");
                Ok(state)
            }
            StorageBackend::Postgres => {
                let pool = database::pool::create_pool(config).await?;
                database::pool::run_migrations(&pool).await?;
                tracing::info!("using postgres storage");
                Ok(Self::postgres(pool))
            }
        }
    }

    /// Demonstration records. Nothing may rely on their presence or ids.
    pub async fn seed_demo_data(&self) -> Result<()> {
        let created = NaiveDate::from_ymd_opt(2023, 3, 21)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_else(utils::time::now);

        for name in ["Vasia Pupkin", "Lyolik Lipkin", "Bolik Dubkin"] {
            let candidate = Candidate::new(name, "test", created, 1, 0);
            self.candidate_service
                .save_with_attachment(candidate, FileDto::new("resume.txt", name.as_bytes()))
                .await?;
        }

        let vacancies = [
            ("Intern Java Developer", "Стажер Java разработчик"),
            ("Junior Java Developer", "Младший Java разработчик"),
            ("Junior+ Java Developer", "Java разработчик"),
            ("Middle Java Developer", "Java разработчик"),
            ("Middle+ Java Developer", "Старший Java разработчик"),
            ("Senior Java Developer", "Ведущий Java разработчик"),
        ];
        for (title, description) in vacancies {
            let vacancy = Vacancy::new(title, description, created, true, 1, 0);
            self.vacancy_service
                .save_with_attachment(vacancy, FileDto::new("vacancy.txt", title.as_bytes()))
                .await?;
        }

        tracing::info!("demo data seeded");
        Ok(())
    }
}
